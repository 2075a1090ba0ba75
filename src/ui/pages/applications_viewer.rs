// SPDX-License-Identifier: MPL-2.0
//! Admin overlay listing the applications received for one job.

use super::local_timestamp;
use crate::app::navigation::ApplicationsViewer;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, text, Column, Container, Text};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    Close,
}

pub fn view<'a>(viewer: &'a ApplicationsViewer, i18n: &'a I18n) -> Element<'a, Message> {
    let mut list = Column::new().spacing(spacing::SM);

    if viewer.applications.is_empty() {
        list = list.push(text(i18n.tr("applications-empty")).size(typography::BODY));
    }

    for application in &viewer.applications {
        let applied_at = local_timestamp(&application.applied_at);
        let entry = Column::new()
            .spacing(spacing::XXS)
            .push(
                text(i18n.tr_with_args(
                    "applications-applicant",
                    &[("name", application.applicant.as_str())],
                ))
                .size(typography::BODY),
            )
            .push(
                text(i18n.tr_with_args("applications-applied-at", &[("time", applied_at.as_str())]))
                    .size(typography::BODY_SM),
            )
            .push(text(application.resume_text.as_str()).size(typography::BODY_SM));
        list = list.push(
            Container::new(entry)
                .padding(spacing::SM)
                .width(Length::Fill)
                .style(styles::container::panel),
        );
    }

    let card = Column::new()
        .spacing(spacing::MD)
        .push(
            text(i18n.tr_with_args(
                "applications-title",
                &[("job", viewer.job_id.as_str())],
            ))
            .size(typography::TITLE_MD),
        )
        .push(scrollable(list).height(Length::Fixed(sizing::DIALOG_LIST_HEIGHT)))
        .push(
            button(Text::new(i18n.tr("action-close")))
                .on_press(Message::Close)
                .style(styles::button::secondary),
        );

    Container::new(
        Container::new(card)
            .width(Length::Fixed(sizing::DIALOG_WIDTH))
            .padding(spacing::LG)
            .style(styles::container::card),
    )
    .center(Length::Fill)
    .style(styles::container::scrim)
    .into()
}
