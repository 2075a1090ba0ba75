// SPDX-License-Identifier: MPL-2.0
//! Page components.
//!
//! Every page owns its form state and follows the same shape: a `State`, a
//! `Message`, an `update` that returns an `Event` for the application, and a
//! `view`. Pages never talk to the backend; they ask for it through events and
//! receive results through their `State` methods.

pub mod admin;
pub mod apply_dialog;
pub mod applications_viewer;
pub mod dashboard;
pub mod jobs;
pub mod login;
pub mod matcher;
pub mod profile;
pub mod reset;

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{text, Column, Container, Row, Text};
use iced::{Element, Length};

/// Centers page content and caps its width.
pub(crate) fn page<'a, M: 'a>(content: impl Into<Element<'a, M>>) -> Element<'a, M> {
    Container::new(
        Container::new(content)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .width(Length::Fill),
    )
    .center_x(Length::Fill)
    .padding(spacing::LG)
    .into()
}

pub(crate) fn heading<'a, M: 'a>(label: String) -> Element<'a, M> {
    Text::new(label).size(typography::TITLE_LG).into()
}

pub(crate) fn inline_error<'a, M: 'a>(message: String) -> Element<'a, M> {
    Container::new(text(message).size(typography::BODY))
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::inline_error)
        .into()
}

/// Skill list rendered as chips.
pub(crate) fn skill_chips<'a, M: 'a>(skills: &[String], accent: iced::Color) -> Element<'a, M> {
    let chips = skills.iter().fold(Row::new().spacing(spacing::XS), |row, skill| {
        row.push(
            Container::new(text(skill.clone()).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::container::chip(accent)),
        )
    });
    chips.wrap().into()
}

/// Label above a value, used in result cards.
pub(crate) fn labelled<'a, M: 'a>(label: String, value: Element<'a, M>) -> Element<'a, M> {
    Column::new()
        .spacing(spacing::XXS)
        .push(text(label).size(typography::BODY_SM))
        .push(value)
        .into()
}

/// Renders a server timestamp in local time, or as received if it does not
/// parse as RFC 3339.
pub(crate) fn local_timestamp(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|time| {
            time.with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M")
                .to_string()
        })
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparsable_timestamp_is_kept() {
        assert_eq!(local_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn rfc3339_timestamp_is_reformatted() {
        let shown = local_timestamp("2024-03-05T10:20:00.000Z");
        assert!(shown.starts_with("2024-03-0"));
        assert_eq!(shown.len(), "2024-03-05 10:20".len());
    }
}
