// SPDX-License-Identifier: MPL-2.0
//! Rendering of banners and the toast.
//!
//! Banners stack in the top-right corner, oldest first. The toast sits at the
//! bottom center and repeats the latest message.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Stack};
use iced::{alignment, Element, Length};

pub struct Toast;

impl Toast {
    /// Resolves the message of a notification in the current locale.
    #[must_use]
    pub fn message_text(notification: &Notification, i18n: &I18n) -> String {
        if notification.message_args().is_empty() {
            return i18n.tr(notification.message_key());
        }
        let args: Vec<(&str, &str)> = notification
            .message_args()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        i18n.tr_with_args(notification.message_key(), &args)
    }

    fn card<'a>(
        notification: &Notification,
        i18n: &I18n,
        on_dismiss: Message,
        width: f32,
    ) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent = severity.color();

        let glyph = text(severity.glyph())
            .size(typography::TITLE_SM)
            .color(accent);
        let message = text(Self::message_text(notification, i18n)).size(typography::BODY);
        let dismiss = button(text("×").size(typography::TITLE_SM))
            .on_press(on_dismiss)
            .padding([0.0, spacing::XS])
            .style(styles::button::text_link);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(glyph)
            .push(Container::new(message).width(Length::Fill))
            .push(dismiss);

        Container::new(content)
            .width(Length::Fixed(width))
            .padding(spacing::SM)
            .style(styles::container::notification(accent))
            .into()
    }

    /// Full-window layer holding the banner list and the toast.
    pub fn view_overlay<'a>(manager: &Manager, i18n: &I18n) -> Element<'a, Message> {
        let banners = manager.visible().fold(
            Column::new().spacing(spacing::XS),
            |column, notification| {
                column.push(Self::card(
                    notification,
                    i18n,
                    Message::Dismiss(notification.id()),
                    sizing::BANNER_WIDTH,
                ))
            },
        );

        let banner_layer = Container::new(banners)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding([sizing::NAVBAR_HEIGHT + spacing::XS, spacing::MD]);

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(banner_layer);

        if let Some(toast) = manager.toast() {
            layers = layers.push(
                Container::new(Self::card(
                    toast,
                    i18n,
                    Message::DismissToast,
                    sizing::TOAST_WIDTH,
                ))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::LG),
            );
        }

        layers.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;

    #[test]
    fn message_text_interpolates_arguments() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let notification =
            Notification::info("notification-match-score").with_arg("score", "40");
        assert_eq!(
            Toast::message_text(&notification, &i18n),
            "Your resume matched 40% for this job!"
        );
    }

    #[test]
    fn message_text_without_arguments() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let notification = Notification::success("notification-login-success");
        assert_eq!(Toast::message_text(&notification, &i18n), "Login successful!");
    }
}
