// SPDX-License-Identifier: MPL-2.0
//! Password reset: request a token, then redeem it with a new password.

use super::{heading, inline_error, page};
use crate::domain::account::{PasswordReset, ResetRequest};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, rule, text_input, Column, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, Default)]
pub struct State {
    pub username: String,
    pub token: String,
    pub new_password: String,
    token_rejected: bool,
    busy: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    UsernameChanged(String),
    TokenChanged(String),
    NewPasswordChanged(String),
    RequestToken,
    SubmitReset,
    BackToLogin,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    RequestReset(ResetRequest),
    ResetPassword(PasswordReset),
    MissingFields,
    BackToLogin,
}

impl State {
    pub fn request_finished(&mut self) {
        self.busy = false;
    }

    pub fn reset_failed(&mut self) {
        self.busy = false;
        self.token_rejected = true;
    }

    pub fn reset_succeeded(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn token_rejected(&self) -> bool {
        self.token_rejected
    }
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::UsernameChanged(value) => {
            state.username = value;
            Event::None
        }
        Message::TokenChanged(value) => {
            state.token = value;
            state.token_rejected = false;
            Event::None
        }
        Message::NewPasswordChanged(value) => {
            state.new_password = value;
            Event::None
        }
        Message::RequestToken => {
            let username = state.username.trim();
            if username.is_empty() {
                return Event::MissingFields;
            }
            state.busy = true;
            Event::RequestReset(ResetRequest {
                username: username.to_string(),
            })
        }
        Message::SubmitReset => {
            let token = state.token.trim();
            if token.is_empty() || state.new_password.is_empty() {
                return Event::MissingFields;
            }
            state.busy = true;
            state.token_rejected = false;
            Event::ResetPassword(PasswordReset {
                token: token.to_string(),
                new_password: state.new_password.clone(),
            })
        }
        Message::BackToLogin => Event::BackToLogin,
    }
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let enabled = |message: Message| (!state.busy).then_some(message);

    let request = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("reset-request-hint")).size(typography::BODY_SM))
        .push(
            text_input(&i18n.tr("field-username"), &state.username)
                .on_input(Message::UsernameChanged)
                .padding(spacing::XS),
        )
        .push(
            button(Text::new(i18n.tr("action-send-reset")))
                .on_press_maybe(enabled(Message::RequestToken))
                .style(styles::button::secondary),
        );

    let mut redeem = Column::new()
        .spacing(spacing::SM)
        .push(
            text_input(&i18n.tr("field-reset-token"), &state.token)
                .on_input(Message::TokenChanged)
                .padding(spacing::XS),
        )
        .push(
            text_input(&i18n.tr("field-new-password"), &state.new_password)
                .on_input(Message::NewPasswordChanged)
                .on_submit(Message::SubmitReset)
                .secure(true)
                .padding(spacing::XS),
        )
        .push(
            button(Text::new(i18n.tr("action-reset-password")))
                .on_press_maybe(enabled(Message::SubmitReset))
                .style(styles::button::primary),
        );

    if state.token_rejected {
        redeem = redeem.push(inline_error(i18n.tr("reset-error-invalid-token")));
    }

    let content = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .push(heading(i18n.tr("reset-title")))
        .push(request)
        .push(rule::horizontal(1))
        .push(redeem)
        .push(
            button(Text::new(i18n.tr("action-back-to-login")))
                .on_press(Message::BackToLogin)
                .style(styles::button::text_link),
        );

    page(content)
}
