// SPDX-License-Identifier: MPL-2.0
//! Login and registration form.

use super::{heading, inline_error, page};
use crate::domain::account::{AuthMode, Credentials};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Row, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, Default)]
pub struct State {
    pub username: String,
    pub password: String,
    /// Server text, or `None` with `failed` set for the generic message.
    error: Option<String>,
    failed: bool,
    busy: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    UsernameChanged(String),
    PasswordChanged(String),
    Submit(AuthMode),
    ForgotPassword,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Authenticate(AuthMode, Credentials),
    /// A required field is empty.
    MissingFields,
    OpenReset,
}

impl State {
    pub fn auth_failed(&mut self, server_message: Option<String>) {
        self.busy = false;
        self.failed = true;
        self.error = server_message;
    }

    /// Clears the form after a successful login.
    pub fn auth_succeeded(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::UsernameChanged(value) => {
            state.username = value;
            Event::None
        }
        Message::PasswordChanged(value) => {
            state.password = value;
            Event::None
        }
        Message::Submit(mode) => {
            let username = state.username.trim();
            if username.is_empty() || state.password.is_empty() {
                return Event::MissingFields;
            }
            state.busy = true;
            state.failed = false;
            state.error = None;
            Event::Authenticate(mode, Credentials::new(username, state.password.clone()))
        }
        Message::ForgotPassword => Event::OpenReset,
    }
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let username = text_input(&i18n.tr("field-username"), &state.username)
        .on_input(Message::UsernameChanged)
        .padding(spacing::XS);
    let password = text_input(&i18n.tr("field-password"), &state.password)
        .on_input(Message::PasswordChanged)
        .on_submit(Message::Submit(AuthMode::Login))
        .secure(true)
        .padding(spacing::XS);

    let action = |label: &str, mode: AuthMode, style: fn(&iced::Theme, button::Status) -> button::Style| {
        let b = button(Text::new(i18n.tr(label))).style(style);
        if state.busy {
            b
        } else {
            b.on_press(Message::Submit(mode))
        }
    };

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(action("action-login", AuthMode::Login, styles::button::primary))
        .push(action("action-register", AuthMode::Register, styles::button::secondary));

    let forgot = button(Text::new(i18n.tr("action-forgot-password")))
        .on_press(Message::ForgotPassword)
        .style(styles::button::text_link);

    let mut form = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .push(heading(i18n.tr("login-title")))
        .push(username)
        .push(password)
        .push(actions)
        .push(forgot);

    if state.failed {
        let message = state
            .error
            .clone()
            .unwrap_or_else(|| i18n.tr("login-error-generic"));
        form = form.push(inline_error(message));
    }

    page(form)
}
