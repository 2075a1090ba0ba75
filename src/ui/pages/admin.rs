// SPDX-License-Identifier: MPL-2.0
//! Aggregate analytics for the administrator.

use super::{heading, labelled, page};
use crate::app::session::Session;
use crate::domain::analytics::AdminAnalytics;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, text, Column, Container, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, Default)]
pub struct State {
    analytics: Option<AdminAnalytics>,
    loading: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    Load,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Load,
}

impl State {
    #[must_use]
    pub fn analytics(&self) -> Option<&AdminAnalytics> {
        self.analytics.as_ref()
    }

    pub fn load_started(&mut self) {
        self.loading = true;
    }

    pub fn analytics_loaded(&mut self, analytics: AdminAnalytics) {
        self.loading = false;
        self.analytics = Some(analytics);
    }

    pub fn load_failed(&mut self) {
        self.loading = false;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

pub fn update(_state: &mut State, message: Message) -> Event {
    match message {
        Message::Load => Event::Load,
    }
}

/// Ranked `1. skill (freq)` lines.
#[must_use]
pub fn ranked_skills(analytics: &AdminAnalytics) -> Vec<String> {
    analytics
        .top_skills
        .iter()
        .enumerate()
        .map(|(rank, entry)| format!("{}. {} ({})", rank + 1, entry.skill, entry.freq))
        .collect()
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n, session: &Session) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(heading(i18n.tr("page-admin")));

    if session.can_load_analytics() {
        content = content.push(
            button(Text::new(i18n.tr("action-load-analytics")))
                .on_press_maybe((!state.loading).then_some(Message::Load))
                .style(styles::button::primary),
        );
    } else {
        content = content.push(text(i18n.tr("admin-only")).size(typography::BODY));
    }

    if let Some(analytics) = &state.analytics {
        content = content.push(summary(analytics, i18n));
    }

    page(scrollable(content))
}

fn summary<'a>(analytics: &'a AdminAnalytics, i18n: &'a I18n) -> Element<'a, Message> {
    let count = analytics.users.len().to_string();
    let names = analytics
        .users
        .iter()
        .map(|user| user.username.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let skills = ranked_skills(analytics)
        .into_iter()
        .fold(Column::new().spacing(spacing::XXS), |column, line| {
            column.push(text(line).size(typography::BODY))
        });

    let column = Column::new()
        .spacing(spacing::SM)
        .push(labelled(
            i18n.tr_with_args("admin-users", &[("count", &count)]),
            text(names).size(typography::BODY).into(),
        ))
        .push(labelled(i18n.tr("admin-top-skills"), skills.into()))
        .push(
            text(i18n.tr_with_args(
                "admin-match-count",
                &[("count", &analytics.match_count.to_string())],
            ))
            .size(typography::BODY),
        );

    Container::new(column)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}
