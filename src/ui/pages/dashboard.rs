// SPDX-License-Identifier: MPL-2.0
//! Match history of the signed-in user.

use super::{heading, local_timestamp, page};
use crate::domain::matching::MatchHistoryEntry;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, text, Column, Text};
use iced::Element;

#[derive(Debug, Clone, Default)]
pub struct State {
    history: Vec<MatchHistoryEntry>,
    loaded: bool,
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
    pub fn history(&self) -> &[MatchHistoryEntry] {
        &self.history
    }

    pub fn load_started(&mut self) {
        self.loading = true;
    }

    pub fn history_loaded(&mut self, history: Vec<MatchHistoryEntry>) {
        self.loading = false;
        self.loaded = true;
        self.history = history;
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

/// `[time] Score: N% | Skills: a, b`
pub fn history_line(entry: &MatchHistoryEntry, i18n: &I18n) -> String {
    let time = local_timestamp(&entry.time);
    let score = (entry.score.clamp(0.0, 100.0).round() as u32).to_string();
    let skills = entry.matched_skills.join(", ");
    i18n.tr_with_args(
        "dashboard-entry",
        &[("time", &time), ("score", &score), ("skills", &skills)],
    )
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(heading(i18n.tr("page-dashboard")))
        .push(
            button(Text::new(i18n.tr("action-load-history")))
                .on_press_maybe((!state.loading).then_some(Message::Load))
                .style(styles::button::primary),
        );

    if state.loaded && state.history.is_empty() {
        content = content.push(text(i18n.tr("dashboard-empty")).size(typography::BODY));
    }

    let lines = state.history.iter().fold(Column::new().spacing(spacing::XS), |column, entry| {
        column.push(text(history_line(entry, i18n)).size(typography::BODY))
    });

    page(scrollable(content.push(lines)))
}
