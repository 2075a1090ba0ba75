// SPDX-License-Identifier: MPL-2.0
//! Modal for applying to a job with pasted résumé text.

use crate::domain::jobs::{ApplicationDraft, JobPosting};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, text_editor, Column, Container, Row, Text};
use iced::{Element, Length};

#[derive(Debug, Default)]
pub struct State {
    resume: text_editor::Content,
}

#[derive(Debug, Clone)]
pub enum Message {
    ResumeEdited(text_editor::Action),
    Send,
    Cancel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Submit(ApplicationDraft),
    MissingResume,
    Close,
}

impl State {
    #[must_use]
    pub fn resume_text(&self) -> String {
        self.resume.text()
    }

    pub fn set_resume_text(&mut self, value: &str) {
        self.resume = text_editor::Content::with_text(value);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

pub fn update(state: &mut State, message: Message, job: &JobPosting) -> Event {
    match message {
        Message::ResumeEdited(action) => {
            state.resume.perform(action);
            Event::None
        }
        Message::Send => {
            let resume_text = state.resume.text().trim().to_string();
            if resume_text.is_empty() {
                return Event::MissingResume;
            }
            Event::Submit(ApplicationDraft {
                job_id: job.id.clone(),
                resume_text,
            })
        }
        Message::Cancel => Event::Close,
    }
}

pub fn view<'a>(state: &'a State, job: &'a JobPosting, i18n: &'a I18n) -> Element<'a, Message> {
    let actions = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(i18n.tr("action-send")))
                .on_press(Message::Send)
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(i18n.tr("action-cancel")))
                .on_press(Message::Cancel)
                .style(styles::button::secondary),
        );

    let card = Column::new()
        .spacing(spacing::SM)
        .push(
            text(i18n.tr_with_args("apply-title", &[("title", job.title.as_str())]))
                .size(typography::TITLE_MD),
        )
        .push(
            text_editor(&state.resume)
                .placeholder(i18n.tr("field-resume"))
                .on_action(Message::ResumeEdited)
                .height(Length::Fixed(sizing::EDITOR_HEIGHT))
                .padding(spacing::XS),
        )
        .push(actions);

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::jobs::JobId;

    fn job() -> JobPosting {
        JobPosting {
            id: JobId::new("j7"),
            title: "Engineer".into(),
            description: "Build".into(),
            skills: Vec::new(),
            location: None,
        }
    }

    #[test]
    fn blank_resume_is_rejected() {
        let mut state = State::default();
        state.set_resume_text("   ");
        assert_eq!(update(&mut state, Message::Send, &job()), Event::MissingResume);
    }

    #[test]
    fn send_targets_dialog_job() {
        let mut state = State::default();
        state.set_resume_text("My resume");
        assert_eq!(
            update(&mut state, Message::Send, &job()),
            Event::Submit(ApplicationDraft {
                job_id: JobId::new("j7"),
                resume_text: "My resume".into(),
            })
        );
    }

    #[test]
    fn cancel_closes() {
        let mut state = State::default();
        assert_eq!(update(&mut state, Message::Cancel, &job()), Event::Close);
    }

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let state = State::default();
        let job = job();
        let _element = view(&state, &job, &i18n);
    }
}
