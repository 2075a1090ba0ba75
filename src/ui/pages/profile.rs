// SPDX-License-Identifier: MPL-2.0
//! Profile page: read-only card plus an edit form.

use super::{heading, labelled, page, skill_chips};
use crate::domain::account::Profile;
use crate::domain::skills::{join_skill_list, parse_skill_list};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, text_input, Column, Container, Row, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, Default)]
pub struct State {
    profile: Option<Profile>,
    editing: bool,
    loading: bool,
    saving: bool,
    pub name: String,
    pub bio: String,
    pub skills: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    Reload,
    Edit,
    CancelEdit,
    NameChanged(String),
    BioChanged(String),
    SkillsChanged(String),
    Save,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Load,
    Save(Profile),
}

impl State {
    #[must_use]
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn load_started(&mut self) {
        self.loading = true;
    }

    pub fn loaded(&mut self, profile: Profile) {
        self.loading = false;
        self.profile = Some(profile);
    }

    pub fn load_failed(&mut self) {
        self.loading = false;
    }

    /// Leaves edit mode; the caller reloads the profile.
    pub fn saved(&mut self, profile: Profile) {
        self.saving = false;
        self.editing = false;
        self.profile = Some(profile);
    }

    pub fn save_failed(&mut self) {
        self.saving = false;
    }

    /// Forgets the loaded profile, used on logout.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Reload => Event::Load,
        Message::Edit => {
            let profile = state.profile.clone().unwrap_or_default();
            state.name = profile.name;
            state.bio = profile.bio;
            state.skills = join_skill_list(&profile.skills);
            state.editing = true;
            Event::None
        }
        Message::CancelEdit => {
            state.editing = false;
            Event::Load
        }
        Message::NameChanged(value) => {
            state.name = value;
            Event::None
        }
        Message::BioChanged(value) => {
            state.bio = value;
            Event::None
        }
        Message::SkillsChanged(value) => {
            state.skills = value;
            Event::None
        }
        Message::Save => {
            state.saving = true;
            let username = state
                .profile
                .as_ref()
                .map(|profile| profile.username.clone())
                .unwrap_or_default();
            Event::Save(Profile {
                username,
                name: state.name.trim().to_string(),
                bio: state.bio.trim().to_string(),
                skills: parse_skill_list(&state.skills),
            })
        }
    }
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let body: Element<'a, Message> = if state.editing {
        edit_form(state, i18n)
    } else {
        card(state, i18n)
    };

    page(
        Column::new()
            .spacing(spacing::MD)
            .push(heading(i18n.tr("page-profile")))
            .push(body),
    )
}

fn card<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::SM);

    match &state.profile {
        Some(profile) => {
            let field = |label: &str, value: &str| {
                let shown = if value.is_empty() {
                    i18n.tr("profile-not-set")
                } else {
                    value.to_string()
                };
                labelled(i18n.tr(label), text(shown).size(typography::BODY).into())
            };
            column = column
                .push(field("field-username", &profile.username))
                .push(field("field-name", &profile.name))
                .push(field("field-bio", &profile.bio));
            let skills = if profile.skills.is_empty() {
                text(i18n.tr("profile-not-set")).size(typography::BODY).into()
            } else {
                skill_chips(&profile.skills, palette::PRIMARY_500)
            };
            column = column.push(labelled(i18n.tr("field-skills"), skills));
        }
        None if state.loading => {
            column = column.push(Text::new(i18n.tr("status-loading")));
        }
        None => {
            column = column.push(Text::new(i18n.tr("profile-empty")));
        }
    }

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(i18n.tr("action-edit-profile")))
                .on_press(Message::Edit)
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(i18n.tr("action-reload")))
                .on_press_maybe((!state.loading).then_some(Message::Reload))
                .style(styles::button::secondary),
        );

    Container::new(column.push(actions))
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

fn edit_form<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let input = |placeholder: &str, value: &'a str, on_input: fn(String) -> Message| {
        text_input(&i18n.tr(placeholder), value)
            .on_input(on_input)
            .padding(spacing::XS)
    };

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(i18n.tr("action-save")))
                .on_press_maybe((!state.saving).then_some(Message::Save))
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(i18n.tr("action-cancel")))
                .on_press(Message::CancelEdit)
                .style(styles::button::secondary),
        );

    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .push(input("field-name", &state.name, Message::NameChanged))
        .push(input("field-bio", &state.bio, Message::BioChanged))
        .push(input("field-skills-hint", &state.skills, Message::SkillsChanged))
        .push(actions)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Profile {
        Profile {
            username: "ada".into(),
            name: "Ada".into(),
            bio: "Engineer".into(),
            skills: vec!["Rust".into(), "SQL".into()],
        }
    }

    #[test]
    fn edit_prefills_form_from_profile() {
        let mut state = State::default();
        state.loaded(sample());
        assert_eq!(update(&mut state, Message::Edit), Event::None);
        assert!(state.is_editing());
        assert_eq!(state.name, "Ada");
        assert_eq!(state.skills, "Rust, SQL");
    }

    #[test]
    fn save_splits_and_trims_skills() {
        let mut state = State::default();
        state.loaded(sample());
        update(&mut state, Message::Edit);
        update(&mut state, Message::SkillsChanged(" Go , ,Rust,".into()));

        let Event::Save(profile) = update(&mut state, Message::Save) else {
            panic!("expected save event");
        };
        assert_eq!(profile.username, "ada");
        assert_eq!(profile.skills, vec!["Go".to_string(), "Rust".to_string()]);
    }

    #[test]
    fn leaving_edit_mode_requests_reload() {
        let mut state = State::default();
        update(&mut state, Message::Edit);
        assert_eq!(update(&mut state, Message::CancelEdit), Event::Load);
        assert!(!state.is_editing());
    }

    #[test]
    fn saved_exits_edit_mode() {
        let mut state = State::default();
        update(&mut state, Message::Edit);
        update(&mut state, Message::Save);
        state.saved(sample());
        assert!(!state.is_editing());
        assert_eq!(state.profile(), Some(&sample()));
    }

    #[test]
    fn views_render_in_both_modes() {
        let i18n = I18n::default();
        let mut state = State::default();
        state.loaded(sample());
        drop(view(&state, &i18n));
        update(&mut state, Message::Edit);
        drop(view(&state, &i18n));
    }
}
