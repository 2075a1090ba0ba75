// SPDX-License-Identifier: MPL-2.0
//! Job board with the admin posting form.

use super::{heading, labelled, page, skill_chips};
use crate::app::session::Session;
use crate::domain::jobs::{JobDraft, JobId, JobPosting};
use crate::domain::skills::parse_skill_list;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, text, text_input, Column, Container, Row, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, Default)]
pub struct State {
    jobs: Vec<JobPosting>,
    loaded: bool,
    loading: bool,
    posting: bool,
    pub title: String,
    pub description: String,
    pub skills: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    Load,
    TitleChanged(String),
    DescriptionChanged(String),
    SkillsChanged(String),
    Post,
    Apply(JobPosting),
    ViewApplications(JobId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Load,
    Post(JobDraft),
    MissingFields,
    OpenApply(JobPosting),
    ViewApplications(JobId),
}

/// Which job controls a session sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub post_form: bool,
    pub view_applications: bool,
    pub apply: bool,
}

impl Controls {
    #[must_use]
    pub fn for_session(session: &Session) -> Self {
        Self {
            post_form: session.can_post_jobs(),
            view_applications: session.can_view_applications(),
            apply: session.can_apply(),
        }
    }
}

impl State {
    #[must_use]
    pub fn jobs(&self) -> &[JobPosting] {
        &self.jobs
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn load_started(&mut self) {
        self.loading = true;
    }

    pub fn jobs_loaded(&mut self, jobs: Vec<JobPosting>) {
        self.loading = false;
        self.loaded = true;
        self.jobs = jobs;
    }

    pub fn load_failed(&mut self) {
        self.loading = false;
    }

    /// The pending load was superseded and its reply will be dropped.
    pub fn load_cancelled(&mut self) {
        self.loading = false;
    }

    #[must_use]
    pub fn is_posting(&self) -> bool {
        self.posting
    }

    pub fn post_started(&mut self) {
        self.posting = true;
    }

    pub fn posted(&mut self) {
        self.posting = false;
        self.title.clear();
        self.description.clear();
        self.skills.clear();
    }

    pub fn post_failed(&mut self) {
        self.posting = false;
    }
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Load => Event::Load,
        Message::TitleChanged(value) => {
            state.title = value;
            Event::None
        }
        Message::DescriptionChanged(value) => {
            state.description = value;
            Event::None
        }
        Message::SkillsChanged(value) => {
            state.skills = value;
            Event::None
        }
        Message::Post => {
            let title = state.title.trim();
            let description = state.description.trim();
            let skills = parse_skill_list(&state.skills);
            if title.is_empty() || description.is_empty() || skills.is_empty() {
                return Event::MissingFields;
            }
            Event::Post(JobDraft {
                title: title.to_string(),
                description: description.to_string(),
                skills,
            })
        }
        Message::Apply(job) => Event::OpenApply(job),
        Message::ViewApplications(id) => Event::ViewApplications(id),
    }
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n, session: &Session) -> Element<'a, Message> {
    let controls = Controls::for_session(session);

    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(heading(i18n.tr("page-jobs")))
        .push(
            button(Text::new(i18n.tr("action-load-jobs")))
                .on_press_maybe((!state.loading).then_some(Message::Load))
                .style(styles::button::primary),
        );

    if controls.post_form {
        content = content.push(post_form(state, i18n));
    }

    if state.loaded && state.jobs.is_empty() {
        content = content.push(text(i18n.tr("jobs-empty")).size(typography::BODY));
    }

    for job in &state.jobs {
        content = content.push(job_card(job, i18n, controls));
    }

    page(scrollable(content))
}

fn post_form<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let form = Column::new()
        .spacing(spacing::SM)
        .push(text(i18n.tr("jobs-post-title")).size(typography::TITLE_SM))
        .push(
            text_input(&i18n.tr("field-job-title"), &state.title)
                .on_input(Message::TitleChanged)
                .padding(spacing::XS),
        )
        .push(
            text_input(&i18n.tr("field-job-description"), &state.description)
                .on_input(Message::DescriptionChanged)
                .padding(spacing::XS),
        )
        .push(
            text_input(&i18n.tr("field-skills-hint"), &state.skills)
                .on_input(Message::SkillsChanged)
                .on_submit(Message::Post)
                .padding(spacing::XS),
        )
        .push(
            button(Text::new(i18n.tr("action-post-job")))
                .on_press_maybe((!state.posting).then_some(Message::Post))
                .style(styles::button::primary),
        );

    Container::new(form)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn job_card<'a>(job: &'a JobPosting, i18n: &'a I18n, controls: Controls) -> Element<'a, Message> {
    let location = job
        .location
        .as_deref()
        .filter(|location| !location.trim().is_empty())
        .map_or_else(|| i18n.tr("jobs-location-not-set"), str::to_string);

    let mut actions = Row::new().spacing(spacing::SM);
    if controls.apply {
        actions = actions.push(
            button(Text::new(i18n.tr("action-apply")))
                .on_press(Message::Apply(job.clone()))
                .style(styles::button::primary),
        );
    }
    if controls.view_applications {
        actions = actions.push(
            button(Text::new(i18n.tr("action-view-applications")))
                .on_press(Message::ViewApplications(job.id.clone()))
                .style(styles::button::secondary),
        );
    }

    let column = Column::new()
        .spacing(spacing::XS)
        .push(text(job.title.as_str()).size(typography::TITLE_MD))
        .push(text(job.description.as_str()).size(typography::BODY))
        .push(skill_chips(&job.skills, palette::PRIMARY_500))
        .push(labelled(
            i18n.tr("jobs-location"),
            text(location).size(typography::BODY_SM).into(),
        ))
        .push(actions);

    Container::new(column)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}
