// SPDX-License-Identifier: MPL-2.0
//! Resume matcher: résumé and job editors, upload, score breakdown and tips.

use super::{heading, inline_error, labelled, page, skill_chips};
use crate::domain::matching::{MatchRequest, MatchResult, ResumeFile, TipsRequest, UploadReceipt};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, progress_bar, text, text_editor, Column, Container, Row, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
enum UploadStatus {
    Uploaded(String),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TipsStatus {
    Loading,
    Loaded(String),
    Failed,
}

#[derive(Debug, Default)]
pub struct State {
    resume: text_editor::Content,
    job: text_editor::Content,
    selected_file: Option<ResumeFile>,
    upload: Option<UploadStatus>,
    uploading: bool,
    matching: bool,
    result: Option<MatchResult>,
    /// Server text, or `None` with `failed` set for the generic message.
    error: Option<String>,
    failed: bool,
    tips: Option<TipsStatus>,
}

#[derive(Debug, Clone)]
pub enum Message {
    ResumeEdited(text_editor::Action),
    JobEdited(text_editor::Action),
    ChooseFile,
    Upload,
    Submit,
    RequestTips,
    DownloadReport,
    Logout,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    ChooseFile,
    Upload(ResumeFile),
    /// Upload pressed with no file selected.
    MissingFile,
    Match(MatchRequest),
    Tips(TipsRequest),
    SaveReport(MatchResult),
    Logout,
}

impl State {
    #[must_use]
    pub fn resume_text(&self) -> String {
        self.resume.text()
    }

    #[must_use]
    pub fn job_text(&self) -> String {
        self.job.text()
    }

    pub fn set_resume_text(&mut self, value: &str) {
        self.resume = text_editor::Content::with_text(value);
    }

    pub fn set_job_text(&mut self, value: &str) {
        self.job = text_editor::Content::with_text(value);
    }

    #[must_use]
    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn selected_file(&self) -> Option<&ResumeFile> {
        self.selected_file.as_ref()
    }

    #[must_use]
    pub fn uploaded_url(&self) -> Option<&str> {
        match &self.upload {
            Some(UploadStatus::Uploaded(url)) => Some(url),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_matching(&self) -> bool {
        self.matching
    }

    #[must_use]
    pub fn tips_loading(&self) -> bool {
        self.tips == Some(TipsStatus::Loading)
    }

    #[must_use]
    pub fn tips(&self) -> Option<&str> {
        match &self.tips {
            Some(TipsStatus::Loaded(tips)) => Some(tips),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn has_error(&self) -> bool {
        self.failed
    }

    pub fn file_chosen(&mut self, file: ResumeFile) {
        self.selected_file = Some(file);
    }

    pub fn upload_succeeded(&mut self, receipt: UploadReceipt) {
        self.uploading = false;
        if let Some(resume_text) = receipt.resume_text.as_deref() {
            self.set_resume_text(resume_text);
        }
        self.upload = Some(UploadStatus::Uploaded(receipt.url));
    }

    pub fn upload_failed(&mut self) {
        self.uploading = false;
        self.upload = Some(UploadStatus::Failed);
    }

    pub fn match_succeeded(&mut self, result: MatchResult) {
        self.matching = false;
        self.result = Some(result);
    }

    pub fn match_failed(&mut self, server_message: Option<String>) {
        self.matching = false;
        self.failed = true;
        self.error = server_message;
    }

    pub fn tips_loaded(&mut self, tips: String) {
        self.tips = Some(TipsStatus::Loaded(tips));
    }

    pub fn tips_failed(&mut self) {
        self.tips = Some(TipsStatus::Failed);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::ResumeEdited(action) => {
            state.resume.perform(action);
            Event::None
        }
        Message::JobEdited(action) => {
            state.job.perform(action);
            Event::None
        }
        Message::ChooseFile => Event::ChooseFile,
        Message::Upload => match state.selected_file.clone() {
            Some(file) => {
                state.uploading = true;
                Event::Upload(file)
            }
            None => Event::MissingFile,
        },
        Message::Submit => {
            state.result = None;
            state.tips = None;
            state.error = None;
            state.failed = false;
            state.matching = true;
            Event::Match(MatchRequest {
                resume: state.resume.text(),
                job: state.job.text(),
            })
        }
        Message::RequestTips => {
            if state.tips_loading() {
                return Event::None;
            }
            match &state.result {
                Some(result) => {
                    let request = result.tips_request();
                    state.tips = Some(TipsStatus::Loading);
                    Event::Tips(request)
                }
                None => Event::None,
            }
        }
        Message::DownloadReport => match &state.result {
            Some(result) => Event::SaveReport(result.clone()),
            None => Event::None,
        },
        Message::Logout => Event::Logout,
    }
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let title = Row::new()
        .spacing(spacing::SM)
        .align_y(iced::Alignment::Center)
        .push(Container::new(heading(i18n.tr("page-matcher"))).width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("action-logout")))
                .on_press(Message::Logout)
                .style(styles::button::secondary),
        );

    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(upload_section(state, i18n))
        .push(editors(state, i18n))
        .push(
            button(Text::new(i18n.tr("action-match")))
                .on_press_maybe((!state.matching).then_some(Message::Submit))
                .style(styles::button::primary),
        );

    if state.failed {
        let message = state
            .error
            .clone()
            .unwrap_or_else(|| i18n.tr("matcher-error-generic"));
        content = content.push(inline_error(message));
    }

    if let Some(result) = &state.result {
        content = content.push(result_card(state, result, i18n));
    }

    page(iced::widget::scrollable(content))
}

fn upload_section<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let selected = state.selected_file.as_ref().map_or_else(
        || i18n.tr("matcher-no-file"),
        |file| file.file_name.clone(),
    );

    let mut column = Column::new().spacing(spacing::XS).push(
        Row::new()
            .spacing(spacing::SM)
            .align_y(iced::Alignment::Center)
            .push(
                button(Text::new(i18n.tr("action-choose-file")))
                    .on_press(Message::ChooseFile)
                    .style(styles::button::secondary),
            )
            .push(text(selected).size(typography::BODY_SM))
            .push(
                button(Text::new(i18n.tr("action-upload")))
                    .on_press_maybe((!state.uploading).then_some(Message::Upload))
                    .style(styles::button::primary),
            ),
    );

    match &state.upload {
        Some(UploadStatus::Uploaded(url)) => {
            column = column.push(
                text(i18n.tr_with_args("matcher-uploaded", &[("url", url)])).size(typography::BODY_SM),
            );
        }
        Some(UploadStatus::Failed) => {
            column = column.push(
                text(i18n.tr("matcher-upload-failed"))
                    .size(typography::BODY_SM)
                    .color(palette::ERROR_500),
            );
        }
        None => {}
    }

    column.into()
}

fn editors<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let editor = |label: &str, content: &'a text_editor::Content, on_action: fn(text_editor::Action) -> Message| {
        labelled(
            i18n.tr(label),
            text_editor(content)
                .on_action(on_action)
                .height(Length::Fixed(sizing::EDITOR_HEIGHT))
                .padding(spacing::XS)
                .into(),
        )
    };

    Column::new()
        .spacing(spacing::SM)
        .push(editor("field-resume", &state.resume, Message::ResumeEdited))
        .push(editor("field-job-description", &state.job, Message::JobEdited))
        .into()
}

fn result_card<'a>(state: &'a State, result: &'a MatchResult, i18n: &'a I18n) -> Element<'a, Message> {
    let percent = result.percent();
    let score_label = i18n.tr_with_args("matcher-score", &[("score", &percent.to_string())]);

    let section = |label: &str, skills: &[String], accent| {
        labelled(i18n.tr(label), skill_chips(skills, accent))
    };

    let tips_button = button(Text::new(i18n.tr(if state.tips_loading() {
        "matcher-tips-loading"
    } else {
        "action-ai-tips"
    })))
    .on_press_maybe((!state.tips_loading()).then_some(Message::RequestTips))
    .style(styles::button::secondary);

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(i18n.tr("action-download-report")))
                .on_press(Message::DownloadReport)
                .style(styles::button::primary),
        )
        .push(tips_button);

    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(text(score_label).size(typography::TITLE_SM))
        .push(progress_bar(0.0..=100.0, percent as f32))
        .push(section("matcher-resume-skills", result.resume_skills.as_slice(), palette::PRIMARY_500))
        .push(section("matcher-job-skills", result.job_skills.as_slice(), palette::INFO_500))
        .push(section("matcher-matched-skills", result.matched_skills.as_slice(), palette::SUCCESS_500))
        .push(section("matcher-missing-skills", result.missing_skills.as_slice(), palette::ERROR_500))
        .push(actions);

    match &state.tips {
        Some(TipsStatus::Loaded(tips)) => {
            column = column.push(labelled(
                i18n.tr("matcher-tips-title"),
                text(tips.as_str()).size(typography::BODY).into(),
            ));
        }
        Some(TipsStatus::Failed) => {
            column = column.push(text(i18n.tr("matcher-tips-failed")).color(palette::ERROR_500));
        }
        _ => {}
    }

    Container::new(column)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(score: f64) -> MatchResult {
        MatchResult {
            score,
            user: "ada".into(),
            resume_skills: vec!["Rust".into(), "Go".into()],
            job_skills: vec!["Rust".into(), "SQL".into()],
            matched_skills: vec!["Rust".into()],
            missing_skills: vec!["SQL".into()],
        }
    }

    #[test]
    fn submit_clears_previous_outcome() {
        let mut state = State::default();
        state.match_succeeded(result(80.0));
        state.tips_loaded("Learn SQL".into());
        state.match_failed(Some("boom".into()));
        state.set_resume_text("Rust dev");
        state.set_job_text("Need Rust");

        let event = update(&mut state, Message::Submit);

        assert_eq!(
            event,
            Event::Match(MatchRequest {
                resume: state.resume_text(),
                job: state.job_text(),
            })
        );
        assert!(state.result().is_none());
        assert!(state.tips().is_none());
        assert!(!state.has_error());
        assert!(state.is_matching());
    }

    #[test]
    fn upload_without_file_is_rejected() {
        let mut state = State::default();
        assert_eq!(update(&mut state, Message::Upload), Event::MissingFile);

        let file = ResumeFile {
            file_name: "cv.pdf".into(),
            bytes: vec![1, 2, 3],
        };
        state.file_chosen(file.clone());
        assert_eq!(update(&mut state, Message::Upload), Event::Upload(file));
    }

    #[test]
    fn upload_receipt_replaces_resume_text() {
        let mut state = State::default();
        state.set_resume_text("old");
        state.upload_succeeded(UploadReceipt {
            url: "https://files/cv.pdf".into(),
            resume_text: Some("Parsed resume".into()),
        });

        assert!(state.resume_text().starts_with("Parsed resume"));
        assert_eq!(state.uploaded_url(), Some("https://files/cv.pdf"));
    }

    #[test]
    fn upload_receipt_without_text_keeps_editor() {
        let mut state = State::default();
        state.set_resume_text("typed by hand");
        state.upload_succeeded(UploadReceipt {
            url: "u".into(),
            resume_text: None,
        });
        assert!(state.resume_text().starts_with("typed by hand"));
    }

    #[test]
    fn tips_need_a_result_and_block_while_loading() {
        let mut state = State::default();
        assert_eq!(update(&mut state, Message::RequestTips), Event::None);

        state.match_succeeded(result(40.0));
        let Event::Tips(request) = update(&mut state, Message::RequestTips) else {
            panic!("expected tips request");
        };
        assert_eq!(request.resume, "Rust, Go");
        assert_eq!(request.job, "Rust, SQL");
        assert_eq!(request.missing_skills, vec!["SQL".to_string()]);
        assert!(state.tips_loading());

        assert_eq!(update(&mut state, Message::RequestTips), Event::None);

        state.tips_failed();
        assert!(!state.tips_loading());
    }

    #[test]
    fn report_requires_result() {
        let mut state = State::default();
        assert_eq!(update(&mut state, Message::DownloadReport), Event::None);
        state.match_succeeded(result(75.0));
        assert_eq!(
            update(&mut state, Message::DownloadReport),
            Event::SaveReport(result(75.0))
        );
    }

    #[test]
    fn view_renders_result_and_error() {
        let i18n = I18n::default();
        let mut state = State::default();
        state.match_succeeded(result(55.0));
        state.tips_loaded("Add SQL".into());
        drop(view(&state, &i18n));
        state.match_failed(None);
        drop(view(&state, &i18n));
    }
}
