// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers mutate `App` and return the effects to run. Every completion that
//! reaches the backend raises exactly one notification; a local validation
//! failure raises one warning and no request.

use super::effect::Effect;
use super::message::{Message, PickedFile, Response};
use super::requests::{RequestKind, Ticket};
use super::session::Session;
use super::{config, App, Screen};
use crate::application::port::{ApiError, ApiResult};
use crate::domain::account::{AuthMode, AuthToken};
use crate::domain::matching::MatchResult;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{Notification, Severity};
use crate::ui::pages::{
    admin, applications_viewer, apply_dialog, dashboard, jobs, login, matcher, profile, reset,
};
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;

impl App {
    /// Applies one message and returns the effects it asks for.
    pub fn handle(&mut self, message: Message, now: Instant) -> Vec<Effect> {
        match message {
            Message::Navbar(message) => self.handle_navbar(message, now),
            Message::Login(message) => self.handle_login(message, now),
            Message::Reset(message) => self.handle_reset(message, now),
            Message::Profile(message) => self.handle_profile(message),
            Message::Matcher(message) => self.handle_matcher(message, now),
            Message::Jobs(message) => self.handle_jobs(message, now),
            Message::Dashboard(message) => self.handle_dashboard(message),
            Message::Admin(message) => self.handle_admin(message),
            Message::ApplyDialog(message) => self.handle_apply_dialog(message, now),
            Message::ApplicationsViewer(applications_viewer::Message::Close) => {
                self.navigation.close_applications_viewer();
                Vec::new()
            }
            Message::Notification(message) => {
                self.notifications.handle_message(&message, now);
                Vec::new()
            }
            Message::Response(response) => self.handle_response(response, now),
        }
    }

    fn notify(&mut self, notification: Notification, now: Instant) {
        self.notifications.push(notification, now);
    }

    fn token(&self) -> String {
        self.session.token().to_string()
    }

    /// Drops a completion that a newer request of the same kind superseded.
    fn is_stale(&self, ticket: &Ticket) -> bool {
        let stale = !self.requests.is_current(ticket);
        if stale {
            debug!(kind = ?ticket.kind(), "discarding stale response");
        }
        stale
    }

    fn navigate(&mut self, screen: Screen) -> Vec<Effect> {
        if self.navigation.navigate_to(screen) {
            self.entered(screen)
        } else {
            Vec::new()
        }
    }

    /// Data a page loads on its own when it becomes current.
    fn entered(&mut self, screen: Screen) -> Vec<Effect> {
        match screen {
            Screen::Profile if self.session.is_authenticated() => vec![self.load_profile()],
            _ => Vec::new(),
        }
    }

    fn save_state(&mut self, now: Instant) {
        if let Some(key) = self.app_state.save_to(self.data_dir.clone()) {
            self.notify(Notification::warning(key), now);
        }
    }

    // ------------------------------------------------------------------
    // Navbar and session
    // ------------------------------------------------------------------

    fn handle_navbar(&mut self, message: navbar::Message, now: Instant) -> Vec<Effect> {
        match navbar::update(message, &mut self.navigation) {
            NavbarEvent::None => Vec::new(),
            NavbarEvent::Navigated(screen) => self.entered(screen),
            NavbarEvent::DarkModeChanged(dark) => {
                self.config.general.theme_mode = ThemeMode::from_dark(dark);
                if let Err(err) = config::save_with_override(&self.config, self.config_dir.clone())
                {
                    tracing::warn!(error = %err, "could not save settings");
                    self.notify(Notification::warning("notification-config-save-error"), now);
                }
                Vec::new()
            }
            NavbarEvent::Logout => self.logout(now),
        }
    }

    fn logout(&mut self, now: Instant) -> Vec<Effect> {
        debug!(username = self.session.username(), "logging out");
        self.session.clear();
        self.requests.supersede_all();
        self.profile.reset();
        self.matcher.reset();
        self.dashboard.reset();
        self.admin.reset();
        self.apply_dialog.reset();
        self.jobs.load_cancelled();
        self.navigation.close_overlays();
        if self.app_state.session.take().is_some() {
            self.save_state(now);
        }
        self.navigate(Screen::Login)
    }

    // ------------------------------------------------------------------
    // Pages
    // ------------------------------------------------------------------

    fn handle_login(&mut self, message: login::Message, now: Instant) -> Vec<Effect> {
        match login::update(&mut self.login, message) {
            login::Event::None => Vec::new(),
            login::Event::MissingFields => {
                self.notify(Notification::warning("notification-fill-all-fields"), now);
                Vec::new()
            }
            login::Event::Authenticate(mode, credentials) => {
                debug!(?mode, username = %credentials.username, "authentication requested");
                vec![Effect::Authenticate { mode, credentials }]
            }
            login::Event::OpenReset => self.navigate(Screen::Reset),
        }
    }

    fn handle_reset(&mut self, message: reset::Message, now: Instant) -> Vec<Effect> {
        match reset::update(&mut self.reset, message) {
            reset::Event::None => Vec::new(),
            reset::Event::MissingFields => {
                self.notify(Notification::warning("notification-fill-all-fields"), now);
                Vec::new()
            }
            reset::Event::RequestReset(request) => vec![Effect::RequestReset(request)],
            reset::Event::ResetPassword(reset) => vec![Effect::ResetPassword(reset)],
            reset::Event::BackToLogin => self.navigate(Screen::Login),
        }
    }

    fn load_profile(&mut self) -> Effect {
        self.profile.load_started();
        Effect::LoadProfile {
            ticket: self.requests.begin(RequestKind::Profile),
            token: self.token(),
        }
    }

    fn handle_profile(&mut self, message: profile::Message) -> Vec<Effect> {
        match profile::update(&mut self.profile, message) {
            profile::Event::None => Vec::new(),
            profile::Event::Load => vec![self.load_profile()],
            profile::Event::Save(profile) => vec![Effect::SaveProfile {
                token: self.token(),
                profile,
            }],
        }
    }

    fn handle_matcher(&mut self, message: matcher::Message, now: Instant) -> Vec<Effect> {
        match matcher::update(&mut self.matcher, message) {
            matcher::Event::None => Vec::new(),
            matcher::Event::ChooseFile => vec![Effect::PickResumeFile {
                start_dir: self.app_state.last_resume_directory.clone(),
            }],
            matcher::Event::MissingFile => {
                self.notify(Notification::warning("notification-select-resume"), now);
                Vec::new()
            }
            matcher::Event::Upload(file) => vec![Effect::UploadResume {
                ticket: self.requests.begin(RequestKind::Upload),
                token: self.token(),
                file,
            }],
            matcher::Event::Match(request) => {
                // Tips belong to the result being replaced.
                self.requests.begin(RequestKind::Tips);
                vec![Effect::Match {
                    ticket: self.requests.begin(RequestKind::Match),
                    token: self.token(),
                    request,
                }]
            }
            matcher::Event::Tips(request) => vec![Effect::Tips {
                ticket: self.requests.begin(RequestKind::Tips),
                token: self.token(),
                request,
            }],
            matcher::Event::SaveReport(result) => vec![Effect::SaveReport {
                result,
                start_dir: self.app_state.last_report_directory.clone(),
            }],
            matcher::Event::Logout => self.logout(now),
        }
    }

    fn handle_jobs(&mut self, message: jobs::Message, now: Instant) -> Vec<Effect> {
        match jobs::update(&mut self.jobs, message) {
            jobs::Event::None => Vec::new(),
            jobs::Event::Load => vec![self.load_jobs()],
            jobs::Event::MissingFields => {
                self.notify(Notification::warning("notification-job-missing-fields"), now);
                Vec::new()
            }
            jobs::Event::Post(draft) if self.session.can_post_jobs() => {
                self.jobs.post_started();
                vec![Effect::PostJob {
                    token: self.token(),
                    draft,
                }]
            }
            jobs::Event::OpenApply(job) if self.session.can_apply() => {
                self.apply_dialog.reset();
                self.navigation.open_apply_dialog(job);
                Vec::new()
            }
            jobs::Event::ViewApplications(job_id) if self.session.can_view_applications() => {
                vec![Effect::LoadApplications {
                    ticket: self.requests.begin(RequestKind::Applications),
                    token: self.token(),
                    job_id,
                }]
            }
            jobs::Event::Post(_) | jobs::Event::OpenApply(_) | jobs::Event::ViewApplications(_) => {
                debug!("job action not available for this session");
                Vec::new()
            }
        }
    }

    fn load_jobs(&mut self) -> Effect {
        self.jobs.load_started();
        Effect::LoadJobs {
            ticket: self.requests.begin(RequestKind::Jobs),
        }
    }

    fn handle_apply_dialog(&mut self, message: apply_dialog::Message, now: Instant) -> Vec<Effect> {
        let Some(job) = self.navigation.apply_dialog().cloned() else {
            return Vec::new();
        };
        match apply_dialog::update(&mut self.apply_dialog, message, &job) {
            apply_dialog::Event::None => Vec::new(),
            apply_dialog::Event::MissingResume => {
                self.notify(Notification::warning("notification-apply-missing-fields"), now);
                Vec::new()
            }
            apply_dialog::Event::Submit(draft) => {
                self.navigation.close_apply_dialog();
                self.apply_dialog.reset();
                vec![Effect::Apply {
                    token: self.token(),
                    draft,
                }]
            }
            apply_dialog::Event::Close => {
                self.navigation.close_apply_dialog();
                Vec::new()
            }
        }
    }

    fn handle_dashboard(&mut self, message: dashboard::Message) -> Vec<Effect> {
        match dashboard::update(&mut self.dashboard, message) {
            dashboard::Event::Load => {
                self.dashboard.load_started();
                vec![Effect::LoadHistory {
                    ticket: self.requests.begin(RequestKind::History),
                    token: self.token(),
                }]
            }
        }
    }

    fn handle_admin(&mut self, message: admin::Message) -> Vec<Effect> {
        match admin::update(&mut self.admin, message) {
            admin::Event::Load if self.session.can_load_analytics() => {
                self.admin.load_started();
                vec![Effect::LoadAnalytics {
                    ticket: self.requests.begin(RequestKind::Analytics),
                    token: self.token(),
                }]
            }
            admin::Event::Load => Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Completions
    // ------------------------------------------------------------------

    fn handle_response(&mut self, response: Response, now: Instant) -> Vec<Effect> {
        match response {
            Response::Authenticated {
                mode,
                username,
                result,
            } => self.on_authenticated(mode, username, result, now),
            Response::ProfileLoaded(ticket, result) => {
                if self.is_stale(&ticket) {
                    return Vec::new();
                }
                match result {
                    Ok(profile) => self.profile.loaded(profile),
                    Err(_) => {
                        self.profile.load_failed();
                        self.notify(Notification::error("notification-profile-load-failed"), now);
                    }
                }
                Vec::new()
            }
            Response::ProfileSaved(_, _) if !self.session.is_authenticated() => {
                debug!("dropping profile save reply after logout");
                Vec::new()
            }
            Response::ProfileSaved(profile, result) => match result {
                Ok(()) => {
                    self.profile.saved(profile);
                    self.notify(Notification::success("notification-profile-updated"), now);
                    vec![self.load_profile()]
                }
                Err(_) => {
                    self.profile.save_failed();
                    self.notify(Notification::error("notification-profile-update-failed"), now);
                    Vec::new()
                }
            },
            Response::ResumeFilePicked(picked) => {
                if let Some(picked) = picked {
                    self.on_file_picked(picked, now);
                }
                Vec::new()
            }
            Response::ResumeUploaded(ticket, result) => {
                if self.is_stale(&ticket) {
                    return Vec::new();
                }
                match result {
                    Ok(receipt) => {
                        self.matcher.upload_succeeded(receipt);
                        self.notify(Notification::success("notification-upload-success"), now);
                    }
                    Err(_) => {
                        self.matcher.upload_failed();
                        self.notify(Notification::error("notification-upload-failed"), now);
                    }
                }
                Vec::new()
            }
            Response::Matched(ticket, result) => {
                if !self.is_stale(&ticket) {
                    self.on_matched(result, now);
                }
                Vec::new()
            }
            Response::TipsLoaded(ticket, result) => {
                if self.is_stale(&ticket) {
                    return Vec::new();
                }
                match result {
                    Ok(tips) => {
                        self.matcher.tips_loaded(tips);
                        self.notify(Notification::info("notification-tips-loaded"), now);
                    }
                    Err(_) => {
                        self.matcher.tips_failed();
                        self.notify(Notification::error("notification-tips-failed"), now);
                    }
                }
                Vec::new()
            }
            Response::HistoryLoaded(ticket, result) => {
                if self.is_stale(&ticket) {
                    return Vec::new();
                }
                match result {
                    Ok(history) => {
                        self.dashboard.history_loaded(history);
                        self.notify(Notification::info("notification-history-loaded"), now);
                    }
                    Err(_) => {
                        self.dashboard.load_failed();
                        self.notify(Notification::error("notification-history-failed"), now);
                    }
                }
                Vec::new()
            }
            Response::AnalyticsLoaded(ticket, result) => {
                if self.is_stale(&ticket) {
                    return Vec::new();
                }
                match result {
                    Ok(analytics) => {
                        self.admin.analytics_loaded(analytics);
                        self.notify(Notification::info("notification-analytics-loaded"), now);
                    }
                    Err(_) => {
                        self.admin.load_failed();
                        self.notify(Notification::error("notification-analytics-failed"), now);
                    }
                }
                Vec::new()
            }
            Response::JobsLoaded(ticket, result) => {
                if self.is_stale(&ticket) {
                    return Vec::new();
                }
                match result {
                    Ok(jobs) => {
                        self.jobs.jobs_loaded(jobs);
                        self.notify(Notification::info("notification-jobs-loaded"), now);
                    }
                    Err(_) => {
                        self.jobs.load_failed();
                        self.notify(Notification::error("notification-jobs-failed"), now);
                    }
                }
                Vec::new()
            }
            Response::JobPosted(result) => match result {
                Ok(()) => {
                    self.jobs.posted();
                    self.notify(Notification::success("notification-job-posted"), now);
                    vec![self.load_jobs()]
                }
                Err(_) => {
                    self.jobs.post_failed();
                    self.notify(Notification::error("notification-job-post-failed"), now);
                    Vec::new()
                }
            },
            Response::Applied(result) => {
                let notification = match result {
                    Ok(()) => Notification::success("notification-applied"),
                    Err(_) => Notification::error("notification-apply-failed"),
                };
                self.notify(notification, now);
                Vec::new()
            }
            Response::ApplicationsLoaded(ticket, job_id, result) => {
                if self.is_stale(&ticket) {
                    return Vec::new();
                }
                match result {
                    Ok(applications) => {
                        self.navigation.open_applications_viewer(job_id, applications);
                        self.notify(Notification::info("notification-applications-loaded"), now);
                    }
                    Err(_) => {
                        self.notify(Notification::error("notification-applications-failed"), now);
                    }
                }
                Vec::new()
            }
            Response::ResetRequested(_) => {
                // Same message either way so the reply does not reveal whether
                // the account exists.
                self.reset.request_finished();
                self.notify(Notification::info("notification-reset-requested"), now);
                Vec::new()
            }
            Response::PasswordReset(result) => match result {
                Ok(()) => {
                    self.reset.reset_succeeded();
                    self.notify(Notification::success("notification-password-updated"), now);
                    self.navigate(Screen::Login)
                }
                Err(_) => {
                    self.reset.reset_failed();
                    self.notify(Notification::error("notification-reset-failed"), now);
                    Vec::new()
                }
            },
            Response::ReportSaved(saved) => {
                match saved {
                    None => {}
                    Some(Ok(path)) => self.on_report_saved(path, now),
                    Some(Err(err)) => {
                        tracing::warn!(error = %err, "could not write match report");
                        self.notify(Notification::error("notification-report-failed"), now);
                    }
                }
                Vec::new()
            }
        }
    }

    fn on_authenticated(
        &mut self,
        mode: AuthMode,
        username: String,
        result: ApiResult<AuthToken>,
        now: Instant,
    ) -> Vec<Effect> {
        match result {
            Ok(token) => {
                self.session = Session::new(token.token, username);
                self.login.auth_succeeded();
                if self.config.persist_session() {
                    self.app_state.session = self.session.to_stored();
                    self.save_state(now);
                }
                let key = match mode {
                    AuthMode::Login => "notification-login-success",
                    AuthMode::Register => "notification-register-success",
                };
                self.notify(Notification::success(key), now);
                self.navigate(Screen::Matcher)
            }
            Err(err) => {
                self.login
                    .auth_failed(err.server_message().map(str::to_string));
                self.notify(Notification::error("notification-auth-failed"), now);
                Vec::new()
            }
        }
    }

    fn on_file_picked(&mut self, picked: PickedFile, now: Instant) {
        self.app_state
            .set_last_resume_directory_from_file(&picked.path);
        self.save_state(now);
        match picked.contents {
            Ok(file) => self.matcher.file_chosen(file),
            Err(err) => {
                tracing::warn!(path = %picked.path.display(), error = %err, "could not read résumé");
                self.notify(Notification::error("notification-file-read-failed"), now);
            }
        }
    }

    fn on_matched(&mut self, result: Result<MatchResult, ApiError>, now: Instant) {
        match result {
            Ok(result) => {
                let severity = if result.is_good_match() {
                    Severity::Success
                } else {
                    Severity::Info
                };
                let notification = Notification::new(severity, "notification-match-score")
                    .with_arg("score", result.percent().to_string());
                self.matcher.match_succeeded(result);
                self.notify(notification, now);
            }
            Err(err) => {
                self.matcher
                    .match_failed(err.server_message().map(str::to_string));
                self.notify(Notification::error("notification-match-failed"), now);
            }
        }
    }

    fn on_report_saved(&mut self, path: PathBuf, now: Instant) {
        debug!(path = %path.display(), "match report written");
        self.app_state.set_last_report_directory_from_file(&path);
        self.save_state(now);
        self.notify(Notification::info("notification-report-saved"), now);
    }
}
