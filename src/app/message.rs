// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::requests::Ticket;
use crate::application::port::ApiResult;
use crate::domain::account::{AuthMode, AuthToken, Profile};
use crate::domain::analytics::AdminAnalytics;
use crate::domain::jobs::{JobApplication, JobId, JobPosting};
use crate::domain::matching::{MatchHistoryEntry, MatchResult, ResumeFile, UploadReceipt};
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::pages::{
    admin, applications_viewer, apply_dialog, dashboard, jobs, login, matcher, profile, reset,
};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// page messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Login(login::Message),
    Reset(reset::Message),
    Profile(profile::Message),
    Matcher(matcher::Message),
    Jobs(jobs::Message),
    Dashboard(dashboard::Message),
    Admin(admin::Message),
    ApplyDialog(apply_dialog::Message),
    ApplicationsViewer(applications_viewer::Message),
    Notification(notifications::NotificationMessage),
    Response(Response),
}

/// Completion of an asynchronous effect.
#[derive(Debug, Clone)]
pub enum Response {
    Authenticated {
        mode: AuthMode,
        username: String,
        result: ApiResult<AuthToken>,
    },
    ProfileLoaded(Ticket, ApiResult<Profile>),
    /// Carries the profile that was sent, which becomes the shown one on success.
    ProfileSaved(Profile, ApiResult<()>),
    /// `None` when the dialog was dismissed.
    ResumeFilePicked(Option<PickedFile>),
    ResumeUploaded(Ticket, ApiResult<UploadReceipt>),
    Matched(Ticket, ApiResult<MatchResult>),
    TipsLoaded(Ticket, ApiResult<String>),
    HistoryLoaded(Ticket, ApiResult<Vec<MatchHistoryEntry>>),
    AnalyticsLoaded(Ticket, ApiResult<AdminAnalytics>),
    JobsLoaded(Ticket, ApiResult<Vec<JobPosting>>),
    JobPosted(ApiResult<()>),
    Applied(ApiResult<()>),
    ApplicationsLoaded(Ticket, JobId, ApiResult<Vec<JobApplication>>),
    ResetRequested(ApiResult<()>),
    PasswordReset(ApiResult<()>),
    /// `None` when the dialog was dismissed.
    ReportSaved(Option<Result<PathBuf, String>>),
}

/// A file chosen in the résumé dialog, with its contents or the read error.
#[derive(Debug, Clone)]
pub struct PickedFile {
    pub path: PathBuf,
    pub contents: Result<ResumeFile, String>,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional service base URL, ahead of `RESUME_MATCHER_API_URL` and the config file.
    pub api_url: Option<String>,
    /// Optional data directory override (for `state.cbor`).
    /// Takes precedence over `RESUME_MATCHER_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for `settings.toml`).
    /// Takes precedence over `RESUME_MATCHER_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
