// SPDX-License-Identifier: MPL-2.0
//! Side effects requested by the update loop.
//!
//! `App::handle` stays synchronous and returns the effects it wants; `run`
//! turns each one into a future that resolves to the completion message.
//! Keeping the two apart lets the update logic be tested without a runtime.

use super::message::{Message, PickedFile, Response};
use super::requests::Ticket;
use crate::application::port::Backend;
use crate::domain::account::{AuthMode, Credentials, PasswordReset, Profile, ResetRequest};
use crate::domain::jobs::{ApplicationDraft, JobDraft, JobId};
use crate::domain::matching::{MatchRequest, MatchResult, ResumeFile, TipsRequest};
use crate::report;
use futures_util::future::{BoxFuture, FutureExt};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Résumé formats accepted by the upload endpoint.
pub const RESUME_EXTENSIONS: &[&str] = &["pdf", "txt", "docx"];

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Authenticate {
        mode: AuthMode,
        credentials: Credentials,
    },
    LoadProfile {
        ticket: Ticket,
        token: String,
    },
    SaveProfile {
        token: String,
        profile: Profile,
    },
    PickResumeFile {
        start_dir: Option<PathBuf>,
    },
    UploadResume {
        ticket: Ticket,
        token: String,
        file: ResumeFile,
    },
    Match {
        ticket: Ticket,
        token: String,
        request: MatchRequest,
    },
    Tips {
        ticket: Ticket,
        token: String,
        request: TipsRequest,
    },
    LoadHistory {
        ticket: Ticket,
        token: String,
    },
    LoadAnalytics {
        ticket: Ticket,
        token: String,
    },
    LoadJobs {
        ticket: Ticket,
    },
    PostJob {
        token: String,
        draft: JobDraft,
    },
    Apply {
        token: String,
        draft: ApplicationDraft,
    },
    LoadApplications {
        ticket: Ticket,
        token: String,
        job_id: JobId,
    },
    RequestReset(ResetRequest),
    ResetPassword(PasswordReset),
    SaveReport {
        result: MatchResult,
        start_dir: Option<PathBuf>,
    },
}

impl Effect {
    pub fn run(self, backend: Arc<dyn Backend>) -> BoxFuture<'static, Message> {
        let respond = |response: Response| Message::Response(response);

        match self {
            Effect::Authenticate { mode, credentials } => {
                let username = credentials.username.clone();
                backend
                    .authenticate(mode, credentials)
                    .map(move |result| {
                        respond(Response::Authenticated {
                            mode,
                            username,
                            result,
                        })
                    })
                    .boxed()
            }
            Effect::LoadProfile { ticket, token } => backend
                .fetch_profile(&token)
                .map(move |result| respond(Response::ProfileLoaded(ticket, result)))
                .boxed(),
            Effect::SaveProfile { token, profile } => backend
                .save_profile(&token, profile.clone())
                .map(move |result| respond(Response::ProfileSaved(profile, result)))
                .boxed(),
            Effect::PickResumeFile { start_dir } => pick_resume_file(start_dir)
                .map(move |picked| respond(Response::ResumeFilePicked(picked)))
                .boxed(),
            Effect::UploadResume {
                ticket,
                token,
                file,
            } => backend
                .upload_resume(&token, file)
                .map(move |result| respond(Response::ResumeUploaded(ticket, result)))
                .boxed(),
            Effect::Match {
                ticket,
                token,
                request,
            } => backend
                .match_resume(&token, request)
                .map(move |result| respond(Response::Matched(ticket, result)))
                .boxed(),
            Effect::Tips {
                ticket,
                token,
                request,
            } => backend
                .resume_tips(&token, request)
                .map(move |result| respond(Response::TipsLoaded(ticket, result)))
                .boxed(),
            Effect::LoadHistory { ticket, token } => backend
                .match_history(&token)
                .map(move |result| respond(Response::HistoryLoaded(ticket, result)))
                .boxed(),
            Effect::LoadAnalytics { ticket, token } => backend
                .admin_analytics(&token)
                .map(move |result| respond(Response::AnalyticsLoaded(ticket, result)))
                .boxed(),
            Effect::LoadJobs { ticket } => backend
                .list_jobs()
                .map(move |result| respond(Response::JobsLoaded(ticket, result)))
                .boxed(),
            Effect::PostJob { token, draft } => backend
                .post_job(&token, draft)
                .map(move |result| respond(Response::JobPosted(result)))
                .boxed(),
            Effect::Apply { token, draft } => backend
                .apply(&token, draft)
                .map(move |result| respond(Response::Applied(result)))
                .boxed(),
            Effect::LoadApplications {
                ticket,
                token,
                job_id,
            } => backend
                .list_applications(&token, job_id.clone())
                .map(move |result| respond(Response::ApplicationsLoaded(ticket, job_id, result)))
                .boxed(),
            Effect::RequestReset(request) => backend
                .request_reset(request)
                .map(move |result| respond(Response::ResetRequested(result)))
                .boxed(),
            Effect::ResetPassword(reset) => backend
                .reset_password(reset)
                .map(move |result| respond(Response::PasswordReset(result)))
                .boxed(),
            Effect::SaveReport { result, start_dir } => save_report(result, start_dir)
                .map(move |saved| respond(Response::ReportSaved(saved)))
                .boxed(),
        }
    }
}

async fn pick_resume_file(start_dir: Option<PathBuf>) -> Option<PickedFile> {
    let mut dialog = rfd::AsyncFileDialog::new().add_filter("Resume", RESUME_EXTENSIONS);
    if let Some(dir) = start_dir.filter(|dir| dir.exists()) {
        dialog = dialog.set_directory(&dir);
    }

    let path = dialog.pick_file().await?.path().to_path_buf();
    let contents = read_resume_file(&path).await;
    Some(PickedFile { path, contents })
}

async fn read_resume_file(path: &Path) -> Result<ResumeFile, String> {
    let bytes = tokio::fs::read(path).await.map_err(|err| err.to_string())?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("resume")
        .to_string();
    Ok(ResumeFile { file_name, bytes })
}

async fn save_report(result: MatchResult, start_dir: Option<PathBuf>) -> Option<Result<PathBuf, String>> {
    let mut dialog = rfd::AsyncFileDialog::new()
        .set_file_name(report::DEFAULT_FILE_NAME)
        .add_filter("Text", &["txt"]);
    if let Some(dir) = start_dir.filter(|dir| dir.exists()) {
        dialog = dialog.set_directory(&dir);
    }

    let path = dialog.save_file().await?.path().to_path_buf();
    Some(
        report::save(&path, &result)
            .await
            .map(|()| path)
            .map_err(|err| err.to_string()),
    )
}
