// SPDX-License-Identifier: MPL-2.0
//! Matching service port definition.
//!
//! This module defines the [`Backend`] trait through which the UI reaches the
//! remote matching service, and the [`ApiError`] taxonomy every call collapses to.
//!
//! # Design Notes
//!
//! - Futures are `'static` so callers can hand them straight to an Iced `Task`
//! - Arguments are owned; adapters clone what they need into the future
//! - The bearer token is passed per call, the port holds no session

use crate::domain::account::{AuthMode, AuthToken, Credentials, PasswordReset, Profile, ResetRequest};
use crate::domain::analytics::AdminAnalytics;
use crate::domain::jobs::{ApplicationDraft, JobApplication, JobDraft, JobId, JobPosting};
use crate::domain::matching::{
    MatchHistoryEntry, MatchRequest, MatchResult, ResumeFile, TipsRequest, UploadReceipt,
};
use futures_util::future::BoxFuture;

// =============================================================================
// ApiError
// =============================================================================

/// Failure of a call to the matching service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, TLS, timeout, refused).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("server returned status {status}")]
    Status {
        status: u16,
        /// The `error` field of the response body, when it had one.
        message: Option<String>,
    },

    /// A success response whose body did not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text supplied by the server, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Future returned by every [`Backend`] call.
pub type BackendFuture<T> = BoxFuture<'static, ApiResult<T>>;

// =============================================================================
// Backend Trait
// =============================================================================

/// Port for the remote matching service.
///
/// Implementations must be `Send + Sync`: the application shares one instance
/// behind an `Arc` and issues calls from the update loop.
pub trait Backend: Send + Sync {
    /// Logs in or registers, returning the issued bearer token.
    fn authenticate(&self, mode: AuthMode, credentials: Credentials) -> BackendFuture<AuthToken>;

    fn fetch_profile(&self, token: &str) -> BackendFuture<Profile>;

    fn save_profile(&self, token: &str, profile: Profile) -> BackendFuture<()>;

    /// Uploads a résumé as the multipart field `resume`.
    fn upload_resume(&self, token: &str, file: ResumeFile) -> BackendFuture<UploadReceipt>;

    fn match_resume(&self, token: &str, request: MatchRequest) -> BackendFuture<MatchResult>;

    fn match_history(&self, token: &str) -> BackendFuture<Vec<MatchHistoryEntry>>;

    fn admin_analytics(&self, token: &str) -> BackendFuture<AdminAnalytics>;

    /// Returns the AI-generated résumé tips text.
    fn resume_tips(&self, token: &str, request: TipsRequest) -> BackendFuture<String>;

    /// Lists the job board. Does not require a session.
    fn list_jobs(&self) -> BackendFuture<Vec<JobPosting>>;

    fn post_job(&self, token: &str, draft: JobDraft) -> BackendFuture<()>;

    fn apply(&self, token: &str, draft: ApplicationDraft) -> BackendFuture<()>;

    fn list_applications(&self, token: &str, job_id: JobId)
        -> BackendFuture<Vec<JobApplication>>;

    fn request_reset(&self, request: ResetRequest) -> BackendFuture<()>;

    fn reset_password(&self, reset: PasswordReset) -> BackendFuture<()>;
}
