// SPDX-License-Identifier: MPL-2.0
//! `reqwest` adapter implementing the [`Backend`] port.
//!
//! Every call maps its outcome onto [`ApiError`]: failures to get a response
//! become `Transport`, non-success statuses become `Status` (carrying the
//! body's `error` field when present) and undecodable success bodies become
//! `Decode`.
//!
//! [`Backend`]: crate::application::port::Backend

use crate::application::port::{ApiError, ApiResult, Backend, BackendFuture};
use crate::domain::account::{AuthMode, AuthToken, Credentials, PasswordReset, Profile, ResetRequest};
use crate::domain::analytics::AdminAnalytics;
use crate::domain::jobs::{
    ApplicationDraft, ApplicationList, JobApplication, JobBoard, JobDraft, JobId, JobPosting,
};
use crate::domain::matching::{
    MatchHistory, MatchHistoryEntry, MatchRequest, MatchResult, ResumeFile, Tips, TipsRequest,
    UploadReceipt,
};
use crate::error::{Error, Result};
use futures_util::FutureExt;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("ResumeMatcher/", env!("CARGO_PKG_VERSION"));

/// Error body returned by the service on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Matching service client over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Builds a client for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the TLS backend cannot be initialized.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Config(format!("HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(self.url(path))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(self.url(path))
    }
}

/// Extracts the server's `error` text from a failure body.
fn error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .map(|body| body.error)
        .filter(|message| !message.trim().is_empty())
}

/// Sends the request and returns the raw body of a success response.
async fn send(request: RequestBuilder) -> ApiResult<Vec<u8>> {
    let response = request.send().await.map_err(|e| {
        warn!(error = %e, "request failed before a response");
        ApiError::Transport(e.to_string())
    })?;

    let status = response.status();
    let url = response.url().path().to_string();
    let body = response
        .bytes()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !status.is_success() {
        let message = error_message(&body);
        warn!(%url, status = status.as_u16(), ?message, "request rejected");
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }

    debug!(%url, status = status.as_u16(), "request completed");
    Ok(body.to_vec())
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> ApiResult<T> {
    let body = send(request).await?;
    serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "response body did not match the expected shape");
        ApiError::Decode(e.to_string())
    })
}

async fn send_unit(request: RequestBuilder) -> ApiResult<()> {
    send(request).await.map(|_| ())
}

impl Backend for HttpBackend {
    fn authenticate(&self, mode: AuthMode, credentials: Credentials) -> BackendFuture<AuthToken> {
        let path = match mode {
            AuthMode::Login => "/api/login",
            AuthMode::Register => "/api/register",
        };
        debug!(path, username = %credentials.username, "authenticating");
        send_json(self.post(path).json(&credentials)).boxed()
    }

    fn fetch_profile(&self, token: &str) -> BackendFuture<Profile> {
        send_json(self.get("/profile").bearer_auth(token)).boxed()
    }

    fn save_profile(&self, token: &str, profile: Profile) -> BackendFuture<()> {
        send_unit(self.post("/profile").bearer_auth(token).json(&profile)).boxed()
    }

    fn upload_resume(&self, token: &str, file: ResumeFile) -> BackendFuture<UploadReceipt> {
        let part = Part::bytes(file.bytes).file_name(file.file_name);
        let form = Form::new().part("resume", part);
        send_json(self.post("/api/upload").bearer_auth(token).multipart(form)).boxed()
    }

    fn match_resume(&self, token: &str, request: MatchRequest) -> BackendFuture<MatchResult> {
        send_json(self.post("/api/match").bearer_auth(token).json(&request)).boxed()
    }

    fn match_history(&self, token: &str) -> BackendFuture<Vec<MatchHistoryEntry>> {
        let request = self.get("/api/my-matches").bearer_auth(token);
        async move {
            let history: MatchHistory = send_json(request).await?;
            Ok(history.matches)
        }
        .boxed()
    }

    fn admin_analytics(&self, token: &str) -> BackendFuture<AdminAnalytics> {
        send_json(self.get("/api/admin").bearer_auth(token)).boxed()
    }

    fn resume_tips(&self, token: &str, request: TipsRequest) -> BackendFuture<String> {
        let request = self.post("/api/ai-tips").bearer_auth(token).json(&request);
        async move {
            let tips: Tips = send_json(request).await?;
            Ok(tips.tips)
        }
        .boxed()
    }

    fn list_jobs(&self) -> BackendFuture<Vec<JobPosting>> {
        let request = self.get("/api/jobs");
        async move {
            let board: JobBoard = send_json(request).await?;
            Ok(board.jobs)
        }
        .boxed()
    }

    fn post_job(&self, token: &str, draft: JobDraft) -> BackendFuture<()> {
        send_unit(self.post("/api/jobs").bearer_auth(token).json(&draft)).boxed()
    }

    fn apply(&self, token: &str, draft: ApplicationDraft) -> BackendFuture<()> {
        send_unit(self.post("/api/apply").bearer_auth(token).json(&draft)).boxed()
    }

    fn list_applications(
        &self,
        token: &str,
        job_id: JobId,
    ) -> BackendFuture<Vec<JobApplication>> {
        let request = self
            .get(&format!("/api/applications/{}", job_id.as_str()))
            .bearer_auth(token);
        async move {
            let list: ApplicationList = send_json(request).await?;
            Ok(list.applications)
        }
        .boxed()
    }

    fn request_reset(&self, request: ResetRequest) -> BackendFuture<()> {
        send_unit(self.post("/request-reset").json(&request)).boxed()
    }

    fn reset_password(&self, reset: PasswordReset) -> BackendFuture<()> {
        send_unit(self.post("/reset-password").json(&reset)).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves exactly one canned HTTP response and returns the raw request.
    async fn serve_once(response: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });
        (format!("http://{addr}"), handle)
    }

    fn backend(base: &str) -> HttpBackend {
        HttpBackend::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let backend = backend("https://example.test/");
        assert_eq!(backend.base_url(), "https://example.test");
        assert_eq!(backend.url("/api/jobs"), "https://example.test/api/jobs");
    }

    #[test]
    fn error_message_reads_error_field() {
        assert_eq!(
            error_message(br#"{"error":"Invalid credentials"}"#).as_deref(),
            Some("Invalid credentials")
        );
        assert_eq!(error_message(b"<html>Bad gateway</html>"), None);
        assert_eq!(error_message(br#"{"error":"  "}"#), None);
    }

    #[tokio::test]
    async fn list_jobs_decodes_board() {
        let (base, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 63\r\nConnection: close\r\n\r\n{\"jobs\":[{\"_id\":\"1\",\"title\":\"Frontend Developer\",\"skills\":[]}]}",
        )
        .await;

        let jobs = backend(&base).list_jobs().await.unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Frontend Developer");

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /api/jobs "));
        assert!(!request.to_ascii_lowercase().contains("authorization"));
    }

    #[tokio::test]
    async fn rejected_request_carries_server_message() {
        let (base, server) = serve_once(
            "HTTP/1.1 401 Unauthorized\r\nContent-Type: application/json\r\nContent-Length: 31\r\nConnection: close\r\n\r\n{\"error\":\"Invalid credentials\"}",
        )
        .await;

        let err = backend(&base).fetch_profile("abc").await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 401,
                message: Some("Invalid credentials".into()),
            }
        );

        let request = server.await.unwrap();
        assert!(request
            .to_ascii_lowercase()
            .contains("authorization: bearer abc"));
    }

    #[tokio::test]
    async fn malformed_success_body_is_decode_error() {
        let (base, _server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 9\r\nConnection: close\r\n\r\nnot json!",
        )
        .await;

        let err = backend(&base).admin_analytics("t").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_server_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = backend(&format!("http://{addr}"))
            .list_jobs()
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
