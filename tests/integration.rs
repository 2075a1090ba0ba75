// SPDX-License-Identifier: MPL-2.0
//! End-to-end flows through `App::handle`, with effects executed against a
//! recording in-memory backend.

use futures_util::FutureExt;
use resume_matcher::app::config::{self, Config};
use resume_matcher::app::persisted_state::{AppState, StoredSession};
use resume_matcher::app::{App, Effect, Message, Screen, Startup};
use resume_matcher::application::port::{ApiError, ApiResult, Backend, BackendFuture};
use resume_matcher::domain::account::{
    AuthMode, AuthToken, Credentials, PasswordReset, Profile, ResetRequest,
};
use resume_matcher::domain::analytics::AdminAnalytics;
use resume_matcher::domain::jobs::{
    ApplicationDraft, JobApplication, JobDraft, JobId, JobPosting,
};
use resume_matcher::domain::matching::{
    MatchHistoryEntry, MatchRequest, MatchResult, ResumeFile, TipsRequest, UploadReceipt,
};
use resume_matcher::i18n::fluent::I18n;
use resume_matcher::ui::notifications::Severity;
use resume_matcher::ui::pages::{jobs, login, matcher};
use resume_matcher::ui::theming::ThemeMode;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tempfile::TempDir;

// ----------------------------------------------------------------------------
// Recording backend
// ----------------------------------------------------------------------------

#[derive(Default)]
struct RecordingBackend {
    calls: Mutex<Vec<String>>,
    board: Mutex<Vec<JobPosting>>,
    posted: Mutex<Vec<JobDraft>>,
    matches: Mutex<VecDeque<ApiResult<MatchResult>>>,
}

impl RecordingBackend {
    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn queue_match(&self, result: ApiResult<MatchResult>) {
        self.matches.lock().unwrap().push_back(result);
    }
}

fn ready<T: Send + 'static>(value: ApiResult<T>) -> BackendFuture<T> {
    async move { value }.boxed()
}

fn not_found<T: Send + 'static>() -> BackendFuture<T> {
    ready(Err(ApiError::Status {
        status: 404,
        message: None,
    }))
}

impl Backend for RecordingBackend {
    fn authenticate(&self, _: AuthMode, credentials: Credentials) -> BackendFuture<AuthToken> {
        self.record("POST /login");
        ready(Ok(AuthToken {
            token: format!("token-{}", credentials.username),
        }))
    }

    fn fetch_profile(&self, _: &str) -> BackendFuture<Profile> {
        self.record("GET /profile");
        ready(Ok(Profile::default()))
    }

    fn save_profile(&self, _: &str, _: Profile) -> BackendFuture<()> {
        self.record("POST /profile");
        ready(Ok(()))
    }

    fn upload_resume(&self, _: &str, _: ResumeFile) -> BackendFuture<UploadReceipt> {
        self.record("POST /upload");
        not_found()
    }

    fn match_resume(&self, _: &str, _: MatchRequest) -> BackendFuture<MatchResult> {
        self.record("POST /match");
        let next = self
            .matches
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".into())));
        ready(next)
    }

    fn match_history(&self, _: &str) -> BackendFuture<Vec<MatchHistoryEntry>> {
        self.record("GET /history");
        ready(Ok(Vec::new()))
    }

    fn admin_analytics(&self, _: &str) -> BackendFuture<AdminAnalytics> {
        self.record("GET /admin/analytics");
        not_found()
    }

    fn resume_tips(&self, _: &str, _: TipsRequest) -> BackendFuture<String> {
        self.record("POST /ai/resume-tips");
        not_found()
    }

    fn list_jobs(&self) -> BackendFuture<Vec<JobPosting>> {
        self.record("GET /jobs");
        ready(Ok(self.board.lock().unwrap().clone()))
    }

    fn post_job(&self, _: &str, draft: JobDraft) -> BackendFuture<()> {
        self.record("POST /jobs");
        let mut board = self.board.lock().unwrap();
        let id = JobId::new(format!("job-{}", board.len() + 1));
        board.push(JobPosting {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            skills: draft.skills.clone(),
            location: None,
        });
        drop(board);
        self.posted.lock().unwrap().push(draft);
        ready(Ok(()))
    }

    fn apply(&self, _: &str, _: ApplicationDraft) -> BackendFuture<()> {
        self.record("POST /jobs/apply");
        ready(Ok(()))
    }

    fn list_applications(&self, _: &str, _: JobId) -> BackendFuture<Vec<JobApplication>> {
        self.record("GET /jobs/applications");
        ready(Ok(Vec::new()))
    }

    fn request_reset(&self, _: ResetRequest) -> BackendFuture<()> {
        self.record("POST /request-reset");
        not_found()
    }

    fn reset_password(&self, _: PasswordReset) -> BackendFuture<()> {
        self.record("POST /reset-password");
        ready(Ok(()))
    }
}

// ----------------------------------------------------------------------------
// Harness
// ----------------------------------------------------------------------------

struct Harness {
    app: App,
    backend: Arc<RecordingBackend>,
    _dirs: TempDir,
}

impl Harness {
    fn new() -> Self {
        let dirs = tempfile::tempdir().expect("temp dir");
        let backend = Arc::new(RecordingBackend::default());
        let config = Config::default();
        let app = App::new(Startup {
            i18n: I18n::new(Some("en-US".into()), &config),
            config,
            app_state: AppState::default(),
            backend: backend.clone(),
            config_dir: Some(dirs.path().join("config")),
            data_dir: Some(dirs.path().join("data")),
            warnings: Vec::new(),
        });
        Self {
            app,
            backend,
            _dirs: dirs,
        }
    }

    /// Applies a message, then runs the resulting effects until none remain.
    async fn send(&mut self, message: Message) {
        let mut pending: VecDeque<Effect> = self.app.handle(message, Instant::now()).into();
        while let Some(effect) = pending.pop_front() {
            let reply = effect.run(self.backend.clone()).await;
            pending.extend(self.app.handle(reply, Instant::now()));
        }
    }

    async fn sign_in(&mut self, username: &str) {
        self.send(Message::Login(login::Message::UsernameChanged(username.into())))
            .await;
        self.send(Message::Login(login::Message::PasswordChanged("secret".into())))
            .await;
        self.send(Message::Login(login::Message::Submit(AuthMode::Login)))
            .await;
    }

    fn notification_keys(&self) -> Vec<(Severity, String)> {
        self.app
            .notifications()
            .visible()
            .map(|n| (n.severity(), n.message_key().to_string()))
            .collect()
    }
}

fn score(value: f64) -> MatchResult {
    MatchResult {
        score: value,
        user: "ada".into(),
        ..MatchResult::default()
    }
}

// ----------------------------------------------------------------------------
// Flows
// ----------------------------------------------------------------------------

#[tokio::test]
async fn jobs_list_without_session() {
    let mut harness = Harness::new();
    harness.backend.board.lock().unwrap().extend([
        JobPosting {
            id: JobId::new("j1"),
            title: "Backend engineer".into(),
            description: "Services in Rust".into(),
            skills: vec!["Rust".into()],
            location: Some("Remote".into()),
        },
        JobPosting {
            id: JobId::new("j2"),
            title: "Data analyst".into(),
            description: "Dashboards".into(),
            skills: vec!["SQL".into()],
            location: None,
        },
    ]);

    harness.send(Message::Jobs(jobs::Message::Load)).await;

    assert!(!harness.app.session().is_authenticated());
    assert_eq!(harness.backend.calls(), vec!["GET /jobs"]);
    let titles: Vec<_> = harness
        .app
        .jobs()
        .jobs()
        .iter()
        .map(|job| job.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Backend engineer", "Data analyst"]);
    let controls = jobs::Controls::for_session(harness.app.session());
    assert!(!controls.apply && !controls.post_form && !controls.view_applications);
    assert_eq!(
        harness.notification_keys(),
        vec![(Severity::Info, "notification-jobs-loaded".to_string())]
    );
}

#[tokio::test]
async fn admin_posts_job_and_board_refreshes() {
    let mut harness = Harness::new();
    harness.sign_in("admin").await;
    assert!(harness.app.session().can_post_jobs());
    assert_eq!(harness.app.screen(), Screen::Matcher);

    for message in [
        jobs::Message::TitleChanged("Platform engineer".into()),
        jobs::Message::DescriptionChanged("Own the build".into()),
        jobs::Message::SkillsChanged(" Rust , ,SQL ".into()),
        jobs::Message::Post,
    ] {
        harness.send(Message::Jobs(message)).await;
    }

    let posted = harness.backend.posted.lock().unwrap().clone();
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0].skills, vec!["Rust".to_string(), "SQL".to_string()]);
    assert_eq!(
        harness.backend.calls(),
        vec!["POST /login", "POST /jobs", "GET /jobs"]
    );
    assert_eq!(harness.app.jobs().jobs().len(), 1);
    assert!(harness
        .notification_keys()
        .contains(&(Severity::Success, "notification-job-posted".to_string())));
}

#[tokio::test]
async fn member_cannot_post_jobs() {
    let mut harness = Harness::new();
    harness.sign_in("ada").await;

    for message in [
        jobs::Message::TitleChanged("Title".into()),
        jobs::Message::DescriptionChanged("Description".into()),
        jobs::Message::SkillsChanged("Rust".into()),
        jobs::Message::Post,
    ] {
        harness.send(Message::Jobs(message)).await;
    }

    assert_eq!(harness.backend.calls(), vec!["POST /login"]);
}

#[tokio::test]
async fn match_network_error_surfaces_once() {
    let mut harness = Harness::new();
    harness.sign_in("ada").await;
    harness
        .backend
        .queue_match(Err(ApiError::Transport("connection refused".into())));

    harness.send(Message::Matcher(matcher::Message::Submit)).await;

    let errors: Vec<_> = harness
        .notification_keys()
        .into_iter()
        .filter(|(severity, _)| *severity == Severity::Error)
        .collect();
    assert_eq!(
        errors,
        vec![(Severity::Error, "notification-match-failed".to_string())]
    );
    assert!(harness.app.matcher().result().is_none());
    assert!(harness.app.matcher().has_error());
    assert!(!harness.app.matcher().is_matching());
}

#[tokio::test]
async fn superseded_match_is_discarded() {
    let mut harness = Harness::new();
    harness.sign_in("ada").await;
    harness.backend.queue_match(Ok(score(80.0)));
    harness.backend.queue_match(Ok(score(30.0)));

    let first = harness
        .app
        .handle(Message::Matcher(matcher::Message::Submit), Instant::now());
    let second = harness
        .app
        .handle(Message::Matcher(matcher::Message::Submit), Instant::now());

    // The newer request completes first; the older one arrives late.
    for effect in second.into_iter().chain(first) {
        let reply = effect.run(harness.backend.clone()).await;
        assert!(harness.app.handle(reply, Instant::now()).is_empty());
    }

    assert_eq!(harness.app.matcher().result().map(|r| r.percent()), Some(80));
    let score_notifications = harness
        .notification_keys()
        .into_iter()
        .filter(|(_, key)| key == "notification-match-score")
        .count();
    assert_eq!(score_notifications, 1);
}

#[tokio::test]
async fn good_match_is_a_success() {
    let mut harness = Harness::new();
    harness.sign_in("ada").await;
    harness.backend.queue_match(Ok(score(72.4)));

    harness.send(Message::Matcher(matcher::Message::Submit)).await;

    let text = harness
        .app
        .notifications()
        .visible()
        .find(|n| n.message_key() == "notification-match-score")
        .map(|n| {
            resume_matcher::ui::notifications::Toast::message_text(n, &harness.app.i18n)
        });
    assert_eq!(text.as_deref(), Some("Your resume matched 72% for this job!"));
    assert!(harness
        .notification_keys()
        .contains(&(Severity::Success, "notification-match-score".to_string())));
}

#[tokio::test]
async fn reset_request_reply_is_neutral() {
    let mut harness = Harness::new();
    harness
        .send(Message::Login(login::Message::ForgotPassword))
        .await;
    assert_eq!(harness.app.screen(), Screen::Reset);

    harness
        .send(Message::Reset(
            resume_matcher::ui::pages::reset::Message::UsernameChanged("ghost".into()),
        ))
        .await;
    harness
        .send(Message::Reset(
            resume_matcher::ui::pages::reset::Message::RequestToken,
        ))
        .await;

    assert_eq!(harness.backend.calls(), vec!["POST /request-reset"]);
    assert_eq!(
        harness.notification_keys(),
        vec![(Severity::Info, "notification-reset-requested".to_string())]
    );
}

// ----------------------------------------------------------------------------
// Persistence
// ----------------------------------------------------------------------------

#[test]
fn config_round_trips_through_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut config = Config::default();
    config.general.language = Some("fr".into());
    config.general.theme_mode = ThemeMode::Dark;
    config.backend.base_url = Some("http://example.test:4000".into());
    config.session.persist = Some(true);

    config::save_with_override(&config, Some(dir.path().to_path_buf())).expect("save config");
    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(loaded.general.language.as_deref(), Some("fr"));
    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    assert_eq!(
        loaded.backend.base_url.as_deref(),
        Some("http://example.test:4000")
    );
    assert!(loaded.persist_session());

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.tr("page-jobs"), "Offres");
}

#[test]
fn saved_session_round_trips() {
    let dir = tempfile::tempdir().expect("temp dir");
    let state = AppState {
        session: Some(StoredSession {
            token: "tok".into(),
            username: "ada".into(),
        }),
        ..AppState::default()
    };

    assert!(state.save_to(Some(dir.path().to_path_buf())).is_none());
    let (loaded, warning) = AppState::load_from(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(loaded.session, state.session);
}
