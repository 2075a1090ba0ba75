// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the pages.
//!
//! The `App` struct owns the session, navigation, the notification queue and
//! every page's state. `handle` (in `update.rs`) turns messages into state
//! changes plus [`Effect`]s; `update` runs those effects as Iced tasks and
//! keeps the single notification expiry timer armed for the earliest deadline.

pub mod config;
mod effect;
mod message;
pub mod navigation;
pub mod paths;
pub mod persisted_state;
pub mod requests;
mod screen;
pub mod session;
mod update;
mod view;

pub use effect::Effect;
pub use message::{Flags, Message, PickedFile, Response};
pub use screen::Screen;

use crate::application::port::Backend;
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::infrastructure::HttpBackend;
use crate::ui::notifications::{self, Notification, NotificationMessage};
use crate::ui::pages::{admin, apply_dialog, dashboard, jobs, login, matcher, profile, reset};
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::task::Handle;
use iced::{window, Task, Theme};
use navigation::Navigation;
use persisted_state::AppState;
use requests::RequestTracker;
use session::Session;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// Persisted application state (saved session, dialog directories).
    app_state: AppState,
    navigation: Navigation,
    session: Session,
    notifications: notifications::Manager,
    requests: RequestTracker,
    backend: Arc<dyn Backend>,
    /// Explicit directory overrides; `None` resolves through `paths`.
    config_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    /// System theme, sampled once at startup.
    system_dark: bool,
    /// Armed expiry timer and the deadline it targets. Dropping the handle
    /// aborts the task.
    expiry: Option<(Instant, Handle)>,
    login: login::State,
    reset: reset::State,
    profile: profile::State,
    matcher: matcher::State,
    jobs: jobs::State,
    dashboard: dashboard::State,
    admin: admin::State,
    apply_dialog: apply_dialog::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.navigation.screen())
            .field("signed_in", &self.session.is_authenticated())
            .field("notifications", &self.notifications.len())
            .finish_non_exhaustive()
    }
}

/// Everything loaded before the window opens.
pub struct Startup {
    pub config: Config,
    pub app_state: AppState,
    pub i18n: I18n,
    pub backend: Arc<dyn Backend>,
    pub config_dir: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    /// Localization keys of warnings raised while loading.
    pub warnings: Vec<String>,
}

impl Startup {
    /// Loads config and state, resolves the locale and builds the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn load(flags: &Flags) -> Result<Self> {
        paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

        let (config, config_warning) = config::load();
        let (app_state, state_warning) = AppState::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let base_url = config.api_base_url(flags.api_url.as_deref());
        tracing::info!(%base_url, locale = %i18n.current_locale(), "starting");
        let backend = HttpBackend::new(&base_url, config.request_timeout())?;

        Ok(Self {
            config,
            app_state,
            i18n,
            backend: Arc::new(backend),
            config_dir: None,
            data_dir: None,
            warnings: config_warning.into_iter().chain(state_warning).collect(),
        })
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// # Errors
///
/// Returns an error if startup fails or the window cannot be created.
pub fn run(flags: Flags) -> Result<()> {
    use std::cell::RefCell;

    let startup = Startup::load(&flags)?;

    // iced 0.14 requires `Fn` for boot while the startup data is consumed once.
    let boot_state = RefCell::new(Some(startup));
    let boot = move || {
        let startup = boot_state
            .borrow_mut()
            .take()
            .expect("boot runs once per application");
        App::boot(startup)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()?;
    Ok(())
}

impl App {
    /// Builds the application from loaded startup data.
    #[must_use]
    pub fn new(startup: Startup) -> Self {
        let Startup {
            config,
            app_state,
            i18n,
            backend,
            config_dir,
            data_dir,
            warnings,
        } = startup;

        let mut session = Session::default();
        if config.persist_session() {
            if let Some(stored) = app_state.session.clone() {
                tracing::debug!(username = %stored.username, "restoring saved session");
                session = Session::from(stored);
            }
        }
        let screen = if session.is_authenticated() {
            Screen::Matcher
        } else {
            Screen::Login
        };

        let mut app = Self {
            i18n,
            notifications: notifications::Manager::with_dwell(config.notification_dwell()),
            system_dark: ThemeMode::System.is_dark(),
            config,
            app_state,
            navigation: Navigation::new(screen),
            session,
            requests: RequestTracker::new(),
            backend,
            config_dir,
            data_dir,
            expiry: None,
            login: login::State::default(),
            reset: reset::State::default(),
            profile: profile::State::default(),
            matcher: matcher::State::default(),
            jobs: jobs::State::default(),
            dashboard: dashboard::State::default(),
            admin: admin::State::default(),
            apply_dialog: apply_dialog::State::default(),
        };

        let now = Instant::now();
        for key in warnings {
            app.notifications.push(Notification::warning(key), now);
        }
        app
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.navigation.screen()
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn jobs(&self) -> &jobs::State {
        &self.jobs
    }

    #[must_use]
    pub fn matcher(&self) -> &matcher::State {
        &self.matcher
    }

    fn boot(startup: Startup) -> (Self, Task<Message>) {
        let mut app = Self::new(startup);
        let task = app.rearm_expiry().unwrap_or_else(Task::none);
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let page = self.i18n.tr(self.navigation.screen().title_key());
        format!("{page} - {app_name}")
    }

    fn dark_mode(&self) -> bool {
        match self.config.general.theme_mode {
            ThemeMode::System => self.system_dark,
            mode => mode.is_dark(),
        }
    }

    fn theme(&self) -> Theme {
        // System mode resolves through the sample taken at startup.
        ThemeMode::from_dark(self.dark_mode()).iced_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        if matches!(
            message,
            Message::Notification(NotificationMessage::Expire)
        ) {
            // The armed timer just fired.
            self.expiry = None;
        }

        let effects = self.handle(message, Instant::now());
        let timer = self.rearm_expiry();
        let backend = Arc::clone(&self.backend);
        let tasks: Vec<Task<Message>> = effects
            .into_iter()
            .map(|effect| Task::perform(effect.run(Arc::clone(&backend)), |message| message))
            .chain(timer)
            .collect();
        Task::batch(tasks)
    }

    /// Points the expiry timer at the earliest pending deadline.
    ///
    /// Returns the new timer task when it had to be replaced; the replaced
    /// task is aborted when its handle drops.
    fn rearm_expiry(&mut self) -> Option<Task<Message>> {
        let deadline = self.notifications.next_deadline();
        if self.expiry.as_ref().map(|(at, _)| *at) == deadline {
            return None;
        }
        self.expiry = None;

        let deadline = deadline?;
        let (task, handle) = Task::perform(
            tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)),
            |()| Message::Notification(NotificationMessage::Expire),
        )
        .abortable();
        self.expiry = Some((deadline, handle.abort_on_drop()));
        Some(task)
    }
}
