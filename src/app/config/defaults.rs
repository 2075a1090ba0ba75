// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.

// ==========================================================================
// Backend Defaults
// ==========================================================================

/// Deployment the client talks to when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://resume-matcher-backend-6-e3q6.onrender.com";

/// Environment variable overriding the configured base URL.
pub const ENV_API_URL: &str = "RESUME_MATCHER_API_URL";

/// Per-request timeout. The free hosting tier can take a while to wake up.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// How long a notification stays on screen (milliseconds).
pub const DEFAULT_NOTIFICATION_DWELL_MS: u64 = 3500;

pub const MIN_NOTIFICATION_DWELL_MS: u64 = 500;

pub const MAX_NOTIFICATION_DWELL_MS: u64 = 60_000;
