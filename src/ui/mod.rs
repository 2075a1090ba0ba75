// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Every page follows the Elm-style "state down, messages up" pattern: a
//! `State`, a `Message`, an `update` returning an `Event` for the parent, and
//! a `view`.
//!
//! - [`pages`] - Login, reset, profile, matcher, jobs, dashboard and admin
//! - [`navbar`] - Top bar and navigation drawer
//! - [`notifications`] - Notification queue, banners and toast
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod pages;
pub mod styles;
pub mod theming;
