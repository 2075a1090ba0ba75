// SPDX-License-Identifier: MPL-2.0
//! `resume_matcher` is a desktop client for the Resume Matcher service,
//! built with the Iced GUI framework.
//!
//! It scores a resume against a job description, browses and posts jobs,
//! and keeps users informed through a queue of transient notifications.
//!
//! # Layout
//!
//! - [`domain`] - Plain data types exchanged with the backend
//! - [`application`] - The backend port the UI talks through
//! - [`infrastructure`] - HTTP implementation of that port
//! - [`app`] - Application state, navigation, session and effects
//! - [`ui`] - Pages, navbar, notifications and styling
//! - [`i18n`] - Fluent localization
//! - [`report`] - Plain-text match reports

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod report;
pub mod ui;
