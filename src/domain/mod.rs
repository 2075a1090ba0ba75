// SPDX-License-Identifier: MPL-2.0
//! Domain layer - payloads exchanged with the matching service.
//!
//! These are plain data types with serde derives and no I/O. The server owns
//! every rule about them (scoring, persistence, permissions); the client only
//! carries and renders them.
//!
//! # Modules
//!
//! - [`account`]: Credentials, issued tokens and the user profile
//! - [`matching`]: Match requests, results, history and AI tips
//! - [`jobs`]: Job postings, drafts and applications
//! - [`analytics`]: Admin analytics summary
//! - [`skills`]: Comma-separated skill list parsing

pub mod account;
pub mod analytics;
pub mod jobs;
pub mod matching;
pub mod skills;
