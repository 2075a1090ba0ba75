// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`http`]: The matching service over JSON/HTTP (implements [`Backend`])
//!
//! [`Backend`]: crate::application::port::Backend

pub mod http;

pub use http::HttpBackend;
