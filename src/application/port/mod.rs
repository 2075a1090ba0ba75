// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`backend`]: The remote matching service
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no `reqwest` types)
//! - Traits are `Send + Sync` so one instance can be shared across tasks

pub mod backend;

pub use backend::{ApiError, ApiResult, Backend, BackendFuture};
