// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports the UI depends on.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer talks to the backend only through these ports

pub mod port;
