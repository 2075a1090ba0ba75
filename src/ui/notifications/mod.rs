// SPDX-License-Identifier: MPL-2.0
//! Transient notifications for user feedback.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` holding the banner queue, the toast and deadlines
//! - [`toast`] - Rendering of banners and the toast
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::with_dwell(config.notification_dwell());
//! manager.push(Notification::success("notification-job-posted"), Instant::now());
//!
//! let layer = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
