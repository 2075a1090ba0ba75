// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` keeps a FIFO of banners plus a single-slot toast. Each banner
//! gets its own deadline when pushed: `max(now, deadline of the newest pending
//! banner) + dwell`. That is the schedule of a single timer draining the oldest
//! banner every `dwell`, so bursts are staggered, yet dismissing one banner
//! never moves the deadline of another.
//!
//! The manager never schedules anything itself. The owner asks for
//! [`Manager::next_deadline`] after each mutation and arranges for
//! [`Message::Expire`] to arrive then.

use super::notification::{Notification, NotificationId, Severity};
use crate::app::config::DEFAULT_NOTIFICATION_DWELL_MS;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Dismiss a specific banner by ID.
    Dismiss(NotificationId),
    /// Close the toast before its time.
    DismissToast,
    /// The expiry timer fired.
    Expire,
}

#[derive(Debug, Clone)]
struct Entry {
    notification: Notification,
    expires_at: Instant,
}

#[derive(Debug, Clone)]
struct ToastSlot {
    notification: Notification,
    closes_at: Instant,
}

#[derive(Debug)]
pub struct Manager {
    /// Pending banners, oldest first. Deadlines are non-decreasing.
    entries: VecDeque<Entry>,
    toast: Option<ToastSlot>,
    dwell: Duration,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::with_dwell(Duration::from_millis(DEFAULT_NOTIFICATION_DWELL_MS))
    }

    #[must_use]
    pub fn with_dwell(dwell: Duration) -> Self {
        Self {
            entries: VecDeque::new(),
            toast: None,
            dwell,
        }
    }

    #[must_use]
    pub fn dwell(&self) -> Duration {
        self.dwell
    }

    /// Appends a banner and shows the same message in the toast, replacing
    /// whatever the toast was showing.
    ///
    /// Warnings and errors are also forwarded to the log.
    pub fn push(&mut self, notification: Notification, now: Instant) {
        match notification.severity() {
            Severity::Warning => tracing::warn!(
                key = notification.message_key(),
                args = ?notification.message_args(),
                "warning notification"
            ),
            Severity::Error => tracing::error!(
                key = notification.message_key(),
                args = ?notification.message_args(),
                "error notification"
            ),
            Severity::Success | Severity::Info => {}
        }

        let start = self
            .entries
            .back()
            .map_or(now, |last| last.expires_at.max(now));

        self.toast = Some(ToastSlot {
            notification: notification.clone(),
            closes_at: now + self.dwell,
        });
        self.entries.push_back(Entry {
            notification,
            expires_at: start + self.dwell,
        });
    }

    /// Removes exactly the banner with `id`.
    ///
    /// Returns `true` if the banner was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        match self
            .entries
            .iter()
            .position(|entry| entry.notification.id() == id)
        {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    /// Drops every front banner whose deadline has passed, and the toast if
    /// its time is up. Returns the number of banners removed.
    ///
    /// Safe to call at any time: a firing meant for an already dismissed
    /// banner finds nothing due and does nothing.
    pub fn expire_due(&mut self, now: Instant) -> usize {
        let mut removed = 0;
        while self
            .entries
            .front()
            .is_some_and(|entry| entry.expires_at <= now)
        {
            self.entries.pop_front();
            removed += 1;
        }

        if self.toast.as_ref().is_some_and(|slot| slot.closes_at <= now) {
            self.toast = None;
        }

        removed
    }

    /// Earliest moment something needs to expire, if anything is pending.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        let banner = self.entries.front().map(|entry| entry.expires_at);
        let toast = self.toast.as_ref().map(|slot| slot.closes_at);
        match (banner, toast) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Deadline of a pending banner.
    #[must_use]
    pub fn deadline_of(&self, id: NotificationId) -> Option<Instant> {
        self.entries
            .iter()
            .find(|entry| entry.notification.id() == id)
            .map(|entry| entry.expires_at)
    }

    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::DismissToast => self.dismiss_toast(),
            Message::Expire => {
                self.expire_due(now);
            }
        }
    }

    /// Pending banners, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().map(|entry| &entry.notification)
    }

    #[must_use]
    pub fn toast(&self) -> Option<&Notification> {
        self.toast.as_ref().map(|slot| &slot.notification)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every banner and the toast.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.toast = None;
    }
}
