// SPDX-License-Identifier: MPL-2.0
//! Generation tickets for view-updating requests.
//!
//! Issuing a request of a kind bumps that kind's generation. A completion is
//! applied only if its ticket still carries the latest generation, so a slow
//! response can never overwrite the result of a newer request.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Profile,
    Upload,
    Match,
    Tips,
    History,
    Analytics,
    Jobs,
    Applications,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    kind: RequestKind,
    generation: u64,
}

impl Ticket {
    #[must_use]
    pub fn kind(&self) -> RequestKind {
        self.kind
    }
}

#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: HashMap<RequestKind, u64>,
}

impl RequestTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket that supersedes every earlier ticket of `kind`.
    pub fn begin(&mut self, kind: RequestKind) -> Ticket {
        let generation = self.latest.entry(kind).or_insert(0);
        *generation += 1;
        Ticket {
            kind,
            generation: *generation,
        }
    }

    /// Makes every outstanding ticket stale, used when the session ends.
    pub fn supersede_all(&mut self) {
        for generation in self.latest.values_mut() {
            *generation += 1;
        }
    }

    #[must_use]
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.latest.get(&ticket.kind) == Some(&ticket.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_ticket_supersedes_older() {
        let mut tracker = RequestTracker::new();
        let first = tracker.begin(RequestKind::Match);
        let second = tracker.begin(RequestKind::Match);

        assert!(!tracker.is_current(&first));
        assert!(tracker.is_current(&second));
    }

    #[test]
    fn kinds_are_independent() {
        let mut tracker = RequestTracker::new();
        let jobs = tracker.begin(RequestKind::Jobs);
        let _ = tracker.begin(RequestKind::History);
        let _ = tracker.begin(RequestKind::History);

        assert!(tracker.is_current(&jobs));
        assert_eq!(jobs.kind(), RequestKind::Jobs);
    }

    #[test]
    fn supersede_all_invalidates_outstanding_tickets() {
        let mut tracker = RequestTracker::new();
        let profile = tracker.begin(RequestKind::Profile);
        let tips = tracker.begin(RequestKind::Tips);
        tracker.supersede_all();

        assert!(!tracker.is_current(&profile));
        assert!(!tracker.is_current(&tips));
        let fresh = tracker.begin(RequestKind::Profile);
        assert!(tracker.is_current(&fresh));
    }
}
