// SPDX-License-Identifier: MPL-2.0
//! The signed-in user, and which controls their role exposes.
//!
//! Role checks only decide what the UI shows. The service enforces access on
//! its own.

use super::persisted_state::StoredSession;

/// Username the service treats as administrator.
pub const ADMIN_USERNAME: &str = "admin";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: String,
    username: String,
}

impl Session {
    pub fn new(token: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            username: username.into(),
        }
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.username == ADMIN_USERNAME
    }

    #[must_use]
    pub fn can_post_jobs(&self) -> bool {
        self.is_admin()
    }

    #[must_use]
    pub fn can_view_applications(&self) -> bool {
        self.is_admin()
    }

    #[must_use]
    pub fn can_load_analytics(&self) -> bool {
        self.is_admin()
    }

    #[must_use]
    pub fn can_apply(&self) -> bool {
        self.is_authenticated() && !self.is_admin()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn to_stored(&self) -> Option<StoredSession> {
        self.is_authenticated().then(|| StoredSession {
            token: self.token.clone(),
            username: self.username.clone(),
        })
    }
}

impl From<StoredSession> for Session {
    fn from(stored: StoredSession) -> Self {
        Self::new(stored.token, stored.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_is_signed_out() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert!(!session.can_apply());
        assert!(!session.can_post_jobs());
        assert!(!session.can_view_applications());
        assert!(session.to_stored().is_none());
    }

    #[test]
    fn admin_sees_admin_controls_only() {
        let session = Session::new("t", "admin");
        assert!(session.can_post_jobs());
        assert!(session.can_view_applications());
        assert!(session.can_load_analytics());
        assert!(!session.can_apply());
    }

    #[test]
    fn other_users_can_apply() {
        let session = Session::new("t", "ada");
        assert!(session.can_apply());
        assert!(!session.can_post_jobs());
        assert!(!session.can_view_applications());
        assert!(!session.can_load_analytics());
    }

    #[test]
    fn admin_name_without_token_has_no_rights() {
        let session = Session::new("", "admin");
        assert!(!session.is_admin());
    }

    #[test]
    fn clear_signs_out() {
        let mut session = Session::new("t", "ada");
        session.clear();
        assert_eq!(session, Session::default());
    }

    #[test]
    fn stored_round_trip() {
        let session = Session::new("tok", "ada");
        let restored = Session::from(session.to_stored().unwrap());
        assert_eq!(restored, session);
    }
}
