// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Pages the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Reset,
    Profile,
    Matcher,
    Jobs,
    Dashboard,
    Admin,
}

impl Screen {
    /// Drawer entries for a signed-in user.
    pub const SIGNED_IN: [Screen; 5] = [
        Screen::Jobs,
        Screen::Profile,
        Screen::Matcher,
        Screen::Dashboard,
        Screen::Admin,
    ];

    /// Drawer entries without a session.
    pub const SIGNED_OUT: [Screen; 2] = [Screen::Login, Screen::Jobs];

    /// i18n key of the page title.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Screen::Login => "page-login",
            Screen::Reset => "page-reset",
            Screen::Profile => "page-profile",
            Screen::Matcher => "page-matcher",
            Screen::Jobs => "page-jobs",
            Screen::Dashboard => "page-dashboard",
            Screen::Admin => "page-admin",
        }
    }

    /// Whether the page only makes sense with a session.
    #[must_use]
    pub fn requires_session(self) -> bool {
        matches!(
            self,
            Screen::Profile | Screen::Matcher | Screen::Dashboard | Screen::Admin
        )
    }
}
