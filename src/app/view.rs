// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: navbar and current page, drawer, apply dialog,
//! applications viewer, notifications.

use super::{App, Message, Screen};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::Toast;
use crate::ui::pages::{
    admin, applications_viewer, apply_dialog, dashboard, jobs, login, matcher, profile, reset,
};
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

impl App {
    pub(super) fn view(&self) -> Element<'_, Message> {
        let i18n = &self.i18n;
        let screen = self.navigation.screen();
        let navbar_ctx = NavbarViewContext {
            i18n,
            screen,
            dark_mode: self.dark_mode(),
            signed_in: self.session.is_authenticated(),
            username: self.session.username(),
        };

        let page: Element<'_, Message> = match screen {
            Screen::Login => login::view(&self.login, i18n).map(Message::Login),
            Screen::Reset => reset::view(&self.reset, i18n).map(Message::Reset),
            Screen::Profile => profile::view(&self.profile, i18n).map(Message::Profile),
            Screen::Matcher => matcher::view(&self.matcher, i18n).map(Message::Matcher),
            Screen::Jobs => jobs::view(&self.jobs, i18n, &self.session).map(Message::Jobs),
            Screen::Dashboard => {
                dashboard::view(&self.dashboard, i18n).map(Message::Dashboard)
            }
            Screen::Admin => admin::view(&self.admin, i18n, &self.session).map(Message::Admin),
        };

        let base = Column::new()
            .push(navbar::view(&navbar_ctx).map(Message::Navbar))
            .push(
                Container::new(page)
                    .width(Length::Fill)
                    .height(Length::Fill),
            );

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(base);

        if self.navigation.drawer_open() {
            layers = layers.push(navbar::view_drawer(&navbar_ctx).map(Message::Navbar));
        }

        if let Some(job) = self.navigation.apply_dialog() {
            layers = layers
                .push(apply_dialog::view(&self.apply_dialog, job, i18n).map(Message::ApplyDialog));
        }

        if let Some(viewer) = self.navigation.applications_viewer() {
            layers = layers.push(
                applications_viewer::view(viewer, i18n).map(Message::ApplicationsViewer),
            );
        }

        layers
            .push(Toast::view_overlay(&self.notifications, i18n).map(Message::Notification))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::{app_with, FakeBackend};
    use crate::app::Message;
    use crate::domain::jobs::{JobId, JobPosting};
    use crate::ui::navbar;
    use crate::ui::notifications::Notification;
    use std::time::Instant;

    #[test]
    fn renders_every_layer() {
        let (mut app, _dirs) = app_with(FakeBackend);
        app.session = crate::app::session::Session::new("tok", "ada");
        app.handle(Message::Navbar(navbar::Message::ToggleDrawer), Instant::now());
        app.navigation.open_apply_dialog(JobPosting {
            id: JobId::new("j1"),
            title: "Engineer".into(),
            description: String::new(),
            skills: Vec::new(),
            location: None,
        });
        app.navigation
            .open_applications_viewer(JobId::new("j1"), Vec::new());
        app.notifications
            .push(Notification::info("notification-jobs-loaded"), Instant::now());

        let _element = app.view();
    }
}
