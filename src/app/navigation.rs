// SPDX-License-Identifier: MPL-2.0
//! Current page and overlay slots.
//!
//! Each overlay is an independent slot; opening one never closes another.
//! None of these transitions can fail.

use super::screen::Screen;
use crate::domain::jobs::{JobApplication, JobId, JobPosting};

/// Payload of the open applications viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationsViewer {
    pub job_id: JobId,
    pub applications: Vec<JobApplication>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Navigation {
    screen: Screen,
    drawer_open: bool,
    apply_dialog: Option<JobPosting>,
    applications_viewer: Option<ApplicationsViewer>,
}

impl Navigation {
    #[must_use]
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Switches page. Returns `false` when `screen` was already current.
    pub fn navigate_to(&mut self, screen: Screen) -> bool {
        if self.screen == screen {
            return false;
        }
        self.screen = screen;
        true
    }

    /// Drawer selection: switch page and close the drawer.
    pub fn select_from_drawer(&mut self, screen: Screen) -> bool {
        self.close_drawer();
        self.navigate_to(screen)
    }

    #[must_use]
    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    #[must_use]
    pub fn apply_dialog(&self) -> Option<&JobPosting> {
        self.apply_dialog.as_ref()
    }

    pub fn open_apply_dialog(&mut self, job: JobPosting) {
        self.apply_dialog = Some(job);
    }

    pub fn close_apply_dialog(&mut self) {
        self.apply_dialog = None;
    }

    #[must_use]
    pub fn applications_viewer(&self) -> Option<&ApplicationsViewer> {
        self.applications_viewer.as_ref()
    }

    pub fn open_applications_viewer(&mut self, job_id: JobId, applications: Vec<JobApplication>) {
        self.applications_viewer = Some(ApplicationsViewer {
            job_id,
            applications,
        });
    }

    pub fn close_applications_viewer(&mut self) {
        self.applications_viewer = None;
    }

    /// Closes every overlay, keeping the page.
    pub fn close_overlays(&mut self) {
        self.drawer_open = false;
        self.apply_dialog = None;
        self.applications_viewer = None;
    }
}
