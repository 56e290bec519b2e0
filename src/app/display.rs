//! Full-screen session orchestration
//!
//! Keeps the `FullScreenDisplay` session in step with the navigation stack
//! and drives its clock.

use std::time::Instant;

use crate::display::FullScreenDisplay;
use crate::model::Screen;
use crate::App;

impl App {
    /// Open or close the full-screen session to match the current screen
    pub(crate) fn sync_display(&mut self, now: Instant) {
        let wanted = match self.model.screen() {
            Screen::FullScreenDisplay(text) => Some(text.clone()),
            _ => None,
        };

        let current = self.display.as_ref().map(|d| d.text().to_string());
        if wanted == current {
            return;
        }

        if let Some(old) = self.display.take() {
            old.exit();
        }

        if let Some(text) = wanted {
            self.display = Some(FullScreenDisplay::enter_with_window(
                text,
                &self.sensors,
                now,
                self.keep_awake_window,
            ));
        }
    }

    /// Per-frame housekeeping: keep-awake window and toast expiry
    pub fn tick(&mut self, now: Instant) {
        if let Some(display) = self.display.as_mut() {
            display.tick(now);
        }

        if self.model.ui.should_dismiss_toast(now) {
            self.model.ui.dismiss_toast();
        }
    }
}
