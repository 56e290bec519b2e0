//! Navigation orchestration methods
//!
//! Methods for moving between screens:
//! - Applying gestures through the pure transition function
//! - Committing submitted text to the icon text state
//! - Opening a screen from a route string

use std::time::Instant;

use crate::logic::navigation::{transition, NavAction};
use crate::logic::routes::{route_for, Route};
use crate::model::{Gesture, Screen};
use crate::App;

impl App {
    /// Handle one gesture on the current screen
    ///
    /// Returns the action that was applied so callers can react (e.g. show a
    /// toast after a submit).
    pub fn handle_gesture(&mut self, gesture: Gesture, now: Instant) -> NavAction {
        let texts = self.texts.snapshot();
        let action = transition(self.model.screen(), &gesture, &texts);

        if action == NavAction::None {
            log::debug!(
                "Gesture {:?} ignored on {}",
                gesture,
                route_for(self.model.screen())
            );
            return action;
        }

        // Store before navigating so Home already shows the new text
        if let NavAction::SubmitAndReturnHome { slot, text } = &action {
            self.texts.update_text_for_icon(*slot, text.clone());
        }

        let before = self.model.screen().clone();
        self.model.navigation.apply(&action);
        self.on_screen_changed(&before, now);

        action
    }

    /// Replace the navigation stack with the screen named by `route`
    ///
    /// The screen is pushed above Home so Back returns there. Unknown routes
    /// and routes with an invalid icon index are ignored.
    pub fn open_route(&mut self, route: &str, now: Instant) -> bool {
        let Some(screen) = Route::parse(route).and_then(|r| r.to_screen()) else {
            log::warn!("Ignoring unusable route {:?}", route);
            return false;
        };

        let before = self.model.screen().clone();
        self.model.navigation.pop_to_home();
        if screen != Screen::Home {
            self.model.navigation.push(screen);
        }
        self.on_screen_changed(&before, now);
        true
    }

    /// Route of the current screen
    pub fn current_route(&self) -> String {
        route_for(self.model.screen())
    }

    fn on_screen_changed(&mut self, before: &Screen, now: Instant) {
        let after = self.model.screen().clone();
        if *before == after {
            return;
        }

        log::debug!("Navigated {} -> {}", route_for(before), route_for(&after));

        // Uncommitted input never survives leaving or entering a screen
        self.model.ui.reset_input();
        if let Some(slot) = after.slot() {
            self.model.ui.focused_slot = slot;
        }

        self.sync_display(now);
    }
}
