//! App Orchestration
//!
//! `App` ties the pure model to the resources around it:
//! - Model state (pure, in src/model/)
//! - Icon text state and its persistence worker (src/state.rs)
//! - Sensor hub and the full-screen display session
//! - Logic (pure transition and layout functions in src/logic/)
//!
//! Methods are kept as `impl App` but organized by functional domain:
//! - navigation: gestures, routes and screen changes
//! - display: full-screen session lifecycle and clock ticks
//! - input: focus, selection cursor and text editing

pub mod display;
pub mod input;
pub mod navigation;

use std::time::Duration;

use crate::display::{FullScreenDisplay, KEEP_AWAKE_WINDOW};
use crate::model::{IconText, Model, Screen};
use crate::sensors::SensorHub;
use crate::state::IconTextState;

pub struct App {
    pub model: Model,

    texts: IconTextState,
    sensors: SensorHub,

    /// Present exactly while the full-screen display is the current screen
    display: Option<FullScreenDisplay>,

    keep_awake_window: Duration,
}

impl App {
    pub fn new(texts: IconTextState, sensors: SensorHub) -> Self {
        Self {
            model: Model::new(),
            texts,
            sensors,
            display: None,
            keep_awake_window: KEEP_AWAKE_WINDOW,
        }
    }

    /// Override the keep-awake window used for new full-screen sessions
    pub fn with_keep_awake_window(mut self, window: Duration) -> Self {
        self.keep_awake_window = window;
        self
    }

    pub fn screen(&self) -> &Screen {
        self.model.screen()
    }

    pub fn texts(&self) -> &IconTextState {
        &self.texts
    }

    /// Current icon texts
    pub fn icon_texts(&self) -> IconText {
        self.texts.snapshot()
    }

    pub fn sensors(&self) -> &SensorHub {
        &self.sensors
    }

    pub fn display(&self) -> Option<&FullScreenDisplay> {
        self.display.as_ref()
    }

    pub fn quit(&mut self) {
        self.model.ui.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.model.ui.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_starts_on_home() {
        let app = App::new(IconTextState::detached(IconText::new()), SensorHub::new());
        assert_eq!(app.screen(), &Screen::Home);
        assert!(app.display().is_none());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_quit_flag() {
        let mut app = App::new(IconTextState::detached(IconText::new()), SensorHub::new());
        app.quit();
        assert!(app.should_quit());
    }
}
