//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **NavigationModel**: Screen back stack
//! - **UiModel**: Focus, pending input, toast
//!
//! Icon texts live in [`crate::state::IconTextState`] and the full-screen
//! session in [`crate::display::FullScreenDisplay`], since both own
//! resources that cannot be cloned.

pub mod navigation;
pub mod types;
pub mod ui;

pub use navigation::NavigationModel;
pub use types::*;
pub use ui::UiModel;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug, Default)]
pub struct Model {
    /// Navigation state (screen back stack)
    pub navigation: NavigationModel,

    /// UI focus and input state
    pub ui: UiModel,
}

impl Model {
    pub fn new() -> Self {
        Self {
            navigation: NavigationModel::new(),
            ui: UiModel::new(),
        }
    }

    /// Currently visible screen
    pub fn screen(&self) -> &Screen {
        self.navigation.current()
    }

    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }
}
