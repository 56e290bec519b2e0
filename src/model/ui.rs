//! UI Model
//!
//! This sub-model contains state that only matters to the presentation:
//! focus, the pending text input, the selection cursor and the toast.

use std::time::Instant;

use super::types::{IconSlot, SelectionOption};

/// UI preferences and transient input state
#[derive(Clone, Debug)]
pub struct UiModel {
    /// Icon highlighted on the home screen
    pub focused_slot: IconSlot,

    /// Highlighted row on the selection screen
    pub selection_index: usize,

    /// Uncommitted text on the text input screen
    pub input_buffer: String,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new() -> Self {
        Self {
            focused_slot: IconSlot::FIRST,
            selection_index: 0,
            input_buffer: String::new(),
            toast_message: None,
            should_quit: false,
        }
    }

    pub fn selected_option(&self) -> SelectionOption {
        SelectionOption::ALL[self.selection_index.min(SelectionOption::ALL.len() - 1)]
    }

    pub fn select_next_option(&mut self) {
        self.selection_index = (self.selection_index + 1) % SelectionOption::ALL.len();
    }

    pub fn select_prev_option(&mut self) {
        let len = SelectionOption::ALL.len();
        self.selection_index = (self.selection_index + len - 1) % len;
    }

    /// Reset per-screen input when a screen is entered or left
    pub fn reset_input(&mut self) {
        self.selection_index = 0;
        self.input_buffer.clear();
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self, now: Instant) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(now.duration_since(*timestamp).as_millis())
        } else {
            false
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}

impl Default for UiModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_ui_model_creation() {
        let model = UiModel::new();
        assert_eq!(model.focused_slot.number(), 1);
        assert_eq!(model.selected_option(), SelectionOption::Text);
        assert!(model.input_buffer.is_empty());
        assert!(!model.should_quit);
    }

    #[test]
    fn test_option_cycling() {
        let mut model = UiModel::new();
        model.select_prev_option();
        assert_eq!(model.selected_option(), SelectionOption::Cancel);
        model.select_next_option();
        assert_eq!(model.selected_option(), SelectionOption::Text);
        model.select_next_option();
        assert_eq!(model.selected_option(), SelectionOption::Emoji);
    }

    #[test]
    fn test_reset_input() {
        let mut model = UiModel::new();
        model.input_buffer.push_str("draft");
        model.selection_index = 2;
        model.reset_input();
        assert!(model.input_buffer.is_empty());
        assert_eq!(model.selection_index, 0);
    }

    #[test]
    fn test_toast() {
        let mut model = UiModel::new();
        assert!(model.toast_message.is_none());

        model.show_toast("Saved".to_string());
        let shown_at = model.toast_message.as_ref().map(|(_, t)| *t).unwrap();
        assert!(!model.should_dismiss_toast(shown_at));
        assert!(model.should_dismiss_toast(shown_at + Duration::from_secs(5)));

        model.dismiss_toast();
        assert!(model.toast_message.is_none());
    }
}
