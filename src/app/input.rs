//! Input helpers
//!
//! Screen-local editing that does not change screens by itself: moving the
//! home focus, moving the selection cursor and editing the text draft. The
//! methods that complete an interaction forward a gesture to
//! `handle_gesture`.

use std::time::Instant;

use crate::logic::navigation::NavAction;
use crate::model::{Gesture, Screen};
use crate::App;

impl App {
    pub fn focus_next(&mut self) {
        self.model.ui.focused_slot = self.model.ui.focused_slot.next();
    }

    pub fn focus_prev(&mut self) {
        self.model.ui.focused_slot = self.model.ui.focused_slot.prev();
    }

    pub fn tap_focused(&mut self, now: Instant) -> NavAction {
        let slot = self.model.ui.focused_slot;
        self.handle_gesture(Gesture::Tap(slot), now)
    }

    pub fn long_press_focused(&mut self, now: Instant) -> NavAction {
        let slot = self.model.ui.focused_slot;
        self.handle_gesture(Gesture::LongPress(slot), now)
    }

    pub fn selection_down(&mut self) {
        self.model.ui.select_next_option();
    }

    pub fn selection_up(&mut self) {
        self.model.ui.select_prev_option();
    }

    /// Choose the highlighted option on the selection screen
    pub fn choose_selected(&mut self, now: Instant) -> NavAction {
        let option = self.model.ui.selected_option();
        self.handle_gesture(Gesture::Choose(option), now)
    }

    pub fn input_char(&mut self, c: char) {
        if matches!(self.model.screen(), Screen::TextInput(_)) {
            self.model.ui.input_buffer.push(c);
        }
    }

    /// Delete the last character of the draft; `false` if it was empty
    pub fn input_backspace(&mut self) -> bool {
        self.model.ui.input_buffer.pop().is_some()
    }

    /// Submit the draft for the slot being edited
    ///
    /// An empty draft is not submitted: there is no way to clear an icon.
    /// Whitespace is ordinary text.
    pub fn submit_input(&mut self, now: Instant) -> NavAction {
        if self.model.ui.input_buffer.is_empty() {
            return NavAction::None;
        }

        let text = self.model.ui.input_buffer.clone();
        let action = self.handle_gesture(Gesture::Submit(text), now);
        if let NavAction::SubmitAndReturnHome { slot, .. } = &action {
            self.model.show_toast(format!("Icon {} saved", slot));
        }
        action
    }

    pub fn back(&mut self, now: Instant) -> NavAction {
        self.handle_gesture(Gesture::Back, now)
    }
}
