//! Navigation Model
//!
//! This sub-model holds the screen back stack. The bottom of the stack is
//! always `Screen::Home`.

use super::types::Screen;
use crate::logic::navigation::NavAction;

/// Navigation state (screen back stack)
#[derive(Clone, Debug)]
pub struct NavigationModel {
    /// Screens below the current one, oldest first
    back_stack: Vec<Screen>,

    /// Currently visible screen
    current: Screen,
}

impl NavigationModel {
    /// Create navigation model positioned on the home screen
    pub fn new() -> Self {
        Self {
            back_stack: Vec::new(),
            current: Screen::Home,
        }
    }

    pub fn current(&self) -> &Screen {
        &self.current
    }

    /// Number of screens that Back can return through
    pub fn depth(&self) -> usize {
        self.back_stack.len()
    }

    pub fn push(&mut self, screen: Screen) {
        let previous = std::mem::replace(&mut self.current, screen);
        self.back_stack.push(previous);
    }

    /// Return to the previous screen; no-op on Home
    pub fn pop(&mut self) -> bool {
        match self.back_stack.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Clear the stack down to Home
    pub fn pop_to_home(&mut self) {
        self.back_stack.clear();
        self.current = Screen::Home;
    }

    /// Apply a navigation action. Submission is only the navigation half;
    /// storing the text is the caller's job.
    pub fn apply(&mut self, action: &NavAction) {
        match action {
            NavAction::Push(screen) => self.push(screen.clone()),
            NavAction::Pop => {
                self.pop();
            }
            NavAction::SubmitAndReturnHome { .. } => self.pop_to_home(),
            NavAction::None => {}
        }
    }
}

impl Default for NavigationModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::IconSlot;

    #[test]
    fn test_navigation_model_creation() {
        let model = NavigationModel::new();
        assert_eq!(model.current(), &Screen::Home);
        assert_eq!(model.depth(), 0);
    }

    #[test]
    fn test_push_pop() {
        let slot = IconSlot::new(2).unwrap();
        let mut model = NavigationModel::new();
        model.push(Screen::Selection(slot));
        model.push(Screen::TextInput(slot));
        assert_eq!(model.depth(), 2);

        assert!(model.pop());
        assert_eq!(model.current(), &Screen::Selection(slot));
        assert!(model.pop());
        assert_eq!(model.current(), &Screen::Home);
        assert!(!model.pop());
        assert_eq!(model.current(), &Screen::Home);
    }

    #[test]
    fn test_submit_clears_stack() {
        let slot = IconSlot::new(2).unwrap();
        let mut model = NavigationModel::new();
        model.push(Screen::Selection(slot));
        model.push(Screen::TextInput(slot));

        model.apply(&NavAction::SubmitAndReturnHome {
            slot,
            text: "x".to_string(),
        });
        assert_eq!(model.current(), &Screen::Home);
        assert_eq!(model.depth(), 0);
    }
}
