//! Screen transition logic
//!
//! Pure function mapping (current screen, gesture, icon texts) to the
//! navigation action the back stack should perform.

use crate::model::{Gesture, IconSlot, IconText, Screen, SelectionOption};

/// What the navigation back stack should do in response to a gesture
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    /// Open a new screen on top of the current one
    Push(Screen),
    /// Return to the previous screen
    Pop,
    /// Store text for a slot, then clear the stack down to Home
    SubmitAndReturnHome { slot: IconSlot, text: String },
    /// Gesture has no effect on this screen
    None,
}

/// Decide the transition for a gesture on the current screen
///
/// Tapping an icon opens its text full-screen when set, otherwise the
/// selection screen. Long-press always opens the selection screen. Emoji
/// and Image options are inert.
///
/// # Examples
/// ```
/// use emojicon::logic::navigation::{transition, NavAction};
/// use emojicon::model::{Gesture, IconSlot, IconText, Screen};
///
/// let slot = IconSlot::new(3).unwrap();
/// let mut texts = IconText::new();
/// assert_eq!(
///     transition(&Screen::Home, &Gesture::Tap(slot), &texts),
///     NavAction::Push(Screen::Selection(slot))
/// );
///
/// texts.set(slot, "Hello");
/// assert_eq!(
///     transition(&Screen::Home, &Gesture::Tap(slot), &texts),
///     NavAction::Push(Screen::FullScreenDisplay("Hello".to_string()))
/// );
/// ```
pub fn transition(current: &Screen, gesture: &Gesture, texts: &IconText) -> NavAction {
    match (current, gesture) {
        (Screen::Home, Gesture::Tap(slot)) => match texts.text_for(*slot) {
            Some(text) => NavAction::Push(Screen::FullScreenDisplay(text.to_string())),
            None => NavAction::Push(Screen::Selection(*slot)),
        },
        (Screen::Home, Gesture::LongPress(slot)) => NavAction::Push(Screen::Selection(*slot)),
        (Screen::Home, Gesture::Back) => NavAction::None,

        (Screen::Selection(slot), Gesture::Choose(option)) => match option {
            SelectionOption::Text => NavAction::Push(Screen::TextInput(*slot)),
            SelectionOption::Cancel => NavAction::Pop,
            SelectionOption::Emoji | SelectionOption::Image => NavAction::None,
        },
        (Screen::Selection(_), Gesture::Back) => NavAction::Pop,

        (Screen::TextInput(slot), Gesture::Submit(text)) => NavAction::SubmitAndReturnHome {
            slot: *slot,
            text: text.clone(),
        },
        (Screen::TextInput(_), Gesture::Back) => NavAction::Pop,

        (Screen::FullScreenDisplay(_), Gesture::Back) => NavAction::Pop,

        _ => NavAction::None,
    }
}
