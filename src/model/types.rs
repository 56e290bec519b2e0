//! Shared types for the Model
//!
//! These types are used across the store, the observable state and the
//! navigation flow, and represent the fundamental domain concepts.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Glyph shown for an icon that has no text yet
pub const PLACEHOLDER: &str = "+";

/// Number of icon positions on the watch face
pub const SLOT_COUNT: u8 = 6;

/// One of the six fixed icon positions, numbered 1 through 6
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct IconSlot(u8);

impl IconSlot {
    pub const FIRST: IconSlot = IconSlot(1);

    /// Build a slot from its 1-based number, rejecting anything outside 1..=6
    pub fn new(number: u8) -> Option<Self> {
        if (1..=SLOT_COUNT).contains(&number) {
            Some(Self(number))
        } else {
            None
        }
    }

    /// All six slots in display order
    pub fn all() -> impl Iterator<Item = IconSlot> {
        (1..=SLOT_COUNT).map(IconSlot)
    }

    /// 1-based slot number
    pub fn number(self) -> u8 {
        self.0
    }

    /// 0-based position into layout arrays
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// Next slot, wrapping 6 -> 1
    pub fn next(self) -> Self {
        Self(self.0 % SLOT_COUNT + 1)
    }

    /// Previous slot, wrapping 1 -> 6
    pub fn prev(self) -> Self {
        Self((self.0 + SLOT_COUNT - 2) % SLOT_COUNT + 1)
    }
}

impl fmt::Display for IconSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Text assigned to each icon slot
///
/// A slot is "unset" when it has no entry, an empty entry, or the
/// placeholder glyph. Unset slots render as [`PLACEHOLDER`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IconText {
    entries: BTreeMap<IconSlot, String>,
}

impl IconText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored value for a slot, including empty or placeholder values
    pub fn get(&self, slot: IconSlot) -> Option<&str> {
        self.entries.get(&slot).map(String::as_str)
    }

    /// Stored text for a slot, only if it counts as set
    pub fn text_for(&self, slot: IconSlot) -> Option<&str> {
        self.get(slot)
            .filter(|text| !text.is_empty() && *text != PLACEHOLDER)
    }

    pub fn is_set(&self, slot: IconSlot) -> bool {
        self.text_for(slot).is_some()
    }

    /// Text to draw for a slot (placeholder when unset)
    pub fn label(&self, slot: IconSlot) -> &str {
        self.text_for(slot).unwrap_or(PLACEHOLDER)
    }

    /// Overwrite the text for a slot
    pub fn set(&mut self, slot: IconSlot, text: impl Into<String>) {
        self.entries.insert(slot, text.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (IconSlot, &str)> {
        self.entries.iter().map(|(slot, text)| (*slot, text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(IconSlot, String)> for IconText {
    fn from_iter<T: IntoIterator<Item = (IconSlot, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Options offered on the selection screen, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionOption {
    Text,
    Emoji,
    Image,
    Cancel,
}

impl SelectionOption {
    pub const ALL: [SelectionOption; 4] = [
        SelectionOption::Text,
        SelectionOption::Emoji,
        SelectionOption::Image,
        SelectionOption::Cancel,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SelectionOption::Text => "Text",
            SelectionOption::Emoji => "Emoji",
            SelectionOption::Image => "Image",
            SelectionOption::Cancel => "Cancel",
        }
    }

    /// Emoji and Image are listed but have no flow behind them
    pub fn is_available(&self) -> bool {
        matches!(self, SelectionOption::Text | SelectionOption::Cancel)
    }
}

/// Active screen plus the parameter it was opened with
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Home,
    Selection(IconSlot),
    TextInput(IconSlot),
    FullScreenDisplay(String),
}

impl Screen {
    /// Slot the screen is editing, if any
    pub fn slot(&self) -> Option<IconSlot> {
        match self {
            Screen::Selection(slot) | Screen::TextInput(slot) => Some(*slot),
            Screen::Home | Screen::FullScreenDisplay(_) => None,
        }
    }

    pub fn title(&self) -> String {
        match self {
            Screen::Home => "Emojicon".to_string(),
            Screen::Selection(slot) => format!("Icon {}", slot),
            Screen::TextInput(slot) => format!("Text for icon {}", slot),
            Screen::FullScreenDisplay(_) => String::new(),
        }
    }
}

/// Discrete user input that drives navigation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Gesture {
    Tap(IconSlot),
    LongPress(IconSlot),
    Choose(SelectionOption),
    Submit(String),
    Back,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(n: u8) -> IconSlot {
        IconSlot::new(n).unwrap()
    }

    #[test]
    fn test_slot_range() {
        assert!(IconSlot::new(0).is_none());
        assert!(IconSlot::new(7).is_none());
        assert_eq!(IconSlot::new(1).map(IconSlot::index), Some(0));
        assert_eq!(IconSlot::new(6).map(IconSlot::index), Some(5));
        assert_eq!(IconSlot::all().count(), 6);
    }

    #[test]
    fn test_slot_wrapping() {
        assert_eq!(slot(6).next(), slot(1));
        assert_eq!(slot(1).prev(), slot(6));
        assert_eq!(slot(3).next(), slot(4));
        assert_eq!(slot(3).prev(), slot(2));
    }

    #[test]
    fn test_unset_values() {
        let mut texts = IconText::new();
        assert!(!texts.is_set(slot(3)));
        assert_eq!(texts.label(slot(3)), PLACEHOLDER);

        texts.set(slot(3), "+");
        assert!(!texts.is_set(slot(3)));
        texts.set(slot(3), "");
        assert!(!texts.is_set(slot(3)));

        texts.set(slot(3), "Hello");
        assert_eq!(texts.text_for(slot(3)), Some("Hello"));
        assert_eq!(texts.label(slot(3)), "Hello");
    }

    #[test]
    fn test_selection_availability() {
        assert!(SelectionOption::Text.is_available());
        assert!(SelectionOption::Cancel.is_available());
        assert!(!SelectionOption::Emoji.is_available());
        assert!(!SelectionOption::Image.is_available());
    }

    #[test]
    fn test_screen_slot() {
        assert_eq!(Screen::Selection(slot(2)).slot(), Some(slot(2)));
        assert_eq!(Screen::Home.slot(), None);
        assert_eq!(Screen::FullScreenDisplay("hi".into()).slot(), None);
    }

    #[test]
    fn test_screen_title() {
        assert_eq!(Screen::Selection(slot(3)).title(), "Icon 3");
        assert_eq!(Screen::TextInput(slot(5)).title(), "Text for icon 5");
        assert_eq!(Screen::FullScreenDisplay("hi".into()).title(), "");
    }
}
