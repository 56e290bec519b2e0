//! UI presentation logic
//!
//! Pure functions for toast timing and full-screen text sizing.

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 1500;

/// Check if a toast shown `elapsed_ms` ago should be dismissed
///
/// # Examples
/// ```
/// use emojicon::logic::ui::should_dismiss_toast;
///
/// assert!(!should_dismiss_toast(200));
/// assert!(should_dismiss_toast(2000));
/// ```
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// Discrete text size used on the full-screen display
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FontTier {
    Huge,
    Large,
    Medium,
    Small,
}

impl FontTier {
    /// Nominal size in scale-independent points
    pub fn points(&self) -> u16 {
        match self {
            FontTier::Huge => 48,
            FontTier::Large => 36,
            FontTier::Medium => 24,
            FontTier::Small => 16,
        }
    }
}

/// Pick the font tier for a piece of text by its character count
///
/// Short text gets bigger type: up to 3 characters is `Huge`, up to 5
/// `Large`, up to 10 `Medium`, anything longer `Small`.
///
/// # Examples
/// ```
/// use emojicon::logic::ui::{font_tier_for, FontTier};
///
/// assert_eq!(font_tier_for("Hi"), FontTier::Huge);
/// assert_eq!(font_tier_for("Hello"), FontTier::Large);
/// assert_eq!(font_tier_for("Hello you"), FontTier::Medium);
/// assert_eq!(font_tier_for("Hello there world"), FontTier::Small);
/// ```
pub fn font_tier_for(text: &str) -> FontTier {
    match text.chars().count() {
        0..=3 => FontTier::Huge,
        4..=5 => FontTier::Large,
        6..=10 => FontTier::Medium,
        _ => FontTier::Small,
    }
}
