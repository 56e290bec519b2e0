//! Full-screen display controller
//!
//! Owns everything that lives only while one text is shown full-screen:
//! the sensor registration feeding the rotation angle and the keep-awake
//! window. Dropping the controller releases both.

use std::time::{Duration, Instant};

use crate::logic::ui::{font_tier_for, FontTier};
use crate::sensors::{RotationCell, SensorHub, SensorListener};

/// How long the display is kept awake after entering full-screen
pub const KEEP_AWAKE_WINDOW: Duration = Duration::from_secs(60);

/// Session state of the full-screen display
#[derive(Debug)]
pub struct FullScreenDisplay {
    text: String,
    font_tier: FontTier,
    rotation: RotationCell,
    listener: SensorListener,
    /// Pending deadline at which keep-awake is released
    keep_awake_until: Option<Instant>,
}

impl FullScreenDisplay {
    /// Enter full-screen with the default keep-awake window
    pub fn enter(text: impl Into<String>, sensors: &SensorHub, now: Instant) -> Self {
        Self::enter_with_window(text, sensors, now, KEEP_AWAKE_WINDOW)
    }

    /// Enter full-screen, registering for sensor updates and requesting
    /// keep-awake for `window`
    pub fn enter_with_window(
        text: impl Into<String>,
        sensors: &SensorHub,
        now: Instant,
        window: Duration,
    ) -> Self {
        let text = text.into();
        let rotation = RotationCell::new();
        let listener = sensors.register(rotation.clone());

        log::debug!(
            "Full-screen display entered ({} chars, keep awake {:?})",
            text.chars().count(),
            window
        );

        Self {
            font_tier: font_tier_for(&text),
            text,
            rotation,
            listener,
            keep_awake_until: Some(now + window),
        }
    }

    /// Advance the clock; releases keep-awake once the window has elapsed
    ///
    /// Returns `true` if the keep-awake flag changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.keep_awake_until {
            Some(deadline) if now >= deadline => {
                self.keep_awake_until = None;
                log::debug!("Keep-awake window elapsed");
                true
            }
            _ => false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font_tier(&self) -> FontTier {
        self.font_tier
    }

    /// Latest rotation in degrees, `[0, 360)`
    pub fn rotation_degrees(&self) -> f32 {
        self.rotation.load()
    }

    pub fn keep_awake(&self) -> bool {
        self.keep_awake_until.is_some()
    }

    /// Time left in the keep-awake window
    pub fn keep_awake_remaining(&self, now: Instant) -> Option<Duration> {
        self.keep_awake_until
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    pub fn is_listening(&self) -> bool {
        self.listener.is_registered()
    }

    /// Leave full-screen; unregisters the listener and cancels keep-awake
    pub fn exit(self) {
        log::debug!(
            "Full-screen display closed after {} sensor readings",
            self.listener.readings()
        );
    }
}
