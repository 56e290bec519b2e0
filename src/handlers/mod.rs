//! Event Handlers
//!
//! Translate terminal events into app gestures:
//! - keyboard: key bindings for every screen
//! - mouse: clicks and held presses on the watch face

pub mod keyboard;
pub mod mouse;

pub use keyboard::handle_key;
pub use mouse::handle_mouse;
