// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Splits the terminal into the watch face and the status line
// - render: Main orchestration function, picks the screen to draw
// - home: Watch face with spokes and the six icon labels
// - selection: Content-type chooser for one icon
// - text_input: Text editor for one icon
// - full_screen: One text shown large, turned with the watch
// - status_bar: Current route and key hints
// - toast: Brief pop-up messages

pub mod full_screen;
pub mod home;
pub mod layout;
pub mod render;
pub mod selection;
pub mod status_bar;
pub mod text_input;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
