//! Emojicon Library
//!
//! Six customizable shortcut icons on a simulated watch face. Exposes the
//! core modules so the binary and the integration tests share them.

pub mod app;
pub mod display;
pub mod logic;
pub mod model;
pub mod sensors;
pub mod services;
pub mod state;
pub mod store;
pub mod utils;

pub use app::App;
