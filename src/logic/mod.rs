//! Business Logic
//!
//! This module contains pure functions that can be unit tested:
//! - layout: Icon ring and spoke geometry
//! - navigation: Screen transitions for each gesture
//! - rotation: Accelerometer readings to display rotation
//! - routes: Route strings for screens
//! - ui: Toast timing and font tiers

pub mod layout;
pub mod navigation;
pub mod rotation;
pub mod routes;
pub mod ui;
