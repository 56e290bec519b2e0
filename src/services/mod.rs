//! Background services
//!
//! - persist: Writes icon text snapshots to the store off the UI loop
//! - accelerometer: Simulated motion sensor feeding the sensor hub

pub mod accelerometer;
pub mod persist;
