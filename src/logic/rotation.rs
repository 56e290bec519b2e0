//! Rotation angle math
//!
//! Pure functions turning accelerometer readings into a display rotation.

/// Rotation of the display in degrees, normalized into `[0, 360)`
///
/// Computed as `atan2(x, z)` from the accelerometer's x and z axes.
///
/// # Examples
/// ```
/// use emojicon::logic::rotation::rotation_degrees;
///
/// // Flat on the table: gravity along z
/// assert_eq!(rotation_degrees(0.0, 9.81), 0.0);
/// // Tilted onto its side
/// assert!((rotation_degrees(9.81, 0.0) - 90.0).abs() < 1e-3);
/// assert!((rotation_degrees(-9.81, 0.0) - 270.0).abs() < 1e-3);
/// ```
pub fn rotation_degrees(x: f32, z: f32) -> f32 {
    let degrees = x.atan2(z).to_degrees();
    let normalized = if degrees < 0.0 { degrees + 360.0 } else { degrees };
    // -0.0 and tiny negatives can land on exactly 360.0 after the shift
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Quarter turn closest to an angle, for surfaces that can only draw
/// upright, sideways or upside-down text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuarterTurn {
    Upright,
    Clockwise,
    UpsideDown,
    CounterClockwise,
}

impl QuarterTurn {
    pub fn from_degrees(degrees: f32) -> Self {
        let turns = ((degrees.rem_euclid(360.0) + 45.0) / 90.0).floor() as u32 % 4;
        match turns {
            0 => QuarterTurn::Upright,
            1 => QuarterTurn::Clockwise,
            2 => QuarterTurn::UpsideDown,
            _ => QuarterTurn::CounterClockwise,
        }
    }
}
