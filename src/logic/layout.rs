//! Watch face layout calculation
//!
//! Pure functions placing the six icons and the decorative spokes on a
//! canvas. Coordinates are in canvas units with the origin at the top-left,
//! x growing right and y growing down.

use crate::model::{IconSlot, SLOT_COUNT};

/// Fraction of the shorter canvas side used as the icon ring radius
pub const ICON_RADIUS_FRACTION: f32 = 0.35;

/// Fraction of the half-diameter covered by each decorative spoke
pub const SPOKE_LENGTH_FRACTION: f32 = 0.90;

/// Angle between neighbouring spokes
pub const SPOKE_STEP_DEGREES: f32 = 60.0;

/// A point on the canvas
pub type Point = (f32, f32);

/// A straight line between two canvas points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

/// Compute where each of the six icons sits on the canvas
///
/// With `r = 0.35 * min(width, height)` the icons form a ring of three
/// positions along the top, mirrored along the bottom. Index `i` of the
/// result belongs to slot `i + 1`.
///
/// # Examples
/// ```
/// use emojicon::logic::layout::compute_positions;
///
/// let a = compute_positions(200.0, 200.0);
/// let b = compute_positions(200.0, 200.0);
/// assert_eq!(a, b);
/// assert_eq!(a[1].0, 100.0);
/// assert!((a[1].1 - 42.0).abs() < 1e-3);
/// ```
pub fn compute_positions(width: f32, height: f32) -> [Point; SLOT_COUNT as usize] {
    let r = ICON_RADIUS_FRACTION * width.min(height);

    [
        (width * 0.6 - r, r),
        (width * 0.5, r * 0.6),
        (width * 0.4 + r, r),
        (width * 0.4 + r, height - r),
        (width * 0.5, height - r * 0.6),
        (width * 0.6 - r, height - r),
    ]
}

/// Decorative background lines
///
/// Returns the horizontal diameter followed by six spokes from the centre at
/// 0°, 60°, …, 300°. Each spoke is `0.90 * min(width, height) / 2` long.
pub fn spoke_segments(width: f32, height: f32) -> Vec<Segment> {
    let center = (width / 2.0, height / 2.0);
    let length = width.min(height) / 2.0 * SPOKE_LENGTH_FRACTION;

    let mut segments = Vec::with_capacity(7);
    segments.push(Segment {
        start: (center.0 - length, center.1),
        end: (center.0 + length, center.1),
    });

    for i in 0..6 {
        let angle = (SPOKE_STEP_DEGREES * i as f32).to_radians();
        segments.push(Segment {
            start: center,
            end: (
                center.0 + length * angle.cos(),
                center.1 + length * angle.sin(),
            ),
        });
    }

    segments
}

/// Find the icon under a pointer position
///
/// Returns the slot whose position is closest to `(x, y)`, if that distance
/// is at most `max_distance`.
pub fn nearest_slot(positions: &[Point], x: f32, y: f32, max_distance: f32) -> Option<IconSlot> {
    positions
        .iter()
        .enumerate()
        .map(|(idx, (px, py))| (idx, ((px - x).powi(2) + (py - y).powi(2)).sqrt()))
        .filter(|(_, distance)| *distance <= max_distance)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .and_then(|(idx, _)| IconSlot::new(idx as u8 + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_positions_square_canvas() {
        // r = 70 on a 200x200 canvas
        let positions = compute_positions(200.0, 200.0);
        let expected = [
            (50.0, 70.0),
            (100.0, 42.0),
            (150.0, 70.0),
            (150.0, 130.0),
            (100.0, 158.0),
            (50.0, 130.0),
        ];
        for (got, want) in positions.iter().zip(expected.iter()) {
            assert!(approx(got.0, want.0) && approx(got.1, want.1), "{:?} != {:?}", got, want);
        }
    }

    #[test]
    fn test_positions_mirror_top_bottom() {
        let (w, h) = (240.0, 180.0);
        let positions = compute_positions(w, h);
        for (top, bottom) in [(0, 5), (1, 4), (2, 3)] {
            assert!(approx(positions[top].0, positions[bottom].0));
            assert!(approx(positions[top].1, h - positions[bottom].1));
        }
    }

    #[test]
    fn test_positions_deterministic() {
        for (w, h) in [(1.0, 1.0), (192.0, 192.0), (454.0, 300.0), (0.0, 0.0)] {
            assert_eq!(compute_positions(w, h), compute_positions(w, h));
        }
    }

    #[test]
    fn test_spoke_lengths() {
        let segments = spoke_segments(200.0, 100.0);
        assert_eq!(segments.len(), 7);

        // Horizontal diameter spans twice the spoke length
        let diameter = &segments[0];
        assert!(approx(diameter.end.0 - diameter.start.0, 90.0));

        for spoke in &segments[1..] {
            assert_eq!(spoke.start, (100.0, 50.0));
            let dx = spoke.end.0 - spoke.start.0;
            let dy = spoke.end.1 - spoke.start.1;
            assert!(approx((dx * dx + dy * dy).sqrt(), 45.0));
        }
    }

    #[test]
    fn test_spoke_angles() {
        let segments = spoke_segments(100.0, 100.0);
        // 0° points right, 180° points left
        assert!(approx(segments[1].end.1, 50.0));
        assert!(segments[1].end.0 > 50.0);
        assert!(approx(segments[4].end.1, 50.0));
        assert!(segments[4].end.0 < 50.0);
    }

    #[test]
    fn test_nearest_slot() {
        let positions = compute_positions(200.0, 200.0);
        assert_eq!(nearest_slot(&positions, 101.0, 43.0, 10.0), IconSlot::new(2));
        assert_eq!(nearest_slot(&positions, 49.0, 131.0, 10.0), IconSlot::new(6));
        assert_eq!(nearest_slot(&positions, 100.0, 100.0, 10.0), None);
    }

    proptest::proptest! {
        #[test]
        fn prop_positions_deterministic_and_inside(w in 1.0f32..2000.0, h in 1.0f32..2000.0) {
            let positions = compute_positions(w, h);
            proptest::prop_assert_eq!(positions, compute_positions(w, h));

            for (x, y) in positions {
                proptest::prop_assert!((0.0..=w).contains(&x), "x {} outside {}", x, w);
                proptest::prop_assert!((0.0..=h).contains(&y), "y {} outside {}", y, h);
            }

            let tolerance = h * 1e-5 + 1e-3;
            for (top, bottom) in [(0, 5), (1, 4), (2, 3)] {
                proptest::prop_assert_eq!(positions[top].0, positions[bottom].0);
                proptest::prop_assert!((positions[top].1 + positions[bottom].1 - h).abs() < tolerance);
            }
        }
    }
}
