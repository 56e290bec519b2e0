//! Mouse Input Handler
//!
//! Clicks on the home watch face. A left click released on the same icon is
//! a tap, or a long-press if it was held long enough. A right click is an
//! immediate long-press.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use std::time::{Duration, Instant};

use emojicon::logic::layout::{compute_positions, nearest_slot};
use emojicon::model::{Gesture, IconSlot, Screen};

use crate::ui::layout::cell_to_canvas;
use crate::{PointerPress, Runtime};

/// Hit radius around an icon centre, as a fraction of the canvas side
const HIT_RADIUS_FRACTION: f32 = 0.12;

pub fn is_long_press(held: Duration, threshold: Duration) -> bool {
    held >= threshold
}

/// Handle mouse input
pub fn handle_mouse(rt: &mut Runtime, mouse: MouseEvent) {
    let now = Instant::now();

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            rt.pointer = slot_at(rt, mouse.column, mouse.row)
                .map(|slot| PointerPress { slot, at: now });
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let Some(press) = rt.pointer.take() else {
                return;
            };
            // Releasing away from the icon cancels the press
            if slot_at(rt, mouse.column, mouse.row) != Some(press.slot) {
                return;
            }

            let held = now.saturating_duration_since(press.at);
            let gesture = if is_long_press(held, rt.long_press) {
                Gesture::LongPress(press.slot)
            } else {
                Gesture::Tap(press.slot)
            };
            rt.app.model.ui.focused_slot = press.slot;
            rt.app.handle_gesture(gesture, now);
        }
        MouseEventKind::Down(MouseButton::Right) => {
            if let Some(slot) = slot_at(rt, mouse.column, mouse.row) {
                rt.app.model.ui.focused_slot = slot;
                rt.app.handle_gesture(Gesture::LongPress(slot), now);
            }
        }
        _ => {}
    }
}

/// Icon under a terminal cell, if the watch face is showing
fn slot_at(rt: &Runtime, column: u16, row: u16) -> Option<IconSlot> {
    if !matches!(rt.app.screen(), Screen::Home) {
        return None;
    }

    let area = rt.face_area?;
    let (x, y) = cell_to_canvas(area, column, row, rt.canvas_size)?;
    let positions = compute_positions(rt.canvas_size, rt.canvas_size);
    nearest_slot(&positions, x, y, rt.canvas_size * HIT_RADIUS_FRACTION)
}
