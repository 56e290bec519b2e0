use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::canvas::{Canvas, Circle, Line as CanvasLine},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use emojicon::logic::layout::{compute_positions, spoke_segments};
use emojicon::model::{IconSlot, IconText};
use emojicon::utils::truncate_to_width;

/// Widest icon label, in terminal columns
const MAX_LABEL_WIDTH: usize = 8;

/// Render the watch face: rim, spokes and the six icon labels
///
/// Canvas coordinates have y pointing down like the layout engine; the
/// ratatui canvas has y pointing up, hence the flips.
pub fn render_home(
    f: &mut Frame,
    area: Rect,
    texts: &IconText,
    focused: IconSlot,
    canvas_size: f32,
) {
    let size = f64::from(canvas_size);
    let cell_width = if area.width > 0 {
        size / f64::from(area.width)
    } else {
        0.0
    };

    let segments = spoke_segments(canvas_size, canvas_size);
    let positions = compute_positions(canvas_size, canvas_size);

    let labels: Vec<(f64, f64, String, Style)> = IconSlot::all()
        .map(|slot| {
            let (x, y) = positions[slot.index()];
            let label = truncate_to_width(texts.label(slot), MAX_LABEL_WIDTH);
            let half_width = label.width() as f64 * cell_width / 2.0;
            let style = icon_style(texts.is_set(slot), slot == focused);
            (
                f64::from(x) - half_width,
                size - f64::from(y),
                label,
                style,
            )
        })
        .collect();

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, size])
        .y_bounds([0.0, size])
        .paint(move |ctx| {
            ctx.draw(&Circle {
                x: size / 2.0,
                y: size / 2.0,
                radius: size / 2.0 - 1.0,
                color: Color::DarkGray,
            });
            for segment in &segments {
                ctx.draw(&CanvasLine {
                    x1: f64::from(segment.start.0),
                    y1: size - f64::from(segment.start.1),
                    x2: f64::from(segment.end.0),
                    y2: size - f64::from(segment.end.1),
                    color: Color::Gray,
                });
            }

            // Labels on their own layer so spokes never cut through them
            ctx.layer();
            for (x, y, label, style) in &labels {
                ctx.print(*x, *y, Line::styled(label.clone(), *style));
            }
        });

    f.render_widget(canvas, area);
}

fn icon_style(is_set: bool, focused: bool) -> Style {
    let style = if is_set {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    if focused {
        style.bg(Color::Blue).fg(Color::White)
    } else {
        style
    }
}
