use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Square-looking area the watch face is drawn in
    pub face_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout: watch face centred above a status line
pub fn calculate_layout(terminal_size: Rect) -> LayoutInfo {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(terminal_size);

    LayoutInfo {
        face_area: square_face(main_chunks[0]),
        status_area: main_chunks[1],
    }
}

/// Largest centred area that looks square on screen
///
/// Terminal cells are about twice as tall as they are wide, so the area is
/// twice as many columns wide as it is rows tall.
pub fn square_face(area: Rect) -> Rect {
    let height = area.height.min(area.width / 2);
    let width = height * 2;

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Map the centre of a terminal cell to canvas coordinates (y down)
///
/// Returns `None` for cells outside `area`.
pub fn cell_to_canvas(area: Rect, column: u16, row: u16, canvas_size: f32) -> Option<(f32, f32)> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    if column < area.x || row < area.y || column >= area.x + area.width || row >= area.y + area.height
    {
        return None;
    }

    let x = (f32::from(column - area.x) + 0.5) / f32::from(area.width) * canvas_size;
    let y = (f32::from(row - area.y) + 0.5) / f32::from(area.height) * canvas_size;
    Some((x, y))
}
