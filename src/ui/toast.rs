use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render a toast notification just above the bottom of `area`
pub fn render_toast(f: &mut Frame, area: Rect, message: &str) {
    let toast_width = (message.width() as u16 + 6).min(area.width);
    let toast_height = 3.min(area.height);

    let toast_area = Rect {
        x: area.x + (area.width - toast_width) / 2,
        y: area.y + area.height.saturating_sub(toast_height + 1),
        width: toast_width,
        height: toast_height,
    };

    // Clear the area first to prevent background bleed-through
    f.render_widget(Clear, toast_area);

    let toast_line = Line::from(vec![
        Span::styled(
            "✓ ",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw(message.to_string()),
    ]);

    let toast = Paragraph::new(toast_line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
        .alignment(Alignment::Center);

    f.render_widget(toast, toast_area);
}
