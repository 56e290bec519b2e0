use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use emojicon::model::Screen;

/// Key hints for the bottom bar
pub fn hints_for(screen: &Screen) -> &'static str {
    match screen {
        Screen::Home => "1-6/Enter open · e edit · ←→ move · [ ] tilt · q quit",
        Screen::Selection(_) => "↑↓ choose · Enter select · Esc back",
        Screen::TextInput(_) => "type text · Enter save · Esc back",
        Screen::FullScreenDisplay(_) => "[ ] ←→ tilt · Esc back",
    }
}

/// Render the bottom status bar: current route on the left, key hints on
/// the right
pub fn render_status_bar(f: &mut Frame, area: Rect, route: &str, screen: &Screen) {
    let hints = hints_for(screen);
    let gap = (area.width as usize).saturating_sub(route.width() + hints.width() + 2);

    let line = Line::from(vec![
        Span::styled(format!(" {}", route), Style::default().fg(Color::Cyan)),
        Span::raw(" ".repeat(gap.max(1))),
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
    ]);

    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(Color::Black)),
        area,
    );
}
