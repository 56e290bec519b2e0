use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

use emojicon::display::FullScreenDisplay;
use emojicon::logic::rotation::QuarterTurn;
use emojicon::logic::ui::FontTier;

/// Spread characters apart so larger tiers read bigger on a terminal
pub fn spaced(text: &str, tier: FontTier) -> String {
    let gap = match tier {
        FontTier::Huge => "  ",
        FontTier::Large => " ",
        FontTier::Medium | FontTier::Small => return text.to_string(),
    };

    text.chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(gap)
}

/// Lay text out for a quarter turn of the watch
///
/// Sideways text is one character per line; upside-down text is reversed.
pub fn rotate_lines(text: &str, turn: QuarterTurn) -> Vec<String> {
    match turn {
        QuarterTurn::Upright => vec![text.to_string()],
        QuarterTurn::UpsideDown => vec![text.chars().rev().collect()],
        QuarterTurn::Clockwise => text.chars().map(|c| c.to_string()).collect(),
        QuarterTurn::CounterClockwise => text.chars().rev().map(|c| c.to_string()).collect(),
    }
}

fn tier_style(tier: FontTier, keep_awake: bool) -> Style {
    let style = match tier {
        FontTier::Small => Style::default().fg(Color::White),
        _ => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    };

    if keep_awake {
        style
    } else {
        style.fg(Color::DarkGray).add_modifier(Modifier::DIM)
    }
}

/// Render one text full-screen, turned to match the watch
pub fn render_full_screen(f: &mut Frame, area: Rect, display: &FullScreenDisplay, now: Instant) {
    f.render_widget(Block::default().style(Style::default().bg(Color::Black)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let tier = display.font_tier();
    let turn = QuarterTurn::from_degrees(display.rotation_degrees());
    let style = tier_style(tier, display.keep_awake());

    // Sideways text is already one glyph per line, spacing would only stretch it
    let text = match turn {
        QuarterTurn::Upright | QuarterTurn::UpsideDown => spaced(display.text(), tier),
        QuarterTurn::Clockwise | QuarterTurn::CounterClockwise => display.text().to_string(),
    };
    let lines: Vec<Line> = rotate_lines(&text, turn)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, style)))
        .collect();

    let text_area = chunks[0];
    let top_padding = text_area.height.saturating_sub(lines.len() as u16) / 2;
    let centred = Rect {
        y: text_area.y + top_padding,
        height: text_area.height - top_padding,
        ..text_area
    };
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, centred);

    let awake = match display.keep_awake_remaining(now) {
        Some(left) => format!("awake {}s", left.as_secs()),
        None => "dimmed".to_string(),
    };
    let footer = Paragraph::new(Line::from(Span::styled(
        format!(
            "↻ {:.0}°  {}pt  {}",
            display.rotation_degrees(),
            tier.points(),
            awake
        ),
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    f.render_widget(footer, chunks[1]);
}
