use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use emojicon::model::{IconSlot, Screen};

/// Render the text editor for one icon
///
/// `current` is the text the icon has now, shown so the user knows what
/// they are replacing.
pub fn render_text_input(
    f: &mut Frame,
    area: Rect,
    slot: IconSlot,
    draft: &str,
    current: Option<&str>,
) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(draft.to_string(), Style::default().fg(Color::White)),
            Span::styled("▏", Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
    ];

    if let Some(current) = current {
        lines.push(Line::from(vec![
            Span::styled("now: ", Style::default().fg(Color::DarkGray)),
            Span::styled(current.to_string(), Style::default().fg(Color::Gray)),
        ]));
    }
    lines.push(Line::from(Span::styled(
        "Enter save · Esc back",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    let input_area = editor_area(area);
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", Screen::TextInput(slot).title()))
                .title_alignment(Alignment::Center)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, input_area);
    f.render_widget(paragraph, input_area);
}

fn editor_area(area: Rect) -> Rect {
    let height = area.height.min(7);
    let width = area.width.min(40);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
