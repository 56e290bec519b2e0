use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use emojicon::model::{IconSlot, Screen, SelectionOption};

/// Render the content-type chooser for one icon
///
/// Options that do nothing yet are dimmed but can still be highlighted.
pub fn render_selection(f: &mut Frame, area: Rect, slot: IconSlot, selected: usize) {
    let items: Vec<ListItem> = SelectionOption::ALL
        .iter()
        .map(|option| {
            let style = if option.is_available() {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(Line::from(Span::styled(format!(" {}", option.label()), style)))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(selected.min(SelectionOption::ALL.len() - 1)));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", Screen::Selection(slot).title()))
                .title_alignment(Alignment::Center)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(list, menu_area(area), &mut state);
}

/// Compact box in the middle of the face, just tall enough for the options
fn menu_area(area: Rect) -> Rect {
    let height = (SelectionOption::ALL.len() as u16 + 2).min(area.height);
    let width = area.width.min(28);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    #[test]
    fn test_options_listed_with_cursor() {
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_selection(f, area, IconSlot::new(3).unwrap(), 3);
            })
            .unwrap();

        let lines: Vec<String> = {
            let buffer = terminal.backend().buffer();
            (0..buffer.area.height)
                .map(|y| {
                    (0..buffer.area.width)
                        .map(|x| buffer[(x, y)].symbol())
                        .collect()
                })
                .collect()
        };

        assert!(lines.iter().any(|l| l.contains("Icon 3")));
        for label in ["Text", "Emoji", "Image", "Cancel"] {
            assert!(lines.iter().any(|l| l.contains(label)), "missing {}", label);
        }
        assert!(lines.iter().any(|l| l.contains("> ") && l.contains("Cancel")));
    }
}
