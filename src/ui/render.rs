use ratatui::Frame;
use std::time::Instant;

use emojicon::model::Screen;

use super::{full_screen, home, layout, selection, status_bar, text_input, toast};
use crate::Runtime;

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, rt: &mut Runtime) {
    let size = f.area();
    let layout_info = layout::calculate_layout(size);
    let texts = rt.icon_texts();
    let screen = rt.app.screen().clone();

    // Hit testing only makes sense while the face is on screen
    rt.face_area = None;

    match &screen {
        Screen::Home => {
            home::render_home(
                f,
                layout_info.face_area,
                &texts,
                rt.app.model.ui.focused_slot,
                rt.canvas_size,
            );
            rt.face_area = Some(layout_info.face_area);
        }
        Screen::Selection(slot) => {
            selection::render_selection(
                f,
                layout_info.face_area,
                *slot,
                rt.app.model.ui.selection_index,
            );
        }
        Screen::TextInput(slot) => {
            text_input::render_text_input(
                f,
                layout_info.face_area,
                *slot,
                &rt.app.model.ui.input_buffer,
                texts.text_for(*slot),
            );
        }
        Screen::FullScreenDisplay(_) => {
            if let Some(display) = rt.app.display() {
                full_screen::render_full_screen(f, size, display, Instant::now());
            }
        }
    }

    if !matches!(screen, Screen::FullScreenDisplay(_)) {
        status_bar::render_status_bar(
            f,
            layout_info.status_area,
            &rt.app.current_route(),
            &screen,
        );
    }

    if let Some((message, _)) = &rt.app.model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
