//! Keyboard Input Handler
//!
//! Key bindings per screen. Ctrl-C always quits and `[` / `]` tilt the
//! simulated watch on any screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

use emojicon::model::{IconSlot, Screen};

use crate::Runtime;

/// Degrees the watch turns per tilt key press
pub const TILT_STEP_DEGREES: f32 = 15.0;

/// Handle keyboard input
pub fn handle_key(rt: &mut Runtime, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        rt.app.quit();
        return;
    }

    let now = Instant::now();
    let screen = rt.app.screen().clone();

    // Typed brackets are text on the input screen
    if !matches!(screen, Screen::TextInput(_)) {
        match key.code {
            KeyCode::Char('[') => {
                rt.tilt.nudge(-TILT_STEP_DEGREES);
                return;
            }
            KeyCode::Char(']') => {
                rt.tilt.nudge(TILT_STEP_DEGREES);
                return;
            }
            _ => {}
        }
    }

    match screen {
        Screen::Home => handle_home_key(rt, key, now),
        Screen::Selection(_) => match key.code {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => rt.app.selection_up(),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => rt.app.selection_down(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                rt.app.choose_selected(now);
            }
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => {
                rt.app.back(now);
            }
            _ => {}
        },
        Screen::TextInput(_) => match key.code {
            KeyCode::Enter => {
                rt.app.submit_input(now);
            }
            KeyCode::Esc => {
                rt.app.back(now);
            }
            KeyCode::Backspace => {
                if !rt.app.input_backspace() {
                    rt.app.back(now);
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                rt.app.input_char(c);
            }
            _ => {}
        },
        Screen::FullScreenDisplay(_) => match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Enter | KeyCode::Char('q') => {
                rt.app.back(now);
            }
            KeyCode::Left => rt.tilt.nudge(-TILT_STEP_DEGREES),
            KeyCode::Right => rt.tilt.nudge(TILT_STEP_DEGREES),
            _ => {}
        },
    }
}

fn handle_home_key(rt: &mut Runtime, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Char(c @ '1'..='6') => {
            let Some(slot) = c.to_digit(10).and_then(|d| IconSlot::new(d as u8)) else {
                return;
            };
            rt.app.model.ui.focused_slot = slot;
            if key.modifiers.contains(KeyModifiers::ALT) {
                rt.app.long_press_focused(now);
            } else {
                rt.app.tap_focused(now);
            }
        }
        KeyCode::Right | KeyCode::Down | KeyCode::Tab | KeyCode::Char('l') => rt.app.focus_next(),
        KeyCode::Left | KeyCode::Up | KeyCode::BackTab | KeyCode::Char('h') => rt.app.focus_prev(),
        KeyCode::Enter => {
            rt.app.tap_focused(now);
        }
        KeyCode::Char('e') | KeyCode::Char(' ') => {
            rt.app.long_press_focused(now);
        }
        KeyCode::Char('q') => rt.app.quit(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use emojicon::model::IconText;
    use emojicon::sensors::SensorHub;
    use emojicon::services::accelerometer::TiltControl;
    use emojicon::state::IconTextState;
    use emojicon::App;

    use super::*;
    use crate::config::Config;

    fn runtime_with(texts: IconText) -> Runtime {
        let app = App::new(IconTextState::detached(texts), SensorHub::new());
        Runtime::new(app, TiltControl::new(), &Config::default())
    }

    fn press(rt: &mut Runtime, code: KeyCode) {
        handle_key(rt, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn slot(n: u8) -> IconSlot {
        IconSlot::new(n).unwrap()
    }

    #[test]
    fn test_type_and_save_text() {
        let mut rt = runtime_with(IconText::new());

        press(&mut rt, KeyCode::Char('3'));
        assert_eq!(rt.app.screen(), &Screen::Selection(slot(3)));
        press(&mut rt, KeyCode::Enter);
        assert_eq!(rt.app.screen(), &Screen::TextInput(slot(3)));

        for c in "a[b]q".chars() {
            press(&mut rt, KeyCode::Char(c));
        }
        press(&mut rt, KeyCode::Enter);

        assert_eq!(rt.app.screen(), &Screen::Home);
        assert_eq!(rt.app.texts().text_for(slot(3)).as_deref(), Some("a[b]q"));
        assert_eq!(rt.tilt.degrees(), 0.0);
    }

    #[test]
    fn test_backspace_on_empty_draft_goes_back() {
        let mut rt = runtime_with(IconText::new());
        press(&mut rt, KeyCode::Char('1'));
        press(&mut rt, KeyCode::Enter);
        press(&mut rt, KeyCode::Char('x'));

        press(&mut rt, KeyCode::Backspace);
        assert_eq!(rt.app.screen(), &Screen::TextInput(slot(1)));
        press(&mut rt, KeyCode::Backspace);
        assert_eq!(rt.app.screen(), &Screen::Selection(slot(1)));
    }

    #[test]
    fn test_tap_set_icon_opens_full_screen() {
        let mut texts = IconText::new();
        texts.set(slot(5), "Hello");
        let mut rt = runtime_with(texts);

        press(&mut rt, KeyCode::Char('5'));
        assert_eq!(
            rt.app.screen(),
            &Screen::FullScreenDisplay("Hello".to_string())
        );

        press(&mut rt, KeyCode::Char(']'));
        assert_eq!(rt.tilt.degrees(), TILT_STEP_DEGREES);

        press(&mut rt, KeyCode::Esc);
        assert_eq!(rt.app.screen(), &Screen::Home);
        assert!(!rt.app.should_quit());
    }

    #[test]
    fn test_alt_digit_long_presses() {
        let mut texts = IconText::new();
        texts.set(slot(2), "Yo");
        let mut rt = runtime_with(texts);

        handle_key(&mut rt, KeyEvent::new(KeyCode::Char('2'), KeyModifiers::ALT));
        assert_eq!(rt.app.screen(), &Screen::Selection(slot(2)));
    }

    #[test]
    fn test_quit_only_from_home() {
        let mut rt = runtime_with(IconText::new());
        press(&mut rt, KeyCode::Char('4'));
        press(&mut rt, KeyCode::Char('q'));
        assert_eq!(rt.app.screen(), &Screen::Home);
        assert!(!rt.app.should_quit());

        press(&mut rt, KeyCode::Char('q'));
        assert!(rt.app.should_quit());
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let mut rt = runtime_with(IconText::new());
        press(&mut rt, KeyCode::Char('6'));
        press(&mut rt, KeyCode::Enter);
        handle_key(
            &mut rt,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(rt.app.should_quit());
        assert!(rt.app.model.ui.input_buffer.is_empty());
    }
}
