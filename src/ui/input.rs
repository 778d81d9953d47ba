//! Key handling for the UI loop.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::form::FormIntent;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Esc || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'u') {
        app.dispatch(FormIntent::ClearInput);
        return;
    }

    match key.code {
        KeyCode::Enter => app.submit(),
        KeyCode::Backspace => app.dispatch(FormIntent::Backspace),
        KeyCode::Delete => app.dispatch(FormIntent::Delete),
        KeyCode::Left => app.dispatch(FormIntent::MoveLeft),
        KeyCode::Right => app.dispatch(FormIntent::MoveRight),
        KeyCode::Home => app.dispatch(FormIntent::MoveHome),
        KeyCode::End => app.dispatch(FormIntent::MoveEnd),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch(FormIntent::Insert(ch));
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
}
