//! Keyboard event handling.

use crate::app::{App, AppState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle a key event. Returns true if the app should quit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    // Ctrl+C quits from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.state = AppState::Quit;
        return true;
    }

    if app.in_dialog() {
        handle_dialog_key(app, key)
    } else {
        handle_list_key(app, key)
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.state = AppState::Quit;
            true
        }
        KeyCode::Char('a') => {
            app.open_create();
            false
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            app.edit_selected();
            false
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_down();
            false
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
            false
        }
        KeyCode::Home => {
            app.select_first();
            false
        }
        KeyCode::End => {
            app.select_last();
            false
        }
        _ => false,
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => app.cancel(),
        KeyCode::Enter => app.confirm(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => app.toggle_field(),
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Char(c) if is_plain_char(key.modifiers) => app.push_char(c),
        _ => {}
    }
    false
}

/// Only unmodified or shifted characters are typed into a field.
fn is_plain_char(modifiers: KeyModifiers) -> bool {
    modifiers == KeyModifiers::NONE || modifiers == KeyModifiers::SHIFT
}
