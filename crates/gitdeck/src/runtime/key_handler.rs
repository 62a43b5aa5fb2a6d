use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Pane};
use crate::runtime::EventResult;

/// Routes one key press to the focused pane.
pub(crate) fn handle_key(app: &mut App, key: KeyEvent) -> EventResult {
    let is_ctrl_c =
        key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
    if is_ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        return EventResult::Quit;
    }

    if key.code == KeyCode::Tab {
        app.cycle_focus();

        return EventResult::Continue;
    }

    if key.code == KeyCode::Char('b') {
        app.cycle_branch();

        return EventResult::Continue;
    }

    match app.focus {
        Pane::Tree => handle_tree_key(app, key),
        Pane::Code => handle_code_key(app, key),
    }

    EventResult::Continue
}

fn handle_tree_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_cursor(),
        _ => {}
    }
}

fn handle_code_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.scroll_code(1),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_code(-1),
        KeyCode::Char('g') => app.scroll_code(i32::MIN),
        KeyCode::Char('G') => app.scroll_code(i32::MAX),
        _ => {}
    }
}
