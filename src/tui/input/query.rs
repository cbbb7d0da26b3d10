use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

/// Query mode: keystrokes edit the text filter in place, so the table
/// updates live on the next draw.
pub(super) fn handle_query(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.mode = Mode::Navigate;
        }
        KeyCode::Esc => {
            // Revert to the query that was active when editing started
            app.filter.query = app.query_before_edit.clone();
            app.mode = Mode::Navigate;
            app.clamp_cursor();
        }
        KeyCode::Backspace => {
            app.filter.query.pop();
            app.clamp_cursor();
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.filter.query.clear();
            app.clamp_cursor();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.filter.query.push(c);
            app.clamp_cursor();
        }
        _ => {}
    }
}
