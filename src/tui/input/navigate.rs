use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::derive::{GenderFilter, SortKind};
use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts ? and Esc
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        // Cursor movement
        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(app, -1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            let len = app.visible().len();
            app.cursor = len.saturating_sub(1);
        }

        // Selection
        KeyCode::Char(' ') | KeyCode::Enter => {
            if let Some(slug) = app.cursor_slug() {
                app.selection.toggle(&slug);
            }
        }

        // Gender filter buttons
        KeyCode::Char('1') => set_gender(app, GenderFilter::All),
        KeyCode::Char('2') => set_gender(app, GenderFilter::Male),
        KeyCode::Char('3') => set_gender(app, GenderFilter::Female),

        // Sort controls. Picking a sort kind leaves the reverse flag alone.
        KeyCode::Char('n') => set_sort(app, SortKind::Alphabetical),
        KeyCode::Char('y') => set_sort(app, SortKind::ByBirthYear),
        KeyCode::Char('s') => set_sort(app, SortKind::None),
        KeyCode::Char('r') => app.sort.reversed = !app.sort.reversed,

        // Text query
        KeyCode::Char('/') => {
            app.query_before_edit = app.filter.query.clone();
            app.mode = Mode::Query;
        }

        // Full reset
        KeyCode::Char('x') => app.reset(),

        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: i64) {
    let len = app.visible().len();
    if len == 0 {
        app.cursor = 0;
        return;
    }
    let new = app.cursor as i64 + delta;
    app.cursor = new.clamp(0, len as i64 - 1) as usize;
}

fn set_gender(app: &mut App, gender: GenderFilter) {
    app.filter.gender = gender;
    app.clamp_cursor();
}

fn set_sort(app: &mut App, kind: SortKind) {
    app.sort.kind = kind;
    app.clamp_cursor();
}
