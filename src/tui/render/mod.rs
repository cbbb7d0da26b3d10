pub mod controls;
pub mod help_overlay;
pub mod status_row;
pub mod table_view;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: controls (2 rows) | caption | table | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // filter + sort control rows
            Constraint::Length(1), // caption
            Constraint::Min(1),    // table
            Constraint::Length(1), // status row
        ])
        .split(area);

    controls::render_controls(frame, app, chunks[0]);
    table_view::render_caption(frame, app, chunks[1]);
    table_view::render_table(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }
}
