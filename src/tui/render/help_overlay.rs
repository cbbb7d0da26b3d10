use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

const BINDINGS: &[(&str, &str)] = &[
    ("j/k, arrows", "move cursor"),
    ("space, enter", "select / deselect person"),
    ("/", "edit text filter"),
    ("1 / 2 / 3", "show all / men / women"),
    ("n / y / s", "sort by name / year / none"),
    ("r", "reverse order"),
    ("x", "reset filters, sort, selection"),
    ("?", "toggle this help"),
    ("q", "quit"),
];

/// Render the help overlay centered over the whole screen
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let height = (BINDINGS.len() + 2) as u16;
    let width = 44u16.min(area.width);
    let popup = centered_rect(area, width, height);

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<14}", key),
                    Style::default()
                        .fg(app.theme.highlight)
                        .bg(app.theme.background),
                ),
                Span::styled(
                    what.to_string(),
                    Style::default().fg(app.theme.text).bg(app.theme.background),
                ),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" keys ")
        .borders(Borders::ALL)
        .style(
            Style::default()
                .fg(app.theme.dim)
                .bg(app.theme.background),
        );

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
