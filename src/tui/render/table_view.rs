use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::model::person::Person;
use crate::ops::view::{Row, caption, rows};
use crate::tui::app::App;

/// Render the caption line: selected names in add order, or the placeholder
pub fn render_caption(frame: &mut Frame, app: &App, area: Rect) {
    let text = caption(&app.selection, &app.people, &app.config.empty_caption);
    let style = if app.selection.is_empty() {
        Style::default().fg(app.theme.dim).bg(app.theme.background)
    } else {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.background)
    };
    let line = Line::from(Span::styled(format!(" {}", text), style));
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(app.theme.background)),
        area,
    );
}

/// Render the people table: header plus one row per visible person.
/// Selected rows get the selection background; the cursor row gets the
/// highlight background.
pub fn render_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let visible = app.visible();
    let table_rows = rows(&visible, &app.selection);

    // Header takes the first line; the rest scrolls
    let body_height = area.height.saturating_sub(1) as usize;
    adjust_scroll(app, table_rows.len(), body_height);

    let name_width = name_column_width(&visible);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(header_line(app, name_width));

    for (idx, row) in table_rows
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(body_height)
    {
        lines.push(row_line(app, row, idx == app.cursor, name_width, area.width));
    }

    if table_rows.is_empty() {
        lines.push(Line::from(Span::styled(
            " No people match",
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        )));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

/// Keep the cursor row inside the scrolled window
fn adjust_scroll(app: &mut App, row_count: usize, body_height: usize) {
    if body_height == 0 || row_count == 0 {
        app.scroll_offset = 0;
        return;
    }
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + body_height {
        app.scroll_offset = app.cursor + 1 - body_height;
    }
}

fn name_column_width(visible: &[Person]) -> usize {
    visible
        .iter()
        .map(|p| UnicodeWidthStr::width(p.name.as_str()))
        .chain(std::iter::once(UnicodeWidthStr::width("name")))
        .max()
        .unwrap_or(4)
}

fn pad(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(used)))
}

fn header_line<'a>(app: &App, name_width: usize) -> Line<'a> {
    Line::from(Span::styled(
        format!("     {}  sex  born", pad("name", name_width)),
        Style::default()
            .fg(app.theme.text)
            .bg(app.theme.background)
            .add_modifier(Modifier::BOLD),
    ))
}

fn row_line<'a>(
    app: &App,
    row: &Row<'_>,
    is_cursor: bool,
    name_width: usize,
    width: u16,
) -> Line<'a> {
    let theme = &app.theme;
    let bg = if is_cursor {
        theme.highlight
    } else if row.is_selected {
        theme.selection_bg
    } else {
        theme.background
    };

    let mut spans: Vec<Span> = Vec::new();

    // Marker column: "-" means the row is selected (press again to drop it)
    if row.is_selected {
        spans.push(Span::styled(" [-] ", Style::default().fg(theme.red).bg(bg)));
    } else {
        spans.push(Span::styled(" [+] ", Style::default().fg(theme.green).bg(bg)));
    }

    spans.push(Span::styled(
        format!("{}  ", pad(&row.person.name, name_width)),
        Style::default().fg(theme.text_bright).bg(bg),
    ));
    spans.push(Span::styled(
        format!("{}    ", row.person.sex.code()),
        Style::default().fg(theme.sex_color(row.person.sex)).bg(bg),
    ));
    spans.push(Span::styled(
        row.person.born.to_string(),
        Style::default().fg(theme.text).bg(bg),
    ));

    // Pad to full width so the row background reaches the right edge
    if is_cursor || row.is_selected {
        let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let w = width as usize;
        if content_width < w {
            spans.push(Span::styled(
                " ".repeat(w - content_width),
                Style::default().bg(bg),
            ));
        }
    }

    Line::from(spans)
}
