use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Navigate => {
            let shown = format!("{} of {} shown", app.visible().len(), app.people.len());
            let mut spans = vec![Span::styled(
                format!(" {}", shown),
                Style::default().fg(app.theme.dim).bg(bg),
            )];
            if app.config.show_key_hints {
                let hint = "space select  / filter  1/2/3 gender  n/y/s sort  r reverse  x reset  ? help  q quit";
                let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
                let hint_width = hint.chars().count();
                if content_width + hint_width < width {
                    let padding = width - content_width - hint_width;
                    spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
                    spans.push(Span::styled(
                        hint,
                        Style::default().fg(app.theme.dim).bg(bg),
                    ));
                }
            }
            Line::from(spans)
        }
        Mode::Query => {
            // Query prompt: /text▌
            let mut spans = vec![
                Span::styled(
                    format!(" /{}", app.filter.query),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)), // ▌ cursor
            ];
            let hint = "Enter keep  Esc cancel";
            let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
            let hint_width = hint.chars().count();
            if content_width + hint_width < width {
                let padding = width - content_width - hint_width;
                spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
                spans.push(Span::styled(
                    hint,
                    Style::default().fg(app.theme.dim).bg(bg),
                ));
            }
            Line::from(spans)
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
