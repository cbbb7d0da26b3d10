use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::derive::{GenderFilter, SortKind};
use crate::ops::view::{Controls, controls};
use crate::tui::app::App;
use crate::tui::theme::Theme;

/// Render the two control rows: gender filter buttons and sort buttons.
/// The active control in each group gets the highlight background.
pub fn render_controls(frame: &mut Frame, app: &App, area: Rect) {
    let flags = controls(&app.filter, &app.sort);

    let lines = vec![gender_line(app, &flags), sort_line(app, &flags)];
    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

fn button<'a>(label: &'a str, active: bool, theme: &Theme) -> Span<'a> {
    let style = if active {
        Style::default()
            .fg(theme.text_bright)
            .bg(theme.highlight)
    } else {
        Style::default().fg(theme.text).bg(theme.background)
    };
    Span::styled(format!(" {} ", label), style)
}

fn gap(theme: &Theme) -> Span<'static> {
    Span::styled(" ", Style::default().bg(theme.background))
}

fn gender_line<'a>(app: &'a App, flags: &Controls) -> Line<'a> {
    let theme = &app.theme;
    let mut spans = vec![
        gap(theme),
        button("All", flags.gender == GenderFilter::All, theme),
        gap(theme),
        button("Men", flags.gender == GenderFilter::Male, theme),
        gap(theme),
        button("Women", flags.gender == GenderFilter::Female, theme),
    ];

    if flags.query_active {
        spans.push(gap(theme));
        spans.push(Span::styled(
            format!("  query: {}", app.filter.query.trim()),
            Style::default().fg(theme.dim).bg(theme.background),
        ));
    }

    Line::from(spans)
}

fn sort_line<'a>(app: &'a App, flags: &Controls) -> Line<'a> {
    let theme = &app.theme;
    Line::from(vec![
        gap(theme),
        button("Name", flags.sort_kind == SortKind::Alphabetical, theme),
        gap(theme),
        button("Year", flags.sort_kind == SortKind::ByBirthYear, theme),
        gap(theme),
        button("Unsorted", flags.sort_kind == SortKind::None, theme),
        gap(theme),
        button("Reverse", flags.reversed, theme),
    ])
}
