use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::load_config;
use crate::io::people_io::load_or_default;
use crate::model::config::UiConfig;
use crate::model::person::Person;
use crate::ops::derive::{FilterState, SortState, visible_people};
use crate::ops::selection::Selection;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Editing the text query; each keystroke takes effect immediately
    Query,
}

/// Main application state
pub struct App {
    /// The record source, immutable after load
    pub people: Vec<Person>,
    pub filter: FilterState,
    pub sort: SortState,
    pub selection: Selection,
    pub mode: Mode,
    pub theme: Theme,
    pub config: UiConfig,
    /// Cursor index into the visible row list
    pub cursor: usize,
    /// Scroll offset (first visible row)
    pub scroll_offset: usize,
    /// Query text as it was when Query mode was entered (restored on Esc)
    pub query_before_edit: String,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(people: Vec<Person>, config: UiConfig) -> Self {
        let theme = Theme::from_config(&config);
        App {
            people,
            filter: FilterState::default(),
            sort: SortState::default(),
            selection: Selection::new(),
            mode: Mode::Navigate,
            theme,
            config,
            cursor: 0,
            scroll_offset: 0,
            query_before_edit: String::new(),
            show_help: false,
            should_quit: false,
        }
    }

    /// Recompute the visible row list from current state.
    /// Runs from scratch on every call; the record source is small.
    pub fn visible(&self) -> Vec<Person> {
        visible_people(&self.people, &self.filter, &self.sort)
    }

    /// Keep the cursor inside the visible row list after a state change
    pub fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// The slug of the person under the cursor, if any
    pub fn cursor_slug(&self) -> Option<String> {
        self.visible().get(self.cursor).map(|p| p.slug.clone())
    }

    /// Full reset: filters and sort back to defaults, selection cleared
    pub fn reset(&mut self) {
        self.filter.reset();
        self.sort.reset();
        self.selection.clear();
        self.cursor = 0;
        self.scroll_offset = 0;
    }
}

/// Run the TUI application
pub fn run(file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let people = load_or_default(file)?;
    let cwd = std::env::current_dir()?;
    let config = load_config(&cwd)?;

    let mut app = App::new(people, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::person::Sex;
    use crate::ops::derive::{GenderFilter, SortKind};

    fn sample_app() -> App {
        let people = vec![
            Person::new("bob-a-1990", "Bob", Sex::Male, 1990),
            Person::new("ann-b-1985", "Ann", Sex::Female, 1985),
            Person::new("dora-d-1970", "Dora", Sex::Female, 1970),
        ];
        App::new(people, UiConfig::default())
    }

    #[test]
    fn test_visible_tracks_state() {
        let mut app = sample_app();
        assert_eq!(app.visible().len(), 3);

        app.filter.gender = GenderFilter::Female;
        let visible = app.visible();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].name, "Ann");
    }

    #[test]
    fn test_clamp_cursor_after_filter_shrinks_list() {
        let mut app = sample_app();
        app.cursor = 2;
        app.filter.query = "ann".to_string();
        app.clamp_cursor();
        assert_eq!(app.cursor, 0);
        assert_eq!(app.cursor_slug().as_deref(), Some("ann-b-1985"));
    }

    #[test]
    fn test_clamp_cursor_on_empty_list() {
        let mut app = sample_app();
        app.cursor = 1;
        app.filter.query = "zzz".to_string();
        app.clamp_cursor();
        assert_eq!(app.cursor, 0);
        assert!(app.cursor_slug().is_none());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut app = sample_app();
        app.filter.query = "ann".to_string();
        app.filter.gender = GenderFilter::Female;
        app.sort.kind = SortKind::Alphabetical;
        app.sort.reversed = true;
        app.selection.add("bob-a-1990");
        app.cursor = 1;

        app.reset();
        assert_eq!(app.filter, FilterState::default());
        assert_eq!(app.sort, SortState::default());
        assert!(app.selection.is_empty());
        assert_eq!(app.cursor, 0);
    }
}
