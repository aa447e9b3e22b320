use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;

use crate::io::store::{Store, StoreError};
use crate::model::ThemeMode;
use crate::ops::manager::TaskManager;
use crate::ops::search;

use super::input;
use super::render;
use super::theme::Theme;

/// How long a validation error stays visible before auto-dismissing
pub const ERROR_TTL: Duration = Duration::from_secs(3);

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Line editor for a new task
    Add,
    /// Search-as-you-type
    Search,
}

/// A transient error message with its dismiss deadline
#[derive(Debug, Clone)]
pub struct ErrorFlash {
    pub message: String,
    pub deadline: Instant,
}

/// Main application state
pub struct App {
    pub manager: TaskManager,
    pub theme_mode: ThemeMode,
    pub theme: Theme,
    pub mode: Mode,
    pub should_quit: bool,
    /// Cursor index into the derived (filtered/sorted) list
    pub cursor: usize,
    /// First visible row of the list view
    pub scroll_offset: usize,
    pub show_help: bool,
    /// Add-mode line editor buffer
    pub input: String,
    /// Byte offset of the cursor within `input`
    pub input_cursor: usize,
    pub error: Option<ErrorFlash>,
}

impl App {
    pub fn new(manager: TaskManager, theme_mode: ThemeMode) -> Self {
        App {
            manager,
            theme_mode,
            theme: Theme::from_mode(theme_mode),
            mode: Mode::Navigate,
            should_quit: false,
            cursor: 0,
            scroll_offset: 0,
            show_help: false,
            input: String::new(),
            input_cursor: 0,
            error: None,
        }
    }

    /// Id of the task under the cursor in the derived list
    pub fn selected_task_id(&self) -> Option<i64> {
        self.manager.filtered_tasks().get(self.cursor).map(|t| t.id)
    }

    /// Keep the cursor inside the derived list after any mutation or
    /// filter change
    pub fn clamp_cursor(&mut self) {
        let len = self.manager.filtered_tasks().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    pub fn cursor_down(&mut self) {
        let len = self.manager.filtered_tasks().len();
        if len > 0 && self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_to_end(&mut self) {
        let len = self.manager.filtered_tasks().len();
        self.cursor = len.saturating_sub(1);
    }

    /// Show a transient error; a newer error simply resets the deadline
    pub fn flash_error(&mut self, message: &str) {
        self.error = Some(ErrorFlash {
            message: message.to_string(),
            deadline: Instant::now() + ERROR_TTL,
        });
    }

    /// Drop an expired error flash. Called once per event-loop pass.
    pub fn tick(&mut self) {
        if let Some(flash) = &self.error
            && Instant::now() >= flash.deadline
        {
            self.error = None;
        }
    }

    /// Active search matcher for title highlighting
    pub fn active_search_re(&self) -> Option<Regex> {
        search::query_regex(self.manager.search_query())
    }

    /// Flip the theme and persist the preference immediately
    pub fn toggle_theme(&mut self) -> Result<(), StoreError> {
        self.theme_mode = self.theme_mode.toggled();
        self.theme = Theme::from_mode(self.theme_mode);
        self.manager.store().save_theme(self.theme_mode)
    }

    // --- Add-mode line editing ---

    pub fn input_insert(&mut self, c: char) {
        self.input.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
    }

    pub fn input_backspace(&mut self) {
        if let Some((idx, _)) = self.input[..self.input_cursor].char_indices().last() {
            self.input.remove(idx);
            self.input_cursor = idx;
        }
    }

    pub fn input_left(&mut self) {
        if let Some((idx, _)) = self.input[..self.input_cursor].char_indices().last() {
            self.input_cursor = idx;
        }
    }

    pub fn input_right(&mut self) {
        if let Some(c) = self.input[self.input_cursor..].chars().next() {
            self.input_cursor += c.len_utf8();
        }
    }

    pub fn input_clear(&mut self) {
        self.input.clear();
        self.input_cursor = 0;
    }
}

/// Run the TUI application: construct the store, seed it on first run,
/// load the manager and theme, then hand the composed app to the event
/// loop. Theme is applied before the first draw.
pub fn run(data_dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let dir = match data_dir {
        Some(dir) => PathBuf::from(dir),
        None => Store::default_dir(),
    };
    let store = Store::open(&dir)?;
    store.initialize_sample_data()?;
    let theme_mode = store.load_theme()?;
    let manager = TaskManager::load(store)?;

    let mut app = App::new(manager, theme_mode);

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
        app.tick();
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key)?;
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
