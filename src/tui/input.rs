use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::{Priority, SortMode, StatusFilter};
use crate::ops::manager::{Filter, TaskError};
use crate::ops::parse::parse_add_input;

use super::app::{App, Mode};

/// Handle a key event in the current mode. Storage faults bubble up and
/// end the session; everything else is handled in place.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<(), TaskError> {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return Ok(());
    }

    // Help overlay intercepts all input
    if app.show_help {
        app.show_help = false;
        return Ok(());
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Add => handle_add(app, key),
        Mode::Search => handle_search(app, key),
    }
}

fn handle_navigate(app: &mut App, key: KeyEvent) -> Result<(), TaskError> {
    match (key.modifiers, key.code) {
        (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        (_, KeyCode::Char('q')) => app.should_quit = true,
        (_, KeyCode::Char('?')) => app.show_help = true,

        // Cursor movement
        (_, KeyCode::Char('j')) | (_, KeyCode::Down) => app.cursor_down(),
        (_, KeyCode::Char('k')) | (_, KeyCode::Up) => app.cursor_up(),
        (_, KeyCode::Char('g')) | (_, KeyCode::Home) => app.cursor = 0,
        (_, KeyCode::Char('G')) | (_, KeyCode::End) => app.cursor_to_end(),

        // Mode switches
        (_, KeyCode::Char('a')) => {
            app.input_clear();
            app.mode = Mode::Add;
        }
        (_, KeyCode::Char('/')) => app.mode = Mode::Search,

        // Mutations on the task under the cursor
        (_, KeyCode::Char('x')) | (_, KeyCode::Char(' ')) | (_, KeyCode::Enter) => {
            if let Some(id) = app.selected_task_id() {
                app.manager.toggle_task(id)?;
                app.clamp_cursor();
            }
        }
        (_, KeyCode::Char('d')) | (_, KeyCode::Delete) => {
            if let Some(id) = app.selected_task_id() {
                app.manager.remove_task(id)?;
                app.clamp_cursor();
            }
        }

        // View state
        (_, KeyCode::Char('s')) => {
            app.manager.set_sort_by(next_sort(app.manager.sort_by()))?;
        }
        (_, KeyCode::Char('f')) => {
            let next = next_status(app.manager.filters().status);
            app.manager.set_filter(Filter::Status(next))?;
            app.clamp_cursor();
        }
        (_, KeyCode::Char('1')) => toggle_priority_filter(app, Priority::High)?,
        (_, KeyCode::Char('2')) => toggle_priority_filter(app, Priority::Medium)?,
        (_, KeyCode::Char('3')) => toggle_priority_filter(app, Priority::Low)?,
        (_, KeyCode::Char('t')) => app.toggle_theme()?,

        // Clear an active search
        (_, KeyCode::Esc) => {
            app.manager.set_search_query("");
            app.clamp_cursor();
        }
        _ => {}
    }
    Ok(())
}

fn handle_add(app: &mut App, key: KeyEvent) -> Result<(), TaskError> {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.input_clear();
            app.mode = Mode::Navigate;
        }
        (_, KeyCode::Enter) => submit_add(app)?,
        (_, KeyCode::Backspace) => app.input_backspace(),
        (_, KeyCode::Left) => app.input_left(),
        (_, KeyCode::Right) => app.input_right(),
        (_, KeyCode::Home) => app.input_cursor = 0,
        (_, KeyCode::End) => app.input_cursor = app.input.len(),
        (mods, KeyCode::Char(c)) if !mods.contains(KeyModifiers::CONTROL) => {
            app.input_insert(c);
        }
        _ => {}
    }
    Ok(())
}

fn submit_add(app: &mut App) -> Result<(), TaskError> {
    let parsed = parse_add_input(&app.input);
    let priority = parsed.priority.unwrap_or(Priority::Medium);

    match app
        .manager
        .add_task(&parsed.title, parsed.due_date.as_deref(), priority)
    {
        Ok(_) => {
            app.input_clear();
            app.mode = Mode::Navigate;
            app.clamp_cursor();
        }
        // Recoverable: show the message, keep the input for another try
        Err(e @ TaskError::EmptyTitle) => app.flash_error(&e.to_string()),
        Err(e) => return Err(e),
    }
    Ok(())
}

fn handle_search(app: &mut App, key: KeyEvent) -> Result<(), TaskError> {
    match (key.modifiers, key.code) {
        // Cancel: clear the query entirely
        (_, KeyCode::Esc) => {
            app.manager.set_search_query("");
            app.mode = Mode::Navigate;
            app.clamp_cursor();
        }
        // Keep the query active and go back to navigating
        (_, KeyCode::Enter) => app.mode = Mode::Navigate,
        (_, KeyCode::Backspace) => {
            let mut query = app.manager.search_query().to_string();
            query.pop();
            app.manager.set_search_query(&query);
            app.clamp_cursor();
        }
        (mods, KeyCode::Char(c)) if !mods.contains(KeyModifiers::CONTROL) => {
            let mut query = app.manager.search_query().to_string();
            query.push(c);
            app.manager.set_search_query(&query);
            app.clamp_cursor();
        }
        _ => {}
    }
    Ok(())
}

/// Sort cycle for the `s` key: custom → dateCreated → priority → custom
fn next_sort(mode: SortMode) -> SortMode {
    match mode {
        SortMode::Custom => SortMode::DateCreated,
        SortMode::DateCreated => SortMode::Priority,
        SortMode::Priority => SortMode::Custom,
    }
}

/// Status cycle for the `f` key: all → active → completed → all
fn next_status(status: StatusFilter) -> StatusFilter {
    match status {
        StatusFilter::All => StatusFilter::Active,
        StatusFilter::Active => StatusFilter::Completed,
        StatusFilter::Completed => StatusFilter::All,
    }
}

fn toggle_priority_filter(app: &mut App, priority: Priority) -> Result<(), TaskError> {
    app.manager.set_filter(Filter::Priority(priority))?;
    app.clamp_cursor();
    Ok(())
}
