use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tk", about = concat!("[+] tick v", env!("CARGO_PKG_VERSION"), " - your tasks, persisted"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task
    Add(AddArgs),
    /// List tasks through the current filters and sort mode
    List,
    /// Toggle a task's completion
    Toggle(IdArg),
    /// Delete a task
    Rm(IdArg),
    /// List tasks matching a one-off search query
    Search(SearchArgs),
    /// Set the sort mode
    Sort(SortArgs),
    /// Change the status or priority filter
    Filter(FilterCmd),
    /// Show or set the color theme
    Theme(ThemeArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    pub title: String,
    /// Due date (free-form, e.g. 2025-06-01)
    #[arg(long)]
    pub due: Option<String>,
    /// Priority (low, medium, high)
    #[arg(long, default_value = "medium")]
    pub priority: String,
}

#[derive(Args)]
pub struct IdArg {
    /// Task id (as shown by `tk list`)
    pub id: i64,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Substring to match against titles (case-insensitive)
    pub query: String,
}

#[derive(Args)]
pub struct SortArgs {
    /// Sort mode (custom, created, priority)
    pub mode: String,
}

#[derive(Args)]
pub struct FilterCmd {
    #[command(subcommand)]
    pub kind: FilterKind,
}

#[derive(Subcommand)]
pub enum FilterKind {
    /// Set the status filter (all, active, completed)
    Status(FilterValueArg),
    /// Toggle a priority filter (low, medium, high); repeating clears it
    Priority(FilterValueArg),
}

#[derive(Args)]
pub struct FilterValueArg {
    pub value: String,
}

#[derive(Args)]
pub struct ThemeArgs {
    /// light, dark, or toggle (omit to show the current theme)
    pub value: Option<String>,
}
