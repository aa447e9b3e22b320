use std::path::PathBuf;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::store::Store;
use crate::model::{Priority, SortMode, StatusFilter, ThemeMode};
use crate::ops::manager::{Filter, TaskManager};

type CliResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> CliResult {
    let json = cli.json;
    let Some(command) = cli.command else {
        // No subcommand launches the TUI; main handles that before dispatch
        return Ok(());
    };

    let mut manager = open_manager(cli.data_dir.as_deref())?;

    match command {
        Commands::Add(args) => cmd_add(args, json, &mut manager),
        Commands::List => cmd_list(json, &manager),
        Commands::Toggle(args) => cmd_toggle(args, json, &mut manager),
        Commands::Rm(args) => cmd_rm(args, json, &mut manager),
        Commands::Search(args) => cmd_search(args, json, &mut manager),
        Commands::Sort(args) => cmd_sort(args, &mut manager),
        Commands::Filter(args) => cmd_filter(args, &mut manager),
        Commands::Theme(args) => cmd_theme(args, json, &manager),
    }
}

/// Resolve the data directory, open the store, seed it on first run, and
/// load the manager, the same top-down composition the TUI does at startup.
pub fn open_manager(data_dir: Option<&str>) -> Result<TaskManager, Box<dyn std::error::Error>> {
    let dir = match data_dir {
        Some(dir) => PathBuf::from(dir),
        None => Store::default_dir(),
    };
    let store = Store::open(&dir)?;
    store.initialize_sample_data()?;
    Ok(TaskManager::load(store)?)
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_add(args: AddArgs, json: bool, manager: &mut TaskManager) -> CliResult {
    let priority = Priority::parse(&args.priority).ok_or_else(|| {
        format!(
            "unknown priority '{}' (expected low, medium, high)",
            args.priority
        )
    })?;

    let id = manager.add_task(&args.title, args.due.as_deref(), priority)?;

    if json {
        let added = AddedJson {
            id,
            title: args.title.trim().to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&added)?);
    } else {
        println!("added {}", id);
    }
    Ok(())
}

fn cmd_list(json: bool, manager: &TaskManager) -> CliResult {
    print_listing(json, manager)
}

fn cmd_search(args: SearchArgs, json: bool, manager: &mut TaskManager) -> CliResult {
    // Transient: applied for this invocation only, never persisted
    manager.set_search_query(&args.query);
    print_listing(json, manager)
}

fn print_listing(json: bool, manager: &TaskManager) -> CliResult {
    let tasks = manager.filtered_tasks();

    if json {
        let list = list_to_json(&tasks, manager.filters(), manager.sort_by());
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("no tasks");
    } else {
        for task in &tasks {
            println!("{}", format_task_row(task));
        }
    }
    println!();
    println!("{}", format_view_state(manager.filters(), manager.sort_by()));
    Ok(())
}

fn cmd_toggle(args: IdArg, json: bool, manager: &mut TaskManager) -> CliResult {
    manager.toggle_task(args.id)?;

    let task = manager.tasks().iter().find(|t| t.id == args.id);
    if json {
        match task {
            Some(t) => println!("{}", serde_json::to_string_pretty(&task_to_json(t))?),
            None => println!("null"),
        }
    } else {
        match task {
            Some(t) => println!("{}", format_task_row(t)),
            None => println!("no task with id {}", args.id),
        }
    }
    Ok(())
}

fn cmd_rm(args: IdArg, json: bool, manager: &mut TaskManager) -> CliResult {
    let existed = manager.tasks().iter().any(|t| t.id == args.id);
    manager.remove_task(args.id)?;

    if json {
        println!("{}", serde_json::json!({ "removed": existed }));
    } else if existed {
        println!("removed {}", args.id);
    } else {
        println!("no task with id {}", args.id);
    }
    Ok(())
}

fn cmd_sort(args: SortArgs, manager: &mut TaskManager) -> CliResult {
    let mode = SortMode::parse(&args.mode).ok_or_else(|| {
        format!(
            "unknown sort mode '{}' (expected custom, created, priority)",
            args.mode
        )
    })?;
    manager.set_sort_by(mode)?;
    println!("sort: {}", mode.as_str());
    Ok(())
}

fn cmd_filter(args: FilterCmd, manager: &mut TaskManager) -> CliResult {
    match args.kind {
        FilterKind::Status(arg) => {
            let status = StatusFilter::parse(&arg.value).ok_or_else(|| {
                format!(
                    "unknown status filter '{}' (expected all, active, completed)",
                    arg.value
                )
            })?;
            manager.set_filter(Filter::Status(status))?;
        }
        FilterKind::Priority(arg) => {
            let priority = Priority::parse(&arg.value).ok_or_else(|| {
                format!(
                    "unknown priority '{}' (expected low, medium, high)",
                    arg.value
                )
            })?;
            manager.set_filter(Filter::Priority(priority))?;
        }
    }
    println!("{}", format_view_state(manager.filters(), manager.sort_by()));
    Ok(())
}

fn cmd_theme(args: ThemeArgs, json: bool, manager: &TaskManager) -> CliResult {
    let store = manager.store();

    let mode = match args.value.as_deref() {
        None => store.load_theme()?,
        Some("toggle") => {
            let next = store.load_theme()?.toggled();
            store.save_theme(next)?;
            next
        }
        Some("light") => {
            store.save_theme(ThemeMode::Light)?;
            ThemeMode::Light
        }
        Some("dark") => {
            store.save_theme(ThemeMode::Dark)?;
            ThemeMode::Dark
        }
        Some(other) => {
            return Err(format!("unknown theme '{}' (expected light, dark, toggle)", other).into());
        }
    };

    if json {
        let out = ThemeJson {
            theme: mode.as_str().to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("theme: {}", mode.as_str());
    }
    Ok(())
}
