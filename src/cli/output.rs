use serde::Serialize;

use crate::model::{Filters, SortMode, Task};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskJson {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub priority: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub date_created: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FiltersJson {
    pub status: String,
    pub priority: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListJson {
    pub tasks: Vec<TaskJson>,
    pub filters: FiltersJson,
    pub sort_by: String,
}

#[derive(Serialize)]
pub struct AddedJson {
    pub id: i64,
    pub title: String,
}

#[derive(Serialize)]
pub struct ThemeJson {
    pub theme: String,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        id: task.id,
        title: task.title.clone(),
        completed: task.completed,
        priority: task.priority.as_str().to_string(),
        due_date: task.due_date.clone(),
        date_created: task.date_created,
    }
}

pub fn list_to_json(tasks: &[&Task], filters: Filters, sort_by: SortMode) -> ListJson {
    ListJson {
        tasks: tasks.iter().map(|t| task_to_json(t)).collect(),
        filters: FiltersJson {
            status: filters.status.as_str().to_string(),
            priority: filters.priority.map(|p| p.as_str().to_string()),
        },
        sort_by: sort_by.as_str().to_string(),
    }
}

// ---------------------------------------------------------------------------
// Human output
// ---------------------------------------------------------------------------

/// One task as a plain-text row: checkbox, id, priority, title, due date
pub fn format_task_row(task: &Task) -> String {
    let checkbox = if task.completed { "[x]" } else { "[ ]" };
    let mut row = format!(
        "{} {}  {:<6}  {}",
        checkbox,
        task.id,
        task.priority.as_str(),
        task.title
    );
    if let Some(due) = &task.due_date {
        row.push_str(&format!("  @{}", due));
    }
    row
}

/// One-line summary of the active view state, shown under listings
pub fn format_view_state(filters: Filters, sort_by: SortMode) -> String {
    let priority = match filters.priority {
        Some(p) => p.as_str(),
        None => "none",
    };
    format!(
        "status: {}  priority: {}  sort: {}",
        filters.status.as_str(),
        priority,
        sort_by.as_str()
    )
}
