use serde::{Deserialize, Serialize};

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Sort rank: high sorts first
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    /// The wire/CLI spelling of this priority
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Parse a priority name ("low", "medium", "high")
    pub fn parse(s: &str) -> Option<Priority> {
        match s {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

/// A single task in the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique id, derived from the creation timestamp (millis since epoch)
    pub id: i64,
    /// Title text (never empty after creation)
    pub title: String,
    /// Completion flag
    pub completed: bool,
    /// Priority level
    pub priority: Priority,
    /// Optional due date, kept as entered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Creation timestamp (millis since epoch)
    pub date_created: i64,
}

impl Task {
    /// Create a new, not-yet-completed task
    pub fn new(
        id: i64,
        title: String,
        due_date: Option<String>,
        priority: Priority,
        date_created: i64,
    ) -> Self {
        Task {
            id,
            title,
            completed: false,
            priority,
            due_date,
            date_created,
        }
    }
}
