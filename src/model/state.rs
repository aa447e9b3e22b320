use serde::{Deserialize, Serialize};

use crate::model::task::{Priority, Task};

/// Exclusive status filter: which completion states are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Completed => "completed",
        }
    }

    /// Parse a status filter name ("all", "active", "completed")
    pub fn parse(s: &str) -> Option<StatusFilter> {
        match s {
            "all" => Some(StatusFilter::All),
            "active" => Some(StatusFilter::Active),
            "completed" => Some(StatusFilter::Completed),
            _ => None,
        }
    }
}

/// Display sort mode. Sorting produces a derived view only; the stored
/// task order is always insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortMode {
    /// Insertion order
    #[default]
    Custom,
    /// Newest first
    DateCreated,
    /// High before medium before low
    Priority,
}

impl SortMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Custom => "custom",
            SortMode::DateCreated => "dateCreated",
            SortMode::Priority => "priority",
        }
    }

    /// Parse a sort mode name. Accepts the wire spelling plus the
    /// CLI-friendly "created" alias.
    pub fn parse(s: &str) -> Option<SortMode> {
        match s {
            "custom" => Some(SortMode::Custom),
            "created" | "dateCreated" => Some(SortMode::DateCreated),
            "priority" => Some(SortMode::Priority),
            _ => None,
        }
    }
}

/// Active filter state. `status` is exclusive-select; `priority` is
/// toggle-select (re-selecting the active value clears it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Filters {
    #[serde(default)]
    pub status: StatusFilter,
    #[serde(default)]
    pub priority: Option<Priority>,
}

/// The persisted bundle of tasks, filters, and sort mode, written as one
/// JSON blob under one storage key. The transient search query is never
/// part of this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub filters: Filters,
    #[serde(default)]
    pub sort_by: SortMode,
}

/// Persisted theme preference (stored as a raw string, not JSON)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a stored theme string; anything unrecognized falls back to light
    pub fn parse(s: &str) -> ThemeMode {
        match s.trim() {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn toggled(self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}
