use chrono::Utc;

use crate::io::store::{SNAPSHOT_KEY, Store, StoreError};
use crate::model::{Filters, Priority, Snapshot, SortMode, StatusFilter, Task};

/// Error type for task operations
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("task title cannot be empty")]
    EmptyTitle,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A single filter change. Status is exclusive-select; priority is
/// toggle-select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    Status(StatusFilter),
    Priority(Priority),
}

/// Owns the authoritative task collection and view state (filters, sort
/// mode, transient search query). Every mutation persists the full
/// snapshot through the store. No other component writes the collection,
/// so persistence-on-write is never bypassed.
pub struct TaskManager {
    store: Store,
    tasks: Vec<Task>,
    filters: Filters,
    sort_by: SortMode,
    /// Never persisted; resets to empty on reload
    search_query: String,
}

impl TaskManager {
    /// Load the persisted snapshot, or start empty with default view state
    pub fn load(store: Store) -> Result<TaskManager, StoreError> {
        let snapshot: Snapshot = store.load(SNAPSHOT_KEY)?.unwrap_or_default();
        Ok(TaskManager {
            store,
            tasks: snapshot.tasks,
            filters: snapshot.filters,
            sort_by: snapshot.sort_by,
            search_query: String::new(),
        })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filters(&self) -> Filters {
        self.filters
    }

    pub fn sort_by(&self) -> SortMode {
        self.sort_by
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// The store this manager persists through (the theme preference is
    /// written independently of the snapshot)
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Append a new task to the end of the collection and persist.
    /// Fails when the trimmed title is empty. Returns the assigned id.
    pub fn add_task(
        &mut self,
        title: &str,
        due_date: Option<&str>,
        priority: Priority,
    ) -> Result<i64, TaskError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }

        let now = Utc::now().timestamp_millis();
        let id = self.next_id(now);
        let due = due_date
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(String::from);

        self.tasks.push(Task::new(id, title.to_string(), due, priority, now));
        self.persist()?;
        Ok(id)
    }

    /// Remove the task with the given id (no-op if absent) and persist
    pub fn remove_task(&mut self, id: i64) -> Result<(), TaskError> {
        self.tasks.retain(|t| t.id != id);
        self.persist()?;
        Ok(())
    }

    /// Flip `completed` on the task with the given id (no-op if absent).
    /// Persists unconditionally, including on the no-op case.
    pub fn toggle_task(&mut self, id: i64) -> Result<(), TaskError> {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
        }
        self.persist()?;
        Ok(())
    }

    /// Update the transient search query. Not persisted.
    pub fn set_search_query(&mut self, query: &str) {
        self.search_query = query.to_string();
    }

    /// Update the sort mode and persist
    pub fn set_sort_by(&mut self, mode: SortMode) -> Result<(), TaskError> {
        self.sort_by = mode;
        self.persist()?;
        Ok(())
    }

    /// Apply a filter change and persist. Selecting the active priority
    /// value clears it.
    pub fn set_filter(&mut self, filter: Filter) -> Result<(), TaskError> {
        match filter {
            Filter::Status(status) => self.filters.status = status,
            Filter::Priority(priority) => {
                self.filters.priority = if self.filters.priority == Some(priority) {
                    None
                } else {
                    Some(priority)
                };
            }
        }
        self.persist()?;
        Ok(())
    }

    /// Derive the display list without mutating stored state.
    ///
    /// Pipeline, in fixed order: search query (case-insensitive substring
    /// on title), status filter, priority filter, then sort. `Custom`
    /// leaves the pipeline order (stored order after filtering) unchanged.
    pub fn filtered_tasks(&self) -> Vec<&Task> {
        let query = self.search_query.to_lowercase();

        let mut tasks: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| query.is_empty() || t.title.to_lowercase().contains(&query))
            .filter(|t| match self.filters.status {
                StatusFilter::All => true,
                StatusFilter::Active => !t.completed,
                StatusFilter::Completed => t.completed,
            })
            .filter(|t| self.filters.priority.is_none_or(|p| t.priority == p))
            .collect();

        match self.sort_by {
            SortMode::Custom => {}
            SortMode::DateCreated => tasks.sort_by_key(|t| std::cmp::Reverse(t.date_created)),
            SortMode::Priority => tasks.sort_by_key(|t| t.priority.rank()),
        }

        tasks
    }

    /// Next task id: the current time, bumped past any existing id so two
    /// adds within the same millisecond stay unique
    fn next_id(&self, now: i64) -> i64 {
        let max_id = self.tasks.iter().map(|t| t.id).max().unwrap_or(i64::MIN);
        now.max(max_id.saturating_add(1))
    }

    fn persist(&self) -> Result<(), StoreError> {
        let snapshot = Snapshot {
            tasks: self.tasks.clone(),
            filters: self.filters,
            sort_by: self.sort_by,
        };
        self.store.save(SNAPSHOT_KEY, &snapshot)
    }
}
