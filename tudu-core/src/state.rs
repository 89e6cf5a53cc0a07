//! Application state - single source of truth
//!
//! State is immutable from the consumer's perspective: the UI receives
//! `&AppState` snapshots, and only the reducer produces new values.

use serde::{Deserialize, Serialize};

/// A single to-do item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id, assigned by the caller (see [`AppState::next_id`]).
    /// The core trusts it and performs no collision check.
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

impl Task {
    /// Create a not-yet-completed task.
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// Display filter for the task list.
///
/// Governs only which tasks are shown; it never deletes or mutates them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    All,
    Active,
    Completed,
}

impl Visibility {
    /// Whether a task passes this filter.
    pub fn admits(&self, task: &Task) -> bool {
        match self {
            Visibility::All => true,
            Visibility::Active => !task.completed,
            Visibility::Completed => task.completed,
        }
    }

    /// The next filter in All -> Active -> Completed -> All order.
    pub fn cycle(&self) -> Self {
        match self {
            Visibility::All => Visibility::Active,
            Visibility::Active => Visibility::Completed,
            Visibility::Completed => Visibility::All,
        }
    }
}

/// The complete application state: the task list plus the current filter.
///
/// Serializes to the persisted wire shape: the task vector is stored under
/// the `taskList` key, `Visibility` as a lowercase string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Insertion order is display order.
    #[serde(rename = "taskList")]
    pub tasks: Vec<Task>,
    pub visibility: Visibility,
}

impl AppState {
    /// Id for the next new task: one past the current maximum, 1 for an
    /// empty list. Computing this is the caller's job, not the reducer's.
    pub fn next_id(&self) -> u64 {
        self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    /// Tasks that pass the current visibility filter, in display order.
    pub fn visible_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| self.visibility.admits(t))
    }
}
