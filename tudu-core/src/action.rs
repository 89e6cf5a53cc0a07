//! Action trait and the application action set

use std::fmt::Debug;

use crate::state::{AppState, Visibility};

/// Marker trait for actions that can be dispatched to the store
///
/// Actions represent intents to change state. They should be:
/// - Clone: Actions may be logged, replayed, or sent to multiple handlers
/// - Debug: For debugging and logging
/// - Send + 'static: For async dispatch across threads
pub trait Action: Clone + Debug + Send + 'static {
    /// Get the action name for logging and filtering
    fn name(&self) -> &'static str;
}

/// Everything that can happen to the task list.
#[derive(Clone, Debug, PartialEq)]
pub enum TodoAction {
    /// Append a fully-formed task to the end of the list. The id is
    /// caller-assigned and not checked for collisions; the text is taken
    /// as-is (validation happens at the edge that builds the action).
    TaskAdd {
        id: u64,
        text: String,
        completed: bool,
    },
    /// Remove the first task with this id. Unknown ids are a no-op.
    TaskDelete(u64),
    /// Flip `completed` on the first task with this id. Unknown ids are a no-op.
    TaskToggle(u64),
    /// Replace the display filter. The task list is untouched.
    VisibilitySet(Visibility),
    /// Replace the entire state. Used by the persistence bridge at startup.
    StateReplace(AppState),
}

impl Action for TodoAction {
    fn name(&self) -> &'static str {
        match self {
            TodoAction::TaskAdd { .. } => "TaskAdd",
            TodoAction::TaskDelete(_) => "TaskDelete",
            TodoAction::TaskToggle(_) => "TaskToggle",
            TodoAction::VisibilitySet(_) => "VisibilitySet",
            TodoAction::StateReplace(_) => "StateReplace",
        }
    }
}
