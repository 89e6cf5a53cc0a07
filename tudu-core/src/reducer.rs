//! State transitions - a pure function of (state, action)

use crate::action::TodoAction;
use crate::state::{AppState, Task};

/// Compute the next state for an action.
///
/// Never mutates its input and always returns a fully-built value, so the
/// same inputs always produce the same output and every transition can be
/// checked by plain equality.
pub fn reduce(state: &AppState, action: TodoAction) -> AppState {
    match action {
        TodoAction::TaskAdd {
            id,
            text,
            completed,
        } => {
            let mut next = state.clone();
            next.tasks.push(Task {
                id,
                text,
                completed,
            });
            next
        }
        TodoAction::TaskDelete(id) => {
            let mut next = state.clone();
            if let Some(pos) = next.tasks.iter().position(|t| t.id == id) {
                next.tasks.remove(pos);
            }
            next
        }
        TodoAction::TaskToggle(id) => {
            let mut next = state.clone();
            if let Some(task) = next.tasks.iter_mut().find(|t| t.id == id) {
                task.completed = !task.completed;
            }
            next
        }
        TodoAction::VisibilitySet(visibility) => AppState {
            visibility,
            ..state.clone()
        },
        TodoAction::StateReplace(next) => next,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Task, Visibility};

    fn initial_state() -> AppState {
        AppState {
            tasks: vec![
                Task {
                    id: 0,
                    text: "Todo 1".into(),
                    completed: false,
                },
                Task {
                    id: 1,
                    text: "Todo 2".into(),
                    completed: true,
                },
            ],
            visibility: Visibility::All,
        }
    }

    #[test]
    fn test_add_appends_last() {
        let next = reduce(
            &initial_state(),
            TodoAction::TaskAdd {
                id: 2,
                text: "Todo 3".into(),
                completed: false,
            },
        );

        assert_eq!(next.tasks.len(), 3);
        let ids: Vec<u64> = next.tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(next.tasks[2].text, "Todo 3");
        assert!(!next.tasks[2].completed);
        assert_eq!(next.visibility, Visibility::All);
    }

    #[test]
    fn test_delete_removes_matching_task() {
        let next = reduce(&initial_state(), TodoAction::TaskDelete(1));

        assert_eq!(
            next.tasks,
            vec![Task {
                id: 0,
                text: "Todo 1".into(),
                completed: false,
            }]
        );
        assert_eq!(next.visibility, Visibility::All);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let state = initial_state();
        assert_eq!(reduce(&state, TodoAction::TaskDelete(42)), state);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let state = initial_state();
        let once = reduce(&state, TodoAction::TaskDelete(1));
        let twice = reduce(&once, TodoAction::TaskDelete(1));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_delete_removes_only_first_duplicate() {
        let mut state = initial_state();
        state.tasks.push(Task::new(0, "shadowed"));

        let next = reduce(&state, TodoAction::TaskDelete(0));
        assert_eq!(next.tasks.len(), 2);
        // The later duplicate becomes reachable once the earlier one is gone.
        assert_eq!(next.tasks[1].text, "shadowed");
    }

    #[test]
    fn test_toggle_flips_completed() {
        let next = reduce(&initial_state(), TodoAction::TaskToggle(1));

        assert!(!next.tasks[1].completed);
        // The other task is untouched.
        assert_eq!(next.tasks[0], initial_state().tasks[0]);
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let state = initial_state();
        let back = reduce(
            &reduce(&state, TodoAction::TaskToggle(1)),
            TodoAction::TaskToggle(1),
        );
        assert_eq!(back, state);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let state = initial_state();
        assert_eq!(reduce(&state, TodoAction::TaskToggle(42)), state);
    }

    #[test]
    fn test_set_visibility_leaves_tasks_alone() {
        let next = reduce(
            &initial_state(),
            TodoAction::VisibilitySet(Visibility::Active),
        );

        assert_eq!(next.tasks, initial_state().tasks);
        assert_eq!(next.visibility, Visibility::Active);
    }

    #[test]
    fn test_replace_overwrites_everything() {
        let replacement = AppState {
            tasks: vec![
                Task {
                    id: 2,
                    text: "Another Todo 1".into(),
                    completed: true,
                },
                Task {
                    id: 3,
                    text: "Another Todo 2".into(),
                    completed: false,
                },
            ],
            visibility: Visibility::Completed,
        };

        let next = reduce(
            &initial_state(),
            TodoAction::StateReplace(replacement.clone()),
        );
        // Full overwrite, no merge.
        assert_eq!(next, replacement);
    }

    #[test]
    fn test_reduce_does_not_mutate_its_input() {
        let state = initial_state();
        let snapshot = state.clone();

        let _ = reduce(&state, TodoAction::TaskToggle(0));
        let _ = reduce(&state, TodoAction::TaskDelete(0));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_add_accepts_empty_text_and_duplicate_ids() {
        // The core does not validate; both are the edge's responsibility.
        let state = reduce(
            &initial_state(),
            TodoAction::TaskAdd {
                id: 0,
                text: String::new(),
                completed: false,
            },
        );
        assert_eq!(state.tasks.len(), 3);
        assert_eq!(state.tasks[2].text, "");
        assert_eq!(state.tasks[2].id, 0);
    }
}
