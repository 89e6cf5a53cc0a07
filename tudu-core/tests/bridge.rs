//! End-to-end tests for the persistence bridge: a store wired to storage
//! writes after every change and restores its state in the next session.

use std::fs;

use tudu_core::{
    reduce, AppState, NoopMiddleware, Storage, StoreWithMiddleware, Task, TodoAction, Visibility,
};

fn new_store() -> StoreWithMiddleware<AppState, TodoAction, NoopMiddleware> {
    StoreWithMiddleware::new(AppState::default(), reduce, NoopMiddleware)
}

fn add(id: u64, text: &str) -> TodoAction {
    TodoAction::TaskAdd {
        id,
        text: text.into(),
        completed: false,
    }
}

#[test]
fn state_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    // First session: build up some state.
    let mut store = new_store();
    Storage::new(&path).attach(&mut store);
    store.dispatch(add(1, "pack bags"));
    store.dispatch(add(2, "book flights"));
    store.dispatch(TodoAction::TaskToggle(1));
    store.dispatch(TodoAction::VisibilitySet(Visibility::Active));
    let final_state = store.state().clone();

    // Second session: a fresh store picks the state back up.
    let mut revived = new_store();
    Storage::new(&path).attach(&mut revived);
    assert_eq!(revived.state(), &final_state);
    assert_eq!(revived.state().visibility, Visibility::Active);
    assert!(revived.state().tasks[0].completed);
}

#[test]
fn every_change_rewrites_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut store = new_store();
    Storage::new(&path).attach(&mut store);

    store.dispatch(add(1, "one"));
    let after_add = Storage::new(&path).load().unwrap().unwrap();
    assert_eq!(after_add.tasks.len(), 1);

    store.dispatch(TodoAction::TaskDelete(1));
    let after_delete = Storage::new(&path).load().unwrap().unwrap();
    assert!(after_delete.tasks.is_empty());
}

#[test]
fn noop_dispatch_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut store = new_store();
    Storage::new(&path).attach(&mut store);

    // Unknown ids are identity transitions; no notification, no file.
    store.dispatch(TodoAction::TaskDelete(42));
    store.dispatch(TodoAction::TaskToggle(42));
    assert!(!path.exists());
}

#[test]
fn missing_file_keeps_the_default_state() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = new_store();
    Storage::new(dir.path().join("absent.json")).attach(&mut store);
    assert_eq!(store.state(), &AppState::default());
}

#[test]
fn corrupt_file_falls_back_to_the_default_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    fs::write(&path, "{\"taskList\": 12}").unwrap();

    let mut store = new_store();
    Storage::new(&path).attach(&mut store);
    assert_eq!(store.state(), &AppState::default());

    // The session still works, and the next change replaces the bad file.
    store.dispatch(add(1, "fresh start"));
    let reloaded = Storage::new(&path).load().unwrap().unwrap();
    assert_eq!(reloaded.tasks, vec![Task::new(1, "fresh start")]);
}

#[test]
fn replayed_state_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let payload = AppState {
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

    let mut store = new_store();
    Storage::new(&path).attach(&mut store);
    store.dispatch(TodoAction::StateReplace(payload.clone()));

    assert_eq!(Storage::new(&path).load().unwrap(), Some(payload));
}
