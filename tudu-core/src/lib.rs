//! Core state management for tudu
//!
//! The task list lives in a single [`Store`], every change goes through the
//! pure [`reduce`] function as a dispatched [`TodoAction`], and [`Storage`]
//! keeps the latest state on disk across sessions.
//!
//! # Core Concepts
//!
//! - **State**: [`AppState`] - the task list plus the visibility filter
//! - **Actions**: [`TodoAction`] - the five intents that can change state
//! - **Reducer**: [`reduce`] - pure `(state, action) -> state` transition
//! - **Store**: dispatch entry point with subscribe/unsubscribe
//! - **Persistence**: load once at startup, save after every change
//!
//! # Basic Example
//!
//! ```
//! use tudu_core::{reduce, AppState, Store, TodoAction};
//!
//! let mut store = Store::new(AppState::default(), reduce);
//! store.dispatch(TodoAction::TaskAdd {
//!     id: store.state().next_id(),
//!     text: "read the docs".into(),
//!     completed: false,
//! });
//!
//! assert_eq!(store.state().tasks.len(), 1);
//! ```

pub mod action;
pub mod persist;
pub mod reducer;
pub mod state;
pub mod store;

// Core trait exports
pub use action::{Action, TodoAction};

// State exports
pub use state::{AppState, Task, Visibility};

// Reducer exports
pub use reducer::reduce;

// Store exports
pub use store::{
    Listener, ListenerKey, LoggingMiddleware, Middleware, NoopMiddleware, Reducer, Store,
    StoreWithMiddleware,
};

// Persistence exports
pub use persist::{Storage, StorageError};
