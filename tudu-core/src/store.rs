//! Centralized state store with reducer pattern

use crate::action::Action;

/// A pure transition function: computes the next state from the current
/// state and an action, without mutating the input.
pub type Reducer<S, A> = fn(&S, A) -> S;

/// Callback invoked with the new state after every state-changing dispatch.
pub type Listener<S> = Box<dyn FnMut(&S)>;

/// Handle for a registered listener, returned by [`Store::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerKey(usize);

/// Centralized state store with Redux-like reducer pattern
///
/// The store holds the application state and provides a single point
/// for state mutations through the `dispatch` method. Consumers observe
/// changes either through the `bool` returned by `dispatch` or by
/// registering a listener with `subscribe`.
///
/// # Example
/// ```
/// use tudu_core::store::Store;
/// use tudu_core::{reduce, AppState, TodoAction};
///
/// let mut store = Store::new(AppState::default(), reduce);
/// store.dispatch(TodoAction::TaskAdd {
///     id: 1,
///     text: "write docs".into(),
///     completed: false,
/// });
/// assert_eq!(store.state().tasks.len(), 1);
/// ```
pub struct Store<S, A: Action> {
    state: S,
    reducer: Reducer<S, A>,
    listeners: Vec<(ListenerKey, Listener<S>)>,
    next_key: usize,
}

impl<S: PartialEq, A: Action> Store<S, A> {
    /// Create a new store with initial state and reducer
    pub fn new(state: S, reducer: Reducer<S, A>) -> Self {
        Self {
            state,
            reducer,
            listeners: Vec::new(),
            next_key: 0,
        }
    }

    /// Dispatch an action to the store
    ///
    /// The reducer computes the next state from the current state and the
    /// action. If the result differs from the previous state, listeners are
    /// notified synchronously, in subscription order, with the new state.
    /// Returns `true` if the state changed and a re-render is needed.
    pub fn dispatch(&mut self, action: A) -> bool {
        let next = (self.reducer)(&self.state, action);
        let changed = next != self.state;
        self.state = next;
        if changed {
            for (_, listener) in &mut self.listeners {
                listener(&self.state);
            }
        }
        changed
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Register a listener called after every state-changing dispatch.
    ///
    /// Returns a key that can be passed to [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe(&mut self, listener: impl FnMut(&S) + 'static) -> ListenerKey {
        let key = ListenerKey(self.next_key);
        self.next_key += 1;
        self.listeners.push((key, Box::new(listener)));
        key
    }

    /// Remove a previously registered listener.
    ///
    /// Returns `false` if the key was already unsubscribed.
    pub fn unsubscribe(&mut self, key: ListenerKey) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(k, _)| *k != key);
        self.listeners.len() != before
    }
}

/// Store with middleware support
///
/// Wraps a `Store` and allows middleware to intercept actions
/// before and after they are processed by the reducer.
pub struct StoreWithMiddleware<S, A: Action, M: Middleware<A>> {
    store: Store<S, A>,
    middleware: M,
}

impl<S: PartialEq, A: Action, M: Middleware<A>> StoreWithMiddleware<S, A, M> {
    /// Create a new store with middleware
    pub fn new(state: S, reducer: Reducer<S, A>, middleware: M) -> Self {
        Self {
            store: Store::new(state, reducer),
            middleware,
        }
    }

    /// Dispatch an action through middleware and store
    pub fn dispatch(&mut self, action: A) -> bool {
        self.middleware.before(&action);
        let changed = self.store.dispatch(action.clone());
        self.middleware.after(&action, changed);
        changed
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &S {
        self.store.state()
    }

    /// Register a listener on the wrapped store.
    pub fn subscribe(&mut self, listener: impl FnMut(&S) + 'static) -> ListenerKey {
        self.store.subscribe(listener)
    }

    /// Remove a previously registered listener.
    pub fn unsubscribe(&mut self, key: ListenerKey) -> bool {
        self.store.unsubscribe(key)
    }

    /// Get a reference to the middleware
    pub fn middleware(&self) -> &M {
        &self.middleware
    }

    /// Get a mutable reference to the middleware
    pub fn middleware_mut(&mut self) -> &mut M {
        &mut self.middleware
    }
}

/// Middleware trait for intercepting actions
///
/// Implement this trait to add logging or other cross-cutting concerns
/// to your store.
pub trait Middleware<A: Action> {
    /// Called before the action is dispatched to the reducer
    fn before(&mut self, action: &A);

    /// Called after the action is processed by the reducer
    fn after(&mut self, action: &A, state_changed: bool);
}

/// A no-op middleware that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl<A: Action> Middleware<A> for NoopMiddleware {
    fn before(&mut self, _action: &A) {}
    fn after(&mut self, _action: &A, _state_changed: bool) {}
}

/// Middleware that logs actions (for debugging)
#[derive(Debug, Clone, Default)]
pub struct LoggingMiddleware {
    /// Whether to log before dispatch
    pub log_before: bool,
    /// Whether to log after dispatch
    pub log_after: bool,
}

impl LoggingMiddleware {
    /// Create a new logging middleware with default settings (log after only)
    pub fn new() -> Self {
        Self {
            log_before: false,
            log_after: true,
        }
    }

    /// Create a logging middleware that logs both before and after
    pub fn verbose() -> Self {
        Self {
            log_before: true,
            log_after: true,
        }
    }
}

impl<A: Action> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, action: &A) {
        if self.log_before {
            tracing::debug!(action = %action.name(), "Dispatching action");
        }
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        if self.log_after {
            tracing::debug!(
                action = %action.name(),
                state_changed = state_changed,
                "Action processed"
            );
        }
    }
}
