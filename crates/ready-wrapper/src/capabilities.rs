//! The capability bundle handed to deferred actions
//!
//! A deferred action never sees the store itself, only these two handles.
//! Both are bound to the store the middleware intercepted the dispatch on.

use crate::action::Dispatchable;
use crate::error::Pending;
use crate::store::{State, Store};
use std::fmt;

/// Dispatches actions back into the store's full middleware chain
///
/// Dispatching from inside a deferred action goes through every middleware
/// again, so a callback may itself dispatch further deferred actions.
pub struct Dispatcher<S> {
    store: Store<S>,
}

impl<S: State> Dispatcher<S> {
    pub(crate) fn new(store: Store<S>) -> Self {
        Self { store }
    }

    /// Dispatch a plain or deferred action
    ///
    /// The synchronous part of the dispatch (middleware chain and reducer for
    /// plain actions) runs before this returns.
    pub fn dispatch(&self, action: impl Into<Dispatchable<S>>) -> Pending {
        self.store.dispatch(action)
    }
}

impl<S> Clone for Dispatcher<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S> fmt::Debug for Dispatcher<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}

/// Reads the store's current state
pub struct GetState<S> {
    store: Store<S>,
}

impl<S: State> GetState<S> {
    pub(crate) fn new(store: Store<S>) -> Self {
        Self { store }
    }

    /// Snapshot of the state at call time
    pub fn get(&self) -> S {
        self.store.state()
    }
}

impl<S> Clone for GetState<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S> fmt::Debug for GetState<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GetState").finish_non_exhaustive()
    }
}

/// `{dispatch, get_state}` for one store
pub struct Capabilities<S> {
    pub dispatch: Dispatcher<S>,
    pub get_state: GetState<S>,
}

impl<S: State> Capabilities<S> {
    /// Bundle sourced directly from `store`
    pub fn from_store(store: &Store<S>) -> Self {
        Self {
            dispatch: Dispatcher::new(store.clone()),
            get_state: GetState::new(store.clone()),
        }
    }
}

impl<S> Clone for Capabilities<S> {
    fn clone(&self) -> Self {
        Self {
            dispatch: self.dispatch.clone(),
            get_state: self.get_state.clone(),
        }
    }
}

impl<S> fmt::Debug for Capabilities<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capabilities")
            .field("dispatch", &self.dispatch)
            .field("get_state", &self.get_state)
            .finish()
    }
}
