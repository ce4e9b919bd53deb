use crate::action::{Action, Dispatchable};
use crate::capabilities::Capabilities;
use crate::error::{DispatchError, Pending, settled};
use crate::middleware::{Middleware, Next};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Anything a store can hold
pub trait State: Clone + Send + 'static {}

impl<T: Clone + Send + 'static> State for T {}

/// Pure state transition: `(state, action) -> state`
pub type Reducer<S> = Box<dyn Fn(S, &Action) -> S + Send + Sync>;

/// Redux-style Store that holds state and dispatches actions
///
/// - Actions flow through the middleware chain, then the reducer
/// - The reducer replaces the state on each plain action
/// - Cloning a store yields another handle to the same state
///
/// ```text
/// Action → Middleware Chain → Reducer → State
/// ```
pub struct Store<S> {
    inner: Arc<Inner<S>>,
}

struct Inner<S> {
    state: Mutex<S>,
    reducer: Reducer<S>,
    middleware: Vec<Box<dyn Middleware<S>>>,
}

impl<S: State> Store<S> {
    /// Create a store without middleware
    pub fn new<R>(initial_state: S, reducer: R) -> Self
    where
        R: Fn(S, &Action) -> S + Send + Sync + 'static,
    {
        Self::builder(initial_state, reducer).build()
    }

    pub fn builder<R>(initial_state: S, reducer: R) -> StoreBuilder<S>
    where
        R: Fn(S, &Action) -> S + Send + Sync + 'static,
    {
        StoreBuilder {
            state: initial_state,
            reducer: Box::new(reducer),
            middleware: Vec::new(),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> S {
        self.lock_state().clone()
    }

    /// The `{dispatch, get_state}` bundle bound to this store
    pub fn capabilities(&self) -> Capabilities<S> {
        Capabilities::from_store(self)
    }

    /// Process an action through the middleware chain and reducer
    ///
    /// The chain runs synchronously; a plain action has been reduced by the
    /// time this returns. The returned [`Pending`] resolves to whatever the
    /// handling link produced: the action itself once reduced, or the result
    /// of a deferred action.
    pub fn dispatch(&self, action: impl Into<Dispatchable<S>>) -> Pending {
        Next::new(self, &self.inner.middleware).run(action.into())
    }

    /// End of the chain: apply the reducer
    pub(crate) fn reduce(&self, action: Dispatchable<S>) -> Pending {
        match action {
            Dispatchable::Plain(action) => {
                let mut state = self.lock_state();
                *state = (self.inner.reducer)(state.clone(), &action);
                settled(Ok(Some(action)))
            }
            Dispatchable::Deferred(_) => {
                log::warn!("Deferred action reached the reducer, no middleware handled it");
                settled(Err(DispatchError::UnhandledDeferred))
            }
        }
    }

    // A panicking reducer leaves the previous state in place
    fn lock_state(&self) -> MutexGuard<'_, S> {
        self.inner.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S> fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("middleware", &self.inner.middleware.len())
            .finish_non_exhaustive()
    }
}

/// Collects middleware before the store is shared
pub struct StoreBuilder<S> {
    state: S,
    reducer: Reducer<S>,
    middleware: Vec<Box<dyn Middleware<S>>>,
}

impl<S: State> StoreBuilder<S> {
    /// Add middleware to the store
    ///
    /// Middleware is called in the order it was added.
    pub fn add_middleware(mut self, middleware: Box<dyn Middleware<S>>) -> Self {
        self.middleware.push(middleware);
        self
    }

    pub fn build(self) -> Store<S> {
        Store {
            inner: Arc::new(Inner {
                state: Mutex::new(self.state),
                reducer: self.reducer,
                middleware: self.middleware,
            }),
        }
    }
}
