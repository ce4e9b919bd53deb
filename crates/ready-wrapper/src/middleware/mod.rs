//! Middleware system for the store
//!
//! Middleware sits between `dispatch` and the reducer. Each link receives the
//! action and a [`Next`] handle to the rest of the chain, and decides whether
//! to forward, replace or short-circuit.
//!
//! ```text
//! dispatch → Middleware → Middleware → … → Reducer → State
//! ```
//!
//! This is the `store => next => action => result` shape: `handle` gets the
//! store, the action and `next`, and returns the dispatch's [`Pending`] result.
//!
//! ## Example
//!
//! ```rust
//! use ready_wrapper::{Dispatchable, Middleware, Next, Pending, State, Store};
//!
//! struct Passthrough;
//!
//! impl<S: State> Middleware<S> for Passthrough {
//!     fn handle(&self, _store: &Store<S>, action: Dispatchable<S>, next: Next<'_, S>) -> Pending {
//!         next.run(action)
//!     }
//! }
//! ```

use crate::action::Dispatchable;
use crate::error::Pending;
use crate::store::{State, Store};

mod logging;
mod ready;
mod recorder;

pub use logging::LoggingMiddleware;
pub use ready::{ReadyMiddleware, middleware};
pub use recorder::{ActionLog, ActionRecorder};

/// Middleware trait - handles actions before they reach the reducer
///
/// Called in registration order. Middleware is shared by every handle of the
/// store and may be re-entered when it dispatches, so state it keeps needs
/// interior mutability.
pub trait Middleware<S>: Send + Sync {
    /// Handle an action
    ///
    /// - `store`: The store the action was dispatched on
    /// - `action`: The action being dispatched
    /// - `next`: The rest of the chain; not calling it consumes the action
    fn handle(&self, store: &Store<S>, action: Dispatchable<S>, next: Next<'_, S>) -> Pending;
}

/// The remainder of the middleware chain, ending in the reducer
pub struct Next<'a, S> {
    store: &'a Store<S>,
    chain: &'a [Box<dyn Middleware<S>>],
}

impl<'a, S: State> Next<'a, S> {
    pub(crate) fn new(store: &'a Store<S>, chain: &'a [Box<dyn Middleware<S>>]) -> Self {
        Self { store, chain }
    }

    /// Forward `action` to the next link
    pub fn run(self, action: Dispatchable<S>) -> Pending {
        match self.chain.split_first() {
            Some((middleware, rest)) => {
                middleware.handle(self.store, action, Next::new(self.store, rest))
            }
            None => self.store.reduce(action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::error::settled;
    use std::sync::{Arc, Mutex};

    /// Records its own name, then forwards
    struct Tracing {
        name: &'static str,
        trail: Arc<Mutex<Vec<&'static str>>>,
    }

    impl Middleware<u32> for Tracing {
        fn handle(&self, _store: &Store<u32>, action: Dispatchable<u32>, next: Next<'_, u32>) -> Pending {
            self.trail.lock().unwrap().push(self.name);
            next.run(action)
        }
    }

    /// Replaces every action with `INCREMENT`
    struct Rewrite;

    impl Middleware<u32> for Rewrite {
        fn handle(&self, _store: &Store<u32>, _action: Dispatchable<u32>, next: Next<'_, u32>) -> Pending {
            next.run(Action::new("INCREMENT").into())
        }
    }

    /// Consumes every action
    struct Swallow;

    impl Middleware<u32> for Swallow {
        fn handle(&self, _store: &Store<u32>, _action: Dispatchable<u32>, _next: Next<'_, u32>) -> Pending {
            settled(Ok(None))
        }
    }

    fn counter(count: u32, action: &Action) -> u32 {
        if action.kind() == "INCREMENT" { count + 1 } else { count }
    }

    #[tokio::test]
    async fn test_middleware_runs_in_registration_order() {
        let trail = Arc::new(Mutex::new(Vec::new()));
        let store = Store::builder(0u32, counter)
            .add_middleware(Box::new(Tracing { name: "first", trail: trail.clone() }))
            .add_middleware(Box::new(Tracing { name: "second", trail: trail.clone() }))
            .build();

        store.dispatch(Action::new("INCREMENT")).await.unwrap();

        assert_eq!(*trail.lock().unwrap(), vec!["first", "second"]);
        assert_eq!(store.state(), 1);
    }

    #[tokio::test]
    async fn test_next_forwards_replacement_action() {
        let store = Store::builder(0u32, counter)
            .add_middleware(Box::new(Rewrite))
            .build();

        let reduced = store.dispatch(Action::new("NOOP")).await.unwrap();

        assert_eq!(reduced, Some(Action::new("INCREMENT")));
        assert_eq!(store.state(), 1);
    }

    #[tokio::test]
    async fn test_middleware_short_circuits_rest_of_chain() {
        let trail = Arc::new(Mutex::new(Vec::new()));
        let store = Store::builder(0u32, counter)
            .add_middleware(Box::new(Swallow))
            .add_middleware(Box::new(Tracing { name: "after", trail: trail.clone() }))
            .build();

        store.dispatch(Action::new("INCREMENT")).await.unwrap();

        assert!(trail.lock().unwrap().is_empty());
        assert_eq!(store.state(), 0);
    }
}
