//! ReadyMiddleware - runs deferred actions with the store's capabilities

use super::{Middleware, Next};
use crate::action::Dispatchable;
use crate::error::Pending;
use crate::store::{State, Store};

/// Runs deferred actions produced by `ready` / `wrap`
///
/// Deferred actions are executed immediately with a fresh capability bundle
/// and never reach later middleware or the reducer. Plain actions are passed
/// to `next` unchanged. Register it ahead of middleware that only
/// understands plain actions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadyMiddleware;

impl ReadyMiddleware {
    pub fn new() -> Self {
        Self
    }
}

/// Build the deferred-action middleware
pub fn middleware() -> ReadyMiddleware {
    ReadyMiddleware::new()
}

impl<S: State> Middleware<S> for ReadyMiddleware {
    fn handle(&self, store: &Store<S>, action: Dispatchable<S>, next: Next<'_, S>) -> Pending {
        match action {
            Dispatchable::Deferred(deferred) => {
                log::debug!("ReadyMiddleware: running {:?}", deferred);
                deferred.run(store.capabilities())
            }
            plain @ Dispatchable::Plain(_) => next.run(plain),
        }
    }
}
