//! LoggingMiddleware - logs all plain actions for debugging

use super::{Middleware, Next};
use crate::action::{Dispatchable, READY_ACTION};
use crate::error::Pending;
use crate::store::{State, Store};
use log::Level;

/// LoggingMiddleware - logs every plain action that passes through
///
/// Deferred actions are logged by kind only; register it after
/// `ReadyMiddleware` to see just the actions that reach the reducer.
#[derive(Debug, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

/// Level and message logged for `action`
fn log_record<S>(action: &Dispatchable<S>) -> (Level, String) {
    match action {
        Dispatchable::Plain(plain) if plain.kind() == READY_ACTION => (
            Level::Debug,
            format!("Ready: {:?}", plain.ready_options().unwrap_or_default()),
        ),
        Dispatchable::Plain(plain) => (Level::Debug, format!("Action: {:?}", plain)),
        Dispatchable::Deferred(_) => (Level::Trace, "Deferred action passing through".to_string()),
    }
}

impl<S: State> Middleware<S> for LoggingMiddleware {
    fn handle(&self, _store: &Store<S>, action: Dispatchable<S>, next: Next<'_, S>) -> Pending {
        let (level, message) = log_record(&action);
        log::log!(level, "{}", message);

        // Always continue to next middleware
        next.run(action)
    }
}
