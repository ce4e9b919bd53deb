//! ActionRecorder - keeps every plain action it forwards
//!
//! Plays the part of a mock store in tests: register it after
//! `ReadyMiddleware` and the log holds exactly the actions that reached the
//! reducer, in order.

use super::{Middleware, Next};
use crate::action::{Action, Dispatchable};
use crate::error::Pending;
use crate::store::{State, Store};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared, ordered record of dispatched plain actions
#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    actions: Arc<Mutex<Vec<Action>>>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actions(&self) -> Vec<Action> {
        self.lock().clone()
    }

    /// `type` tags in dispatch order
    pub fn kinds(&self) -> Vec<String> {
        self.lock().iter().map(|a| a.kind().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn push(&self, action: Action) {
        self.lock().push(action);
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Action>> {
        self.actions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Pass-through middleware appending plain actions to an [`ActionLog`]
#[derive(Debug, Clone, Default)]
pub struct ActionRecorder {
    log: ActionLog,
}

impl ActionRecorder {
    pub fn new(log: ActionLog) -> Self {
        Self { log }
    }

    pub fn log(&self) -> &ActionLog {
        &self.log
    }
}

impl<S: State> Middleware<S> for ActionRecorder {
    fn handle(&self, _store: &Store<S>, action: Dispatchable<S>, next: Next<'_, S>) -> Pending {
        if let Dispatchable::Plain(plain) = &action {
            self.log.push(plain.clone());
        }
        next.run(action)
    }
}
