//! Dispatch errors and the pending-result types shared across the crate

use crate::action::Action;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use thiserror::Error;

/// Rejection reason when `ready`/`wrap` is given something that cannot be called
pub const INVALID_CALLBACK: &str = "Invalid callback function!";

/// BoxFuture type alias for pending dispatch results
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Final result of a dispatch: whatever the dispatched work produced
pub type Completion = Result<Option<Action>, DispatchError>;

/// A pending dispatch result, returned by every dispatch
///
/// Like any future it only makes progress while polled. The synchronous part
/// of a dispatch (the middleware chain, the reducer, a `READY_ACTION`
/// sentinel) has already happened when `dispatch` returns; the deferred
/// callback runs as the `Pending` is awaited or spawned. Dropping it cancels
/// that remaining work.
#[must_use = "deferred work is cancelled if the pending dispatch is dropped; await or spawn it"]
pub struct Pending(BoxFuture<'static, Completion>);

impl Pending {
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Completion> + Send + 'static,
    {
        Self(Box::pin(future))
    }
}

impl Future for Pending {
    type Output = Completion;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Completion> {
        self.get_mut().0.as_mut().poll(cx)
    }
}

impl fmt::Debug for Pending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pending").finish_non_exhaustive()
    }
}

/// Errors surfaced through a dispatch's [`Pending`] result
///
/// None of these are raised synchronously; a caller only observes them by
/// awaiting the value `dispatch` returned.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The callback handed to `ready`/`wrap` is not invokable
    #[error("Invalid callback function!")]
    InvalidCallback,

    /// The callback ran and failed; its error becomes the dispatch result
    #[error(transparent)]
    Callback(#[from] anyhow::Error),

    /// A deferred action reached the reducer because nothing in the
    /// middleware chain knows how to run it
    #[error("Deferred action reached the reducer; register ReadyMiddleware first")]
    UnhandledDeferred,
}

impl DispatchError {
    /// Returns true if this is the invalid callback rejection
    pub fn is_invalid_callback(&self) -> bool {
        matches!(self, DispatchError::InvalidCallback)
    }
}

/// A pending result that has already settled
pub(crate) fn settled(completion: Completion) -> Pending {
    Pending::new(std::future::ready(completion))
}
