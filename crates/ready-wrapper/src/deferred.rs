//! Deferred actions and the `ready` / `wrap` wrappers
//!
//! A deferred action is dispatched in place of a plain action. When the
//! [`ReadyMiddleware`](crate::ReadyMiddleware) sees one, it runs it with the
//! store's [`Capabilities`] and hands back the [`Pending`] result.

use crate::action::{Action, Options, READY_ACTION};
use crate::capabilities::{Capabilities, Dispatcher, GetState};
use crate::error::{Completion, DispatchError, Pending, settled};
use crate::store::State;
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

type CallbackFn<S> = dyn Fn(Dispatcher<S>, GetState<S>) -> Pending + Send + Sync;
type DeferredFn<S> = dyn Fn(Capabilities<S>) -> Pending + Send + Sync;

/// The work wrapped by `ready` / `wrap`
///
/// `Invalid` holds whatever was passed instead of something callable. It is
/// accepted at construction and only rejected when the deferred action runs.
pub enum Callback<S> {
    Invokable(Arc<CallbackFn<S>>),
    Invalid(Value),
}

impl<S: State> Callback<S> {
    /// Wrap an async callback receiving `(dispatch, get_state)`
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(Dispatcher<S>, GetState<S>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Completion> + Send + 'static,
    {
        Callback::Invokable(Arc::new(
            move |dispatch: Dispatcher<S>, get_state: GetState<S>| -> Pending {
                Pending::new(f(dispatch, get_state))
            },
        ))
    }

    fn validate(&self) -> Result<Arc<CallbackFn<S>>, DispatchError> {
        match self {
            Callback::Invokable(f) => Ok(Arc::clone(f)),
            Callback::Invalid(value) => {
                log::warn!("Rejecting non-invokable callback: {}", value);
                Err(DispatchError::InvalidCallback)
            }
        }
    }
}

impl<S, F, Fut> From<F> for Callback<S>
where
    S: State,
    F: Fn(Dispatcher<S>, GetState<S>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Completion> + Send + 'static,
{
    fn from(f: F) -> Self {
        Callback::new(f)
    }
}

impl<S> From<&str> for Callback<S> {
    fn from(value: &str) -> Self {
        Callback::Invalid(Value::String(value.to_string()))
    }
}

impl<S> From<String> for Callback<S> {
    fn from(value: String) -> Self {
        Callback::Invalid(Value::String(value))
    }
}

impl<S> From<Value> for Callback<S> {
    fn from(value: Value) -> Self {
        Callback::Invalid(value)
    }
}

impl<S> Clone for Callback<S> {
    fn clone(&self) -> Self {
        match self {
            Callback::Invokable(f) => Callback::Invokable(Arc::clone(f)),
            Callback::Invalid(value) => Callback::Invalid(value.clone()),
        }
    }
}

impl<S> fmt::Debug for Callback<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callback::Invokable(_) => f.write_str("Invokable(..)"),
            Callback::Invalid(value) => f.debug_tuple("Invalid").field(value).finish(),
        }
    }
}

/// A callable dispatched in place of a plain action
///
/// Stateless and reusable: every [`run`](DeferredAction::run) repeats the
/// full behavior, and clones share the same underlying function.
pub struct DeferredAction<S> {
    run: Arc<DeferredFn<S>>,
}

impl<S: State> DeferredAction<S> {
    /// Build a deferred action from any function of the capability bundle
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Capabilities<S>) -> Pending + Send + Sync + 'static,
    {
        Self { run: Arc::new(f) }
    }

    /// Execute with the given capabilities
    pub fn run(&self, capabilities: Capabilities<S>) -> Pending {
        (self.run)(capabilities)
    }
}

impl<S> Clone for DeferredAction<S> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<S> fmt::Debug for DeferredAction<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredAction").finish_non_exhaustive()
    }
}

/// Defer `callback`, announcing it with a `READY_ACTION` carrying `options`
///
/// When run, the sentinel `{type: "READY_ACTION", options}` is dispatched
/// before `run` returns; `callback` is invoked once the sentinel's dispatch
/// has settled, and its result becomes the result of the whole dispatch.
/// A non-invokable callback rejects with [`DispatchError::InvalidCallback`]
/// and nothing is dispatched.
pub fn ready<S, C>(callback: C, options: Options) -> DeferredAction<S>
where
    S: State,
    C: Into<Callback<S>>,
{
    deferred(callback.into(), Some(options))
}

/// Defer `callback` without the `READY_ACTION` sentinel
pub fn wrap<S, C>(callback: C) -> DeferredAction<S>
where
    S: State,
    C: Into<Callback<S>>,
{
    deferred(callback.into(), None)
}

fn deferred<S: State>(callback: Callback<S>, sentinel: Option<Options>) -> DeferredAction<S> {
    DeferredAction::new(move |capabilities: Capabilities<S>| -> Pending {
        let invoke = match callback.validate() {
            Ok(invoke) => invoke,
            Err(e) => return settled(Err(e)),
        };
        let Capabilities {
            dispatch,
            get_state,
        } = capabilities;

        let announced = sentinel.clone().map(|options| {
            log::debug!("Dispatching {} with options {:?}", READY_ACTION, options);
            dispatch.dispatch(Action::ready(options))
        });

        Pending::new(async move {
            if let Some(announced) = announced {
                announced.await?;
            }
            invoke(dispatch, get_state).await
        })
    })
}
