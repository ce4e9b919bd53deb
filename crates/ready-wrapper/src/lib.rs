//! Deferred actions for a Redux-style store
//!
//! An action creator can hand the store a [`DeferredAction`] instead of a plain
//! [`Action`]. The [`ReadyMiddleware`] (built with [`middleware()`]) intercepts
//! it and runs it with the store's [`Capabilities`].
//!
//! - [`ready`] dispatches a `READY_ACTION` sentinel carrying [`Options`] before
//!   the callback runs, so reducers can track loading state.
//! - [`wrap`] runs the callback without the sentinel.
//!
//! # Example
//!
//! ```no_run
//! use ready_wrapper::{Action, Callback, Options, Store, middleware, ready};
//!
//! # async fn run() -> Result<(), ready_wrapper::DispatchError> {
//! let store = Store::builder(Vec::<String>::new(), |mut todos: Vec<String>, action: &Action| {
//!     if action.kind() == "ADD_TODO" {
//!         todos.push("write docs".to_string());
//!     }
//!     todos
//! })
//! .add_middleware(Box::new(middleware()))
//! .build();
//!
//! let added = store
//!     .dispatch(ready(
//!         Callback::new(|dispatch, _get_state| async move {
//!             dispatch.dispatch(Action::new("ADD_TODO")).await
//!         }),
//!         Options::new().with("show_loader", true),
//!     ))
//!     .await?;
//!
//! assert_eq!(added.map(|a| a.kind().to_string()), Some("ADD_TODO".to_string()));
//! # Ok(())
//! # }
//! ```

mod action;
mod capabilities;
mod deferred;
mod error;
pub mod middleware;
mod store;

pub use action::{Action, Dispatchable, Options, READY_ACTION};
pub use capabilities::{Capabilities, Dispatcher, GetState};
pub use deferred::{Callback, DeferredAction, ready, wrap};
pub use error::{BoxFuture, Completion, DispatchError, INVALID_CALLBACK, Pending};
pub use middleware::{ActionLog, ActionRecorder, LoggingMiddleware, Middleware, Next, ReadyMiddleware, middleware};
pub use store::{Reducer, State, Store, StoreBuilder};
