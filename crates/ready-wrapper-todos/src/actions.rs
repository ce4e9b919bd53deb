//! Action creators for the todo demo

use crate::config::TodosConfig;
use crate::state::{ADD_TODO, TODOS_FAILURE, TODOS_SUCCESS, TodoState};
use ready_wrapper::{Action, Callback, DeferredAction, GetState, Options, ready, wrap};
use std::time::Duration;

pub fn add_todo(title: &str) -> Action {
    Action::new(ADD_TODO).with("title", title)
}

/// `add_todo` deferred through `wrap`, no ready notification
pub fn add_todo_later(title: &str) -> DeferredAction<TodoState> {
    let action = add_todo(title);
    wrap(Callback::new(move |dispatch, _get_state| {
        dispatch.dispatch(action.clone())
    }))
}

/// Simulated remote call returning the configured seed todos
async fn fetch_todos(delay: Duration, seed: Vec<String>) -> anyhow::Result<Vec<String>> {
    tokio::time::sleep(delay).await;
    if seed.is_empty() {
        anyhow::bail!("no todos available");
    }
    Ok(seed)
}

/// Fetch todos behind a ready notification
///
/// The fetch failure is turned into `TODOS_FAILURE` rather than a rejected
/// dispatch, so the reducer can clear the loader either way.
pub fn load_todos(config: &TodosConfig) -> DeferredAction<TodoState> {
    let delay = config.fetch_delay();
    let seed = config.seed_todos.clone();

    ready(
        Callback::new(move |dispatch, get_state: GetState<TodoState>| {
            let seed = seed.clone();
            async move {
                log::debug!("Fetching todos, {} already loaded", get_state.get().todos.len());
                match fetch_todos(delay, seed).await {
                    Ok(todos) => {
                        dispatch
                            .dispatch(Action::new(TODOS_SUCCESS).with("todos", todos))
                            .await
                    }
                    Err(e) => {
                        dispatch
                            .dispatch(Action::new(TODOS_FAILURE).with("errors", e.to_string()))
                            .await
                    }
                }
            }
        }),
        Options::new().with("show_loader", config.show_loader),
    )
}
