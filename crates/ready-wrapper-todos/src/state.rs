use ready_wrapper::Action;
use serde::Serialize;

pub const ADD_TODO: &str = "ADD_TODO";
pub const TODOS_SUCCESS: &str = "TODOS_SUCCESS";
pub const TODOS_FAILURE: &str = "TODOS_FAILURE";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TodoState {
    pub todos: Vec<String>,
    /// Set by a ready notification asking for a loader, cleared by the fetch result
    pub loading: bool,
    pub last_error: Option<String>,
}

pub fn reduce(mut state: TodoState, action: &Action) -> TodoState {
    if let Some(options) = action.ready_options() {
        if options.flag("show_loader") {
            state.loading = true;
        }
        return state;
    }

    match action.kind() {
        ADD_TODO => {
            if let Some(title) = action.get("title").and_then(|t| t.as_str()) {
                state.todos.push(title.to_string());
            }
        }
        TODOS_SUCCESS => {
            let todos = action
                .get("todos")
                .and_then(|t| t.as_array())
                .into_iter()
                .flatten()
                .filter_map(|t| t.as_str())
                .map(String::from);
            state.todos.extend(todos);
            state.loading = false;
            state.last_error = None;
        }
        TODOS_FAILURE => {
            state.loading = false;
            state.last_error = action
                .get("errors")
                .and_then(|e| e.as_str())
                .map(String::from);
        }
        _ => {}
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ready_wrapper::{READY_ACTION, Store};
    use serde_json::json;

    fn ready_action(options: serde_json::Value) -> Action {
        serde_json::from_value(json!({"type": READY_ACTION, "options": options})).unwrap()
    }

    #[test]
    fn test_ready_with_loader_sets_loading() {
        let state = reduce(TodoState::default(), &ready_action(json!({"show_loader": true})));
        assert!(state.loading);
    }

    #[test]
    fn test_ready_without_loader_leaves_state() {
        let state = reduce(TodoState::default(), &ready_action(json!({})));
        assert_eq!(state, TodoState::default());
    }

    #[test]
    fn test_todos_success_clears_loading() {
        let loading = TodoState {
            loading: true,
            ..TodoState::default()
        };
        let action = Action::new(TODOS_SUCCESS).with("todos", vec!["a", "b"]);

        let state = reduce(loading, &action);

        assert_eq!(state.todos, vec!["a", "b"]);
        assert!(!state.loading);
    }

    #[test]
    fn test_todos_failure_records_error() {
        let action = Action::new(TODOS_FAILURE).with("errors", "connection refused");

        let state = reduce(TodoState::default(), &action);

        assert_eq!(state.last_error.as_deref(), Some("connection refused"));
    }

    #[tokio::test]
    async fn test_reducer_in_store() {
        let store = Store::new(TodoState::default(), reduce);

        store
            .dispatch(Action::new(ADD_TODO).with("title", "milk"))
            .await
            .unwrap();

        assert_eq!(store.state().todos, vec!["milk"]);
    }
}
