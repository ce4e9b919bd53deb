use ready_wrapper::{Action, ActionLog, ActionRecorder, Store, middleware};

pub const ADD_TODO: &str = "ADD_TODO";
pub const TODOS_SUCCESS: &str = "TODOS_SUCCESS";
pub const TODOS_FAILURE: &str = "TODOS_FAILURE";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TodoState {
    pub todos: Vec<String>,
    pub loading: bool,
}

pub fn reduce(mut state: TodoState, action: &Action) -> TodoState {
    if let Some(options) = action.ready_options() {
        state.loading = options.flag("show_loader");
        return state;
    }
    match action.kind() {
        ADD_TODO => {
            if let Some(title) = action.get("title").and_then(|t| t.as_str()) {
                state.todos.push(title.to_string());
            }
        }
        TODOS_SUCCESS => {
            if let Some(todos) = action.get("todos").and_then(|t| t.as_array()) {
                state.todos.extend(todos.iter().filter_map(|t| t.as_str()).map(String::from));
            }
            state.loading = false;
        }
        TODOS_FAILURE => state.loading = false,
        _ => {}
    }
    state
}

pub fn todo_action() -> Action {
    Action::new(ADD_TODO).with("payload", serde_json::json!({}))
}

/// Store with the deferred-action middleware followed by a recorder
pub fn mock_store() -> (Store<TodoState>, ActionLog) {
    let log = ActionLog::new();
    let store = Store::builder(TodoState::default(), reduce)
        .add_middleware(Box::new(middleware()))
        .add_middleware(Box::new(ActionRecorder::new(log.clone())))
        .build();
    (store, log)
}
