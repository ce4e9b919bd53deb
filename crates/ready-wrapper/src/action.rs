//! Plain actions, ready options and the dispatchable union

use crate::deferred::DeferredAction;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Type tag of the sentinel action dispatched by `ready`
pub const READY_ACTION: &str = "READY_ACTION";

/// Field of the sentinel action that carries the caller's options
const OPTIONS_FIELD: &str = "options";

/// Serialized name of the action's tag, never a payload field
const TYPE_FIELD: &str = "type";

/// A plain action: a `type` tag plus arbitrary payload fields
///
/// Serializes flat, the way reducers on the other side of a wire expect it:
/// `{"type": "ADD_TODO", "payload": {}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    kind: String,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl Action {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            fields: Map::new(),
        }
    }

    /// Add a payload field
    ///
    /// `type` is reserved for the tag and is ignored here; use
    /// [`Action::new`] to pick the kind.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key == TYPE_FIELD {
            log::warn!("Ignoring reserved field '{}' on {} action", TYPE_FIELD, self.kind);
            return self;
        }
        self.fields.insert(key, value.into());
        self
    }

    /// The action's `type` tag
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Build the sentinel `{type: READY_ACTION, options}`
    pub(crate) fn ready(options: Options) -> Self {
        Self::new(READY_ACTION).with(OPTIONS_FIELD, Value::Object(options.0))
    }

    pub fn is_ready(&self) -> bool {
        self.kind == READY_ACTION
    }

    /// Options carried by a sentinel action, `None` for any other action
    pub fn ready_options(&self) -> Option<Options> {
        if !self.is_ready() {
            return None;
        }
        match self.fields.get(OPTIONS_FIELD) {
            Some(Value::Object(map)) => Some(Options(map.clone())),
            _ => Some(Options::default()),
        }
    }
}

/// Caller-supplied options forwarded verbatim into the sentinel action
///
/// Opaque to the wrapper; reducers decide what the keys mean.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(Map<String, Value>);

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// True if `key` is present and set to `true`
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.0.get(key), Some(Value::Bool(true)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Options {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Anything the store accepts through `dispatch`
///
/// Middleware branches on this with a `match` instead of probing whether the
/// incoming value happens to be callable.
pub enum Dispatchable<S> {
    Plain(Action),
    Deferred(DeferredAction<S>),
}

impl<S> Clone for Dispatchable<S> {
    fn clone(&self) -> Self {
        match self {
            Dispatchable::Plain(action) => Dispatchable::Plain(action.clone()),
            Dispatchable::Deferred(deferred) => Dispatchable::Deferred(deferred.clone()),
        }
    }
}

impl<S> fmt::Debug for Dispatchable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dispatchable::Plain(action) => f.debug_tuple("Plain").field(action).finish(),
            Dispatchable::Deferred(deferred) => f.debug_tuple("Deferred").field(deferred).finish(),
        }
    }
}

impl<S> From<Action> for Dispatchable<S> {
    fn from(action: Action) -> Self {
        Dispatchable::Plain(action)
    }
}

impl<S> From<DeferredAction<S>> for Dispatchable<S> {
    fn from(deferred: DeferredAction<S>) -> Self {
        Dispatchable::Deferred(deferred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_action_serializes_flat() {
        let action = Action::new("ADD_TODO").with("payload", json!({}));
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({"type": "ADD_TODO", "payload": {}})
        );
    }

    #[test]
    fn test_action_deserialize() {
        let action: Action =
            serde_json::from_value(json!({"type": "TODOS_SUCCESS", "todos": ["a"]})).unwrap();
        assert_eq!(action.kind(), "TODOS_SUCCESS");
        assert_eq!(action.get("todos"), Some(&json!(["a"])));
    }

    #[test]
    fn test_type_field_is_reserved() {
        let action = Action::new("A").with("type", "B").with("title", "eggs");

        assert_eq!(action.kind(), "A");
        assert_eq!(action.get("type"), None);
        let serialized = serde_json::to_string(&action).unwrap();
        assert_eq!(serialized, r#"{"type":"A","title":"eggs"}"#);
        assert_eq!(serde_json::from_str::<Action>(&serialized).unwrap(), action);
    }

    #[test]
    fn test_ready_action_shape() {
        let options = Options::new().with("show_loader", true);
        let sentinel = Action::ready(options.clone());

        assert!(sentinel.is_ready());
        assert_eq!(
            serde_json::to_value(&sentinel).unwrap(),
            json!({"type": "READY_ACTION", "options": {"show_loader": true}})
        );
        assert_eq!(sentinel.ready_options(), Some(options));
    }

    #[test]
    fn test_ready_options_default_empty() {
        let sentinel = Action::ready(Options::default());
        assert_eq!(
            serde_json::to_value(&sentinel).unwrap(),
            json!({"type": "READY_ACTION", "options": {}})
        );
        assert!(sentinel.ready_options().unwrap().is_empty());
    }

    #[test]
    fn test_ready_options_none_for_plain_action() {
        assert_eq!(Action::new("ADD_TODO").ready_options(), None);
    }

    #[test]
    fn test_options_flag() {
        let options = Options::new().with("show_loader", true).with("label", "todos");
        assert!(options.flag("show_loader"));
        assert!(!options.flag("label"));
        assert!(!options.flag("missing"));
    }
}
