//! Single-command entry points.
//!
//! Each builds `{ <command>: operand }`, wraps it under the given path and
//! forwards to [`run`]; there is no logic here beyond that.

use std::sync::Arc;

use crate::command::CommandNode;
use crate::error::UpdateError;
use crate::path::Path;
use crate::registry::CommandKind;
use crate::run::run;
use crate::value::Value;

fn command_at(path: impl Into<Path>, kind: CommandKind, operand: CommandNode) -> CommandNode {
    path.into().wrap(CommandNode::entry(kind.name(), operand))
}

/// Replace the value at `path`.
///
/// # Example
///
/// ```
/// use json_update::{set, Value};
/// use serde_json::json;
/// use std::sync::Arc;
///
/// let source = Arc::new(Value::from(json!({"a": {"b": 1}})));
/// let next = set(&source, ["a", "b"], 2).unwrap();
/// assert_eq!(next.to_json(), json!({"a": {"b": 2}}));
/// ```
pub fn set(
    source: &Arc<Value>,
    path: impl Into<Path>,
    value: impl Into<Value>,
) -> Result<Arc<Value>, UpdateError> {
    run(source, &command_at(path, CommandKind::Set, CommandNode::value(value)))
}

/// Append `value` to the array at `path`.
pub fn push(
    source: &Arc<Value>,
    path: impl Into<Path>,
    value: impl Into<Value>,
) -> Result<Arc<Value>, UpdateError> {
    run(source, &command_at(path, CommandKind::Push, CommandNode::value(value)))
}

/// Prepend `value` to the array at `path`.
pub fn unshift(
    source: &Arc<Value>,
    path: impl Into<Path>,
    value: impl Into<Value>,
) -> Result<Arc<Value>, UpdateError> {
    run(source, &command_at(path, CommandKind::Unshift, CommandNode::value(value)))
}

/// Merge `value` into the object at `path`; its keys win.
pub fn merge(
    source: &Arc<Value>,
    path: impl Into<Path>,
    value: impl Into<Value>,
) -> Result<Arc<Value>, UpdateError> {
    run(source, &command_at(path, CommandKind::Merge, CommandNode::value(value)))
}

/// Fill keys missing from the object at `path` from `value`; existing keys
/// win.
pub fn defaults(
    source: &Arc<Value>,
    path: impl Into<Path>,
    value: impl Into<Value>,
) -> Result<Arc<Value>, UpdateError> {
    run(source, &command_at(path, CommandKind::Defaults, CommandNode::value(value)))
}

/// Replace the value at `path` with whatever `factory` returns for it.
pub fn invoke<F>(
    source: &Arc<Value>,
    path: impl Into<Path>,
    factory: F,
) -> Result<Arc<Value>, UpdateError>
where
    F: Fn(&Arc<Value>) -> Arc<Value> + Send + Sync + 'static,
{
    run(
        source,
        &command_at(path, CommandKind::Invoke, CommandNode::factory(factory)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn arc(value: serde_json::Value) -> Arc<Value> {
        Arc::new(Value::from(value))
    }

    #[test]
    fn test_set_at_root_replaces_source() {
        let next = set(&arc(json!({"a": 1})), (), "replaced").unwrap();
        assert_eq!(next.to_json(), json!("replaced"));
    }

    #[test]
    fn test_set_single_key() {
        let next = set(&arc(json!({"a": 1})), "a", 2).unwrap();
        assert_eq!(next.to_json(), json!({"a": 2}));
    }

    #[test]
    fn test_push_and_unshift() {
        let source = arc(json!({"xs": [1, 2]}));
        assert_eq!(push(&source, "xs", 3).unwrap().to_json(), json!({"xs": [1, 2, 3]}));
        assert_eq!(unshift(&source, "xs", 0).unwrap().to_json(), json!({"xs": [0, 1, 2]}));
    }

    #[test]
    fn test_merge_and_defaults() {
        let source = arc(json!({"o": {"a": 1, "b": 2}}));
        assert_eq!(
            merge(&source, "o", json!({"b": 3, "c": 4})).unwrap().to_json(),
            json!({"o": {"a": 1, "b": 3, "c": 4}}),
        );
        assert_eq!(
            defaults(&source, "o", json!({"b": 9, "c": 4})).unwrap().to_json(),
            json!({"o": {"a": 1, "b": 2, "c": 4}}),
        );
    }

    #[test]
    fn test_deep_path_creates_missing_levels() {
        let next = set(&arc(json!({})), ["foo", "bar"], 1).unwrap();
        assert_eq!(next.to_json(), json!({"foo": {"bar": 1}}));
    }

    #[test]
    fn test_invoke_shortcut() {
        let next = invoke(&arc(json!({"n": 5})), "n", |old: &Arc<Value>| {
            Arc::new(Value::from(old.as_i64().unwrap_or(0) * 2))
        })
        .unwrap();
        assert_eq!(next.to_json(), json!({"n": 10}));
    }

    #[test]
    fn test_push_type_error_propagates() {
        assert_eq!(
            push(&arc(json!({"xs": 5})), "xs", 1).unwrap_err(),
            UpdateError::NotAnArray,
        );
    }
}
