//! The command interpreter.

use std::sync::Arc;

use crate::command::{CommandMap, CommandNode};
use crate::error::UpdateError;
use crate::registry::{apply, CommandKind};
use crate::value::{Value, ValueMap};

/// Interpret `commands` against `source`, producing a new value.
///
/// Neither argument is mutated. The result is freshly allocated along every
/// path a command touches; everything else keeps the same `Arc` handles as
/// `source`.
///
/// A command node is terminal iff at least one of its own keys is a
/// registered command name, scanned in [`CommandKind::ALL`] order with the
/// first match winning. A data property that happens to be named `set`,
/// `merge`, etc. is therefore read as a command; that ambiguity is part of
/// the grammar.
///
/// # Example
///
/// ```
/// use json_update::{run, CommandNode, Value};
/// use serde_json::json;
/// use std::sync::Arc;
///
/// let source = Arc::new(Value::from(json!({"user": {"name": "ada"}, "tags": ["a"]})));
/// let commands = CommandNode::from(json!({
///     "user": {"merge": {"admin": true}},
///     "tags": {"push": "b"},
/// }));
/// let next = run(&source, &commands).unwrap();
///
/// assert_eq!(
///     next.to_json(),
///     json!({"user": {"name": "ada", "admin": true}, "tags": ["a", "b"]}),
/// );
/// ```
pub fn run(source: &Arc<Value>, commands: &CommandNode) -> Result<Arc<Value>, UpdateError> {
    let map = match commands {
        CommandNode::Map(map) => map,
        // No command names and no property keys: a no-op one-level copy.
        _ => return Ok(copy_level(source)),
    };

    // A command name at this level makes the whole node an instruction for
    // `source` itself.
    if let Some(kind) = CommandKind::of(map) {
        return apply(kind, Some(source), &map[kind.name()]);
    }

    match source.as_ref() {
        Value::Array(items) => run_array(items, map),
        Value::Object(props) => run_object(props, map),
        // Scalar or missing sources start from an empty object.
        _ => run_object(&ValueMap::new(), map),
    }
}

fn run_object(source: &ValueMap, commands: &CommandMap) -> Result<Arc<Value>, UpdateError> {
    let mut result = source.clone();
    for (key, property_command) in commands {
        if let CommandNode::Map(sub) = property_command {
            if let Some(kind) = CommandKind::of(sub) {
                // Terminal for this property. The old value is whatever the
                // result currently holds; an absent property stays absent
                // rather than becoming an empty object.
                let next = apply(kind, result.get(key), &sub[kind.name()])?;
                result.insert(key.clone(), next);
                continue;
            }
        }
        let old = result.get(key).cloned().unwrap_or_else(empty_object);
        result.insert(key.clone(), run(&old, property_command)?);
    }
    Ok(Arc::new(Value::Object(result)))
}

/// Per-property traversal over an array source: keys are decimal indices.
fn run_array(source: &[Arc<Value>], commands: &CommandMap) -> Result<Arc<Value>, UpdateError> {
    let mut result = source.to_vec();
    for (key, property_command) in commands {
        let index = parse_index(key, result.len())?;
        if let CommandNode::Map(sub) = property_command {
            if let Some(kind) = CommandKind::of(sub) {
                let next = apply(kind, result.get(index), &sub[kind.name()])?;
                set_slot(&mut result, index, next);
                continue;
            }
        }
        let old = result.get(index).cloned().unwrap_or_else(empty_object);
        let next = run(&old, property_command)?;
        set_slot(&mut result, index, next);
    }
    Ok(Arc::new(Value::Array(result)))
}

/// An index may address an existing slot or the one-past-end slot.
fn parse_index(key: &str, len: usize) -> Result<usize, UpdateError> {
    if !is_valid_index(key) {
        return Err(UpdateError::InvalidIndex);
    }
    let index: usize = key.parse().map_err(|_| UpdateError::InvalidIndex)?;
    if index > len {
        return Err(UpdateError::InvalidIndex);
    }
    Ok(index)
}

fn set_slot(items: &mut Vec<Arc<Value>>, index: usize, value: Arc<Value>) {
    if index == items.len() {
        items.push(value);
    } else {
        items[index] = value;
    }
}

/// Digits only, no leading zero unless the index is exactly "0".
fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

fn empty_object() -> Arc<Value> {
    Arc::new(Value::Object(ValueMap::new()))
}

/// One-level copy: a fresh node whose children are the same handles.
fn copy_level(value: &Arc<Value>) -> Arc<Value> {
    match value.as_ref() {
        Value::Array(items) => Arc::new(Value::Array(items.clone())),
        Value::Object(props) => Arc::new(Value::Object(props.clone())),
        other => Arc::new(other.clone()),
    }
}
