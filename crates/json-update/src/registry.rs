//! The command registry: a closed set of named transformations and the
//! single dispatcher that applies one of them to a value.

use std::sync::Arc;

use crate::command::{CommandMap, CommandNode};
use crate::error::UpdateError;
use crate::value::{Value, ValueMap};

/// The registered commands.
///
/// Declaration order is load-bearing: when a command node carries more than
/// one command name, the first kind in [`CommandKind::ALL`] wins and the
/// rest are ignored. Multi-name nodes are not supported usage; the scan
/// order is the only tie-break they get.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Replace the value entirely; ignores the old value.
    Set,
    /// Copy the array, append the operand at the end.
    Push,
    /// Copy the array, prepend the operand at the start.
    Unshift,
    /// Shallow-copy the old object, then overwrite/add keys from the
    /// operand; operand keys win.
    Merge,
    /// Shallow-copy the old object, then fill in only keys it lacks from
    /// the operand; old keys win.
    Defaults,
    /// Apply a caller-supplied factory to the old value.
    Invoke,
}

impl CommandKind {
    /// Registry declaration order; the scan order for terminal detection.
    pub const ALL: [CommandKind; 6] = [
        CommandKind::Set,
        CommandKind::Push,
        CommandKind::Unshift,
        CommandKind::Merge,
        CommandKind::Defaults,
        CommandKind::Invoke,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CommandKind::Set => "set",
            CommandKind::Push => "push",
            CommandKind::Unshift => "unshift",
            CommandKind::Merge => "merge",
            CommandKind::Defaults => "defaults",
            CommandKind::Invoke => "invoke",
        }
    }

    pub fn from_name(name: &str) -> Option<CommandKind> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// First registered command name present among the node's keys.
    ///
    /// This membership probe is how the interpreter tells a terminal
    /// command node apart from a per-property map.
    pub fn of(map: &CommandMap) -> Option<CommandKind> {
        Self::ALL.into_iter().find(|kind| map.contains_key(kind.name()))
    }
}

/// Apply a single command to `old`, producing the replacement value.
///
/// `old` is `None` when the addressed position does not exist in the
/// source; no empty-container substitution happens before this point.
pub fn apply(
    kind: CommandKind,
    old: Option<&Arc<Value>>,
    operand: &CommandNode,
) -> Result<Arc<Value>, UpdateError> {
    match kind {
        CommandKind::Set => operand.to_value(),
        CommandKind::Push => apply_push(old, operand),
        CommandKind::Unshift => apply_unshift(old, operand),
        CommandKind::Merge => apply_merge(old, operand),
        CommandKind::Defaults => apply_defaults(old, operand),
        CommandKind::Invoke => apply_invoke(old, operand),
    }
}

// ── Per-command applicators ───────────────────────────────────────────────

fn apply_push(old: Option<&Arc<Value>>, operand: &CommandNode) -> Result<Arc<Value>, UpdateError> {
    let mut items = array_of(old)?;
    items.push(operand.to_value()?);
    Ok(Arc::new(Value::Array(items)))
}

fn apply_unshift(
    old: Option<&Arc<Value>>,
    operand: &CommandNode,
) -> Result<Arc<Value>, UpdateError> {
    let mut items = array_of(old)?;
    items.insert(0, operand.to_value()?);
    Ok(Arc::new(Value::Array(items)))
}

fn apply_merge(old: Option<&Arc<Value>>, operand: &CommandNode) -> Result<Arc<Value>, UpdateError> {
    let mut props = object_of(old)?;
    let operand = operand.to_value()?;
    let incoming = match operand.as_ref() {
        Value::Object(incoming) => incoming,
        _ => return Err(UpdateError::NotAnObject),
    };
    for (key, value) in incoming {
        props.insert(key.clone(), Arc::clone(value));
    }
    Ok(Arc::new(Value::Object(props)))
}

fn apply_defaults(
    old: Option<&Arc<Value>>,
    operand: &CommandNode,
) -> Result<Arc<Value>, UpdateError> {
    let mut props = object_of(old)?;
    let operand = operand.to_value()?;
    let incoming = match operand.as_ref() {
        Value::Object(incoming) => incoming,
        _ => return Err(UpdateError::NotAnObject),
    };
    for (key, value) in incoming {
        if !props.contains_key(key) {
            props.insert(key.clone(), Arc::clone(value));
        }
    }
    Ok(Arc::new(Value::Object(props)))
}

fn apply_invoke(
    old: Option<&Arc<Value>>,
    operand: &CommandNode,
) -> Result<Arc<Value>, UpdateError> {
    let factory = match operand {
        CommandNode::Factory(factory) => factory,
        _ => return Err(UpdateError::InvalidOperand),
    };
    match old {
        Some(value) => Ok(factory(value)),
        None => Ok(factory(&Arc::new(Value::Null))),
    }
}

/// One-level copy of an array old value.
fn array_of(old: Option<&Arc<Value>>) -> Result<Vec<Arc<Value>>, UpdateError> {
    match old.map(|value| value.as_ref()) {
        Some(Value::Array(items)) => Ok(items.clone()),
        _ => Err(UpdateError::NotAnArray),
    }
}

/// One-level copy of an object old value; absent and `Null` start empty.
fn object_of(old: Option<&Arc<Value>>) -> Result<ValueMap, UpdateError> {
    match old.map(|value| value.as_ref()) {
        Some(Value::Object(props)) => Ok(props.clone()),
        Some(Value::Null) | None => Ok(ValueMap::new()),
        Some(_) => Err(UpdateError::NotAnObject),
    }
}
