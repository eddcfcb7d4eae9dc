//! Command trees.
//!
//! A command tree is a map-shaped description of an update: a node is either
//! a terminal instruction (one of its keys is a registered command name) or a
//! map from property key to a deeper command node. The distinction is purely
//! syntactic and resolved by the interpreter, never by the tree itself.

use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

use crate::error::UpdateError;
use crate::value::Value;

/// A caller-supplied transformation, the operand of `invoke`.
///
/// Receives the current value at the addressed position (`Null` when the
/// position is absent) and returns the replacement. Returning the argument
/// handle unchanged keeps the position reference-identical in the result.
pub type Factory = Arc<dyn Fn(&Arc<Value>) -> Arc<Value> + Send + Sync>;

/// Map container for command nodes, insertion-ordered.
pub type CommandMap = IndexMap<String, CommandNode>;

/// One node of a command tree.
#[derive(Clone)]
pub enum CommandNode {
    /// Either a terminal command or a per-property map; see the module doc.
    Map(CommandMap),
    /// A plain JSON operand.
    Value(Arc<Value>),
    /// A transformation operand.
    Factory(Factory),
}

impl CommandNode {
    /// Operand node holding a plain value.
    pub fn value(value: impl Into<Value>) -> Self {
        CommandNode::Value(Arc::new(value.into()))
    }

    /// Operand node holding a transformation.
    pub fn factory<F>(factory: F) -> Self
    where
        F: Fn(&Arc<Value>) -> Arc<Value> + Send + Sync + 'static,
    {
        CommandNode::Factory(Arc::new(factory))
    }

    /// Map node from `(key, node)` entries.
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, CommandNode)>,
    {
        CommandNode::Map(
            entries
                .into_iter()
                .map(|(key, node)| (key.into(), node))
                .collect(),
        )
    }

    /// Single-entry map node.
    pub fn entry(key: impl Into<String>, node: CommandNode) -> Self {
        let mut map = CommandMap::with_capacity(1);
        map.insert(key.into(), node);
        CommandNode::Map(map)
    }

    /// Materialize this node as a plain value.
    ///
    /// Object operands written through `From<serde_json::Value>` arrive as
    /// `Map` nodes; commands that need a value operand flatten them back
    /// here. Factories have no value form.
    pub fn to_value(&self) -> Result<Arc<Value>, UpdateError> {
        match self {
            CommandNode::Value(value) => Ok(Arc::clone(value)),
            CommandNode::Map(map) => {
                let mut props = IndexMap::with_capacity(map.len());
                for (key, node) in map {
                    props.insert(key.clone(), node.to_value()?);
                }
                Ok(Arc::new(Value::Object(props)))
            }
            CommandNode::Factory(_) => Err(UpdateError::InvalidOperand),
        }
    }
}

impl fmt::Debug for CommandNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandNode::Map(map) => f.debug_map().entries(map.iter()).finish(),
            CommandNode::Value(value) => value.fmt(f),
            CommandNode::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

/// JSON objects become `Map` nodes recursively; everything else becomes a
/// value operand. This is what lets command trees be written with
/// `serde_json::json!`. `invoke` commands cannot be expressed this way and
/// use [`CommandNode::factory`].
impl From<serde_json::Value> for CommandNode {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(props) => CommandNode::Map(
                props
                    .into_iter()
                    .map(|(key, value)| (key, CommandNode::from(value)))
                    .collect(),
            ),
            other => CommandNode::Value(Arc::new(Value::from(other))),
        }
    }
}
