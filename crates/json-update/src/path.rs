//! Property paths for the convenience wrappers.
//!
//! A path is resolved once, at the wrapper boundary, into one of three
//! shapes; the interpreter itself never sees paths, only command trees.

use crate::command::CommandNode;

/// Where a shortcut operation points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Path {
    /// Operate on the source itself.
    Root,
    /// A single property key.
    Key(String),
    /// An ordered sequence of keys, outermost first.
    Keys(Vec<String>),
}

impl Path {
    /// Wrap `node` under one single-key map per path segment.
    ///
    /// `Root` (and an empty key sequence) returns `node` itself.
    pub fn wrap(self, node: CommandNode) -> CommandNode {
        let segments = match self {
            Path::Root => Vec::new(),
            Path::Key(key) => vec![key],
            Path::Keys(keys) => keys,
        };
        let mut node = node;
        for key in segments.into_iter().rev() {
            node = CommandNode::entry(key, node);
        }
        node
    }
}

impl From<()> for Path {
    fn from(_: ()) -> Self {
        Path::Root
    }
}

impl From<&str> for Path {
    fn from(key: &str) -> Self {
        Path::Key(key.to_string())
    }
}

impl From<String> for Path {
    fn from(key: String) -> Self {
        Path::Key(key)
    }
}

impl From<Vec<String>> for Path {
    fn from(keys: Vec<String>) -> Self {
        Path::Keys(keys)
    }
}

impl From<Vec<&str>> for Path {
    fn from(keys: Vec<&str>) -> Self {
        Path::Keys(keys.into_iter().map(|key| key.to_string()).collect())
    }
}

impl From<&[&str]> for Path {
    fn from(keys: &[&str]) -> Self {
        Path::Keys(keys.iter().map(|key| key.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Path {
    fn from(keys: [&str; N]) -> Self {
        Path::Keys(keys.iter().map(|key| key.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandNode;
    use serde_json::json;

    #[test]
    fn test_wrap_nests_outermost_first() {
        let node = Path::from(["foo", "bar"]).wrap(CommandNode::from(json!({"set": 1})));
        let map = match &node {
            CommandNode::Map(map) => map,
            _ => panic!("expected map node"),
        };
        let inner = match &map["foo"] {
            CommandNode::Map(map) => map,
            _ => panic!("expected map node"),
        };
        assert!(matches!(&inner["bar"], CommandNode::Map(leaf) if leaf.contains_key("set")));
    }

    #[test]
    fn test_wrap_root_is_identity() {
        let node = Path::Root.wrap(CommandNode::value(5));
        assert!(matches!(node, CommandNode::Value(_)));
        let node = Path::Keys(Vec::new()).wrap(CommandNode::value(5));
        assert!(matches!(node, CommandNode::Value(_)));
    }

    #[test]
    fn test_from_impls() {
        assert_eq!(Path::from(()), Path::Root);
        assert_eq!(Path::from("a"), Path::Key("a".to_string()));
        assert_eq!(
            Path::from(vec!["a", "b"]),
            Path::Keys(vec!["a".to_string(), "b".to_string()])
        );
    }
}
