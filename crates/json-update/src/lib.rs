//! Copy-on-write updates for JSON-like trees.
//!
//! Given a read-only [`Value`] and a declarative [`CommandNode`] tree, the
//! interpreter produces a new value reflecting the requested changes. The
//! source is never mutated and every subtree no command touches is carried
//! into the result by handle, so snapshots stay cheap and unchanged regions
//! stay reference-identical.
//!
//! Commands form a closed set: `set`, `push`, `unshift`, `merge`,
//! `defaults` and `invoke`. A node of the command tree that carries one of
//! those names is an instruction; any other map node selects properties to
//! descend into.
//!
//! # Example
//!
//! ```
//! use json_update::{run, CommandNode, Value};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let source = Arc::new(Value::from(json!({"counts": [1, 2], "name": "doc"})));
//! let commands = CommandNode::from(json!({"counts": {"push": 3}}));
//! let next = run(&source, &commands).unwrap();
//!
//! assert_eq!(next.to_json(), json!({"counts": [1, 2, 3], "name": "doc"}));
//! // untouched subtrees are shared, not cloned
//! assert!(Arc::ptr_eq(source.get("name").unwrap(), next.get("name").unwrap()));
//! ```
//!
//! For single-property updates the shortcut operations skip hand-building
//! the tree:
//!
//! ```
//! use json_update::{set, Value};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let source = Arc::new(Value::from(json!({"user": {"name": "ada"}})));
//! let next = set(&source, ["user", "name"], "grace").unwrap();
//! assert_eq!(next.to_json(), json!({"user": {"name": "grace"}}));
//! ```

pub mod command;
pub mod error;
pub mod path;
pub mod registry;
pub mod run;
pub mod shortcuts;
pub mod value;

// Re-export the core public API
pub use command::{CommandMap, CommandNode, Factory};
pub use error::UpdateError;
pub use path::Path;
pub use registry::{apply, CommandKind};
pub use run::run;
pub use shortcuts::{defaults, invoke, merge, push, set, unshift};
pub use value::{Value, ValueMap};
