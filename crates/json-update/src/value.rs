//! The JSON tree the interpreter operates on.
//!
//! `serde_json::Value` owns its children, so cloning an object clones the
//! whole subtree. Updates here must instead copy one level at a time and
//! keep every untouched child reference-identical between input and output,
//! so this crate carries its own node type whose containers hold
//! `Arc<Value>` handles. Cloning an `Object` or `Array` duplicates only the
//! container; the children stay shared and sharing is observable through
//! [`Arc::ptr_eq`].

use indexmap::IndexMap;
use serde_json::Number;
use std::sync::Arc;

/// Object container: insertion-ordered, like `serde_json` with
/// `preserve_order`.
pub type ValueMap = IndexMap<String, Arc<Value>>;

/// A JSON value with shared children.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Arc<Value>>),
    Object(ValueMap),
}

impl Value {
    /// Member value of an object, by key.
    pub fn get(&self, key: &str) -> Option<&Arc<Value>> {
        match self {
            Value::Object(props) => props.get(key),
            _ => None,
        }
    }

    /// Element of an array, by index.
    pub fn get_index(&self, index: usize) -> Option<&Arc<Value>> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Deep conversion back to a `serde_json::Value`.
    ///
    /// # Example
    ///
    /// ```
    /// use json_update::Value;
    /// use serde_json::json;
    ///
    /// let value = Value::from(json!({"a": [1, 2]}));
    /// assert_eq!(value.to_json(), json!({"a": [1, 2]}));
    /// ```
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Value::Number(n.clone()),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(|item| item.to_json()).collect())
            }
            Value::Object(props) => serde_json::Value::Object(
                props
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(|item| Arc::new(Value::from(item)))
                    .collect(),
            ),
            serde_json::Value::Object(props) => Value::Object(
                props
                    .into_iter()
                    .map(|(key, value)| (key, Arc::new(Value::from(value))))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(Number::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(Number::from(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(Number::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        // JSON has no NaN/Infinity
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}
