//! Attribute value types.
//!
//! This module defines the runtime representation of response field values
//! and the single presence rule every accessor and predicate goes through.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A response field set: field name to value.
pub type Fields = BTreeMap<String, AttrValue>;

/// Runtime representation of a response field value.
///
/// This is the closed set of kinds a decoded JSON payload can hold. Integers
/// and floats are kept apart so that numeric coercion can tell `10` from
/// `10.5`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum AttrValue {
    /// JSON `null`, or a field that was never given a value
    #[default]
    Null,

    Bool(bool),

    Int(i64),

    Float(f64),

    String(String),

    /// Ordered sequence (e.g., `line_items`)
    List(Vec<AttrValue>),

    /// Nested mapping (e.g., `breakdown`, `jurisdictions`)
    Map(Fields),
}

impl AttrValue {
    /// Check whether this value counts as present.
    ///
    /// - Null: absent
    /// - Bool: the boolean value itself
    /// - Int / Float: always present, zero included
    /// - String / List / Map: present if non-empty
    pub fn is_present(&self) -> bool {
        match self {
            AttrValue::Null => false,
            AttrValue::Bool(v) => *v,
            AttrValue::Int(_) | AttrValue::Float(_) => true,
            AttrValue::String(s) => !s.is_empty(),
            AttrValue::List(v) => !v.is_empty(),
            AttrValue::Map(m) => !m.is_empty(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AttrValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the value as a float. Integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Int(v) => Some(*v as f64),
            AttrValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[AttrValue]> {
        match self {
            AttrValue::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Fields> {
        match self {
            AttrValue::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Float(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::String(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::String(v)
    }
}

impl From<Vec<AttrValue>> for AttrValue {
    fn from(v: Vec<AttrValue>) -> Self {
        AttrValue::List(v)
    }
}

impl From<Fields> for AttrValue {
    fn from(v: Fields) -> Self {
        AttrValue::Map(v)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(AttrValue::Null, Into::into)
    }
}

impl From<serde_json::Value> for AttrValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => AttrValue::Null,
            serde_json::Value::Bool(b) => AttrValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => AttrValue::Int(i),
                // u64 above i64::MAX and all non-integers land here
                None => n.as_f64().map_or(AttrValue::Null, AttrValue::Float),
            },
            serde_json::Value::String(s) => AttrValue::String(s),
            serde_json::Value::Array(items) => {
                AttrValue::List(items.into_iter().map(AttrValue::from).collect())
            }
            serde_json::Value::Object(map) => AttrValue::Map(
                map.into_iter()
                    .map(|(k, v)| (k, AttrValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<AttrValue> for serde_json::Value {
    fn from(value: AttrValue) -> Self {
        match value {
            AttrValue::Null => serde_json::Value::Null,
            AttrValue::Bool(b) => serde_json::Value::Bool(b),
            AttrValue::Int(i) => serde_json::Value::from(i),
            // Non-finite floats have no JSON form and become null
            AttrValue::Float(f) => serde_json::Number::from_f64(f)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            AttrValue::String(s) => serde_json::Value::String(s),
            AttrValue::List(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            AttrValue::Map(map) => serde_json::Value::Object(
                map.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}
