//! The attribute store behind every response model.
//!
//! [`Attributes`] owns the normalized field set of one response object and
//! knows how to read it: presence checks, raw reads, carving out the
//! sub-mapping of a nested object, and materializing collections. Typed
//! models wrap one `Attributes` and add memoized accessors on top.

use serde::{Serialize, Serializer};

use super::coerce::coerce_fields;
use super::{AttrValue, Fields};
use crate::config::ModelConfig;
use crate::model::Model;

/// Normalized response fields plus the configuration they were built with.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attributes {
    fields: Fields,
    config: ModelConfig,
}

impl Attributes {
    /// Build from a field set using the default configuration.
    pub fn new(fields: Fields) -> Self {
        Self::with_config(fields, ModelConfig::default())
    }

    /// Build from a field set, normalizing values as `config` asks.
    pub fn with_config(fields: Fields, config: ModelConfig) -> Self {
        let fields = if config.numeric_coercion {
            coerce_fields(fields)
        } else {
            fields
        };
        Self { fields, config }
    }

    /// Build from an arbitrary value.
    ///
    /// A `Map` becomes the field set. `Null` and every other kind give an
    /// empty field set.
    pub fn from_value(value: AttrValue, config: ModelConfig) -> Self {
        match value {
            AttrValue::Map(fields) => Self::with_config(fields, config),
            AttrValue::Null => Self::with_config(Fields::new(), config),
            other => {
                tracing::debug!(value = ?other, "wrapping non-map value as an empty object");
                Self::with_config(Fields::new(), config)
            }
        }
    }

    pub fn config(&self) -> ModelConfig {
        self.config
    }

    /// The raw value stored under `key`, present or not.
    pub fn raw(&self, key: &str) -> Option<&AttrValue> {
        self.fields.get(key)
    }

    /// Whether the value under `key` is present (see [`AttrValue::is_present`]).
    ///
    /// Missing keys are absent.
    pub fn is_present(&self, key: &str) -> bool {
        self.fields.get(key).is_some_and(AttrValue::is_present)
    }

    /// The value under `key` if it is present.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.fields.get(key).filter(|v| v.is_present())
    }

    /// The sub-mapping a nested object under `key` is built from.
    ///
    /// Returns `None` when `key` is absent. Without a merge key this is the
    /// value itself. With one, it is a copy of every other field plus
    /// `{merge: value}`.
    pub fn object_fields(&self, key: &str, merge: Option<&str>) -> Option<AttrValue> {
        let value = self.get(key)?;
        let Some(merge) = merge else {
            return Some(value.clone());
        };

        let mut fields = self.fields.clone();
        let removed = fields.remove(key).unwrap_or_default();
        fields.insert(merge.to_string(), removed);
        Some(AttrValue::Map(fields))
    }

    /// Build a nested model from `value`, inheriting this store's config.
    pub fn build<T: Model>(&self, value: AttrValue) -> T {
        T::from_attributes(Self::from_value(value, self.config))
    }

    /// Build one `T` per element of the sequence under `key`.
    ///
    /// - missing or `Null`: empty
    /// - `List`: one `T` per element, in order
    /// - non-empty `Map`: a single `T`
    /// - anything else: empty
    pub fn map_collection<T: Model>(&self, key: &str) -> Vec<T> {
        match self.fields.get(key) {
            Some(AttrValue::List(items)) => {
                items.iter().map(|item| self.build(item.clone())).collect()
            }
            Some(AttrValue::Map(fields)) if !fields.is_empty() => {
                vec![self.build(AttrValue::Map(fields.clone()))]
            }
            _ => Vec::new(),
        }
    }

    /// The stored field set, shared rather than copied.
    pub fn as_map(&self) -> &Fields {
        &self.fields
    }

    /// An owned copy of the field set.
    pub fn to_map(&self) -> Fields {
        self.fields.clone()
    }

    pub fn into_map(self) -> Fields {
        self.fields
    }

    /// The field set as JSON, for re-serialization.
    pub fn to_json(&self) -> serde_json::Value {
        AttrValue::Map(self.fields.clone()).into()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Fields> for Attributes {
    fn from(fields: Fields) -> Self {
        Self::new(fields)
    }
}

impl From<serde_json::Value> for Attributes {
    fn from(value: serde_json::Value) -> Self {
        Self::from_value(value.into(), ModelConfig::default())
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}
