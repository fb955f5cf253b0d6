//! Attribute specifications.
//!
//! Each response model carries a static schema: one [`AttributeSpec`] per
//! declared accessor. The derive produces it; hand-written models list it
//! themselves.

/// The kind of accessor an attribute generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// Plain value read straight from the field set (e.g., `zip`, `combined_rate`)
    Scalar,

    /// Nested model built from a sub-mapping (e.g., `breakdown`)
    Object,

    /// Ordered sequence of nested models (e.g., `line_items`)
    Collection,
}

/// Specification for a single declared attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpec {
    /// The field name, which is also the accessor name
    pub name: &'static str,

    /// The kind of accessor generated for the field
    pub kind: AttributeKind,

    /// For objects: the key under which the nested model sees the original
    /// value, next to all of the parent's other fields.
    pub merge: Option<&'static str>,
}

impl AttributeSpec {
    pub const fn scalar(name: &'static str) -> Self {
        Self {
            name,
            kind: AttributeKind::Scalar,
            merge: None,
        }
    }

    pub const fn object(name: &'static str) -> Self {
        Self {
            name,
            kind: AttributeKind::Object,
            merge: None,
        }
    }

    pub const fn collection(name: &'static str) -> Self {
        Self {
            name,
            kind: AttributeKind::Collection,
            merge: None,
        }
    }

    /// Set the merge key.
    pub const fn merge(mut self, key: &'static str) -> Self {
        self.merge = Some(key);
        self
    }
}

/// Look up an attribute spec by name within a schema.
pub fn find_spec(schema: &'static [AttributeSpec], name: &str) -> Option<&'static AttributeSpec> {
    schema.iter().find(|spec| spec.name == name)
}
