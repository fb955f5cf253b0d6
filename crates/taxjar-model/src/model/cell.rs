//! Memo cells: the per-instance caches behind generated accessors.
//!
//! A model declares one cell per attribute. The cell type picks the accessor
//! kind; the cell stores whatever was computed on first access, using
//! [`OnceCell`] so that concurrent first reads run the computation once.

use std::fmt;

use once_cell::sync::OnceCell;

use crate::attributes::{AttrValue, Attributes};
use crate::model::Model;

/// Cell for a plain value.
///
/// Caches the presence check; the value itself is borrowed from the
/// attribute store.
#[derive(Default, Clone)]
pub struct Scalar {
    present: OnceCell<bool>,
}

impl Scalar {
    pub fn read<'a>(&self, attributes: &'a Attributes, key: &str) -> Option<&'a AttrValue> {
        if self.present(attributes, key) {
            attributes.raw(key)
        } else {
            None
        }
    }

    pub fn present(&self, attributes: &Attributes, key: &str) -> bool {
        *self.present.get_or_init(|| attributes.is_present(key))
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scalar")
            .field("present", &self.present.get())
            .finish()
    }
}

/// Cell for a nested model built from a sub-mapping.
pub struct Object<T> {
    present: OnceCell<bool>,
    value: OnceCell<Option<T>>,
}

impl<T: Model> Object<T> {
    /// Build (once) and return the nested model, or `None` when the field is
    /// absent.
    pub fn read<'a>(
        &'a self,
        attributes: &Attributes,
        key: &str,
        merge: Option<&str>,
    ) -> Option<&'a T> {
        self.value
            .get_or_init(|| {
                attributes
                    .object_fields(key, merge)
                    .map(|sub| attributes.build(sub))
            })
            .as_ref()
    }

    /// Presence of the field, independent of building `T`.
    pub fn present(&self, attributes: &Attributes, key: &str) -> bool {
        *self.present.get_or_init(|| attributes.is_present(key))
    }
}

impl<T> Default for Object<T> {
    fn default() -> Self {
        Self {
            present: OnceCell::new(),
            value: OnceCell::new(),
        }
    }
}

impl<T: Clone> Clone for Object<T> {
    fn clone(&self) -> Self {
        Self {
            present: self.present.clone(),
            value: self.value.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Object<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("present", &self.present.get())
            .field("value", &self.value.get())
            .finish()
    }
}

/// Cell for an ordered sequence of nested models.
pub struct Collection<T> {
    present: OnceCell<bool>,
    items: OnceCell<Vec<T>>,
}

impl<T: Model> Collection<T> {
    /// Build (once) and return the nested models. Never fails; a missing
    /// field is an empty slice.
    pub fn read<'a>(&'a self, attributes: &Attributes, key: &str) -> &'a [T] {
        self.items.get_or_init(|| attributes.map_collection(key))
    }

    pub fn present(&self, attributes: &Attributes, key: &str) -> bool {
        *self.present.get_or_init(|| attributes.is_present(key))
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            present: OnceCell::new(),
            items: OnceCell::new(),
        }
    }
}

impl<T: Clone> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            present: self.present.clone(),
            items: self.items.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("present", &self.present.get())
            .field("items", &self.items.get())
            .finish()
    }
}
