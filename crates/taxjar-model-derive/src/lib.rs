//! Procedural macros for taxjar-model
//!
//! This crate provides one macro:
//! - `#[derive(Model)]` - Generate the schema, accessors, predicates and
//!   by-name lookup table of a response model

use proc_macro::TokenStream;

mod model;

/// Derive macro for response models.
///
/// The struct must have named fields: exactly one `Attributes` store, plus
/// any number of memo cells. The cell type decides what is generated for
/// each field `n` (key `"n"`):
///
/// - `Scalar` - `n() -> Option<&AttrValue>` and `has_n() -> bool`
/// - `Object<T>` - `n() -> Option<&T>` and `has_n() -> bool`
/// - `Collection<T>` - `n() -> &[T]` and `has_n() -> bool`
///
/// Raw identifiers use the unraw key: `r#type` reads `"type"` and gets
/// `has_type()`.
///
/// # Attributes
///
/// - `#[model(name = "...")]` - Override the name used in errors and logs
/// - `#[attr(merge = "...")]` - On an `Object` cell: build the nested model
///   from the parent's other fields plus `{merge: value}`
///
/// # Example
///
/// ```ignore
/// #[derive(Model)]
/// pub struct Breakdown {
///     attributes: Attributes,
///     combined_tax_rate: Scalar,
///     shipping: Object<Shipping>,
///     line_items: Collection<BreakdownLineItem>,
/// }
/// ```
#[proc_macro_derive(Model, attributes(model, attr))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    model::derive_model_impl(input)
}
