//! # Attribute System
//!
//! This module holds everything a response model is built on:
//!
//! - **Values**: [`AttrValue`], the closed set of kinds a decoded payload holds
//! - **Presence**: [`AttrValue::is_present`], the one falsey-or-empty rule
//! - **Coercion**: numeric-looking strings normalized at construction
//! - **Specifications**: static per-model schemas ([`AttributeSpec`])
//! - **Storage**: [`Attributes`], the normalized field set of one response object
//!
//! ## Presence Rule
//!
//! | Value | Present? |
//! |-------|----------|
//! | missing, `null`, `false` | no |
//! | `""`, `[]`, `{}` | no |
//! | `0`, `0.0` | yes |
//! | anything else | yes |

mod coerce;
mod spec;
mod store;
mod value;

pub use coerce::{coerce_fields, coerce_value, parse_float};
pub use spec::{find_spec, AttributeKind, AttributeSpec};
pub use store::Attributes;
pub use value::{AttrValue, Fields};
