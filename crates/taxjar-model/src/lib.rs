//! # taxjar-model Architecture
//!
//! taxjar-model is the **attribute-modeling layer** of a TaxJar API client. It
//! sits between the response decoder and application code: the transport hands
//! it an already parsed mapping, and it hands back typed objects with named,
//! memoized accessors.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Response Models (models/)                                  │
//! │  - Rate, Tax, Breakdown, ... declared with #[derive(Model)] │
//! │  - One accessor + one has_ predicate per declared field     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model Trait and Memo Cells (model/)                        │
//! │  - Scalar, Object<T>, Collection<T>: compute once, cache    │
//! │  - Static schema and by-name lookup table per type          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Attribute Store (attributes/)                              │
//! │  - Normalized field set, numeric coercion at construction   │
//! │  - Presence rule, nested sub-mappings, collections          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Reading Never Fails
//!
//! Building a model from a mapping always succeeds, absent input gives an
//! empty model, and accessors return `None` (or an empty slice) instead of
//! erroring. Only the entry points that take untrusted text return
//! [`Result`]: [`Model::from_json`], [`ModelConfig::load`], and the strict
//! [`Model::lookup`].
//!
//! ## Example
//!
//! ```
//! use taxjar_model::{AttrValue, Model, Tax};
//!
//! let tax = Tax::from_json(r#"{
//!     "amount_to_collect": "1.35",
//!     "has_nexus": true,
//!     "breakdown": {"combined_tax_rate": 0.09}
//! }"#).unwrap();
//!
//! assert_eq!(tax.amount_to_collect(), Some(&AttrValue::Float(1.35)));
//! assert!(tax.has_breakdown());
//! assert!(tax.jurisdictions().is_none());
//! ```
//!
//! ## Module Overview
//!
//! - [`attributes`]: Values, presence, coercion, schemas, and the store
//! - [`model`]: The [`Model`] trait, memo cells, by-name lookup
//! - [`models`]: Concrete TaxJar response types
//! - [`config`]: Configuration management
//! - [`error`]: Error types

extern crate self as taxjar_model;

pub mod attributes;
pub mod config;
pub mod error;
pub mod model;
pub mod models;

pub use attributes::{AttrValue, AttributeKind, AttributeSpec, Attributes, Fields};
pub use config::ModelConfig;
pub use error::{Result, TaxjarError};
pub use model::{Collection, Lookup, Model, Object, Record, Scalar};
pub use models::{Breakdown, BreakdownLineItem, Category, Jurisdictions, Rate, Shipping, Tax};

pub use taxjar_model_derive::Model;
