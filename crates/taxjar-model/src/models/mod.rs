//! # TaxJar Response Models
//!
//! Typed wrappers for the objects the TaxJar API returns. Each one is a
//! plain declaration: the store plus one memo cell per field, with
//! `#[derive(Model)]` generating the accessors.
//!
//! | Model | Endpoint | Nested |
//! |-------|----------|--------|
//! | [`Rate`] | `GET /rates/:zip` | - |
//! | [`Tax`] | `POST /taxes` | `breakdown`, `jurisdictions` |
//! | [`Breakdown`] | part of `Tax` | `shipping`, `line_items` |
//! | [`Category`] | `GET /categories` | - |

mod breakdown;
mod category;
mod rate;
mod tax;

pub use breakdown::{Breakdown, BreakdownLineItem, Shipping};
pub use category::Category;
pub use rate::Rate;
pub use tax::{Jurisdictions, Tax};
