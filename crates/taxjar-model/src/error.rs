//! Error types.
//!
//! Construction, coercion, and the accessors never fail. Errors only come
//! out of the entry points that take untrusted input: decoding a JSON body,
//! loading a configuration file, and the strict by-name lookup.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaxjarError {
    #[error("{model} has no attribute '{name}'")]
    UnknownAttribute { model: &'static str, name: String },

    #[error("Invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] confique::Error),
}

pub type Result<T> = std::result::Result<T, TaxjarError>;
