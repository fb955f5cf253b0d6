//! # Configuration
//!
//! Model behavior is configured through [`ModelConfig`], derived with
//! [`confique`]. Most callers never touch it: `Model::new` uses the compiled
//! defaults. SDKs that want to opt out of a behavior load a TOML file or
//! build the struct directly and pass it to `Model::with_config`.
//!
//! ## Resolution
//!
//! 1. **TOML file** passed to [`ModelConfig::load`], when it exists.
//! 2. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `numeric_coercion` | `true` | Turn numeric-looking strings into numbers at construction |
//! | `deprecation_warnings` | `true` | Log a warning on every call to the deprecated `get` |
//!
//! Nested models inherit the configuration of the model they were built from.

use std::path::Path;

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for response models, optionally stored in a TOML file.
#[derive(Config, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelConfig {
    /// Store numeric-looking strings ("10", "0.0725") as numbers.
    /// Disable to keep values such as zip codes with leading zeros verbatim.
    #[config(default = true)]
    pub numeric_coercion: bool,

    /// Emit a `tracing` warning each time the deprecated `get` is called.
    #[config(default = true)]
    pub deprecation_warnings: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            numeric_coercion: true,
            deprecation_warnings: true,
        }
    }
}

impl ModelConfig {
    /// Load configuration from a TOML file, layered over the defaults.
    ///
    /// A missing file is not an error; the defaults apply.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::builder().file(path.as_ref()).load()?;
        Ok(config)
    }

    /// Configuration that stores every value verbatim.
    pub fn verbatim() -> Self {
        Self {
            numeric_coercion: false,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ModelConfig::default();
        assert!(config.numeric_coercion);
        assert!(config.deprecation_warnings);
    }

    #[test]
    fn test_verbatim_disables_coercion_only() {
        let config = ModelConfig::verbatim();
        assert!(!config.numeric_coercion);
        assert!(config.deprecation_warnings);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ModelConfig::load(dir.path().join("taxjar.toml")).unwrap();
        assert_eq!(config, ModelConfig::default());
    }

    #[test]
    fn test_load_overrides_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("taxjar.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "deprecation_warnings = false").unwrap();

        let config = ModelConfig::load(&path).unwrap();
        assert!(config.numeric_coercion);
        assert!(!config.deprecation_warnings);
    }

    #[test]
    fn test_load_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("taxjar.toml");
        std::fs::write(&path, "numeric_coercion = \"sometimes\"").unwrap();

        let err = ModelConfig::load(&path).unwrap_err();
        assert!(matches!(err, crate::error::TaxjarError::Config(_)));
    }
}
