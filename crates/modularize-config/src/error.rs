//! Error types for configuration validation and loading.

use std::path::PathBuf;

use modularize_core::RuleError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Config parsing/loading errors
    #[error("config not found in {}", root.display())]
    NotFound { root: PathBuf },

    #[error("unsupported configuration format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid config value for '{field}'{}", hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    // Schema validation errors
    #[error("no libraries configured")]
    NoLibraries,

    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // Rule compilation errors
    #[error(transparent)]
    Rule(#[from] RuleError),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Actionable hint for the user, when one is known
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::InvalidValue { hint, .. } | Self::SchemaValidation { hint, .. } => {
                hint.as_deref()
            }
            Self::NotFound { .. } => Some(
                "create modularize.toml, modularize.json or a \"modularize\" field in package.json",
            ),
            Self::NoLibraries => Some("add at least one [libraries.\"<pattern>\"] table"),
            _ => None,
        }
    }
}
