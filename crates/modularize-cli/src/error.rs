//! Error handling for the modularize CLI.
//!
//! `CliError` is the top-level error returned by commands. Domain errors
//! convert into it via `#[from]`; [`cli_error_to_miette`] turns it into a
//! report for display.

use std::path::PathBuf;

use modularize_config::ConfigError;
use modularize_gen::GenError;
use thiserror::Error;

mod report;

pub use report::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (not found, invalid syntax, invalid rules)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A single file failed to transform
    #[error("Failed to transform {}: {source}", file.display())]
    Transform {
        file: PathBuf,
        #[source]
        source: GenError,
    },

    /// Some files of a multi-file run failed; each was reported already
    #[error("{failed} of {total} file(s) failed to transform")]
    Failed { failed: usize, total: usize },

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }
}
