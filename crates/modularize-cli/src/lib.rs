//! modularize CLI - rewrite library member imports into direct-path imports.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - `commands` - `transform` and `check`
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status messages on stderr
//!
//! # Example
//!
//! ```rust,no_run
//! use modularize_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
