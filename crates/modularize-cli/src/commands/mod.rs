//! Command implementations for the modularize CLI.
//!
//! - [`transform`] - Rewrite member imports in source files
//! - [`check`] - Configuration validation
//!
//! Each command provides an `execute` function that takes the parsed
//! command arguments and returns a Result.

pub mod check;
pub mod transform;
pub(crate) mod utils;

// Re-export execute functions for convenience
pub use check::execute as check_execute;
pub use transform::execute as transform_execute;
