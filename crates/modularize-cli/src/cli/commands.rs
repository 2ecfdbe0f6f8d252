use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::Quote;

/// Available modularize subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rewrite member imports in source files
    ///
    /// Prints the result for a single file, or rewrites files in place with
    /// --write.
    Transform(TransformArgs),

    /// Validate configuration and list the compiled rules
    Check(CheckArgs),
}

/// Arguments for the transform command
#[derive(Args, Debug)]
pub struct TransformArgs {
    /// Source files to transform
    ///
    /// Examples:
    ///   modularize transform src/App.jsx
    ///   modularize transform --write src/*.ts
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Path to a configuration file
    ///
    /// If not provided, searches the current directory for modularize.toml,
    /// modularize.json, then the "modularize" field of package.json.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Rewrite files in place instead of printing to stdout
    #[arg(short, long)]
    pub write: bool,

    /// Quote style for generated imports (overrides settings.quote_style)
    #[arg(long, value_enum)]
    pub quote: Option<Quote>,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to a configuration file
    ///
    /// If not provided, searches the current directory for modularize.toml,
    /// modularize.json, then the "modularize" field of package.json.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
