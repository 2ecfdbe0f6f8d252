//! Command-line interface definition for modularize.
//!
//! # Command Structure
//!
//! - `modularize transform` - Rewrite member imports in source files
//! - `modularize check` - Validate configuration and list rules

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{CheckArgs, Command, TransformArgs};
pub use enums::*;

/// modularize - rewrite library member imports into direct-path imports
#[derive(Parser, Debug)]
#[command(
    name = "modularize",
    version,
    about = "Rewrite library member imports into direct-path imports",
    long_about = "modularize rewrites `import { A, B } from 'lib'` into one import per member\n\
                  (`import A from 'lib/A'`) according to per-library rules, so that only the\n\
                  members actually used are loaded."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
