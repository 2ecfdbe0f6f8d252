//! modularize CLI - rewrite library member imports into direct-path imports.
//!
//! This is the main entry point for the CLI. It handles command-line argument
//! parsing, logging initialization, and command dispatch.

use clap::Parser;
use miette::Result;
use modularize_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Transform(transform_args) => commands::transform_execute(transform_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    };

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
