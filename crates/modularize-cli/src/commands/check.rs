//! Check command implementation.
//!
//! Validates configuration and compiles the rules without touching any
//! source file.

use modularize_config::LibraryOptions;

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load the configuration (explicit path or discovery)
/// 2. Validate its schema
/// 3. Compile every library into a rule
/// 4. List the rules in match order
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking configuration...");

    let config = utils::load_config(args.config.as_deref())?;
    let rules = config.build_rules()?;

    ui::success(&format!(
        "Configuration is valid ({} rule(s))",
        rules.len()
    ));
    for (pattern, options) in &config.libraries {
        ui::print_rule(pattern, &describe_target(options), &flags(options));
    }
    Ok(())
}

fn describe_target(options: &LibraryOptions) -> String {
    match (&options.transform, options.members.len()) {
        (Some(template), 0) => template.clone(),
        (Some(template), members) => format!("{template} (+{members} member override(s))"),
        (None, members) => format!("{members} listed member(s)"),
    }
}

fn flags(options: &LibraryOptions) -> Vec<&str> {
    let mut flags = Vec::new();
    if options.prevent_full_import {
        flags.push("preventFullImport");
    }
    if options.skip_default_conversion {
        flags.push("skipDefaultConversion");
    }
    if let Some(case) = options.member_case.as_deref() {
        flags.push(case);
    }
    if options.style.is_some() {
        flags.push("style");
    }
    flags
}
