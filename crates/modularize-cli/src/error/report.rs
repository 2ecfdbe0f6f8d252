//! Miette diagnostic conversion for CLI errors.

use miette::Report;
use modularize_config::ConfigError;

use crate::error::CliError;

/// Convert CliError to miette Report
///
/// Rule and source errors keep their own diagnostic codes and help text.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::Transform { file, source } => {
            let context = format!("Failed to transform {}", file.display());
            Report::new(source).wrap_err(context)
        }
        _ => miette::miette!("{}", err),
    }
}

/// Convert ConfigError to miette Report
pub fn config_error_to_miette(err: ConfigError) -> Report {
    if let Some(hint) = err.hint() {
        let hint = hint.to_string();
        return miette::miette!(help = hint, "Configuration error: {}", err);
    }
    match err {
        ConfigError::Rule(rule) => Report::new(rule).wrap_err("Configuration error"),
        other => miette::miette!("Configuration error: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modularize_core::RuleError;

    #[test]
    fn rule_errors_keep_their_code() {
        let err = CliError::Config(ConfigError::Rule(RuleError::MissingTransform {
            pattern: "lodash".to_string(),
        }));
        let report = cli_error_to_miette(err);
        let root = report.chain().last().map(ToString::to_string).unwrap();
        assert!(root.contains("lodash"));
    }

    #[test]
    fn hints_become_help() {
        let report = cli_error_to_miette(CliError::Config(ConfigError::NoLibraries));
        assert!(report.help().is_some());
    }
}
