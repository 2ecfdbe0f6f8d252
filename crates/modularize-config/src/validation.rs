//! Pluggable config validation strategies

use crate::compile::{compile_library, parse_member_case};
use crate::config::ModularizeConfig;
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    /// Validate a loaded configuration
    fn validate(&self, config: &ModularizeConfig) -> Result<()>;
}

/// Structural validation followed by a trial compilation of every rule
///
/// # Example
///
/// ```
/// use modularize_config::{ConfigValidator, ModularizeConfig, SchemaValidator};
/// use serde_json::json;
///
/// let config = ModularizeConfig::from_value(json!({
///     "libraries": { "lodash": { "transform": "lodash/${member}" } }
/// })).unwrap();
///
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &ModularizeConfig) -> Result<()> {
        if config.libraries.is_empty() {
            return Err(ConfigError::NoLibraries);
        }

        for (pattern, options) in &config.libraries {
            if pattern.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "library patterns cannot be empty".to_string(),
                    hint: Some("Remove the empty key from 'libraries'".to_string()),
                });
            }

            if options.transform.is_none() && options.members.is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: format!("library '{pattern}' has no transform"),
                    hint: Some(
                        "Set 'transform' to a path template such as \"lib/${member}\" or list 'members'"
                            .to_string(),
                    ),
                });
            }

            if let Some((member, _)) = options
                .members
                .iter()
                .find(|(_, target)| target.path().trim().is_empty())
            {
                return Err(ConfigError::SchemaValidation {
                    message: format!("member '{member}' of library '{pattern}' has an empty path"),
                    hint: Some("Every entry in 'members' needs a module path".to_string()),
                });
            }

            parse_member_case(pattern, options.member_case.as_deref())?;
            compile_library(pattern, options)?;
        }

        if let Some(style) = &config.settings.quote_style {
            if !matches!(style.to_lowercase().as_str(), "single" | "double") {
                return Err(ConfigError::InvalidValue {
                    field: "settings.quote_style".to_string(),
                    hint: Some(format!("'{style}' is not one of single, double")),
                });
            }
        }

        if config.settings.parallel_jobs == Some(0) {
            return Err(ConfigError::SchemaValidation {
                message: "parallel_jobs must be at least 1".to_string(),
                hint: Some("Omit 'parallel_jobs' to use one worker per CPU".to_string()),
            });
        }

        Ok(())
    }
}

/// Convenience function for schema validation
pub fn validate_schema(config: &ModularizeConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LibraryOptions, MemberTarget};
    use modularize_core::RuleError;

    fn config_with(pattern: &str, options: LibraryOptions) -> ModularizeConfig {
        let mut config = ModularizeConfig::default();
        config.libraries.insert(pattern.to_string(), options);
        config
    }

    fn template(transform: &str) -> LibraryOptions {
        LibraryOptions {
            transform: Some(transform.to_string()),
            ..LibraryOptions::default()
        }
    }

    #[test]
    fn schema_validator_rejects_empty_libraries() {
        let result = SchemaValidator.validate(&ModularizeConfig::default());
        assert!(matches!(result.unwrap_err(), ConfigError::NoLibraries));
    }

    #[test]
    fn schema_validator_accepts_valid_config() {
        let config = config_with("lodash", template("lodash/${member}"));
        assert!(SchemaValidator.validate(&config).is_ok());
    }

    #[test]
    fn schema_validator_rejects_missing_transform() {
        let config = config_with("lodash", LibraryOptions::default());
        assert!(matches!(
            SchemaValidator.validate(&config).unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }

    #[test]
    fn schema_validator_rejects_empty_member_path() {
        let mut options = LibraryOptions::default();
        options
            .members
            .insert("Grid".to_string(), MemberTarget::Path("  ".to_string()));
        let config = config_with("ui", options);
        assert!(matches!(
            SchemaValidator.validate(&config).unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }

    #[test]
    fn schema_validator_rejects_bad_regex() {
        let config = config_with("lib-(", template("lib/${member}"));
        assert!(matches!(
            SchemaValidator.validate(&config).unwrap_err(),
            ConfigError::Rule(RuleError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn schema_validator_rejects_capture_overflow() {
        let config = config_with("lib-(\\w+)", template("${1}/${2}/${member}"));
        assert!(matches!(
            SchemaValidator.validate(&config).unwrap_err(),
            ConfigError::Rule(RuleError::CaptureOutOfRange { .. })
        ));
    }

    #[test]
    fn schema_validator_rejects_bad_template() {
        let config = config_with("lodash", template("lodash/${name}"));
        assert!(matches!(
            SchemaValidator.validate(&config).unwrap_err(),
            ConfigError::Rule(RuleError::InvalidTemplate { .. })
        ));
    }

    #[test]
    fn schema_validator_rejects_unknown_quote_style() {
        let mut config = config_with("lodash", template("lodash/${member}"));
        config.settings.quote_style = Some("backtick".to_string());
        assert!(matches!(
            validate_schema(&config).unwrap_err(),
            ConfigError::InvalidValue { .. }
        ));
    }
}
