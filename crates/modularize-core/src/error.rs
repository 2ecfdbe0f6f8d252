//! Error types for rule resolution and import rewriting

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while building rules or rewriting a source unit.
///
/// Every variant is terminal for the source unit being processed. Variants
/// fall into two groups: configuration errors (the rule itself is unusable)
/// and policy violations (the input breaks a rule's policy).
#[derive(Error, Debug, Diagnostic)]
pub enum RuleError {
    /// A rule matched but has no `transform`
    #[error("library '{pattern}' has no transform configured")]
    #[diagnostic(
        code(modularize::config::missing_transform),
        help("add a `transform` template or a `members` table for '{pattern}'")
    )]
    MissingTransform { pattern: String },

    /// A rule's transform produced nothing usable for a member
    #[error("transform for library '{pattern}' produced an invalid path for '{member}': {reason}")]
    #[diagnostic(code(modularize::config::invalid_transform))]
    InvalidTransform {
        pattern: String,
        member: String,
        reason: String,
    },

    /// The pattern source is not a valid regular expression
    #[error("invalid library pattern '{pattern}'")]
    #[diagnostic(
        code(modularize::config::invalid_pattern),
        help("patterns containing regex metacharacters are compiled as anchored regular expressions")
    )]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A template could not be parsed
    #[error("invalid template '{template}': {reason}")]
    #[diagnostic(
        code(modularize::config::invalid_template),
        help("templates support `${{member}}` and positional captures such as `${{1}}`")
    )]
    InvalidTemplate { template: String, reason: String },

    /// A template references a capture group the pattern does not define
    #[error(
        "template '{template}' references capture ${{{index}}} but pattern '{pattern}' has {available} capture group(s)"
    )]
    #[diagnostic(code(modularize::config::capture_out_of_range))]
    CaptureOutOfRange {
        pattern: String,
        template: String,
        index: usize,
        available: usize,
    },

    /// A default or namespace import of a library that forbids full imports
    #[error("import of '{binding}' from '{source_specifier}' pulls in the whole module ({kind} import), which is not permitted")]
    #[diagnostic(
        code(modularize::policy::full_import),
        help("import individual members instead, e.g. `import {{ Member }} from '{source_specifier}'`")
    )]
    FullImportNotPermitted {
        source_specifier: String,
        binding: String,
        kind: &'static str,
    },
}

impl RuleError {
    /// Create an InvalidTemplate error
    pub fn invalid_template(template: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTemplate {
            template: template.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidTransform error
    pub fn invalid_transform(
        pattern: impl Into<String>,
        member: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidTransform {
            pattern: pattern.into(),
            member: member.into(),
            reason: reason.into(),
        }
    }

    /// True when the rule configuration is at fault
    pub fn is_configuration_error(&self) -> bool {
        !self.is_policy_violation()
    }

    /// True when the input declaration broke a rule's policy
    pub fn is_policy_violation(&self) -> bool {
        matches!(self, Self::FullImportNotPermitted { .. })
    }
}

/// Result type for rule operations
pub type Result<T> = std::result::Result<T, RuleError>;
