//! Error types for parsing, printing and rewriting source text

use miette::Diagnostic;
use modularize_core::RuleError;
use thiserror::Error;

/// Errors that can occur while transforming a source file
#[derive(Error, Debug, Diagnostic)]
pub enum GenError {
    /// The source text did not parse
    #[error("Failed to parse {filename}: {}", messages.join(", "))]
    #[diagnostic(code(modularize::gen::parse_failed))]
    ParseFailed {
        filename: String,
        messages: Vec<String>,
    },

    /// A rule failed for one of the file's imports
    #[error("{filename}: {source}")]
    #[diagnostic(code(modularize::gen::rewrite_failed))]
    Rewrite {
        filename: String,
        #[source]
        #[diagnostic_source]
        source: RuleError,
    },

    /// Code generation failed
    #[error("Code generation failed: {context}{}", reason.as_ref().map(|r| format!(" - {}", r)).unwrap_or_default())]
    #[diagnostic(code(modularize::gen::codegen_failed))]
    CodegenFailed {
        context: String,
        reason: Option<String>,
    },
}

impl GenError {
    /// Create a Rewrite error for `filename`
    pub fn rewrite(filename: impl Into<String>, source: RuleError) -> Self {
        Self::Rewrite {
            filename: filename.into(),
            source,
        }
    }

    /// Create a CodegenFailed error with reason
    pub fn codegen_failed_with_reason(
        context: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::CodegenFailed {
            context: context.into(),
            reason: Some(reason.into()),
        }
    }

    /// The rule error behind this failure, if any
    pub fn rule_error(&self) -> Option<&RuleError> {
        match self {
            Self::Rewrite { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type for source transformation
pub type Result<T> = std::result::Result<T, GenError>;
