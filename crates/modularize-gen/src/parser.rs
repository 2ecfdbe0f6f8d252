//! Parser façade over oxc
//!
//! Import rewriting only needs module syntax, so unknown extensions fall
//! back to an ES module source type.

use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::error::{GenError, Result};

/// Parse options for reading source code
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Source type (JavaScript, TypeScript, JSX, TSX)
    pub source_type: SourceType,
    /// Name used in diagnostics
    pub filename: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            source_type: SourceType::mjs(),
            filename: "<input>".to_string(),
        }
    }
}

impl ParseOptions {
    /// Create parse options from file path (auto-detects source type)
    pub fn from_path(path: &str) -> Self {
        Self {
            source_type: SourceType::from_path(path).unwrap_or(SourceType::mjs()),
            filename: path.to_string(),
        }
    }

    /// Create parse options for TypeScript
    pub fn typescript() -> Self {
        Self {
            source_type: SourceType::ts(),
            ..Self::default()
        }
    }

    /// Create parse options for TSX
    pub fn tsx() -> Self {
        Self {
            source_type: SourceType::tsx(),
            ..Self::default()
        }
    }

    /// Override the name used in diagnostics
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }
}

/// Parse source code into an AST
///
/// Any parse error fails the whole unit.
pub fn parse<'a>(
    allocator: &'a Allocator,
    source: &'a str,
    options: &ParseOptions,
) -> Result<Program<'a>> {
    let result = Parser::new(allocator, source, options.source_type).parse();

    if !result.errors.is_empty() || result.panicked {
        let mut messages: Vec<String> = result.errors.iter().map(|err| err.to_string()).collect();
        if messages.is_empty() {
            messages.push("parser aborted".to_string());
        }
        return Err(GenError::ParseFailed {
            filename: options.filename.clone(),
            messages,
        });
    }

    Ok(result.program)
}
