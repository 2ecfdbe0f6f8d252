//! Whole-source rewriting
//!
//! Only the rewritten import statements are regenerated; every other byte
//! of the input, comments and formatting included, is copied through.

use modularize_core::ImportTransformer;
use oxc_allocator::Allocator;
use tracing::debug;

use crate::emit::ImportEmitter;
use crate::error::{GenError, Result};
use crate::extract::collect_imports;
use crate::format::FormatOptions;
use crate::parser::{ParseOptions, parse};

/// Output of transforming one source unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutput {
    /// Generated code
    pub code: String,
    /// Whether any import was rewritten
    pub modified: bool,
    /// Number of input import declarations that were replaced
    pub rewritten: usize,
    /// Number of import declarations emitted in their place
    pub emitted: usize,
}

/// Applies an [`ImportTransformer`] to source text
pub struct SourceTransformer<'t> {
    transformer: &'t ImportTransformer,
    format_options: FormatOptions,
}

impl<'t> SourceTransformer<'t> {
    pub fn new(transformer: &'t ImportTransformer) -> Self {
        Self {
            transformer,
            format_options: FormatOptions::default(),
        }
    }

    /// Set format options
    pub fn with_format_options(mut self, opts: FormatOptions) -> Self {
        self.format_options = opts;
        self
    }

    /// Transform source code
    ///
    /// A parse error or any rule failure aborts the unit; no partially
    /// rewritten code is returned.
    pub fn transform(&self, source: &str, options: &ParseOptions) -> Result<TransformOutput> {
        let allocator = Allocator::default();
        let program = parse(&allocator, source, options)?;

        let mut edits = Vec::new();
        let mut emitted = 0;
        for located in collect_imports(&program) {
            let plan = self
                .transformer
                .rewrite_declaration(&located.declaration)
                .map_err(|err| GenError::rewrite(&options.filename, err))?;
            let Some(plan) = plan else {
                continue;
            };

            let mut emitter = ImportEmitter::new(&allocator);
            emitter.extend(plan.declarations());
            emitted += emitter.len();
            edits.push((
                located.span.start as usize,
                located.span.end as usize,
                emitter.render(&self.format_options),
            ));
        }

        if edits.is_empty() {
            return Ok(TransformOutput {
                code: source.to_string(),
                modified: false,
                rewritten: 0,
                emitted: 0,
            });
        }

        let code = splice(source, &edits)?;
        debug!(
            file = %options.filename,
            rewritten = edits.len(),
            emitted,
            "rewrote imports"
        );
        Ok(TransformOutput {
            code,
            modified: true,
            rewritten: edits.len(),
            emitted,
        })
    }
}

/// Replace `(start, end)` byte ranges, which must be sorted and disjoint
fn splice(source: &str, edits: &[(usize, usize, String)]) -> Result<String> {
    let mut code = String::with_capacity(source.len());
    let mut cursor = 0;
    for (start, end, text) in edits {
        let kept = source.get(cursor..*start).ok_or_else(|| {
            GenError::codegen_failed_with_reason(
                "splice",
                format!("invalid source range {cursor}..{start}"),
            )
        })?;
        code.push_str(kept);
        code.push_str(text);
        cursor = *end;
    }
    let rest = source.get(cursor..).ok_or_else(|| {
        GenError::codegen_failed_with_reason("splice", format!("invalid source offset {cursor}"))
    })?;
    code.push_str(rest);
    Ok(code)
}

/// Transform `source` with default format options
pub fn transform_source(
    source: &str,
    options: &ParseOptions,
    transformer: &ImportTransformer,
) -> Result<TransformOutput> {
    SourceTransformer::new(transformer).transform(source, options)
}
