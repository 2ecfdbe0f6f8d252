//! Source-unit processing: match, guard, resolve and rebuild each import

use tracing::debug;

use crate::error::Result;
use crate::guard::check_full_import;
use crate::model::ImportDeclaration;
use crate::pattern::{MatchResult, match_source};
use crate::rewriter::{RewritePlan, rewrite};
use crate::rule::RuleSet;

/// Rewrites the import declarations of one source unit at a time
///
/// Holds only the immutable rule set, so a single transformer can serve
/// many source units, including from several threads.
///
/// # Example
///
/// ```
/// use modularize_core::{
///     ImportDeclaration, ImportSpecifier, ImportTransformer, LibraryRule, RuleSet, RuleTransform,
/// };
///
/// let rules = RuleSet::new(vec![
///     LibraryRule::new("lodash")?.with_transform(RuleTransform::template("lodash/${member}")?),
/// ])?;
/// let transformer = ImportTransformer::new(rules);
///
/// let input = ImportDeclaration::new("lodash", vec![ImportSpecifier::named("merge")]);
/// let output = transformer.process(&[input])?;
/// assert_eq!(output[0].to_string(), r#"import merge from "lodash/merge";"#);
/// # Ok::<(), modularize_core::RuleError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportTransformer {
    rules: RuleSet,
}

impl ImportTransformer {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// The rule governing this declaration's source, if any
    pub fn match_declaration(&self, declaration: &ImportDeclaration) -> Option<MatchResult<'_>> {
        match_source(&declaration.source, &self.rules)
    }

    /// Plan for a single declaration
    ///
    /// `Ok(None)` means the declaration passes through unchanged: its
    /// source matched no rule, it is a bare side-effect import, or it binds
    /// only the default or namespace export (after the full-import policy
    /// has accepted it).
    pub fn rewrite_declaration(
        &self,
        declaration: &ImportDeclaration,
    ) -> Result<Option<RewritePlan>> {
        if declaration.is_side_effect() {
            return Ok(None);
        }
        let Some(matched) = self.match_declaration(declaration) else {
            return Ok(None);
        };
        if declaration.named_specifiers().next().is_none() {
            check_full_import(declaration, matched.rule)?;
            return Ok(None);
        }

        debug!(
            source = %declaration.source,
            pattern = matched.rule.pattern_source(),
            specifiers = declaration.specifiers.len(),
            "rewriting import"
        );
        rewrite(declaration, &matched).map(Some)
    }

    /// Rewrite every declaration of a source unit, in document order
    ///
    /// The first error aborts the whole unit; no partial output is returned.
    pub fn process(&self, declarations: &[ImportDeclaration]) -> Result<Vec<ImportDeclaration>> {
        let mut out = Vec::with_capacity(declarations.len());
        for declaration in declarations {
            match self.rewrite_declaration(declaration)? {
                Some(plan) => out.extend(plan.into_declarations()),
                None => out.push(declaration.clone()),
            }
        }
        Ok(out)
    }
}
