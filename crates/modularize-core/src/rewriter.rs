//! Rewrite plans: the declarations that replace one matched import

use crate::error::Result;
use crate::guard::check_full_import;
use crate::model::{ImportDeclaration, ImportSpecifier};
use crate::pattern::MatchResult;
use crate::resolver::{TransformOutcome, resolve};
use crate::rule::LibraryRule;
use crate::style::style_imports;

/// How a rewritten member is bound in its new declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    Default,
    Named,
}

/// Apply the rule-wide default-conversion policy to a resolved outcome
///
/// `skip_default_conversion` outranks the outcome's own
/// `is_default_export`.
pub fn effective_binding(outcome: &TransformOutcome, rule: &LibraryRule) -> BindingKind {
    if rule.skips_default_conversion() || !outcome.is_default_export {
        BindingKind::Named
    } else {
        BindingKind::Default
    }
}

/// Replacement declarations for one input declaration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewritePlan {
    /// Bare style imports, deduplicated
    pub style_imports: Vec<ImportDeclaration>,
    /// The original default/namespace bindings, kept on the original source
    pub preserved: Option<ImportDeclaration>,
    /// One single-specifier declaration per named specifier, in source order
    pub rewritten: Vec<ImportDeclaration>,
}

impl RewritePlan {
    pub fn len(&self) -> usize {
        self.style_imports.len() + usize::from(self.preserved.is_some()) + self.rewritten.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Declarations in output order: styles, preserved, rewritten
    pub fn declarations(&self) -> impl Iterator<Item = &ImportDeclaration> {
        self.style_imports
            .iter()
            .chain(self.preserved.iter())
            .chain(self.rewritten.iter())
    }

    pub fn into_declarations(self) -> Vec<ImportDeclaration> {
        let mut out = self.style_imports;
        out.extend(self.preserved);
        out.extend(self.rewritten);
        out
    }
}

/// Build the rewrite plan for a declaration whose source matched a rule
///
/// Fails without producing a partial plan if the full-import policy is
/// violated or any member cannot be resolved.
pub fn rewrite(declaration: &ImportDeclaration, matched: &MatchResult<'_>) -> Result<RewritePlan> {
    let rule = matched.rule;
    check_full_import(declaration, rule)?;

    let full: Vec<ImportSpecifier> = declaration.full_import_specifiers().cloned().collect();
    let preserved =
        (!full.is_empty()).then(|| ImportDeclaration::new(declaration.source.clone(), full));

    let mut rewritten = Vec::new();
    for (imported, local) in declaration.named_specifiers() {
        let outcome = resolve(rule, imported, &matched.captures)?;
        let specifier = match effective_binding(&outcome, rule) {
            BindingKind::Default => ImportSpecifier::default(local),
            BindingKind::Named => ImportSpecifier::aliased(imported, local),
        };
        rewritten.push(ImportDeclaration::new(outcome.path, vec![specifier]));
    }

    Ok(RewritePlan {
        style_imports: style_imports(declaration, matched)?,
        preserved,
        rewritten,
    })
}
