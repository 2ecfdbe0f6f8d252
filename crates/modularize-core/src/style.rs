//! Side-effect style imports collected per declaration

use indexmap::IndexSet;

use crate::error::Result;
use crate::model::ImportDeclaration;
use crate::pattern::MatchResult;
use crate::resolver::resolve_style;

/// Style paths for the declaration's named specifiers
///
/// Paths keep the order in which each distinct path is first produced.
/// Empty when the rule has no `style`.
pub fn collect_style_paths(
    declaration: &ImportDeclaration,
    matched: &MatchResult<'_>,
) -> Result<Vec<String>> {
    if matched.rule.style().is_none() {
        return Ok(Vec::new());
    }

    let mut seen = IndexSet::new();
    for (imported, _) in declaration.named_specifiers() {
        if let Some(path) = resolve_style(matched.rule, imported, &matched.captures)? {
            seen.insert(path);
        }
    }
    Ok(seen.into_iter().collect())
}

/// Bare side-effect declarations for [`collect_style_paths`]
pub fn style_imports(
    declaration: &ImportDeclaration,
    matched: &MatchResult<'_>,
) -> Result<Vec<ImportDeclaration>> {
    Ok(collect_style_paths(declaration, matched)?
        .into_iter()
        .map(ImportDeclaration::side_effect)
        .collect())
}
