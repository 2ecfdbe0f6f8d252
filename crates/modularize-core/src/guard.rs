//! Full-import policy check

use crate::error::{Result, RuleError};
use crate::model::ImportDeclaration;
use crate::rule::LibraryRule;

/// Reject default and namespace bindings when the rule forbids full imports
///
/// Named-only declarations always pass, as does every declaration of a rule
/// that allows full imports.
pub fn check_full_import(declaration: &ImportDeclaration, rule: &LibraryRule) -> Result<()> {
    if !rule.prevents_full_import() {
        return Ok(());
    }

    match declaration.full_import_specifiers().next() {
        Some(spec) => Err(RuleError::FullImportNotPermitted {
            source_specifier: declaration.source.clone(),
            binding: spec.local().to_string(),
            kind: spec.kind_name(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ImportSpecifier;

    fn strict() -> LibraryRule {
        LibraryRule::new("lodash").unwrap().prevent_full_import(true)
    }

    #[test]
    fn rejects_default_and_namespace() {
        let default = ImportDeclaration::new("lodash", vec![ImportSpecifier::default("_")]);
        let err = check_full_import(&default, &strict()).unwrap_err();
        assert!(matches!(
            err,
            RuleError::FullImportNotPermitted { kind: "default", .. }
        ));

        let namespace = ImportDeclaration::new("lodash", vec![ImportSpecifier::namespace("_")]);
        let err = check_full_import(&namespace, &strict()).unwrap_err();
        assert!(matches!(
            err,
            RuleError::FullImportNotPermitted { kind: "namespace", .. }
        ));
    }

    #[test]
    fn named_only_always_passes() {
        let named = ImportDeclaration::new(
            "lodash",
            vec![ImportSpecifier::named("merge"), ImportSpecifier::aliased("map", "m")],
        );
        assert!(check_full_import(&named, &strict()).is_ok());
        assert!(check_full_import(&ImportDeclaration::side_effect("lodash"), &strict()).is_ok());
    }

    #[test]
    fn permissive_rule_allows_default() {
        let rule = LibraryRule::new("lodash").unwrap();
        let default = ImportDeclaration::new("lodash", vec![ImportSpecifier::default("_")]);
        assert!(check_full_import(&default, &rule).is_ok());
    }
}
