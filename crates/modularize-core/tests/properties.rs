//! Property-based tests for the rewriting invariants.

use modularize_core::{
    ImportDeclaration, ImportSpecifier, ImportTransformer, LibraryRule, RuleSet, RuleTransform,
    TransformReturn,
};
use proptest::prelude::*;

fn specifier_strategy() -> impl Strategy<Value = ImportSpecifier> {
    prop_oneof![
        "[A-Z][a-z]{0,6}".prop_map(ImportSpecifier::default),
        "[a-z]{1,6}".prop_map(ImportSpecifier::namespace),
        "[A-Z][a-z]{0,6}".prop_map(ImportSpecifier::named),
        ("[A-Z][a-z]{0,6}", "[a-z]{1,6}")
            .prop_map(|(imported, local)| ImportSpecifier::aliased(imported, local)),
    ]
}

fn named_strategy() -> impl Strategy<Value = ImportSpecifier> {
    prop_oneof![
        "[A-Z][a-z]{0,6}".prop_map(ImportSpecifier::named),
        ("[A-Z][a-z]{0,6}", "[a-z]{1,6}")
            .prop_map(|(imported, local)| ImportSpecifier::aliased(imported, local)),
    ]
}

/// Sources that never match the `lib-*` rules below
fn unmatched_source_strategy() -> impl Strategy<Value = String> {
    "[a-k][a-z0-9/]{0,12}"
}

fn transformer(skip_default_conversion: bool, structured: bool) -> ImportTransformer {
    let rule = LibraryRule::new("lib-(\\w+)")
        .unwrap()
        .with_transform(RuleTransform::callback(move |member: &str, _: &[String]| {
            if structured {
                TransformReturn::replace_with_default(format!("lib/{member}"), true)
            } else {
                TransformReturn::Path(format!("lib/{member}"))
            }
        }))
        .skip_default_conversion(skip_default_conversion);
    ImportTransformer::new(RuleSet::new(vec![rule]).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: declarations whose source matches no rule are returned verbatim
    #[test]
    fn prop_pass_through_is_identity(
        source in unmatched_source_strategy(),
        specifiers in prop::collection::vec(specifier_strategy(), 0..6),
    ) {
        let input = vec![ImportDeclaration::new(source, specifiers)];
        let output = transformer(false, false).process(&input).unwrap();
        prop_assert_eq!(output, input);
    }

    /// Property: skip_default_conversion yields only named specifiers on rewritten paths
    #[test]
    fn prop_skip_default_conversion_always_named(
        specifiers in prop::collection::vec(named_strategy(), 1..6),
        structured in any::<bool>(),
    ) {
        let input = ImportDeclaration::new("lib-ui", specifiers.clone());
        let output = transformer(true, structured).process(&[input]).unwrap();

        prop_assert_eq!(output.len(), specifiers.len());
        for (decl, original) in output.iter().zip(&specifiers) {
            prop_assert_eq!(&decl.specifiers, &vec![original.clone()]);
        }
    }

    /// Property: one single-specifier declaration per named specifier, order kept
    #[test]
    fn prop_one_declaration_per_member(
        specifiers in prop::collection::vec(named_strategy(), 1..8),
    ) {
        let input = ImportDeclaration::new("lib-ui", specifiers.clone());
        let output = transformer(false, false).process(&[input]).unwrap();

        prop_assert_eq!(output.len(), specifiers.len());
        for (decl, original) in output.iter().zip(&specifiers) {
            prop_assert_eq!(decl.specifiers.len(), 1);
            prop_assert_eq!(decl.specifiers[0].local(), original.local());
        }
    }
}
