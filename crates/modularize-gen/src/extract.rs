//! Lift oxc import declarations into the structured import model

use modularize_core::{ImportDeclaration, ImportSpecifier};
use oxc_ast::ast::{self, ImportDeclarationSpecifier, ModuleExportName, Program, Statement};
use oxc_span::Span;
use tracing::debug;

/// A top-level import together with its location in the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedImport {
    pub span: Span,
    pub declaration: ImportDeclaration,
}

/// Convert one oxc import declaration
///
/// Returns `None` for declarations the model cannot represent without loss;
/// those are left exactly as written:
/// - `import type { .. }` and any inline `type` specifier
/// - declarations with import attributes (`with { type: 'json' }`)
/// - phase imports (`import source x from '..'`)
pub fn extract_import(import: &ast::ImportDeclaration<'_>) -> Option<ImportDeclaration> {
    let source = import.source.value.as_str();
    if import.import_kind.is_type() || import.with_clause.is_some() || import.phase.is_some() {
        debug!(source, "leaving type-only, attributed or phase import as written");
        return None;
    }

    let mut specifiers = Vec::new();
    if let Some(specs) = &import.specifiers {
        for spec in specs {
            let specifier = match spec {
                ImportDeclarationSpecifier::ImportDefaultSpecifier(default_spec) => {
                    ImportSpecifier::default(default_spec.local.name.as_str())
                }
                ImportDeclarationSpecifier::ImportNamespaceSpecifier(ns_spec) => {
                    ImportSpecifier::namespace(ns_spec.local.name.as_str())
                }
                ImportDeclarationSpecifier::ImportSpecifier(named_spec) => {
                    if named_spec.import_kind.is_type() {
                        debug!(
                            source,
                            member = %export_name(&named_spec.imported),
                            "inline type specifier; leaving the whole import as written"
                        );
                        return None;
                    }
                    ImportSpecifier::aliased(
                        export_name(&named_spec.imported),
                        named_spec.local.name.as_str(),
                    )
                }
            };
            specifiers.push(specifier);
        }
    }

    Some(ImportDeclaration::new(source, specifiers))
}

/// Every top-level import the model can represent, in document order
pub fn collect_imports(program: &Program<'_>) -> Vec<LocatedImport> {
    program
        .body
        .iter()
        .filter_map(|stmt| match stmt {
            Statement::ImportDeclaration(import) => {
                extract_import(import).map(|declaration| LocatedImport {
                    span: import.span,
                    declaration,
                })
            }
            _ => None,
        })
        .collect()
}

fn export_name(name: &ModuleExportName<'_>) -> String {
    match name {
        ModuleExportName::IdentifierName(ident) => ident.name.to_string(),
        ModuleExportName::IdentifierReference(ident) => ident.name.to_string(),
        ModuleExportName::StringLiteral(lit) => lit.value.to_string(),
    }
}
