//! Structured import declarations consumed and produced by the rewriter.
//!
//! These types are the boundary with the host front end: the host lifts
//! parsed `import` statements into [`ImportDeclaration`] values and prints
//! the rewritten sequence back to source text.

use std::fmt;

/// A single binding inside an import declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImportSpecifier {
    /// `import local from 'source'`
    Default { local: String },
    /// `import * as local from 'source'`
    Namespace { local: String },
    /// `import { imported as local } from 'source'`
    Named { imported: String, local: String },
}

impl ImportSpecifier {
    pub fn default(local: impl Into<String>) -> Self {
        Self::Default {
            local: local.into(),
        }
    }

    pub fn namespace(local: impl Into<String>) -> Self {
        Self::Namespace {
            local: local.into(),
        }
    }

    /// Named specifier whose local name equals the imported name
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::Named {
            imported: name.clone(),
            local: name,
        }
    }

    pub fn aliased(imported: impl Into<String>, local: impl Into<String>) -> Self {
        Self::Named {
            imported: imported.into(),
            local: local.into(),
        }
    }

    /// The local binding name introduced by this specifier
    pub fn local(&self) -> &str {
        match self {
            Self::Default { local } | Self::Namespace { local } | Self::Named { local, .. } => {
                local
            }
        }
    }

    /// Whether this binding pulls in the whole module object
    pub fn is_full_import(&self) -> bool {
        !matches!(self, Self::Named { .. })
    }

    /// Human-readable kind, used in diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Default { .. } => "default",
            Self::Namespace { .. } => "namespace",
            Self::Named { .. } => "named",
        }
    }
}

/// An `import` statement in structured form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImportDeclaration {
    pub source: String,
    pub specifiers: Vec<ImportSpecifier>,
}

impl ImportDeclaration {
    pub fn new(source: impl Into<String>, specifiers: Vec<ImportSpecifier>) -> Self {
        Self {
            source: source.into(),
            specifiers,
        }
    }

    /// `import 'source'` with no bindings
    pub fn side_effect(source: impl Into<String>) -> Self {
        Self::new(source, Vec::new())
    }

    pub fn is_side_effect(&self) -> bool {
        self.specifiers.is_empty()
    }

    /// Named specifiers as `(imported, local)` pairs, in source order
    pub fn named_specifiers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.specifiers.iter().filter_map(|spec| match spec {
            ImportSpecifier::Named { imported, local } => Some((imported.as_str(), local.as_str())),
            _ => None,
        })
    }

    /// Default and namespace specifiers, in source order
    pub fn full_import_specifiers(&self) -> impl Iterator<Item = &ImportSpecifier> {
        self.specifiers.iter().filter(|spec| spec.is_full_import())
    }
}

impl fmt::Display for ImportDeclaration {
    /// Prints the declaration as a single ES module statement, double-quoted
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.specifiers.is_empty() {
            return write!(f, "import \"{}\";", self.source);
        }

        let mut leading = Vec::new();
        let mut named = Vec::new();
        for spec in &self.specifiers {
            match spec {
                ImportSpecifier::Default { local } => leading.push(local.clone()),
                ImportSpecifier::Namespace { local } => leading.push(format!("* as {local}")),
                ImportSpecifier::Named { imported, local } if imported == local => {
                    named.push(imported.clone())
                }
                ImportSpecifier::Named { imported, local } => {
                    named.push(format!("{imported} as {local}"))
                }
            }
        }
        if !named.is_empty() {
            leading.push(format!("{{ {} }}", named.join(", ")));
        }
        write!(f, "import {} from \"{}\";", leading.join(", "), self.source)
    }
}
