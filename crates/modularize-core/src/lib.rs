//! Member-to-path import rewriting
//!
//! Rewrites `import { A, B } from 'lib'` into one direct-path import per
//! member (`import A from 'lib/A'`) according to per-library rules, so that
//! consumers of large libraries only load the members they use.
//!
//! # Overview
//!
//! - [`Pattern`] / [`match_source`] - find the rule governing an import source
//! - [`resolve`] - turn a rule and a member name into a [`TransformOutcome`]
//! - [`check_full_import`] - enforce `prevent_full_import`
//! - [`rewrite`] - build the [`RewritePlan`] for one declaration
//! - [`collect_style_paths`] - deduplicated side-effect style imports
//! - [`ImportTransformer`] - process a whole source unit
//!
//! The crate works on structured [`ImportDeclaration`] values; parsing and
//! printing source text is left to the host.
//!
//! # Example
//!
//! ```rust
//! use modularize_core::{
//!     ImportDeclaration, ImportSpecifier, ImportTransformer, LibraryRule, RuleSet,
//!     RuleTransform, TransformReturn,
//! };
//!
//! let rule = LibraryRule::new("react-bootstrap")?.with_transform(RuleTransform::callback(
//!     |member: &str, _captures: &[String]| match member {
//!         "Row" | "Col" => TransformReturn::replace("react-bootstrap/lib/Layout"),
//!         other => TransformReturn::Path(format!("react-bootstrap/lib/{other}")),
//!     },
//! ));
//! let transformer = ImportTransformer::new(RuleSet::new(vec![rule])?);
//!
//! let input = ImportDeclaration::new(
//!     "react-bootstrap",
//!     vec![ImportSpecifier::named("Row"), ImportSpecifier::named("Grid")],
//! );
//! let output: Vec<String> = transformer
//!     .process(&[input])?
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//!
//! assert_eq!(output, vec![
//!     r#"import { Row } from "react-bootstrap/lib/Layout";"#,
//!     r#"import Grid from "react-bootstrap/lib/Grid";"#,
//! ]);
//! # Ok::<(), modularize_core::RuleError>(())
//! ```

mod engine;
mod error;
mod guard;
mod model;
mod pattern;
mod resolver;
mod rewriter;
mod rule;
mod style;
mod template;

pub use engine::ImportTransformer;
pub use error::{Result, RuleError};
pub use guard::check_full_import;
pub use model::{ImportDeclaration, ImportSpecifier};
pub use pattern::{MatchResult, Pattern, match_source};
pub use resolver::{TransformOrigin, TransformOutcome, resolve, resolve_style};
pub use rewriter::{BindingKind, RewritePlan, effective_binding, rewrite};
pub use rule::{LibraryRule, RuleSet, RuleTransform, TransformCallback, TransformReturn};
pub use style::{collect_style_paths, style_imports};
pub use template::{MemberCase, Template};
