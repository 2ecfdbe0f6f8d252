//! OXC front end for import rewriting
//!
//! Parses JavaScript/TypeScript with oxc, lifts top-level `import`
//! declarations into the [`modularize_core`] model, and splices the
//! rewritten declarations back over the originals.
//!
//! # Example
//!
//! ```rust
//! use modularize_core::{ImportTransformer, LibraryRule, RuleSet, RuleTransform};
//! use modularize_gen::{ParseOptions, transform_source};
//!
//! let rules = RuleSet::new(vec![
//!     LibraryRule::new("lodash")?.with_transform(RuleTransform::template("lodash/${member}")?),
//! ])?;
//! let transformer = ImportTransformer::new(rules);
//!
//! let source = "import { merge } from 'lodash';\nmerge({}, {});\n";
//! let output = transform_source(source, &ParseOptions::from_path("app.js"), &transformer)?;
//!
//! assert!(output.modified);
//! assert!(output.code.contains("lodash/merge"));
//! assert!(output.code.ends_with("merge({}, {});\n"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod emit;
mod error;
mod extract;
mod format;
mod parser;
mod transform;

pub use emit::{ImportEmitter, render_declarations};
pub use error::{GenError, Result};
pub use extract::{LocatedImport, collect_imports, extract_import};
pub use format::{FormatOptions, QuoteStyle};
pub use parser::{ParseOptions, parse};
pub use transform::{SourceTransformer, TransformOutput, transform_source};

// Re-export commonly used OXC types for convenience
pub use oxc_allocator::Allocator;
