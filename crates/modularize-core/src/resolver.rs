//! Per-member rule resolution
//!
//! Resolution turns a matched rule and an imported name into a
//! [`TransformOutcome`]. Whatever shape the rule produced is normalized in
//! [`TransformOrigin::normalize`] and nowhere else.

use tracing::trace;

use crate::error::{Result, RuleError};
use crate::rule::{LibraryRule, RuleTransform, TransformReturn};

/// Normalized result of resolving one member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutcome {
    pub path: String,
    pub is_default_export: bool,
}

/// Raw rule output before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformOrigin {
    FromTemplate(String),
    FromCallback(TransformReturn),
}

impl TransformOrigin {
    /// Plain paths (template output or a string callback return) convert to a
    /// default import; a structured return stays named unless `default` is set.
    pub fn normalize(self) -> TransformOutcome {
        match self {
            Self::FromTemplate(path) | Self::FromCallback(TransformReturn::Path(path)) => {
                TransformOutcome {
                    path,
                    is_default_export: true,
                }
            }
            Self::FromCallback(TransformReturn::Structured { replace, default }) => {
                TransformOutcome {
                    path: replace,
                    is_default_export: default.unwrap_or(false),
                }
            }
        }
    }
}

/// Resolve `imported` through the rule's `transform`
pub fn resolve(rule: &LibraryRule, imported: &str, captures: &[String]) -> Result<TransformOutcome> {
    let transform = rule
        .transform()
        .ok_or_else(|| RuleError::MissingTransform {
            pattern: rule.pattern_source().to_string(),
        })?;

    let outcome = invoke(rule, transform, imported, captures)?.normalize();
    ensure_path(rule, imported, &outcome.path)?;
    trace!(
        member = imported,
        path = %outcome.path,
        default = outcome.is_default_export,
        "resolved member"
    );
    Ok(outcome)
}

/// Resolve the side-effect style path for `imported`, if the rule has a `style`
pub fn resolve_style(
    rule: &LibraryRule,
    imported: &str,
    captures: &[String],
) -> Result<Option<String>> {
    let Some(style) = rule.style() else {
        return Ok(None);
    };

    let path = match invoke(rule, style, imported, captures)? {
        TransformOrigin::FromTemplate(path) => path,
        TransformOrigin::FromCallback(ret) => ret.path().to_string(),
    };
    ensure_path(rule, imported, &path)?;
    Ok(Some(path))
}

fn invoke(
    rule: &LibraryRule,
    transform: &RuleTransform,
    imported: &str,
    captures: &[String],
) -> Result<TransformOrigin> {
    match transform {
        RuleTransform::Template(template) => {
            let member = match rule.member_case() {
                Some(case) => case.apply(imported),
                None => imported.to_string(),
            };
            template
                .render(&member, captures)
                .map(TransformOrigin::FromTemplate)
                .map_err(|index| RuleError::CaptureOutOfRange {
                    pattern: rule.pattern_source().to_string(),
                    template: template.as_str().to_string(),
                    index,
                    available: captures.len(),
                })
        }
        RuleTransform::Callback(callback) => {
            Ok(TransformOrigin::FromCallback(callback(imported, captures)))
        }
    }
}

fn ensure_path(rule: &LibraryRule, imported: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(RuleError::invalid_transform(
            rule.pattern_source(),
            imported,
            "resolved path is empty",
        ));
    }
    Ok(())
}
