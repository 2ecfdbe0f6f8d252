//! Library rules: what a matched import is rewritten to

use std::fmt;
use std::sync::Arc;

use crate::error::{Result, RuleError};
use crate::pattern::Pattern;
use crate::template::{MemberCase, Template};

/// What a transform callback returns for one member
///
/// The two shapes normalize differently: a plain path converts the member
/// into a default import, a structured return keeps it a named import
/// unless `default` says otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformReturn {
    Path(String),
    Structured {
        replace: String,
        default: Option<bool>,
    },
}

impl TransformReturn {
    /// Structured return without a `default` field
    pub fn replace(path: impl Into<String>) -> Self {
        Self::Structured {
            replace: path.into(),
            default: None,
        }
    }

    /// Structured return with an explicit `default` field
    pub fn replace_with_default(path: impl Into<String>, default: bool) -> Self {
        Self::Structured {
            replace: path.into(),
            default: Some(default),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Path(path) => path,
            Self::Structured { replace, .. } => replace,
        }
    }
}

impl From<String> for TransformReturn {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

impl From<&str> for TransformReturn {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

/// Callback invoked with `(imported_name, captures)`
pub type TransformCallback = Arc<dyn Fn(&str, &[String]) -> TransformReturn + Send + Sync>;

/// A `transform` or `style` entry: template or callback
#[derive(Clone)]
pub enum RuleTransform {
    Template(Template),
    Callback(TransformCallback),
}

impl RuleTransform {
    pub fn template(source: &str) -> Result<Self> {
        Ok(Self::Template(Template::parse(source)?))
    }

    pub fn callback<F, R>(f: F) -> Self
    where
        F: Fn(&str, &[String]) -> R + Send + Sync + 'static,
        R: Into<TransformReturn>,
    {
        Self::Callback(Arc::new(move |member, captures| f(member, captures).into()))
    }

    fn as_template(&self) -> Option<&Template> {
        match self {
            Self::Template(template) => Some(template),
            Self::Callback(_) => None,
        }
    }
}

impl fmt::Debug for RuleTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(template) => f.debug_tuple("Template").field(&template.as_str()).finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// Rewriting rule for one library pattern
#[derive(Debug, Clone)]
pub struct LibraryRule {
    pub(crate) pattern: Pattern,
    pub(crate) transform: Option<RuleTransform>,
    pub(crate) style: Option<RuleTransform>,
    pub(crate) prevent_full_import: bool,
    pub(crate) skip_default_conversion: bool,
    pub(crate) member_case: Option<MemberCase>,
}

impl LibraryRule {
    /// Create a rule for `pattern`, compiling it if it is a regular expression
    ///
    /// # Example
    ///
    /// ```
    /// use modularize_core::{LibraryRule, RuleTransform};
    ///
    /// let rule = LibraryRule::new("lodash")?
    ///     .with_transform(RuleTransform::template("lodash/${member}")?)
    ///     .prevent_full_import(true);
    /// assert_eq!(rule.pattern_source(), "lodash");
    /// # Ok::<(), modularize_core::RuleError>(())
    /// ```
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: Pattern::parse(pattern)?,
            transform: None,
            style: None,
            prevent_full_import: false,
            skip_default_conversion: false,
            member_case: None,
        })
    }

    pub fn with_transform(mut self, transform: RuleTransform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn with_style(mut self, style: RuleTransform) -> Self {
        self.style = Some(style);
        self
    }

    pub fn prevent_full_import(mut self, value: bool) -> Self {
        self.prevent_full_import = value;
        self
    }

    pub fn skip_default_conversion(mut self, value: bool) -> Self {
        self.skip_default_conversion = value;
        self
    }

    pub fn with_member_case(mut self, case: MemberCase) -> Self {
        self.member_case = Some(case);
        self
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn pattern_source(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn transform(&self) -> Option<&RuleTransform> {
        self.transform.as_ref()
    }

    pub fn style(&self) -> Option<&RuleTransform> {
        self.style.as_ref()
    }

    pub fn prevents_full_import(&self) -> bool {
        self.prevent_full_import
    }

    pub fn skips_default_conversion(&self) -> bool {
        self.skip_default_conversion
    }

    pub fn member_case(&self) -> Option<MemberCase> {
        self.member_case
    }

    /// Check the templates against the pattern's capture groups
    ///
    /// A missing `transform` is not reported here: it only becomes an error
    /// once the rule matches a declaration.
    pub fn validate(&self) -> Result<()> {
        let available = self.pattern.capture_count();
        let templates = [self.transform.as_ref(), self.style.as_ref()]
            .into_iter()
            .flatten()
            .filter_map(RuleTransform::as_template);

        for template in templates {
            let index = template.max_capture();
            if index > available {
                return Err(RuleError::CaptureOutOfRange {
                    pattern: self.pattern_source().to_string(),
                    template: template.as_str().to_string(),
                    index,
                    available,
                });
            }
        }
        Ok(())
    }
}

/// Ordered, validated collection of rules
///
/// Order is significant: the first matching rule wins.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<LibraryRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<LibraryRule>) -> Result<Self> {
        for rule in &rules {
            rule.validate()?;
        }
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[LibraryRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LibraryRule> {
        self.rules.iter()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a LibraryRule;
    type IntoIter = std::slice::Iter<'a, LibraryRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_reference_beyond_groups_is_rejected() {
        let rule = LibraryRule::new("my-lib-(\\w+)")
            .unwrap()
            .with_transform(RuleTransform::template("my-lib/${1}/${2}").unwrap());
        let err = RuleSet::new(vec![rule]).unwrap_err();
        assert!(matches!(
            err,
            RuleError::CaptureOutOfRange {
                index: 2,
                available: 1,
                ..
            }
        ));
    }

    #[test]
    fn literal_pattern_has_no_captures() {
        let rule = LibraryRule::new("lodash")
            .unwrap()
            .with_style(RuleTransform::template("lodash/${1}.css").unwrap());
        assert!(rule.validate().is_err());
    }

    #[test]
    fn rule_without_transform_still_validates() {
        let rule = LibraryRule::new("lodash").unwrap();
        assert!(RuleSet::new(vec![rule]).is_ok());
    }

    #[test]
    fn callback_accepts_str_and_structured_returns() {
        let plain = RuleTransform::callback(|member: &str, _: &[String]| format!("lib/{member}"));
        let structured =
            RuleTransform::callback(|member: &str, _: &[String]| TransformReturn::replace(member));
        assert!(matches!(plain, RuleTransform::Callback(_)));
        assert!(matches!(structured, RuleTransform::Callback(_)));
        assert_eq!(format!("{plain:?}"), "Callback(..)");
    }
}
