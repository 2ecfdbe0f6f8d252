//! Library matching: literal or anchored regular-expression patterns

use regex::Regex;

use crate::error::{Result, RuleError};
use crate::rule::{LibraryRule, RuleSet};

/// A library pattern, resolved once when the rule is built
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Matches on exact string equality
    Literal(String),
    /// Matches the whole specifier; `source` is the pattern as configured
    Regex { source: String, regex: Regex },
}

impl Pattern {
    /// Sources without regex metacharacters are literals; anything else is
    /// compiled as `^(?:source)$`.
    ///
    /// A `.` on its own does not make a regex, so package names such as
    /// `lodash.debounce` match only themselves.
    pub fn parse(source: &str) -> Result<Self> {
        if !source.chars().any(|c| c != '.' && is_regex_meta(c)) {
            return Ok(Self::Literal(source.to_string()));
        }

        let regex = Regex::new(&format!("^(?:{source})$")).map_err(|err| {
            RuleError::InvalidPattern {
                pattern: source.to_string(),
                source: err,
            }
        })?;
        Ok(Self::Regex {
            source: source.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(source) | Self::Regex { source, .. } => source,
        }
    }

    pub fn is_regex(&self) -> bool {
        matches!(self, Self::Regex { .. })
    }

    /// Number of explicit capture groups (0 for literals)
    pub fn capture_count(&self) -> usize {
        match self {
            Self::Literal(_) => 0,
            Self::Regex { regex, .. } => regex.captures_len() - 1,
        }
    }

    /// Match `specifier`, returning captures 1..n on success
    ///
    /// Optional groups that did not participate yield an empty string.
    pub fn captures(&self, specifier: &str) -> Option<Vec<String>> {
        match self {
            Self::Literal(literal) => (literal == specifier).then(Vec::new),
            Self::Regex { regex, .. } => {
                let caps = regex.captures(specifier)?;
                Some(
                    caps.iter()
                        .skip(1)
                        .map(|group| group.map(|m| m.as_str().to_string()).unwrap_or_default())
                        .collect(),
                )
            }
        }
    }
}

fn is_regex_meta(c: char) -> bool {
    matches!(
        c,
        '\\' | '^' | '$' | '.' | '|' | '?' | '*' | '+' | '(' | ')' | '[' | ']' | '{' | '}'
    )
}

/// A rule that governs an import source, plus the pattern's captures
#[derive(Debug, Clone)]
pub struct MatchResult<'r> {
    pub rule: &'r LibraryRule,
    pub captures: Vec<String>,
}

/// Find the first rule, in configured order, whose pattern matches `specifier`
pub fn match_source<'r>(specifier: &str, rules: &'r RuleSet) -> Option<MatchResult<'r>> {
    rules.iter().find_map(|rule| {
        rule.pattern
            .captures(specifier)
            .map(|captures| MatchResult { rule, captures })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::RuleTransform;

    fn rule(pattern: &str) -> LibraryRule {
        LibraryRule::new(pattern)
            .unwrap()
            .with_transform(RuleTransform::template("x/${member}").unwrap())
    }

    #[test]
    fn literal_matches_exactly() {
        assert!(!Pattern::parse("react-bootstrap").unwrap().is_regex());
        assert!(!Pattern::parse("@scope/ui-kit").unwrap().is_regex());

        let pattern = Pattern::parse("lodash").unwrap();
        assert!(!pattern.is_regex());
        assert_eq!(pattern.captures("lodash"), Some(vec![]));
        assert_eq!(pattern.captures("lodash-es"), None);
    }

    #[test]
    fn dotted_package_name_is_literal() {
        let pattern = Pattern::parse("lodash.debounce").unwrap();
        assert!(!pattern.is_regex());
        assert_eq!(pattern.captures("lodash.debounce"), Some(vec![]));
        assert_eq!(pattern.captures("lodashXdebounce"), None);

        assert!(Pattern::parse("lodash\\.(\\w+)").unwrap().is_regex());
    }

    #[test]
    fn regex_is_anchored_on_both_ends() {
        let pattern = Pattern::parse("my-library-?(\\w+)?").unwrap();
        assert!(pattern.is_regex());
        assert_eq!(
            pattern.captures("my-library-utils"),
            Some(vec!["utils".to_string()])
        );
        assert_eq!(pattern.captures("my-library"), Some(vec![String::new()]));
        assert_eq!(pattern.captures("not-my-library-utils"), None);
        assert_eq!(pattern.captures("my-library-utils/extra"), None);
    }

    #[test]
    fn alternation_stays_anchored() {
        let pattern = Pattern::parse("a|b").unwrap();
        assert!(pattern.captures("a").is_some());
        assert!(pattern.captures("ab").is_none());
    }

    #[test]
    fn invalid_regex_is_a_configuration_error() {
        let err = Pattern::parse("broken-(").unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { .. }));
    }

    #[test]
    fn first_matching_rule_wins() {
        let rules = RuleSet::new(vec![rule("ui-(\\w+)"), rule("ui-kit")]).unwrap();
        let matched = match_source("ui-kit", &rules).unwrap();
        assert_eq!(matched.rule.pattern_source(), "ui-(\\w+)");
        assert_eq!(matched.captures, vec!["kit".to_string()]);
        assert!(match_source("other", &rules).is_none());
    }
}
