//! Turn configuration into executable rules

use indexmap::IndexMap;
use modularize_core::{
    LibraryRule, MemberCase, Pattern, RuleError, RuleSet, RuleTransform, Template,
    TransformReturn,
};
use tracing::debug;

use crate::config::{LibraryOptions, MemberTarget, ModularizeConfig};
use crate::error::{ConfigError, Result};

impl ModularizeConfig {
    /// Compile every library into a [`RuleSet`], preserving table order
    ///
    /// # Example
    ///
    /// ```
    /// use modularize_config::ModularizeConfig;
    /// use serde_json::json;
    ///
    /// let config = ModularizeConfig::from_value(json!({
    ///     "libraries": { "lodash": { "transform": "lodash/${member}" } }
    /// })).unwrap();
    ///
    /// let rules = config.build_rules().unwrap();
    /// assert_eq!(rules.len(), 1);
    /// ```
    pub fn build_rules(&self) -> Result<RuleSet> {
        let rules = self
            .libraries
            .iter()
            .map(|(pattern, options)| compile_library(pattern, options))
            .collect::<Result<Vec<_>>>()?;
        debug!(rules = rules.len(), "compiled library rules");
        Ok(RuleSet::new(rules)?)
    }
}

/// Compile one `libraries` entry
pub fn compile_library(pattern: &str, options: &LibraryOptions) -> Result<LibraryRule> {
    let member_case = parse_member_case(pattern, options.member_case.as_deref())?;
    let mut rule = LibraryRule::new(pattern)?
        .prevent_full_import(options.prevent_full_import)
        .skip_default_conversion(options.skip_default_conversion);

    if let Some(style) = &options.style {
        rule = rule.with_style(RuleTransform::template(style)?);
    }

    let template = options
        .transform
        .as_deref()
        .map(Template::parse)
        .transpose()?;

    if options.members.is_empty() {
        if let Some(template) = template {
            rule = rule.with_transform(RuleTransform::Template(template));
        }
        if let Some(case) = member_case {
            rule = rule.with_member_case(case);
        }
        rule.validate()?;
        return Ok(rule);
    }

    // Member tables become a callback; the fallback template is checked here
    // because rule validation only sees template transforms.
    if let Some(template) = &template {
        check_captures(rule.pattern(), template)?;
    }
    let rule = rule.with_transform(members_callback(
        options.members.clone(),
        template,
        member_case,
    ));
    rule.validate()?;
    Ok(rule)
}

fn members_callback(
    members: IndexMap<String, MemberTarget>,
    fallback: Option<Template>,
    member_case: Option<MemberCase>,
) -> RuleTransform {
    RuleTransform::callback(move |member: &str, captures: &[String]| {
        if let Some(target) = members.get(member) {
            return TransformReturn::from(target);
        }
        let Some(template) = &fallback else {
            // An empty path is reported as an invalid transform for `member`
            return TransformReturn::Path(String::new());
        };
        let name = match member_case {
            Some(case) => case.apply(member),
            None => member.to_string(),
        };
        TransformReturn::Path(template.render(&name, captures).unwrap_or_default())
    })
}

fn check_captures(pattern: &Pattern, template: &Template) -> Result<()> {
    let available = pattern.capture_count();
    let index = template.max_capture();
    if index > available {
        return Err(RuleError::CaptureOutOfRange {
            pattern: pattern.as_str().to_string(),
            template: template.as_str().to_string(),
            index,
            available,
        }
        .into());
    }
    Ok(())
}

pub(crate) fn parse_member_case(pattern: &str, value: Option<&str>) -> Result<Option<MemberCase>> {
    value
        .map(|value| {
            value.parse().map_err(|reason: String| ConfigError::InvalidValue {
                field: format!("libraries.\"{pattern}\".member_case"),
                hint: Some(format!("{reason} (expected kebab, camel or snake)")),
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use modularize_core::{ImportDeclaration, ImportSpecifier, ImportTransformer};

    fn options(transform: Option<&str>) -> LibraryOptions {
        LibraryOptions {
            transform: transform.map(str::to_string),
            ..LibraryOptions::default()
        }
    }

    fn rewrite(rule: LibraryRule, source: &str, member: &str) -> Vec<String> {
        let transformer = ImportTransformer::new(RuleSet::new(vec![rule]).unwrap());
        transformer
            .process(&[ImportDeclaration::new(
                source,
                vec![ImportSpecifier::named(member)],
            )])
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn template_rule_carries_flags() {
        let mut opts = options(Some("lodash/${member}"));
        opts.prevent_full_import = true;
        opts.member_case = Some("kebab".to_string());

        let rule = compile_library("lodash", &opts).unwrap();
        assert!(rule.prevents_full_import());
        assert!(!rule.skips_default_conversion());
        assert_eq!(rule.member_case(), Some(MemberCase::Kebab));
        assert_eq!(
            rewrite(rule, "lodash", "debounceTime"),
            vec![r#"import debounceTime from "lodash/debounce-time";"#]
        );
    }

    #[test]
    fn members_override_and_fall_back() {
        let mut opts = options(Some("ui/lib/${member}"));
        opts.members.insert(
            "Row".to_string(),
            MemberTarget::Structured {
                replace: "ui/lib/Layout".to_string(),
                default: None,
            },
        );
        let rule = compile_library("ui", &opts).unwrap();

        assert_eq!(
            rewrite(rule.clone(), "ui", "Row"),
            vec![r#"import { Row } from "ui/lib/Layout";"#]
        );
        assert_eq!(
            rewrite(rule, "ui", "Grid"),
            vec![r#"import Grid from "ui/lib/Grid";"#]
        );
    }

    #[test]
    fn members_without_template_reject_unlisted() {
        let mut opts = options(None);
        opts.members.insert(
            "Grid".to_string(),
            MemberTarget::Path("ui/lib/Grid".to_string()),
        );
        let rule = compile_library("ui", &opts).unwrap();
        let transformer = ImportTransformer::new(RuleSet::new(vec![rule]).unwrap());

        let err = transformer
            .process(&[ImportDeclaration::new(
                "ui",
                vec![ImportSpecifier::named("Card")],
            )])
            .unwrap_err();
        assert!(matches!(err, RuleError::InvalidTransform { .. }));
    }

    #[test]
    fn member_case_applies_to_fallback_only() {
        let mut opts = options(Some("ui/${member}"));
        opts.member_case = Some("snake".to_string());
        opts.members.insert(
            "DatePicker".to_string(),
            MemberTarget::Path("ui/pickers/DatePicker".to_string()),
        );
        let rule = compile_library("ui", &opts).unwrap();

        assert_eq!(
            rewrite(rule.clone(), "ui", "DatePicker"),
            vec![r#"import DatePicker from "ui/pickers/DatePicker";"#]
        );
        assert_eq!(
            rewrite(rule, "ui", "TimeRange"),
            vec![r#"import TimeRange from "ui/time_range";"#]
        );
    }

    #[test]
    fn fallback_capture_overflow_is_rejected() {
        let mut opts = options(Some("${2}/${member}"));
        opts.members.insert("A".to_string(), MemberTarget::Path("a".to_string()));

        let err = compile_library("lib-(\\w+)", &opts).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Rule(RuleError::CaptureOutOfRange { index: 2, available: 1, .. })
        ));
    }

    #[test]
    fn unknown_member_case_is_invalid() {
        let mut opts = options(Some("ui/${member}"));
        opts.member_case = Some("screaming".to_string());
        assert!(matches!(
            compile_library("ui", &opts).unwrap_err(),
            ConfigError::InvalidValue { .. }
        ));
    }
}
