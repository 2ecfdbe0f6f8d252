//! Path templates with `${member}` and positional `${n}` placeholders

use std::fmt;

use crate::error::{Result, RuleError};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Member,
    Capture(usize),
}

/// A parsed path template such as `lodash/${member}` or `@scope/${1}/lib/${member}`
///
/// Parsing happens once when the rule is built; rendering never fails on
/// placeholders the template did not declare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse a template string
    ///
    /// A `$` that does not open `${` is kept literally. An unterminated or
    /// unknown placeholder is an error.
    pub fn parse(source: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = source;

        while let Some(start) = rest.find("${") {
            literal.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let end = after
                .find('}')
                .ok_or_else(|| RuleError::invalid_template(source, "unterminated `${`"))?;
            let name = after[..end].trim();

            let segment = if name == "member" {
                Segment::Member
            } else {
                match name.parse::<usize>() {
                    Ok(0) => {
                        return Err(RuleError::invalid_template(
                            source,
                            "capture groups are numbered from 1",
                        ));
                    }
                    Ok(index) => Segment::Capture(index),
                    Err(_) => {
                        return Err(RuleError::invalid_template(
                            source,
                            format!("unknown placeholder `${{{name}}}`"),
                        ));
                    }
                }
            };

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(segment);
            rest = &after[end + 1..];
        }
        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Highest capture index referenced, 0 when none
    pub fn max_capture(&self) -> usize {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Capture(index) => Some(*index),
                _ => None,
            })
            .max()
            .unwrap_or(0)
    }

    pub fn uses_member(&self) -> bool {
        self.segments.contains(&Segment::Member)
    }

    /// Substitute `member` and `captures` (capture 1 is `captures[0]`)
    ///
    /// Returns the first capture index that is out of range as the error.
    pub fn render(&self, member: &str, captures: &[String]) -> std::result::Result<String, usize> {
        let mut out = String::with_capacity(self.source.len() + member.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Member => out.push_str(member),
                Segment::Capture(index) => {
                    let value = captures.get(index - 1).ok_or(*index)?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Case conversion applied to a member name before template substitution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberCase {
    /// `DatePicker` → `date-picker`
    Kebab,
    /// `DatePicker` → `datePicker`
    Camel,
    /// `DatePicker` → `date_picker`
    Snake,
}

impl MemberCase {
    pub fn apply(self, member: &str) -> String {
        match self {
            MemberCase::Kebab => join_words(member, '-'),
            MemberCase::Snake => join_words(member, '_'),
            MemberCase::Camel => {
                let mut words = split_words(member).into_iter();
                let mut out = words.next().unwrap_or_default();
                for word in words {
                    let mut chars = word.chars();
                    if let Some(first) = chars.next() {
                        out.extend(first.to_uppercase());
                        out.push_str(chars.as_str());
                    }
                }
                out
            }
        }
    }
}

impl std::str::FromStr for MemberCase {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kebab" | "kebab-case" => Ok(MemberCase::Kebab),
            "camel" | "camelcase" => Ok(MemberCase::Camel),
            "snake" | "snake_case" => Ok(MemberCase::Snake),
            other => Err(format!("unknown member case: {other}")),
        }
    }
}

fn join_words(member: &str, separator: char) -> String {
    split_words(member).join(&separator.to_string())
}

/// Split on `-`, `_` and lower→upper or acronym→word boundaries, lowercasing each word
fn split_words(member: &str) -> Vec<String> {
    let chars: Vec<char> = member.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == '_' || c == ' ' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }
        current.extend(c.to_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}
