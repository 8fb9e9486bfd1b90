//! core::lint
//!
//! Validation of commit messages against the configuration.
//!
//! # Rules
//!
//! | Code | Field             | Rule                                   |
//! |------|-------------------|----------------------------------------|
//! | 1    | type              | present                                |
//! | 2    | type              | one of `types.values`                  |
//! | 3    | scope             | present when `scope.required`          |
//! | 10   | scope             | one of `scope.values` for list scopes  |
//! | 4-6  | short description | present, within min/max length         |
//! | 7-9  | long description  | only when `longDescription.required`   |
//!
//! Types are compared on their alias form, so `✨` and `:sparkles:` are
//! the same type. Lengths are counted in characters.

use std::fmt;

use regex::Regex;
use thiserror::Error;

use crate::core::config::{Config, ScopeKind};
use crate::core::emoji::replace_emoji_with_alias;
use crate::core::message::{CommitMessage, SHORT_HASH_LEN};
use crate::i18n::Lang;

/// Message field a violation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Type,
    Scope,
    ShortDescription,
    LongDescription,
}

impl Field {
    fn key(self) -> &'static str {
        match self {
            Field::Type => "commit.field.type",
            Field::Scope => "commit.field.scope",
            Field::ShortDescription => "commit.field.short_description",
            Field::LongDescription => "commit.field.long_description",
        }
    }
}

/// A broken rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    InvalidType,
    TypeNotAllowed(String),
    ScopeRequired,
    ScopeNotAllowed(String),
    ShortDescriptionRequired,
    ShortDescriptionTooShort(usize),
    ShortDescriptionTooLong(usize),
    LongDescriptionRequired,
    LongDescriptionTooShort(usize),
    LongDescriptionTooLong(usize),
}

impl Rule {
    /// Stable numeric code of the rule.
    pub fn code(&self) -> u8 {
        match self {
            Rule::InvalidType => 1,
            Rule::TypeNotAllowed(_) => 2,
            Rule::ScopeRequired => 3,
            Rule::ShortDescriptionRequired => 4,
            Rule::ShortDescriptionTooShort(_) => 5,
            Rule::ShortDescriptionTooLong(_) => 6,
            Rule::LongDescriptionRequired => 7,
            Rule::LongDescriptionTooShort(_) => 8,
            Rule::LongDescriptionTooLong(_) => 9,
            Rule::ScopeNotAllowed(_) => 10,
        }
    }

    fn describe(&self, lang: Lang) -> String {
        match self {
            Rule::InvalidType => lang.text("lint.rule.invalid_type").to_string(),
            Rule::TypeNotAllowed(value) => lang.format("lint.rule.type_not_allowed", &[value]),
            Rule::ScopeRequired => lang.text("lint.rule.scope_required").to_string(),
            Rule::ScopeNotAllowed(value) => lang.format("lint.rule.scope_not_allowed", &[value]),
            Rule::ShortDescriptionRequired => {
                lang.text("lint.rule.short_description_required").to_string()
            }
            Rule::ShortDescriptionTooShort(min) => {
                lang.format("lint.rule.too_short", &[&min.to_string()])
            }
            Rule::ShortDescriptionTooLong(max) => {
                lang.format("lint.rule.too_long", &[&max.to_string()])
            }
            Rule::LongDescriptionRequired => {
                lang.text("lint.rule.long_description_required").to_string()
            }
            Rule::LongDescriptionTooShort(min) => {
                lang.format("lint.rule.too_short", &[&min.to_string()])
            }
            Rule::LongDescriptionTooLong(max) => {
                lang.format("lint.rule.too_long", &[&max.to_string()])
            }
        }
    }
}

/// One validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: Field,
    pub rule: Rule,
}

impl Violation {
    fn new(field: Field, rule: Rule) -> Self {
        Self { field, rule }
    }

    /// `field: message` in the given language.
    pub fn describe(&self, lang: Lang) -> String {
        format!("{}: {}", lang.text(self.field.key()), self.rule.describe(lang))
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(Lang::current()))
    }
}

/// Violations of several commits, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    pub entries: Vec<(String, Vec<Violation>)>,
}

impl LintReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of commits with at least one violation.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Render the report in the given language.
    pub fn describe(&self, lang: Lang) -> String {
        let mut out = format!("{}:", lang.text("lint.violations"));
        for (id, violations) in &self.entries {
            let short = &id[..id.len().min(SHORT_HASH_LEN)];
            out.push_str(&format!("\n - {short}:"));
            for violation in violations {
                out.push_str(&format!("\n    - {}", violation.describe(lang)));
            }
        }
        out
    }
}

fn describe_list(violations: &[Violation], lang: Lang) -> String {
    let mut out = format!("{}:", lang.text("lint.violations"));
    for violation in violations {
        out.push_str(&format!("\n - {}", violation.describe(lang)));
    }
    out
}

/// Errors from linting.
#[derive(Debug, Error)]
pub enum LintError {
    #[error("{}", describe_list(.0, Lang::current()))]
    Invalid(Vec<Violation>),

    #[error("{}", .0.describe(Lang::current()))]
    Violations(LintReport),

    #[error("invalid ignore pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Collect every rule the message breaks.
pub fn collect_violations(message: &CommitMessage, config: &Config) -> Vec<Violation> {
    let mut violations = Vec::new();

    // type
    let r#type = message.r#type.as_deref();
    if is_blank(r#type) {
        violations.push(Violation::new(Field::Type, Rule::InvalidType));
    }
    let given = replace_emoji_with_alias(r#type.unwrap_or_default().trim()).into_owned();
    let allowed = config
        .types
        .values
        .keys()
        .any(|key| replace_emoji_with_alias(key.trim()) == given);
    if !allowed {
        violations.push(Violation::new(Field::Type, Rule::TypeNotAllowed(given)));
    }

    // scope
    let scope = message.scope.as_deref();
    if config.scope.required && is_blank(scope) {
        violations.push(Violation::new(Field::Scope, Rule::ScopeRequired));
    }
    if let (Ok(ScopeKind::List), Some(scope)) = (config.scope.kind(), scope) {
        let scope = replace_emoji_with_alias(scope.trim()).into_owned();
        let known = config
            .scope
            .values
            .iter()
            .any(|value| replace_emoji_with_alias(value.trim()) == scope);
        if !scope.is_empty() && !known {
            violations.push(Violation::new(Field::Scope, Rule::ScopeNotAllowed(scope)));
        }
    }

    // short description
    let short = &config.short_description;
    match message.short_description.as_deref() {
        Some(text) if !text.trim().is_empty() => {
            let len = text.chars().count();
            if len < short.min_length {
                violations.push(Violation::new(
                    Field::ShortDescription,
                    Rule::ShortDescriptionTooShort(short.min_length),
                ));
            }
            if len > short.max_length {
                violations.push(Violation::new(
                    Field::ShortDescription,
                    Rule::ShortDescriptionTooLong(short.max_length),
                ));
            }
        }
        _ => violations.push(Violation::new(
            Field::ShortDescription,
            Rule::ShortDescriptionRequired,
        )),
    }

    // long description
    let long = &config.long_description;
    if long.required {
        match message.long_description.as_deref() {
            Some(text) if !text.trim().is_empty() => {
                let len = text.chars().count();
                if len < long.min_length {
                    violations.push(Violation::new(
                        Field::LongDescription,
                        Rule::LongDescriptionTooShort(long.min_length),
                    ));
                }
                if len > long.max_length {
                    violations.push(Violation::new(
                        Field::LongDescription,
                        Rule::LongDescriptionTooLong(long.max_length),
                    ));
                }
            }
            _ => violations.push(Violation::new(
                Field::LongDescription,
                Rule::LongDescriptionRequired,
            )),
        }
    }

    violations
}

/// Validate a single message.
pub fn validate(message: &CommitMessage, config: &Config) -> Result<(), LintError> {
    let violations = collect_violations(message, config);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(LintError::Invalid(violations))
    }
}

/// Validate several messages keyed by commit id, reporting all of them.
pub fn validate_many<'a, I>(messages: I, config: &Config) -> Result<(), LintError>
where
    I: IntoIterator<Item = (&'a str, &'a CommitMessage)>,
{
    let mut report = LintReport::default();
    for (id, message) in messages {
        let violations = collect_violations(message, config);
        if !violations.is_empty() {
            report.entries.push((id.to_string(), violations));
        }
    }

    if report.is_empty() {
        Ok(())
    } else {
        Err(LintError::Violations(report))
    }
}

/// Compile ignore patterns into one alternation, on their alias form.
///
/// Returns `None` when there are no patterns.
pub fn ignore_matcher(patterns: &[String]) -> Result<Option<Regex>, LintError> {
    let patterns: Vec<_> = patterns
        .iter()
        .filter(|p| !p.trim().is_empty())
        .map(|p| format!("(?:{})", replace_emoji_with_alias(p)))
        .collect();
    if patterns.is_empty() {
        return Ok(None);
    }
    Ok(Some(Regex::new(&patterns.join("|"))?))
}

/// Check whether a raw commit message matches any ignore pattern.
pub fn is_ignored(raw_message: &str, patterns: &[String]) -> Result<bool, LintError> {
    Ok(match ignore_matcher(patterns)? {
        Some(matcher) => matcher.is_match(&replace_emoji_with_alias(raw_message)),
        None => false,
    })
}

/// Split items into `(kept, ignored)` by matching their raw message.
pub fn split_ignored<T>(
    items: Vec<T>,
    patterns: &[String],
    raw_message: impl Fn(&T) -> &str,
) -> Result<(Vec<T>, Vec<T>), LintError> {
    let Some(matcher) = ignore_matcher(patterns)? else {
        return Ok((items, Vec::new()));
    };
    let (ignored, kept) = items
        .into_iter()
        .partition(|item| matcher.is_match(&replace_emoji_with_alias(raw_message(item))));
    Ok((kept, ignored))
}
