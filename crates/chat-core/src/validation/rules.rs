//! Primitive rules - stateless predicates over a single value
//!
//! Every rule either accepts the value or rejects it with an [`ErrorKind`] and
//! a short machine-oriented reason. Human-readable messages are attached one
//! level up, by the field validators.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;
use validator::{ValidateEmail, ValidateUrl};

use super::result::ErrorKind;

/// Channel names: ASCII alphanumerics, `_`, `-`, Hiragana, Katakana and CJK ideographs
pub static CHANNEL_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_\-\x{3040}-\x{309F}\x{30A0}-\x{30FF}\x{4E00}-\x{9FAF}]+$")
        .expect("channel name pattern is valid")
});

/// Character classes a signup password must contain at least once each
pub static PASSWORD_CHARACTER_CLASSES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [r"[a-z]", r"[A-Z]", r"[0-9]"]
        .map(|class| Regex::new(class).expect("password character class is valid"))
});

/// Why a rule rejected a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    pub kind: ErrorKind,
    pub reason: String,
}

impl Rejected {
    fn new(kind: ErrorKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.code(), self.reason)
    }
}

/// Outcome of a single rule
pub type RuleOutcome = Result<(), Rejected>;

/// Logical character count (Unicode scalar values, not bytes)
#[inline]
pub fn char_count(value: &str) -> usize {
    value.chars().count()
}

pub fn required(value: &str) -> RuleOutcome {
    if value.is_empty() {
        Err(Rejected::new(ErrorKind::Required, "value is empty"))
    } else {
        Ok(())
    }
}

pub fn length_at_least(value: &str, min: usize) -> RuleOutcome {
    let count = char_count(value);
    if count < min {
        Err(Rejected::new(
            ErrorKind::LengthBound,
            format!("expected at least {min} characters, got {count}"),
        ))
    } else {
        Ok(())
    }
}

pub fn length_at_most(value: &str, max: usize) -> RuleOutcome {
    let count = char_count(value);
    if count > max {
        Err(Rejected::new(
            ErrorKind::LengthBound,
            format!("expected at most {max} characters, got {count}"),
        ))
    } else {
        Ok(())
    }
}

pub fn matches_pattern(value: &str, pattern: &Regex) -> RuleOutcome {
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(Rejected::new(
            ErrorKind::FormatMismatch,
            format!("does not match {}", pattern.as_str()),
        ))
    }
}

/// Accepts only if every pattern matches somewhere in the value
pub fn matches_every_pattern(value: &str, patterns: &[Regex]) -> RuleOutcome {
    match patterns.iter().find(|pattern| !pattern.is_match(value)) {
        Some(missing) => Err(Rejected::new(
            ErrorKind::FormatMismatch,
            format!("does not contain {}", missing.as_str()),
        )),
        None => Ok(()),
    }
}

/// RFC-shaped address whose domain is dotted and ends in an alphabetic TLD
pub fn is_well_formed_email(value: &str) -> RuleOutcome {
    if value.validate_email() && has_dotted_domain(value) {
        Ok(())
    } else {
        Err(Rejected::new(ErrorKind::FormatMismatch, "not an email address"))
    }
}

fn has_dotted_domain(email: &str) -> bool {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return false;
    };
    match domain.rsplit_once('.') {
        Some((host, tld)) => {
            !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    }
}

pub fn is_well_formed_url(value: &str) -> RuleOutcome {
    if value.validate_url() {
        Ok(())
    } else {
        Err(Rejected::new(ErrorKind::FormatMismatch, "not an absolute URL"))
    }
}

/// Only the hyphenated 8-4-4-4-12 form is accepted
pub fn is_well_formed_uuid(value: &str) -> RuleOutcome {
    if value.len() == 36 && Uuid::try_parse(value).is_ok() {
        Ok(())
    } else {
        Err(Rejected::new(ErrorKind::FormatMismatch, "not a hyphenated UUID"))
    }
}

pub fn numeric_at_most(value: u64, max: u64) -> RuleOutcome {
    if value > max {
        Err(Rejected::new(
            ErrorKind::SizeLimit,
            format!("{value} exceeds {max}"),
        ))
    } else {
        Ok(())
    }
}

pub fn member_of(value: &str, allowed: &[&str]) -> RuleOutcome {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(Rejected::new(
            ErrorKind::TypeNotAllowed,
            format!("{value:?} is not in the allow-list"),
        ))
    }
}

/// A rule that can be applied to a value of type `T`
pub trait Rule<T: ?Sized> {
    fn apply(&self, value: &T) -> RuleOutcome;
}

/// Rules over text values
#[derive(Debug, Clone, Copy)]
pub enum TextRule {
    Required,
    MinChars(usize),
    MaxChars(usize),
    Pattern(&'static Regex),
    EveryPattern(&'static [Regex]),
    Email,
    Url,
    Uuid,
    OneOf(&'static [&'static str]),
}

impl Rule<str> for TextRule {
    fn apply(&self, value: &str) -> RuleOutcome {
        match *self {
            Self::Required => required(value),
            Self::MinChars(min) => length_at_least(value, min),
            Self::MaxChars(max) => length_at_most(value, max),
            Self::Pattern(pattern) => matches_pattern(value, pattern),
            Self::EveryPattern(patterns) => matches_every_pattern(value, patterns),
            Self::Email => is_well_formed_email(value),
            Self::Url => is_well_formed_url(value),
            Self::Uuid => is_well_formed_uuid(value),
            Self::OneOf(allowed) => member_of(value, allowed),
        }
    }
}

/// Rules over unsigned integers
#[derive(Debug, Clone, Copy)]
pub enum NumericRule {
    AtMost(u64),
}

impl Rule<u64> for NumericRule {
    fn apply(&self, value: &u64) -> RuleOutcome {
        match *self {
            Self::AtMost(max) => numeric_at_most(*value, max),
        }
    }
}

/// A rule paired with the message shown when it rejects
#[derive(Debug, Clone, Copy)]
pub struct Check<R> {
    pub rule: R,
    pub message: &'static str,
}

impl<R> Check<R> {
    pub const fn new(rule: R, message: &'static str) -> Self {
        Self { rule, message }
    }
}
