//! Field rules and the individual format checks they are built from.
//!
//! DESIGN
//! ======
//! A form's schema is a static slice of [`FieldRule`]s. Each rule names a
//! field, an optional "required" message, and an ordered list of checks with
//! their own messages. The first failing check wins, so a rule list reads
//! top to bottom the same way the inline error is chosen.

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

use std::sync::LazyLock;

use regex::Regex;
use time::Date;

use crate::dates::parse_input_date;

/// Message used when a date check cannot parse its input.
pub const INVALID_DATE_MESSAGE: &str = "Please enter a valid date";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone pattern"));

/// One format or cross-field check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Check<F> {
    /// Something `@` something `.` something, no whitespace.
    Email,
    /// Optional `+`, then 1-16 digits with a non-zero lead, after stripping
    /// spaces, dashes and parentheses.
    Phone,
    /// Calendar date not earlier than today. Today itself passes.
    NotBeforeToday,
    /// Calendar date not later than today.
    NotAfterToday,
    /// At least this many characters.
    MinChars(usize),
    /// Contains a lowercase letter, an uppercase letter, and a digit.
    MixedCaseAndDigit,
    /// Exactly equal to another field's text.
    Matches(F),
}

/// Result of running a single [`Check`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckResult {
    Pass,
    Fail,
    /// A date check could not parse its input.
    Unparseable,
}

impl<F: Copy> Check<F> {
    /// Run the check against `raw`. `lookup` resolves other fields' text for
    /// cross-field checks.
    pub fn run(self, raw: &str, today: Date, lookup: impl Fn(F) -> Option<String>) -> CheckResult {
        let ok = match self {
            Self::Email => is_valid_email(raw),
            Self::Phone => is_valid_phone(raw),
            Self::NotBeforeToday => match parse_input_date(raw) {
                Some(date) => date >= today,
                None => return CheckResult::Unparseable,
            },
            Self::NotAfterToday => match parse_input_date(raw) {
                Some(date) => date <= today,
                None => return CheckResult::Unparseable,
            },
            Self::MinChars(min) => raw.chars().count() >= min,
            Self::MixedCaseAndDigit => has_mixed_case_and_digit(raw),
            Self::Matches(other) => lookup(other).is_some_and(|other| other == raw),
        };
        if ok { CheckResult::Pass } else { CheckResult::Fail }
    }
}

/// Validation rule for one field.
#[derive(Clone, Copy, Debug)]
pub struct FieldRule<F: 'static> {
    pub field: F,
    /// Message when the trimmed value is empty (or the box is unchecked).
    /// `None` makes the field optional: blank values skip all checks.
    pub required: Option<&'static str>,
    pub checks: &'static [(Check<F>, &'static str)],
}

impl<F> FieldRule<F> {
    #[must_use]
    pub const fn required(field: F, message: &'static str) -> Self {
        Self { field, required: Some(message), checks: &[] }
    }

    #[must_use]
    pub const fn optional(field: F) -> Self {
        Self { field, required: None, checks: &[] }
    }

    #[must_use]
    pub const fn with_checks(mut self, checks: &'static [(Check<F>, &'static str)]) -> Self {
        self.checks = checks;
        self
    }
}

#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_RE.is_match(raw)
}

#[must_use]
pub fn is_valid_phone(raw: &str) -> bool {
    let digits: String = raw.chars().filter(|c| !(c.is_whitespace() || matches!(c, '-' | '(' | ')'))).collect();
    PHONE_RE.is_match(&digits)
}

#[must_use]
pub fn has_mixed_case_and_digit(raw: &str) -> bool {
    raw.chars().any(|c| c.is_ascii_lowercase())
        && raw.chars().any(|c| c.is_ascii_uppercase())
        && raw.chars().any(|c| c.is_ascii_digit())
}
