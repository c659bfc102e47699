//! Per-field error map and the schema-driven `validate` pass.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

use time::Date;

use crate::field::{FormField, FormRecord};
use crate::rules::{CheckResult, INVALID_DATE_MESSAGE};

/// Inline error messages keyed by field.
///
/// Only failing fields are present. An empty map means the record is valid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationErrors<F: FormField> {
    entries: BTreeMap<F, String>,
}

impl<F: FormField> Default for ValidationErrors<F> {
    fn default() -> Self {
        Self { entries: BTreeMap::new() }
    }
}

impl<F: FormField> ValidationErrors<F> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    /// Drop the entry for `field`. Returns whether one was present.
    pub fn remove(&mut self, field: F) -> bool {
        self.entries.remove(&field).is_some()
    }

    #[must_use]
    pub fn get(&self, field: F) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: F) -> bool {
        self.entries.contains_key(&field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Failing fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> + '_ {
        self.entries.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Check every field of `record` against `R::RULES`.
///
/// Required fields fail on blank input with the rule's required message.
/// Non-blank values then run the rule's checks in order and record the
/// first failure. Blank optional fields are skipped.
#[must_use]
pub fn validate<R: FormRecord>(record: &R, today: Date) -> ValidationErrors<R::Field> {
    let mut errors = ValidationErrors::new();
    let lookup = |field: R::Field| record.value(field).as_text().map(str::to_owned);

    for rule in R::RULES {
        let value = record.value(rule.field);
        if value.is_blank() {
            if let Some(message) = rule.required {
                errors.insert(rule.field, message);
            }
            continue;
        }
        let Some(raw) = value.as_text() else {
            continue;
        };
        for (check, message) in rule.checks {
            match check.run(raw, today, lookup) {
                CheckResult::Pass => {}
                CheckResult::Fail => {
                    errors.insert(rule.field, *message);
                    break;
                }
                CheckResult::Unparseable => {
                    errors.insert(rule.field, INVALID_DATE_MESSAGE);
                    break;
                }
            }
        }
    }
    errors
}
