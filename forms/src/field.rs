//! Field identifiers, raw values, and the record trait every form implements.

use std::fmt::Debug;

use serde::Serialize;

use crate::errors::FormError;
use crate::port::AfterSubmit;
use crate::rules::FieldRule;

/// A field of one form. Implemented by small `Copy` enums.
pub trait FormField: Copy + Eq + Ord + Debug + Send + Sync + 'static {
    /// Every field in display order.
    const ALL: &'static [Self];

    /// DOM id of the bound input (`fullName`, `preferredDate`, ...).
    fn id(self) -> &'static str;

    /// Human label shown next to the input.
    fn label(self) -> &'static str;

    /// Resolve a DOM id back to the field.
    fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.id() == id)
    }
}

/// Borrowed view of a field's current value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Flag(bool),
}

impl<'a> FieldValue<'a> {
    /// Blank means "trimmed text is empty" or "checkbox unchecked".
    #[must_use]
    pub fn is_blank(self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Flag(checked) => !checked,
        }
    }

    #[must_use]
    pub fn as_text(self) -> Option<&'a str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Flag(_) => None,
        }
    }
}

/// Raw value delivered by an input event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldInput {
    Text(String),
    Flag(bool),
}

impl FieldInput {
    /// Unwrap a text input or report a kind mismatch for `field`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidInput`] when a checkbox value arrives for
    /// a text field.
    pub fn into_text<F: FormField>(self, field: F) -> Result<String, FormError> {
        match self {
            Self::Text(text) => Ok(text),
            Self::Flag(_) => Err(FormError::InvalidInput { field: field.id(), reason: "expected text".to_owned() }),
        }
    }

    /// Unwrap a checkbox input or report a kind mismatch for `field`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidInput`] when text arrives for a checkbox.
    pub fn into_flag<F: FormField>(self, field: F) -> Result<bool, FormError> {
        match self {
            Self::Flag(checked) => Ok(checked),
            Self::Text(_) => Err(FormError::InvalidInput { field: field.id(), reason: "expected checkbox".to_owned() }),
        }
    }
}

impl From<&str> for FieldInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldInput {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// An in-memory form record plus the static description of how to check it.
pub trait FormRecord: Clone + Default + Debug + Serialize + Send + Sync + 'static {
    type Field: FormField;

    /// Short name used in log lines.
    const NAME: &'static str;

    /// Validation schema, evaluated in order.
    const RULES: &'static [FieldRule<Self::Field>];

    /// Where the page goes once a submission completes.
    const AFTER_SUBMIT: AfterSubmit;

    /// Banner shown when the submission port fails.
    const FAILURE_MESSAGE: &'static str;

    /// Current value of `field`.
    fn value(&self, field: Self::Field) -> FieldValue<'_>;

    /// Overwrite `field` with the raw input.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidInput`] if the input kind or option value
    /// does not fit the field. The record is left unchanged in that case.
    fn set(&mut self, field: Self::Field, input: FieldInput) -> Result<(), FormError>;
}
