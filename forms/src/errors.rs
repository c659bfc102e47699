//! Typed failures for field binding and submission.

/// Error returned when a field edit cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The DOM id does not name a field of this form.
    #[error("unknown field id: {0}")]
    UnknownField(String),
    /// The input kind or option value does not fit the field.
    #[error("invalid input for field {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
    /// A submission is in flight; edits are locked until it settles.
    #[error("form is busy submitting")]
    Busy,
}

/// Failure reported by a [`crate::SubmissionPort`].
///
/// The detail is logged for developers. Users only ever see the form's
/// generic "please try again" banner.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("submission transport failed: {0}")]
    Transport(String),
    #[error("submission was interrupted")]
    Interrupted,
}

/// Why `begin_submit` refused to enter the submitting phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitBlocked {
    /// Validation produced at least one field error.
    #[error("form has {0} invalid field(s)")]
    Invalid(usize),
    /// A previous submission has not settled yet.
    #[error("a submission is already in flight")]
    Busy,
    /// The success view is showing; the form must be reopened first.
    #[error("form is showing its success view")]
    NotEditing,
}
