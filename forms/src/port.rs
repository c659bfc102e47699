//! Submission port: the one asynchronous seam between a form and the outside.
//!
//! ARCHITECTURE
//! ============
//! Pages never talk to a network or a timer directly. They hand a validated
//! snapshot to a `SubmissionPort`. The browser build injects a simulated
//! submitter; tests inject ports that resolve instantly or fail on demand.

use async_trait::async_trait;

use crate::errors::SubmitError;

/// Post-success transition chosen by each form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AfterSubmit {
    /// Replace the form with its confirmation view.
    ShowConfirmation,
    /// Navigate to another route.
    Redirect(&'static str),
}

/// Performs a submission for records of type `R`.
///
/// `?Send` because the browser implementation awaits a JS timer future.
#[async_trait(?Send)]
pub trait SubmissionPort<R> {
    /// Deliver `record`.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitError`] when the delivery fails for any reason.
    async fn submit(&self, record: &R) -> Result<(), SubmitError>;
}
