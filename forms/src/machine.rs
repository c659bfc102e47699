//! Submission state machine shared by all forms.
//!
//! DESIGN
//! ======
//! `Idle -> Submitting -> Success`, with validation failures and port
//! failures both landing back in `Idle`. The synchronous halves
//! (`begin_submit` / `finish_submit`) exist so a reactive UI can store the
//! machine in a signal, release the borrow while the port future runs, and
//! render the `Submitting` phase in between. `submit` chains the two for
//! callers that do not need to observe the middle.
//!
//! ERROR HANDLING
//! ==============
//! Field errors are kept per field and cleared on edit. Port failures are
//! collapsed into the form's single generic banner; the typed cause is only
//! logged.

#[cfg(test)]
#[path = "machine_test.rs"]
mod machine_test;

use time::Date;

use crate::errors::{FormError, SubmitBlocked, SubmitError};
use crate::field::{FieldInput, FormField, FormRecord};
use crate::port::{AfterSubmit, SubmissionPort};
use crate::validation::{ValidationErrors, validate};

/// Lifecycle phase of a form instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Editing. Field errors and the failure banner may be showing.
    #[default]
    Idle,
    /// A validated snapshot is with the submission port.
    Submitting,
    /// Submission completed; the confirmation view replaces the form.
    Success,
}

/// What happened during [`FormMachine::submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Blocked(SubmitBlocked),
    Failed(SubmitError),
    Completed(AfterSubmit),
}

/// Form state: the record being edited, its inline errors, the phase, and
/// the failure banner.
#[derive(Clone, Debug)]
pub struct FormMachine<R: FormRecord> {
    record: R,
    errors: ValidationErrors<R::Field>,
    phase: Phase,
    banner: Option<&'static str>,
}

impl<R: FormRecord> Default for FormMachine<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: FormRecord> FormMachine<R> {
    #[must_use]
    pub fn new() -> Self {
        Self { record: R::default(), errors: ValidationErrors::new(), phase: Phase::Idle, banner: None }
    }

    #[must_use]
    pub fn record(&self) -> &R {
        &self.record
    }

    #[must_use]
    pub fn errors(&self) -> &ValidationErrors<R::Field> {
        &self.errors
    }

    #[must_use]
    pub fn error(&self, field: R::Field) -> Option<&str> {
        self.errors.get(field)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while the submit control must stay disabled.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Submitting
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.phase == Phase::Success
    }

    /// Generic failure banner from the last submission attempt, if any.
    #[must_use]
    pub fn banner(&self) -> Option<&'static str> {
        self.banner
    }

    /// Overwrite one field with raw input and clear that field's error.
    ///
    /// # Errors
    ///
    /// [`FormError::Busy`] while submitting, or the record's own
    /// [`FormError::InvalidInput`] for a mismatched input.
    pub fn set_field(&mut self, field: R::Field, input: FieldInput) -> Result<(), FormError> {
        if self.is_busy() {
            return Err(FormError::Busy);
        }
        self.record.set(field, input)?;
        self.errors.remove(field);
        Ok(())
    }

    /// [`Self::set_field`] addressed by DOM id.
    ///
    /// # Errors
    ///
    /// [`FormError::UnknownField`] if no field has that id, otherwise as
    /// [`Self::set_field`].
    pub fn set_field_by_id(&mut self, id: &str, input: FieldInput) -> Result<(), FormError> {
        let field = R::Field::from_id(id).ok_or_else(|| FormError::UnknownField(id.to_owned()))?;
        self.set_field(field, input)
    }

    /// Validate and, if clean, enter `Submitting` and return the snapshot to
    /// hand to the port.
    ///
    /// # Errors
    ///
    /// [`SubmitBlocked::Invalid`] with errors stored for display,
    /// [`SubmitBlocked::Busy`] while a submission is in flight, or
    /// [`SubmitBlocked::NotEditing`] from the success view.
    pub fn begin_submit(&mut self, today: Date) -> Result<R, SubmitBlocked> {
        match self.phase {
            Phase::Submitting => return Err(SubmitBlocked::Busy),
            Phase::Success => return Err(SubmitBlocked::NotEditing),
            Phase::Idle => {}
        }
        self.errors = validate(&self.record, today);
        if !self.errors.is_empty() {
            log::debug!("{} form blocked: {} invalid field(s)", R::NAME, self.errors.len());
            return Err(SubmitBlocked::Invalid(self.errors.len()));
        }
        self.banner = None;
        self.phase = Phase::Submitting;
        Ok(self.record.clone())
    }

    /// Settle an in-flight submission.
    ///
    /// Success resets the record, shows the success phase, and returns the
    /// form's transition. Failure returns to `Idle` with the banner set and
    /// the record kept. A result arriving outside `Submitting` is ignored.
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) -> Option<AfterSubmit> {
        if self.phase != Phase::Submitting {
            log::warn!("{} form: ignoring submission result outside submitting phase", R::NAME);
            return None;
        }
        match result {
            Ok(()) => {
                log::info!("{} form submitted", R::NAME);
                self.record = R::default();
                self.errors = ValidationErrors::new();
                self.phase = Phase::Success;
                Some(R::AFTER_SUBMIT)
            }
            Err(err) => {
                log::error!("{} form submission failed: {err}", R::NAME);
                self.banner = Some(R::FAILURE_MESSAGE);
                self.phase = Phase::Idle;
                None
            }
        }
    }

    /// Validate, hand the snapshot to `port`, and settle.
    pub async fn submit<P>(&mut self, port: &P, today: Date) -> SubmitOutcome
    where
        P: SubmissionPort<R> + ?Sized,
    {
        let snapshot = match self.begin_submit(today) {
            Ok(snapshot) => snapshot,
            Err(blocked) => return SubmitOutcome::Blocked(blocked),
        };
        match port.submit(&snapshot).await {
            Ok(()) => match self.finish_submit(Ok(())) {
                Some(next) => SubmitOutcome::Completed(next),
                None => SubmitOutcome::Failed(SubmitError::Interrupted),
            },
            Err(err) => {
                self.finish_submit(Err(err.clone()));
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Leave the success view and show the empty form again.
    pub fn submit_another(&mut self) {
        if self.phase == Phase::Success {
            self.record = R::default();
            self.phase = Phase::Idle;
        }
    }
}
