//! Form core shared by every booking-portal page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The appointment, registration and contact pages all follow the same
//! contract: edit a record field-by-field, validate it wholesale against a
//! static schema on submit, hand a snapshot to a submission port, then reset
//! on success. This crate owns that contract so the `client` crate only
//! supplies rendering. Nothing here touches the DOM or a timer, which keeps
//! every rule testable natively.

pub mod appointment;
pub mod contact;
pub mod dates;
pub mod errors;
pub mod field;
pub mod machine;
pub mod port;
pub mod registration;
pub mod rules;
pub mod validation;

pub use appointment::{AppointmentField, AppointmentRequest, ClinicLocation, Urgency};
pub use contact::{ContactField, ContactMessage};
pub use errors::{FormError, SubmitBlocked, SubmitError};
pub use field::{FieldInput, FieldValue, FormField, FormRecord};
pub use machine::{FormMachine, Phase, SubmitOutcome};
pub use port::{AfterSubmit, SubmissionPort};
pub use registration::{RegistrationField, RegistrationRequest};
pub use rules::{Check, FieldRule};
pub use validation::{ValidationErrors, validate};
