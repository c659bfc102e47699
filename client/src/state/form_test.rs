use forms::{ContactField, ContactMessage, FormField, RegistrationField, RegistrationRequest};
use time::macros::date;

use super::*;

// =============================================================
// Accessors
// =============================================================

#[test]
fn field_text_reads_current_value() {
    let mut machine = FormMachine::<ContactMessage>::new();
    assert_eq!(field_text(&machine, ContactField::Name), "");
    apply_edit(&mut machine, ContactField::Name, FieldInput::from("Alex"));
    assert_eq!(field_text(&machine, ContactField::Name), "Alex");
}

#[test]
fn flag_fields_read_as_empty_text() {
    let mut machine = FormMachine::<RegistrationRequest>::new();
    apply_edit(&mut machine, RegistrationField::AcceptTerms, FieldInput::Flag(true));
    assert!(field_flag(&machine, RegistrationField::AcceptTerms));
    assert_eq!(field_text(&machine, RegistrationField::AcceptTerms), "");
    assert!(!field_flag(&machine, RegistrationField::Email));
}

#[test]
fn field_error_appears_after_blocked_submit() {
    let mut machine = FormMachine::<ContactMessage>::new();
    let _ = machine.begin_submit(date!(2026 - 10 - 16));
    for field in ContactField::ALL {
        assert!(field_error(&machine, *field).is_some(), "{} should have an error", field.id());
    }
    apply_edit(&mut machine, ContactField::Subject, FieldInput::from("Hi"));
    assert_eq!(field_error(&machine, ContactField::Subject), None);
}

// =============================================================
// Edits
// =============================================================

#[test]
fn mismatched_input_is_dropped() {
    let mut machine = FormMachine::<ContactMessage>::new();
    apply_edit(&mut machine, ContactField::Name, FieldInput::from("Alex"));
    apply_edit(&mut machine, ContactField::Name, FieldInput::Flag(true));
    assert_eq!(field_text(&machine, ContactField::Name), "Alex");
}

#[test]
fn redirect_target_only_for_redirects() {
    assert_eq!(redirect_target(AfterSubmit::Redirect("/Login")), Some("/Login"));
    assert_eq!(redirect_target(AfterSubmit::ShowConfirmation), None);
}
