use super::*;
use crate::validation::validate;
use time::Date;
use time::macros::date;

const TODAY: Date = date!(2026 - 10 - 16);

fn filled() -> RegistrationRequest {
    RegistrationRequest {
        full_name: "Sam Rivera".to_owned(),
        email: "sam@example.com".to_owned(),
        phone: "555 010 2000".to_owned(),
        dob: "1990-06-01".to_owned(),
        password: "Abc12345".to_owned(),
        confirm_password: "Abc12345".to_owned(),
        accept_terms: true,
    }
}

#[test]
fn filled_record_is_valid() {
    assert!(validate(&filled(), TODAY).is_empty());
}

#[test]
fn empty_record_reports_every_field_with_its_own_message() {
    let errors = validate(&RegistrationRequest::default(), TODAY);
    assert_eq!(errors.len(), RegistrationField::ALL.len());
    assert_eq!(errors.get(RegistrationField::FullName), Some("Full name is required"));
    assert_eq!(errors.get(RegistrationField::ConfirmPassword), Some("Please confirm your password"));
    assert_eq!(errors.get(RegistrationField::AcceptTerms), Some("You must accept the terms and conditions"));
}

#[test]
fn password_without_uppercase_fails_class_check() {
    let mut record = filled();
    record.password = "abc12345".to_owned();
    record.confirm_password = "abc12345".to_owned();
    assert_eq!(
        validate(&record, TODAY).get(RegistrationField::Password),
        Some("Password must contain uppercase, lowercase, and number")
    );
}

#[test]
fn short_password_reports_length_before_classes() {
    let mut record = filled();
    record.password = "ab1".to_owned();
    assert_eq!(
        validate(&record, TODAY).get(RegistrationField::Password),
        Some("Password must be at least 8 characters")
    );
}

#[test]
fn confirm_mismatch_fails_even_when_password_is_invalid() {
    let mut record = filled();
    record.password = "short".to_owned();
    record.confirm_password = "shorT".to_owned();
    let errors = validate(&record, TODAY);
    assert_eq!(errors.get(RegistrationField::ConfirmPassword), Some("Passwords do not match"));
    assert!(errors.contains(RegistrationField::Password));
}

#[test]
fn confirm_mismatch_by_one_character_fails() {
    let mut record = filled();
    record.confirm_password = "Abc12346".to_owned();
    let errors = validate(&record, TODAY);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(RegistrationField::ConfirmPassword), Some("Passwords do not match"));
}

#[test]
fn dob_in_future_is_rejected_and_today_is_allowed() {
    let mut record = filled();
    record.dob = "2026-10-17".to_owned();
    assert_eq!(
        validate(&record, TODAY).get(RegistrationField::Dob),
        Some("Date of birth cannot be in the future")
    );
    record.dob = "2026-10-16".to_owned();
    assert!(validate(&record, TODAY).is_empty());
}

#[test]
fn unparseable_dob_reports_invalid_date() {
    let mut record = filled();
    record.dob = "June 1st".to_owned();
    assert_eq!(validate(&record, TODAY).get(RegistrationField::Dob), Some("Please enter a valid date"));
}

#[test]
fn invalid_email_uses_registration_wording() {
    let mut record = filled();
    record.email = "a@b".to_owned();
    assert_eq!(validate(&record, TODAY).get(RegistrationField::Email), Some("Please enter a valid email"));
}

#[test]
fn phone_has_no_format_check() {
    let mut record = filled();
    record.phone = "ext. 12".to_owned();
    assert!(validate(&record, TODAY).is_empty());
}

#[test]
fn terms_take_a_flag_and_reject_text() {
    let mut record = RegistrationRequest::default();
    record.set(RegistrationField::AcceptTerms, FieldInput::Flag(true)).unwrap();
    assert!(record.accept_terms);
    assert!(record.set(RegistrationField::AcceptTerms, FieldInput::from("yes")).is_err());
    assert!(record.accept_terms);
}

#[test]
fn success_redirects_to_login() {
    assert_eq!(RegistrationRequest::AFTER_SUBMIT, AfterSubmit::Redirect("/Login"));
}

#[test]
fn serialized_payload_omits_passwords() {
    let json = serde_json::to_value(filled()).unwrap();
    assert_eq!(json["fullName"], "Sam Rivera");
    assert_eq!(json["acceptTerms"], true);
    assert!(json.get("password").is_none());
    assert!(json.get("confirmPassword").is_none());
}
