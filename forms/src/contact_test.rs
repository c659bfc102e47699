use super::*;
use crate::validation::validate;
use time::Date;
use time::macros::date;

const TODAY: Date = date!(2026 - 10 - 16);

fn filled() -> ContactMessage {
    ContactMessage {
        name: "Alex".to_owned(),
        email: "alex@example.com".to_owned(),
        subject: "Billing question".to_owned(),
        message: "Can I pay by card at the front desk?".to_owned(),
    }
}

#[test]
fn filled_message_is_valid() {
    assert!(validate(&filled(), TODAY).is_empty());
}

#[test]
fn blank_fields_use_named_required_messages() {
    let errors = validate(&ContactMessage::default(), TODAY);
    assert_eq!(errors.get(ContactField::Name), Some("Name is required"));
    assert_eq!(errors.get(ContactField::Email), Some("Email is required"));
    assert_eq!(errors.get(ContactField::Subject), Some("Subject is required"));
    assert_eq!(errors.get(ContactField::Message), Some("Message is required"));
}

#[test]
fn email_format_checked_only_when_present() {
    let mut message = filled();
    message.email = "a@b".to_owned();
    assert_eq!(validate(&message, TODAY).get(ContactField::Email), Some("Please enter a valid email"));
    message.email = "a@b.com".to_owned();
    assert!(validate(&message, TODAY).is_empty());
}

#[test]
fn blank_subject_is_the_only_error() {
    let mut message = filled();
    message.subject = "  ".to_owned();
    let errors = validate(&message, TODAY);
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec![ContactField::Subject]);
}

#[test]
fn from_id_resolves_contact_inputs() {
    assert_eq!(ContactField::from_id("message"), Some(ContactField::Message));
    assert_eq!(ContactField::from_id("fullName"), None);
}
