use super::*;
use crate::contact::{ContactField, ContactMessage};
use time::macros::date;

const TODAY: Date = date!(2026 - 10 - 16);

#[test]
fn new_map_is_empty() {
    let errors = ValidationErrors::<ContactField>::new();
    assert!(errors.is_empty());
    assert_eq!(errors.len(), 0);
    assert_eq!(errors.get(ContactField::Name), None);
}

#[test]
fn insert_overwrites_and_remove_reports_presence() {
    let mut errors = ValidationErrors::new();
    errors.insert(ContactField::Email, "first");
    errors.insert(ContactField::Email, "second".to_owned());
    assert_eq!(errors.get(ContactField::Email), Some("second"));
    assert!(errors.remove(ContactField::Email));
    assert!(!errors.remove(ContactField::Email));
    assert!(errors.is_empty());
}

#[test]
fn iteration_follows_field_declaration_order() {
    let mut errors = ValidationErrors::new();
    errors.insert(ContactField::Message, "m");
    errors.insert(ContactField::Name, "n");
    let pairs: Vec<_> = errors.iter().collect();
    assert_eq!(pairs, vec![(ContactField::Name, "n"), (ContactField::Message, "m")]);
}

#[test]
fn validate_returns_only_failing_fields() {
    let message = ContactMessage {
        name: "Alex".to_owned(),
        email: "alex@example".to_owned(),
        subject: String::new(),
        message: "Hello".to_owned(),
    };
    let errors = validate(&message, TODAY);
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec![ContactField::Email, ContactField::Subject]);
    assert!(errors.iter().all(|(_, message)| !message.is_empty()));
}
