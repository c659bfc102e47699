//! Contact message record and its schema.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

use crate::errors::FormError;
use crate::field::{FieldInput, FieldValue, FormField, FormRecord};
use crate::port::AfterSubmit;
use crate::rules::{Check, FieldRule};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField for ContactField {
    const ALL: &'static [Self] = &[Self::Name, Self::Email, Self::Subject, Self::Message];

    fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Email Address",
            Self::Subject => "Subject",
            Self::Message => "Your Message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

const EMAIL_CHECKS: &[(Check<ContactField>, &str)] = &[(Check::Email, "Please enter a valid email")];

const CONTACT_RULES: &[FieldRule<ContactField>] = &[
    FieldRule::required(ContactField::Name, "Name is required"),
    FieldRule::required(ContactField::Email, "Email is required").with_checks(EMAIL_CHECKS),
    FieldRule::required(ContactField::Subject, "Subject is required"),
    FieldRule::required(ContactField::Message, "Message is required"),
];

impl FormRecord for ContactMessage {
    type Field = ContactField;

    const NAME: &'static str = "contact";
    const RULES: &'static [FieldRule<ContactField>] = CONTACT_RULES;
    const AFTER_SUBMIT: AfterSubmit = AfterSubmit::ShowConfirmation;
    const FAILURE_MESSAGE: &'static str = "Failed to send message. Please try again.";

    fn value(&self, field: ContactField) -> FieldValue<'_> {
        FieldValue::Text(match field {
            ContactField::Name => self.name.as_str(),
            ContactField::Email => self.email.as_str(),
            ContactField::Subject => self.subject.as_str(),
            ContactField::Message => self.message.as_str(),
        })
    }

    fn set(&mut self, field: ContactField, input: FieldInput) -> Result<(), FormError> {
        let text = input.into_text(field)?;
        match field {
            ContactField::Name => self.name = text,
            ContactField::Email => self.email = text,
            ContactField::Subject => self.subject = text,
            ContactField::Message => self.message = text,
        }
        Ok(())
    }
}
