//! Account registration record and its schema.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use serde::Serialize;

use crate::errors::FormError;
use crate::field::{FieldInput, FieldValue, FormField, FormRecord};
use crate::port::AfterSubmit;
use crate::rules::{Check, FieldRule};

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_CHARS: usize = 8;

/// Route shown after a successful registration.
pub const LOGIN_ROUTE: &str = "/Login";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegistrationField {
    FullName,
    Email,
    Phone,
    Dob,
    Password,
    ConfirmPassword,
    AcceptTerms,
}

impl FormField for RegistrationField {
    const ALL: &'static [Self] = &[
        Self::FullName,
        Self::Email,
        Self::Phone,
        Self::Dob,
        Self::Password,
        Self::ConfirmPassword,
        Self::AcceptTerms,
    ];

    fn id(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Dob => "dob",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::AcceptTerms => "acceptTerms",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::Dob => "Date of Birth",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::AcceptTerms => "I agree to the Terms & Conditions and Privacy Policy",
        }
    }
}

/// Password fields never leave the browser in the simulated submission log.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub dob: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub confirm_password: String,
    pub accept_terms: bool,
}

const EMAIL_CHECKS: &[(Check<RegistrationField>, &str)] = &[(Check::Email, "Please enter a valid email")];
const DOB_CHECKS: &[(Check<RegistrationField>, &str)] =
    &[(Check::NotAfterToday, "Date of birth cannot be in the future")];
const PASSWORD_CHECKS: &[(Check<RegistrationField>, &str)] = &[
    (Check::MinChars(MIN_PASSWORD_CHARS), "Password must be at least 8 characters"),
    (Check::MixedCaseAndDigit, "Password must contain uppercase, lowercase, and number"),
];
const CONFIRM_CHECKS: &[(Check<RegistrationField>, &str)] =
    &[(Check::Matches(RegistrationField::Password), "Passwords do not match")];

const REGISTRATION_RULES: &[FieldRule<RegistrationField>] = &[
    FieldRule::required(RegistrationField::FullName, "Full name is required"),
    FieldRule::required(RegistrationField::Email, "Email is required").with_checks(EMAIL_CHECKS),
    FieldRule::required(RegistrationField::Phone, "Phone number is required"),
    FieldRule::required(RegistrationField::Dob, "Date of birth is required").with_checks(DOB_CHECKS),
    FieldRule::required(RegistrationField::Password, "Password is required").with_checks(PASSWORD_CHECKS),
    FieldRule::required(RegistrationField::ConfirmPassword, "Please confirm your password")
        .with_checks(CONFIRM_CHECKS),
    FieldRule::required(RegistrationField::AcceptTerms, "You must accept the terms and conditions"),
];

impl FormRecord for RegistrationRequest {
    type Field = RegistrationField;

    const NAME: &'static str = "registration";
    const RULES: &'static [FieldRule<RegistrationField>] = REGISTRATION_RULES;
    const AFTER_SUBMIT: AfterSubmit = AfterSubmit::Redirect(LOGIN_ROUTE);
    const FAILURE_MESSAGE: &'static str = "Registration failed. Please try again.";

    fn value(&self, field: RegistrationField) -> FieldValue<'_> {
        match field {
            RegistrationField::FullName => FieldValue::Text(&self.full_name),
            RegistrationField::Email => FieldValue::Text(&self.email),
            RegistrationField::Phone => FieldValue::Text(&self.phone),
            RegistrationField::Dob => FieldValue::Text(&self.dob),
            RegistrationField::Password => FieldValue::Text(&self.password),
            RegistrationField::ConfirmPassword => FieldValue::Text(&self.confirm_password),
            RegistrationField::AcceptTerms => FieldValue::Flag(self.accept_terms),
        }
    }

    fn set(&mut self, field: RegistrationField, input: FieldInput) -> Result<(), FormError> {
        match field {
            RegistrationField::FullName => self.full_name = input.into_text(field)?,
            RegistrationField::Email => self.email = input.into_text(field)?,
            RegistrationField::Phone => self.phone = input.into_text(field)?,
            RegistrationField::Dob => self.dob = input.into_text(field)?,
            RegistrationField::Password => self.password = input.into_text(field)?,
            RegistrationField::ConfirmPassword => self.confirm_password = input.into_text(field)?,
            RegistrationField::AcceptTerms => self.accept_terms = input.into_flag(field)?,
        }
        Ok(())
    }
}
