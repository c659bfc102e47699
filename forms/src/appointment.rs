//! Appointment request record and its schema.

#[cfg(test)]
#[path = "appointment_test.rs"]
mod appointment_test;

use serde::Serialize;
use time::Date;

use crate::dates::years_before;
use crate::errors::FormError;
use crate::field::{FieldInput, FieldValue, FormField, FormRecord};
use crate::port::AfterSubmit;
use crate::rules::{Check, FieldRule};

/// Oldest date of birth offered by the date picker, in years before today.
pub const MAX_PATIENT_AGE_YEARS: i32 = 120;

const REQUIRED: &str = "This field is required";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AppointmentField {
    FullName,
    Phone,
    Email,
    Dob,
    Address,
    Location,
    PreferredDate,
    Symptoms,
    Urgency,
    Notes,
}

impl FormField for AppointmentField {
    const ALL: &'static [Self] = &[
        Self::FullName,
        Self::Phone,
        Self::Email,
        Self::Dob,
        Self::Address,
        Self::Location,
        Self::PreferredDate,
        Self::Symptoms,
        Self::Urgency,
        Self::Notes,
    ];

    fn id(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Dob => "dob",
            Self::Address => "address",
            Self::Location => "location",
            Self::PreferredDate => "preferredDate",
            Self::Symptoms => "symptoms",
            Self::Urgency => "urgency",
            Self::Notes => "notes",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Phone => "Phone Number",
            Self::Email => "Email Address",
            Self::Dob => "Date of Birth",
            Self::Address => "Full Address",
            Self::Location => "Preferred Clinic Location",
            Self::PreferredDate => "Preferred Date",
            Self::Symptoms => "Please describe your symptoms or how you're feeling",
            Self::Urgency => "How urgent is your concern?",
            Self::Notes => "Additional Notes (Optional)",
        }
    }
}

/// Clinic sites a patient can choose from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClinicLocation {
    Main,
    North,
    West,
    South,
}

impl ClinicLocation {
    pub const ALL: [Self; 4] = [Self::Main, Self::North, Self::West, Self::South];

    /// `<option value>` for the location select.
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::North => "north",
            Self::West => "west",
            Self::South => "south",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Main => "Main Clinic - Downtown",
            Self::North => "Northside Medical Center",
            Self::West => "West End Clinic",
            Self::South => "South City Hospital",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|location| location.value() == value)
    }
}

/// How soon the patient needs to be seen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    #[default]
    High,
}

impl Urgency {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Low => "Routine check-up or non-urgent matter",
            Self::Medium => "Need attention soon but not emergency",
            Self::High => "Need immediate medical attention",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|urgency| urgency.value() == value)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub dob: String,
    pub address: String,
    pub location: Option<ClinicLocation>,
    pub preferred_date: String,
    pub symptoms: String,
    pub urgency: Urgency,
    pub notes: String,
}

const PHONE_CHECKS: &[(Check<AppointmentField>, &str)] = &[(Check::Phone, "Please enter a valid phone number")];
const EMAIL_CHECKS: &[(Check<AppointmentField>, &str)] = &[(Check::Email, "Please enter a valid email address")];
const PREFERRED_DATE_CHECKS: &[(Check<AppointmentField>, &str)] =
    &[(Check::NotBeforeToday, "Appointment date cannot be in the past")];

const APPOINTMENT_RULES: &[FieldRule<AppointmentField>] = &[
    FieldRule::required(AppointmentField::FullName, REQUIRED),
    FieldRule::required(AppointmentField::Phone, REQUIRED).with_checks(PHONE_CHECKS),
    FieldRule::required(AppointmentField::Email, REQUIRED).with_checks(EMAIL_CHECKS),
    FieldRule::required(AppointmentField::Dob, REQUIRED),
    FieldRule::required(AppointmentField::Address, REQUIRED),
    FieldRule::required(AppointmentField::Location, REQUIRED),
    FieldRule::required(AppointmentField::PreferredDate, REQUIRED).with_checks(PREFERRED_DATE_CHECKS),
    FieldRule::required(AppointmentField::Symptoms, REQUIRED),
    FieldRule::optional(AppointmentField::Notes),
];

impl FormRecord for AppointmentRequest {
    type Field = AppointmentField;

    const NAME: &'static str = "appointment";
    const RULES: &'static [FieldRule<AppointmentField>] = APPOINTMENT_RULES;
    const AFTER_SUBMIT: AfterSubmit = AfterSubmit::ShowConfirmation;
    const FAILURE_MESSAGE: &'static str = "There was an error submitting your form. Please try again.";

    fn value(&self, field: AppointmentField) -> FieldValue<'_> {
        FieldValue::Text(match field {
            AppointmentField::FullName => self.full_name.as_str(),
            AppointmentField::Phone => self.phone.as_str(),
            AppointmentField::Email => self.email.as_str(),
            AppointmentField::Dob => self.dob.as_str(),
            AppointmentField::Address => self.address.as_str(),
            AppointmentField::Location => self.location.map_or("", ClinicLocation::value),
            AppointmentField::PreferredDate => self.preferred_date.as_str(),
            AppointmentField::Symptoms => self.symptoms.as_str(),
            AppointmentField::Urgency => self.urgency.value(),
            AppointmentField::Notes => self.notes.as_str(),
        })
    }

    fn set(&mut self, field: AppointmentField, input: FieldInput) -> Result<(), FormError> {
        let text = input.into_text(field)?;
        match field {
            AppointmentField::FullName => self.full_name = text,
            AppointmentField::Phone => self.phone = text,
            AppointmentField::Email => self.email = text,
            AppointmentField::Dob => self.dob = text,
            AppointmentField::Address => self.address = text,
            AppointmentField::Location => {
                self.location = if text.is_empty() {
                    None
                } else {
                    Some(ClinicLocation::parse(&text).ok_or_else(|| invalid_option(field, &text))?)
                };
            }
            AppointmentField::PreferredDate => self.preferred_date = text,
            AppointmentField::Symptoms => self.symptoms = text,
            AppointmentField::Urgency => {
                self.urgency = Urgency::parse(&text).ok_or_else(|| invalid_option(field, &text))?;
            }
            AppointmentField::Notes => self.notes = text,
        }
        Ok(())
    }
}

fn invalid_option(field: AppointmentField, value: &str) -> FormError {
    FormError::InvalidInput { field: field.id(), reason: format!("unknown option '{value}'") }
}

/// Earliest date the preferred-date picker offers: tomorrow.
///
/// Validation still accepts today; the picker bound is stricter.
#[must_use]
pub fn preferred_date_min(today: Date) -> Date {
    today.next_day().unwrap_or(today)
}

/// `(min, max)` bounds for the date-of-birth picker.
#[must_use]
pub fn dob_bounds(today: Date) -> (Date, Date) {
    (years_before(today, MAX_PATIENT_AGE_YEARS), today)
}
