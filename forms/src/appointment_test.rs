use super::*;
use crate::validation::validate;
use time::macros::date;

const TODAY: Date = date!(2026 - 10 - 16);

fn filled() -> AppointmentRequest {
    AppointmentRequest {
        full_name: "Jane Patient".to_owned(),
        phone: "(555) 123-4567".to_owned(),
        email: "jane@example.com".to_owned(),
        dob: "1985-04-12".to_owned(),
        address: "123 Main Street, Springfield".to_owned(),
        location: Some(ClinicLocation::North),
        preferred_date: "2026-10-20".to_owned(),
        symptoms: "Persistent cough for a week".to_owned(),
        urgency: Urgency::default(),
        notes: String::new(),
    }
}

#[test]
fn default_record_is_empty_with_high_urgency() {
    let record = AppointmentRequest::default();
    assert!(record.full_name.is_empty());
    assert_eq!(record.location, None);
    assert_eq!(record.urgency, Urgency::High);
}

#[test]
fn filled_record_is_valid() {
    assert!(validate(&filled(), TODAY).is_empty());
}

#[test]
fn each_blank_required_field_is_reported_alone() {
    let required = [
        AppointmentField::FullName,
        AppointmentField::Phone,
        AppointmentField::Email,
        AppointmentField::Dob,
        AppointmentField::Address,
        AppointmentField::Location,
        AppointmentField::PreferredDate,
        AppointmentField::Symptoms,
    ];
    for field in required {
        let mut record = filled();
        record.set(field, FieldInput::from("")).unwrap();
        let errors = validate(&record, TODAY);
        assert_eq!(errors.len(), 1, "{field:?}");
        assert_eq!(errors.get(field), Some("This field is required"), "{field:?}");
    }
}

#[test]
fn whitespace_only_counts_as_blank() {
    let mut record = filled();
    record.full_name = "   ".to_owned();
    assert_eq!(validate(&record, TODAY).get(AppointmentField::FullName), Some("This field is required"));
}

#[test]
fn notes_are_optional() {
    let mut record = filled();
    record.notes = "   ".to_owned();
    assert!(validate(&record, TODAY).is_empty());
}

#[test]
fn invalid_email_and_phone_use_format_messages() {
    let mut record = filled();
    record.email = "a@b".to_owned();
    record.phone = "call me".to_owned();
    let errors = validate(&record, TODAY);
    assert_eq!(errors.get(AppointmentField::Email), Some("Please enter a valid email address"));
    assert_eq!(errors.get(AppointmentField::Phone), Some("Please enter a valid phone number"));
}

#[test]
fn preferred_date_today_is_accepted() {
    let mut record = filled();
    record.preferred_date = "2026-10-16".to_owned();
    assert!(validate(&record, TODAY).is_empty());
}

#[test]
fn preferred_date_yesterday_is_rejected() {
    let mut record = filled();
    record.preferred_date = "2026-10-15".to_owned();
    assert_eq!(
        validate(&record, TODAY).get(AppointmentField::PreferredDate),
        Some("Appointment date cannot be in the past")
    );
}

#[test]
fn dob_is_not_revalidated_beyond_presence() {
    let mut record = filled();
    record.dob = "1850-01-01".to_owned();
    assert!(validate(&record, TODAY).is_empty());
}

#[test]
fn set_parses_location_and_urgency_options() {
    let mut record = AppointmentRequest::default();
    record.set(AppointmentField::Location, FieldInput::from("west")).unwrap();
    record.set(AppointmentField::Urgency, FieldInput::from("low")).unwrap();
    assert_eq!(record.location, Some(ClinicLocation::West));
    assert_eq!(record.urgency, Urgency::Low);
    assert_eq!(record.value(AppointmentField::Location), FieldValue::Text("west"));
}

#[test]
fn set_rejects_unknown_options_and_flags() {
    let mut record = AppointmentRequest::default();
    assert!(matches!(
        record.set(AppointmentField::Location, FieldInput::from("east")),
        Err(FormError::InvalidInput { field: "location", .. })
    ));
    assert!(record.set(AppointmentField::Urgency, FieldInput::from("critical")).is_err());
    assert!(record.set(AppointmentField::FullName, FieldInput::Flag(true)).is_err());
    assert_eq!(record, AppointmentRequest::default());
}

#[test]
fn set_keeps_raw_text_untrimmed() {
    let mut record = AppointmentRequest::default();
    record.set(AppointmentField::FullName, FieldInput::from("  Jane ")).unwrap();
    assert_eq!(record.full_name, "  Jane ");
}

#[test]
fn field_ids_round_trip() {
    for field in AppointmentField::ALL {
        assert_eq!(AppointmentField::from_id(field.id()), Some(*field));
    }
    assert_eq!(AppointmentField::from_id("confirmPassword"), None);
}

#[test]
fn location_display_names_match_clinic_sites() {
    assert_eq!(ClinicLocation::Main.display_name(), "Main Clinic - Downtown");
    assert_eq!(ClinicLocation::parse("south"), Some(ClinicLocation::South));
    assert_eq!(ClinicLocation::parse(""), None);
}

#[test]
fn picker_bounds_follow_today() {
    assert_eq!(preferred_date_min(TODAY), date!(2026 - 10 - 17));
    assert_eq!(dob_bounds(TODAY), (date!(1906 - 10 - 16), TODAY));
}

#[test]
fn serializes_with_camel_case_keys() {
    let json = serde_json::to_value(filled()).unwrap();
    assert_eq!(json["fullName"], "Jane Patient");
    assert_eq!(json["preferredDate"], "2026-10-20");
    assert_eq!(json["location"], "north");
    assert_eq!(json["urgency"], "high");
}
