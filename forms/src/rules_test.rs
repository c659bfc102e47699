use super::*;
use time::macros::date;

const TODAY: Date = date!(2026 - 10 - 16);

fn no_lookup(_: u8) -> Option<String> {
    None
}

// =============================================================
// Email
// =============================================================

#[test]
fn email_requires_dot_after_at() {
    assert!(!is_valid_email("a@b"));
    assert!(is_valid_email("a@b.com"));
}

#[test]
fn email_rejects_whitespace_and_missing_parts() {
    assert!(!is_valid_email("a b@c.com"));
    assert!(!is_valid_email("@b.com"));
    assert!(!is_valid_email("a@.com"));
    assert!(!is_valid_email("a@b."));
    assert!(!is_valid_email(" a@b.com"));
}

#[test]
fn email_is_permissive_about_subdomains() {
    assert!(is_valid_email("first.last@mail.clinic.example"));
}

// =============================================================
// Phone
// =============================================================

#[test]
fn phone_strips_formatting_characters() {
    assert!(is_valid_phone("(123) 456-7890"));
    assert!(is_valid_phone("+1 555 010 0000"));
}

#[test]
fn phone_rejects_leading_zero_letters_and_overlong_numbers() {
    assert!(!is_valid_phone("0123456"));
    assert!(!is_valid_phone("555-CALL"));
    assert!(!is_valid_phone("12345678901234567"));
    assert!(!is_valid_phone("++1555"));
}

#[test]
fn phone_accepts_single_and_sixteen_digits() {
    assert!(is_valid_phone("7"));
    assert!(is_valid_phone("1234567890123456"));
}

// =============================================================
// Password classes
// =============================================================

#[test]
fn mixed_case_and_digit_needs_all_three_classes() {
    assert!(!has_mixed_case_and_digit("abc12345"));
    assert!(!has_mixed_case_and_digit("ABC12345"));
    assert!(!has_mixed_case_and_digit("Abcdefgh"));
    assert!(has_mixed_case_and_digit("Abc12345"));
}

// =============================================================
// Check::run
// =============================================================

#[test]
fn not_before_today_accepts_same_day() {
    assert_eq!(Check::<u8>::NotBeforeToday.run("2026-10-16", TODAY, no_lookup), CheckResult::Pass);
    assert_eq!(Check::<u8>::NotBeforeToday.run("2026-10-15", TODAY, no_lookup), CheckResult::Fail);
    assert_eq!(Check::<u8>::NotBeforeToday.run("2027-01-01", TODAY, no_lookup), CheckResult::Pass);
}

#[test]
fn not_after_today_rejects_tomorrow() {
    assert_eq!(Check::<u8>::NotAfterToday.run("2026-10-16", TODAY, no_lookup), CheckResult::Pass);
    assert_eq!(Check::<u8>::NotAfterToday.run("2026-10-17", TODAY, no_lookup), CheckResult::Fail);
}

#[test]
fn date_checks_report_unparseable_input() {
    assert_eq!(Check::<u8>::NotAfterToday.run("soon", TODAY, no_lookup), CheckResult::Unparseable);
    assert_eq!(Check::<u8>::NotBeforeToday.run("2026-13-01", TODAY, no_lookup), CheckResult::Unparseable);
}

#[test]
fn min_chars_counts_characters_not_bytes() {
    assert_eq!(Check::<u8>::MinChars(3).run("äöü", TODAY, no_lookup), CheckResult::Pass);
    assert_eq!(Check::<u8>::MinChars(8).run("Abc1234", TODAY, no_lookup), CheckResult::Fail);
}

#[test]
fn matches_compares_exactly_with_other_field() {
    let lookup = |field: u8| (field == 1).then(|| "Secret123".to_owned());
    assert_eq!(Check::Matches(1).run("Secret123", TODAY, lookup), CheckResult::Pass);
    assert_eq!(Check::Matches(1).run("Secret124", TODAY, lookup), CheckResult::Fail);
    assert_eq!(Check::Matches(1).run("Secret123 ", TODAY, lookup), CheckResult::Fail);
    assert_eq!(Check::Matches(2).run("Secret123", TODAY, lookup), CheckResult::Fail);
}

#[test]
fn field_rule_builders_set_required_and_checks() {
    const CHECKS: &[(Check<u8>, &str)] = &[(Check::Email, "bad")];
    let rule = FieldRule::required(0u8, "needed").with_checks(CHECKS);
    assert_eq!(rule.required, Some("needed"));
    assert_eq!(rule.checks.len(), 1);
    assert_eq!(FieldRule::optional(0u8).required, None);
}
