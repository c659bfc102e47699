#![cfg(not(feature = "hydrate"))]

use time::macros::date;

use super::*;

#[test]
fn today_matches_utc_without_browser() {
    let before = OffsetDateTime::now_utc().date();
    let got = today();
    let after = OffsetDateTime::now_utc().date();
    assert!(got == before || got == after);
}

#[test]
fn input_bound_is_iso_date() {
    assert_eq!(input_bound(date!(2026 - 01 - 05)), "2026-01-05");
}
