//! The user's current calendar date.
//!
//! Validation compares against the browser's local date so "today" matches
//! what the date picker shows. SSR falls back to UTC.

#[cfg(test)]
#[path = "today_test.rs"]
mod today_test;

use forms::dates::format_input_date;
use time::{Date, OffsetDateTime};

pub fn today() -> Date {
    #[cfg(feature = "hydrate")]
    {
        if let Some(date) = browser_local_date() {
            return date;
        }
    }
    OffsetDateTime::now_utc().date()
}

/// `YYYY-MM-DD` string for a date input's `min`/`max` attribute.
pub fn input_bound(date: Date) -> String {
    format_input_date(date)
}

#[cfg(feature = "hydrate")]
fn browser_local_date() -> Option<Date> {
    let now = js_sys::Date::new_0();
    let year = i32::try_from(now.get_full_year()).ok()?;
    let month = u8::try_from(now.get_month() + 1).ok()?;
    let month = time::Month::try_from(month).ok()?;
    let day = u8::try_from(now.get_date()).ok()?;
    Date::from_calendar_date(year, month, day).ok()
}
