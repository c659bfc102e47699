//! Calendar-date helpers for `<input type="date">` values.
//!
//! Date inputs produce `YYYY-MM-DD` strings with no time component, so every
//! comparison in this crate is between calendar dates.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Month};

const INPUT_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parse a date input value. Surrounding whitespace is ignored.
#[must_use]
pub fn parse_input_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), INPUT_FORMAT).ok()
}

/// Format a date the way a date input expects it in `min`/`max`/`value`.
#[must_use]
pub fn format_input_date(date: Date) -> String {
    date.format(INPUT_FORMAT)
        .unwrap_or_else(|_| format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day()))
}

/// Same calendar day `years` years earlier. Feb 29 falls back to Feb 28.
#[must_use]
pub fn years_before(date: Date, years: i32) -> Date {
    let year = date.year() - years;
    date.replace_year(year)
        .or_else(|_| Date::from_calendar_date(year, Month::February, 28))
        .unwrap_or(date)
}
