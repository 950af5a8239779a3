//! Date utilities
//!
//! History is kept at day granularity. Documents use ISO `YYYY-MM-DD`; list
//! headers use the long form, e.g. `Sunday January 07, 2024`.

use chrono::{Local, NaiveDate};

const ISO_FORMAT: &str = "%Y-%m-%d";
const LONG_FORMAT: &str = "%A %B %d, %Y";

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_iso_date(s: &str) -> chrono::ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), ISO_FORMAT)
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// Header form used by the history list and hymn detail views
pub fn format_long_date(date: NaiveDate) -> String {
    date.format(LONG_FORMAT).to_string()
}

/// Parse a date typed by the user: an ISO date or the word `today`
pub fn parse_date_input(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("today") {
        return Some(today());
    }
    parse_iso_date(input).ok()
}
