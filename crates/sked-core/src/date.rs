//! Date codec for the fixed-width `YYYYMMDD` wire format.

use chrono::{Datelike, NaiveDate};

use crate::error::RecurrenceError;

/// `chrono` format string matching the stored representation.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Format accepted by the task search box (`DD.MM.YYYY`).
pub const SEARCH_DATE_FORMAT: &str = "%d.%m.%Y";

/// Parses an exactly-8-digit `YYYYMMDD` string into a calendar date.
///
/// `chrono`'s `%Y` alone would also accept signs and variable widths, so the
/// shape is checked before the components are handed to the calendar.
pub fn parse_date(input: &str) -> Result<NaiveDate, RecurrenceError> {
    let invalid = || RecurrenceError::InvalidDate(input.to_string());

    if input.len() != 8 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let year: i32 = input[0..4].parse().map_err(|_| invalid())?;
    let month: u32 = input[4..6].parse().map_err(|_| invalid())?;
    let day: u32 = input[6..8].parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Renders a date as `YYYYMMDD`, zero padded.
pub fn format_date(date: NaiveDate) -> String {
    format!("{:04}{:02}{:02}", date.year(), date.month(), date.day())
}

/// Parses a `DD.MM.YYYY` search term. Returns `None` for anything else.
pub fn parse_search_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), SEARCH_DATE_FORMAT).ok()
}

/// Last calendar day of the month containing `date`.
///
/// Computed as "day zero of the following month" so month lengths are never
/// hardcoded.
pub fn last_day_of_month(date: NaiveDate) -> u32 {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        // Only reachable at chrono's upper bound, whose December has 31 days.
        .unwrap_or(31)
}
