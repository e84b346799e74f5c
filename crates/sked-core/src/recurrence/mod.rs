//! Recurrence engine: parses repeat rules and computes the next date a
//! recurring task falls due.
//!
//! Everything here is pure. The same `(now, start, rule)` always produces the
//! same answer, nothing is cached, and no I/O happens.

use chrono::NaiveDate;
use tracing::debug;

use crate::date::{format_date, parse_date};
use crate::error::RecurrenceError;

mod resolver;
mod rule;

pub use resolver::MAX_SCAN_DAYS;
pub use rule::{RecurrenceRule, LAST_DAY, MAX_INTERVAL_DAYS, MIN_INTERVAL_DAYS, SECOND_TO_LAST_DAY};

/// Computes the next occurrence for a task stored as `start_date`
/// (`YYYYMMDD`) repeating by `rule`, relative to `now`.
///
/// The rule is checked for emptiness first, then the start date, then the
/// rule's own syntax, so a blank rule wins over a bad date.
///
/// ```
/// use chrono::NaiveDate;
/// use sked_core::recurrence::next_date;
///
/// let now = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// assert_eq!(next_date(now, "20240229", "y").unwrap(), "20250301");
/// assert_eq!(next_date(now, "20240301", "w 1,3").unwrap(), "20240304");
/// ```
pub fn next_date(now: NaiveDate, start_date: &str, rule: &str) -> Result<String, RecurrenceError> {
    if rule.trim().is_empty() {
        return Err(RecurrenceError::EmptyRule);
    }
    let start = parse_date(start_date)?;
    let parsed: RecurrenceRule = rule.parse()?;
    let next = parsed.next_after(now, start)?;

    debug!(%now, start_date, rule, next = %next, "computed next date");
    Ok(format_date(next))
}
