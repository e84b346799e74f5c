use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate};

use super::rule::{RecurrenceRule, LAST_DAY, SECOND_TO_LAST_DAY};
use crate::date::last_day_of_month;
use crate::error::RecurrenceError;

/// Upper bound on candidate days examined by the weekly and monthly scans.
///
/// The longest legitimate gap is a Feb 29 selector across a skipped
/// century leap year (eight years), so twelve years leaves headroom while
/// still stopping rules like `m 31 2` that can never match.
pub const MAX_SCAN_DAYS: u32 = 366 * 12;

impl RecurrenceRule {
    /// Computes the next occurrence of this rule for a task starting on
    /// `start`, relative to the reference date `now`.
    ///
    /// Daily and yearly rules step from `start` and return the first step on
    /// or after `now`. Weekly and monthly rules scan day by day from `start`
    /// and return the first matching day strictly after `now`.
    pub fn next_after(&self, now: NaiveDate, start: NaiveDate) -> Result<NaiveDate, RecurrenceError> {
        match self {
            RecurrenceRule::Daily { interval } => next_daily(now, start, *interval),
            RecurrenceRule::Yearly => next_yearly(now, start),
            RecurrenceRule::Weekly { weekdays } => next_weekly(now, start, weekdays),
            RecurrenceRule::Monthly { days, months } => next_monthly(now, start, days, months),
        }
    }
}

fn next_daily(now: NaiveDate, start: NaiveDate, interval: u32) -> Result<NaiveDate, RecurrenceError> {
    let interval = u64::from(interval);
    let behind = (now - start).num_days();
    // Always advance at least once, then as many whole intervals as it takes
    // to stop being before `now`.
    let steps = if behind <= 0 {
        1
    } else {
        (behind as u64).div_ceil(interval)
    };

    steps
        .checked_mul(interval)
        .and_then(|days| start.checked_add_days(Days::new(days)))
        .ok_or(RecurrenceError::ComputationExceeded)
}

fn next_yearly(now: NaiveDate, start: NaiveDate) -> Result<NaiveDate, RecurrenceError> {
    let mut date = add_one_year(start)?;
    while date < now {
        date = add_one_year(date)?;
    }
    Ok(date)
}

/// Same month and day one year later; Feb 29 rolls over to Mar 1 when the
/// target year has no leap day.
fn add_one_year(date: NaiveDate) -> Result<NaiveDate, RecurrenceError> {
    let year = date.year() + 1;
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .ok_or(RecurrenceError::ComputationExceeded)
}

fn next_weekly(
    now: NaiveDate,
    start: NaiveDate,
    weekdays: &BTreeSet<u32>,
) -> Result<NaiveDate, RecurrenceError> {
    scan_forward(now, start, |date| {
        weekdays.contains(&date.weekday().number_from_monday())
    })
}

fn next_monthly(
    now: NaiveDate,
    start: NaiveDate,
    days: &BTreeSet<i32>,
    months: &BTreeSet<u32>,
) -> Result<NaiveDate, RecurrenceError> {
    scan_forward(now, start, |date| {
        if !months.is_empty() && !months.contains(&date.month()) {
            return false;
        }

        let last = last_day_of_month(date) as i32;
        let mut day = date.day() as i32;
        if day == last && days.contains(&LAST_DAY) {
            day = LAST_DAY;
        } else if day == last - 1 && days.contains(&SECOND_TO_LAST_DAY) {
            day = SECOND_TO_LAST_DAY;
        }
        days.contains(&day)
    })
}

/// Walks forward one day at a time from `start` and returns the first date
/// strictly after `now` accepted by `matches`.
///
/// Days up to and including `now` can never qualify, so the walk begins at
/// whichever of `start` and the day after `now` is later.
fn scan_forward<F>(now: NaiveDate, start: NaiveDate, matches: F) -> Result<NaiveDate, RecurrenceError>
where
    F: Fn(NaiveDate) -> bool,
{
    let after_now = now.succ_opt().ok_or(RecurrenceError::ComputationExceeded)?;
    let mut date = start.max(after_now);

    for _ in 0..MAX_SCAN_DAYS {
        if matches(date) {
            return Ok(date);
        }
        date = date.succ_opt().ok_or(RecurrenceError::ComputationExceeded)?;
    }

    Err(RecurrenceError::ComputationExceeded)
}
