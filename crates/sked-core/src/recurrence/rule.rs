use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::RecurrenceError;

pub const MIN_INTERVAL_DAYS: i64 = 1;
pub const MAX_INTERVAL_DAYS: i64 = 400;

/// Day selectors counting back from the end of the month.
pub const LAST_DAY: i32 = -1;
pub const SECOND_TO_LAST_DAY: i32 = -2;

/// A parsed repeat rule.
///
/// Rules are written as whitespace-separated tokens whose first token picks
/// the variant (case-insensitive):
///
/// - `d <interval>`: every `interval` days, `1..=400`
/// - `y`: every year on the same date
/// - `w <days>`: on the listed weekdays, `1` = Monday ... `7` = Sunday
/// - `m <days> [<months>]`: on the listed days of the month (`-1` last day,
///   `-2` second-to-last), optionally restricted to the listed months
///
/// Trailing tokens beyond what a variant consumes are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceRule {
    Daily { interval: u32 },
    Yearly,
    /// ISO weekday numbers, Monday = 1 through Sunday = 7.
    Weekly { weekdays: BTreeSet<u32> },
    /// An empty `months` set matches every month.
    Monthly {
        days: BTreeSet<i32>,
        months: BTreeSet<u32>,
    },
}

impl FromStr for RecurrenceRule {
    type Err = RecurrenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let kind = tokens.next().ok_or(RecurrenceError::EmptyRule)?;
        let args: Vec<&str> = tokens.collect();
        let missing = || RecurrenceError::MissingArguments(s.trim().to_string());

        match kind.to_lowercase().as_str() {
            "d" => {
                let interval = args.first().ok_or_else(missing)?;
                parse_interval(interval)
            }
            "y" => Ok(RecurrenceRule::Yearly),
            "w" => {
                let days = args.first().ok_or_else(missing)?;
                parse_weekdays(days)
            }
            "m" => {
                let days = args.first().ok_or_else(missing)?;
                let days = parse_month_days(days)?;
                let months = match args.get(1) {
                    Some(months) => parse_months(months)?,
                    None => BTreeSet::new(),
                };
                Ok(RecurrenceRule::Monthly { days, months })
            }
            _ => Err(RecurrenceError::UnknownRuleKind(kind.to_string())),
        }
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecurrenceRule::Daily { interval } => write!(f, "d {}", interval),
            RecurrenceRule::Yearly => write!(f, "y"),
            RecurrenceRule::Weekly { weekdays } => write!(f, "w {}", join(weekdays)),
            RecurrenceRule::Monthly { days, months } if months.is_empty() => {
                write!(f, "m {}", join(days))
            }
            RecurrenceRule::Monthly { days, months } => {
                write!(f, "m {} {}", join(days), join(months))
            }
        }
    }
}

fn join<T: ToString>(values: &BTreeSet<T>) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn parse_number(token: &str) -> Result<i64, RecurrenceError> {
    token
        .parse::<i64>()
        .map_err(|_| RecurrenceError::InvalidNumber(token.to_string()))
}

fn parse_interval(token: &str) -> Result<RecurrenceRule, RecurrenceError> {
    let interval = parse_number(token)?;
    if !(MIN_INTERVAL_DAYS..=MAX_INTERVAL_DAYS).contains(&interval) {
        return Err(RecurrenceError::InvalidInterval(interval));
    }
    Ok(RecurrenceRule::Daily {
        interval: interval as u32,
    })
}

fn parse_weekdays(list: &str) -> Result<RecurrenceRule, RecurrenceError> {
    let weekdays = list
        .split(',')
        .map(|token| match token.parse::<u32>() {
            Ok(day @ 1..=7) => Ok(day),
            _ => Err(RecurrenceError::InvalidWeekday(token.to_string())),
        })
        .collect::<Result<BTreeSet<_>, _>>()?;
    Ok(RecurrenceRule::Weekly { weekdays })
}

fn parse_month_days(list: &str) -> Result<BTreeSet<i32>, RecurrenceError> {
    list.split(',')
        .map(|token| {
            let day = parse_number(token)?;
            match day {
                -2 | -1 | 1..=31 => Ok(day as i32),
                _ => Err(RecurrenceError::InvalidMonthDay(day)),
            }
        })
        .collect()
}

fn parse_months(list: &str) -> Result<BTreeSet<u32>, RecurrenceError> {
    list.split(',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            let month = parse_number(token)?;
            match month {
                1..=12 => Ok(month as u32),
                _ => Err(RecurrenceError::InvalidMonth(month)),
            }
        })
        .collect()
}
