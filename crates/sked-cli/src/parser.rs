use anyhow::Result;
use chrono::{Local, NaiveDate};
use chrono_english::{parse_date_string, Dialect};
use sked_core::date::format_date;

/// Turns a `--date` argument into a `YYYYMMDD` string.
///
/// Eight digits are passed through untouched so the core reports its own
/// error for impossible dates; anything else goes through chrono-english
/// relative to the local clock.
pub fn parse_task_date(input: &str) -> Result<String> {
    let input = input.trim();
    if input.len() == 8 && input.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(input.to_string());
    }
    let parsed = parse_date_string(input, Local::now(), Dialect::Us)
        .map_err(|e| anyhow::anyhow!("Failed to parse date '{}': {}", input, e))?;
    Ok(format_date(parsed.date_naive()))
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
