use anyhow::Result;
use chrono::NaiveDate;
use sked_core::date::parse_date;
use sked_core::recurrence::next_date as compute_next_date;

use crate::cli::NextDateCommand;

/// Prints the next occurrence only, so the output can be piped.
pub fn next_date(command: NextDateCommand, today: NaiveDate) -> Result<()> {
    let now = match command.now.as_deref() {
        Some(now) => parse_date(now)?,
        None => today,
    };

    let next = compute_next_date(now, &command.date, &command.repeat)?;
    println!("{}", next);
    Ok(())
}
