use thiserror::Error;

/// Input-rejection failures of the recurrence engine.
///
/// Every variant is deterministic: the same inputs always fail the same way,
/// so callers surface the message and never retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceError {
    #[error("repeat rule is empty")]
    EmptyRule,

    #[error("invalid date '{0}', expected YYYYMMDD")]
    InvalidDate(String),

    #[error("unknown repeat rule '{0}', expected one of d, w, m, y")]
    UnknownRuleKind(String),

    #[error("repeat rule '{0}' is missing arguments")]
    MissingArguments(String),

    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    #[error("invalid interval {0}, must be between 1 and 400 days")]
    InvalidInterval(i64),

    #[error("invalid day of the week '{0}', must be between 1 and 7")]
    InvalidWeekday(String),

    #[error("invalid day of the month {0}, must be -2, -1 or between 1 and 31")]
    InvalidMonthDay(i64),

    #[error("invalid month {0}, must be between 1 and 12")]
    InvalidMonth(i64),

    #[error(
        "no matching date found within {} days",
        crate::recurrence::MAX_SCAN_DAYS
    )]
    ComputationExceeded,
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("Migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Recurrence(#[from] RecurrenceError),
}
