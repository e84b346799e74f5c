use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::date::parse_search_date;

/// Default number of rows returned by a task listing.
pub const DEFAULT_LIST_LIMIT: u32 = 50;

/// A scheduled task as stored in the `scheduler` table.
///
/// `date` is always a valid `YYYYMMDD` string and `repeat` is either empty
/// (one-off task) or a rule accepted by [`crate::recurrence::RecurrenceRule`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub date: String,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}

impl Task {
    pub fn is_recurring(&self) -> bool {
        !self.repeat.trim().is_empty()
    }
}

/// A validated row ready for insertion; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub date: String,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}

/// Caller input for creating a task. A missing date means "today".
#[derive(Debug, Clone, Default)]
pub struct NewTaskData {
    pub date: Option<String>,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}

/// Caller input for replacing a task's fields. A missing date keeps the
/// stored one.
#[derive(Debug, Clone, Default)]
pub struct UpdateTaskData {
    pub id: i64,
    pub date: Option<String>,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionResult {
    /// A one-off task was done and removed.
    Deleted(Task),
    /// A recurring task moved on to its next date.
    Rescheduled { task: Task, previous_date: String },
}

/// Represents a filter for listing tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    /// Tasks due exactly on this date.
    Date(NaiveDate),
    /// Case-insensitive substring match on title or comment.
    Text(String),
}

impl TaskFilter {
    /// Interprets a free-form search box value: `DD.MM.YYYY` selects a date,
    /// anything else non-blank is a text search.
    pub fn from_search(search: Option<&str>) -> Self {
        match search.map(str::trim) {
            None | Some("") => TaskFilter::All,
            Some(term) => match parse_search_date(term) {
                Some(date) => TaskFilter::Date(date),
                None => TaskFilter::Text(term.to_string()),
            },
        }
    }
}
