//! Task lifecycle on top of an injected [`TaskRepository`].
//!
//! The scheduler normalizes dates and repeat rules before anything reaches
//! the store, and decides what "done" means for one-off versus recurring
//! tasks. The reference date is always passed in by the caller.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::date::{format_date, parse_date};
use crate::error::CoreError;
use crate::models::{
    CompletionResult, NewTask, NewTaskData, Task, TaskFilter, UpdateTaskData, DEFAULT_LIST_LIMIT,
};
use crate::recurrence::{next_date, RecurrenceRule};
use crate::repository::TaskRepository;

pub struct TaskScheduler<R> {
    repo: R,
    list_limit: u32,
}

impl<R: TaskRepository> TaskScheduler<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }

    pub fn with_list_limit(mut self, list_limit: u32) -> Self {
        self.list_limit = list_limit;
        self
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub async fn add_task(&self, data: NewTaskData, today: NaiveDate) -> Result<Task, CoreError> {
        let title = require_title(&data.title)?;
        let date = match data.date.as_deref().map(str::trim) {
            None | Some("") => today,
            Some(date) => parse_date(date)?,
        };
        let (date, repeat) = schedule_date(date, &data.repeat, today)?;

        self.repo
            .insert_task(NewTask {
                date,
                title,
                comment: data.comment,
                repeat,
            })
            .await
    }

    pub async fn get_task(&self, id: i64) -> Result<Task, CoreError> {
        self.repo
            .get_task(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(id.to_string()))
    }

    pub async fn edit_task(&self, data: UpdateTaskData, today: NaiveDate) -> Result<Task, CoreError> {
        let existing = self.get_task(data.id).await?;
        let title = require_title(&data.title)?;
        let date = match data.date.as_deref().map(str::trim) {
            None | Some("") => parse_date(&existing.date)?,
            Some(date) => parse_date(date)?,
        };
        let (date, repeat) = schedule_date(date, &data.repeat, today)?;

        let task = Task {
            id: existing.id,
            date,
            title,
            comment: data.comment,
            repeat,
        };
        self.repo.update_task(&task).await?;
        Ok(task)
    }

    /// Marks a task as done. One-off tasks are removed; recurring tasks are
    /// moved to their next occurrence after `today` or after the current due
    /// date, whichever is later.
    pub async fn complete_task(&self, id: i64, today: NaiveDate) -> Result<CompletionResult, CoreError> {
        let task = self.get_task(id).await?;

        if !task.is_recurring() {
            self.repo.delete_task(id).await?;
            info!(id, "one-off task completed");
            return Ok(CompletionResult::Deleted(task));
        }

        // Completing ahead of time still moves past the current due date.
        let now = today.max(parse_date(&task.date)?);
        let next = next_date(now, &task.date, &task.repeat)?;
        let previous_date = task.date.clone();
        let task = Task { date: next, ..task };
        self.repo.update_task(&task).await?;
        info!(id, from = %previous_date, to = %task.date, "recurring task rescheduled");

        Ok(CompletionResult::Rescheduled {
            task,
            previous_date,
        })
    }

    pub async fn delete_task(&self, id: i64) -> Result<(), CoreError> {
        self.repo.delete_task(id).await
    }

    pub async fn list_tasks(&self, search: Option<&str>) -> Result<Vec<Task>, CoreError> {
        let filter = TaskFilter::from_search(search);
        debug!(?filter, limit = self.list_limit, "listing tasks");
        self.repo.list_tasks(&filter, self.list_limit).await
    }
}

fn require_title(title: &str) -> Result<String, CoreError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(CoreError::InvalidInput("Task title is required".to_string()));
    }
    Ok(title.to_string())
}

/// Validates `repeat` and moves a date that already passed onto today, or
/// onto the rule's next occurrence for recurring tasks.
///
/// Returns the `YYYYMMDD` date and the rule in canonical form, which always
/// fits the store's `repeat` column.
fn schedule_date(
    date: NaiveDate,
    repeat: &str,
    today: NaiveDate,
) -> Result<(String, String), CoreError> {
    let repeat = repeat.trim();
    let rule = if repeat.is_empty() {
        None
    } else {
        Some(repeat.parse::<RecurrenceRule>()?)
    };

    let date = match &rule {
        _ if date >= today => date,
        None => today,
        Some(rule) => rule.next_after(today, date)?,
    };
    let repeat = rule.map(|rule| rule.to_string()).unwrap_or_default();
    Ok((format_date(date), repeat))
}
