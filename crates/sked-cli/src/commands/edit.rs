use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use sked_core::models::{Task, UpdateTaskData};
use sked_core::repository::TaskRepository;
use sked_core::scheduler::TaskScheduler;

use crate::cli::EditCommand;
use crate::parser::parse_task_date;

pub async fn edit_task(
    scheduler: &TaskScheduler<impl TaskRepository>,
    command: EditCommand,
    today: NaiveDate,
) -> Result<()> {
    let existing = scheduler.get_task(command.id).await?;
    let date = command.date.as_deref().map(parse_task_date).transpose()?;
    let update = merge_update(&existing, command, date);

    let task = scheduler.edit_task(update, today).await?;

    println!("Task {} updated.", task.id.to_string().cyan());
    if task.date != existing.date {
        println!("  date: {} -> {}", existing.date.dimmed(), task.date.yellow());
    }
    if task.repeat != existing.repeat {
        println!(
            "  repeat: {} -> {}",
            describe_repeat(&existing.repeat).dimmed(),
            describe_repeat(&task.repeat).magenta()
        );
    }

    Ok(())
}

fn describe_repeat(repeat: &str) -> &str {
    if repeat.is_empty() {
        "none"
    } else {
        repeat
    }
}

/// Fields left out on the command line keep their stored values.
fn merge_update(existing: &Task, command: EditCommand, date: Option<String>) -> UpdateTaskData {
    let repeat = if command.repeat_clear {
        String::new()
    } else {
        command.repeat.unwrap_or_else(|| existing.repeat.clone())
    };

    UpdateTaskData {
        id: existing.id,
        date,
        title: command.title.unwrap_or_else(|| existing.title.clone()),
        comment: command.comment.unwrap_or_else(|| existing.comment.clone()),
        repeat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> Task {
        Task {
            id: 7,
            date: "20240310".to_string(),
            title: "Water plants".to_string(),
            comment: "balcony".to_string(),
            repeat: "d 3".to_string(),
        }
    }

    fn command() -> EditCommand {
        EditCommand {
            id: 7,
            title: None,
            date: None,
            comment: None,
            repeat: None,
            repeat_clear: false,
        }
    }

    #[test]
    fn test_untouched_fields_are_kept() {
        let update = merge_update(&stored(), command(), None);
        assert_eq!(update.id, 7);
        assert_eq!(update.date, None);
        assert_eq!(update.title, "Water plants");
        assert_eq!(update.comment, "balcony");
        assert_eq!(update.repeat, "d 3");
    }

    #[test]
    fn test_repeat_clear_makes_one_off() {
        let mut cmd = command();
        cmd.repeat_clear = true;
        cmd.title = Some("Water cactus".to_string());
        let update = merge_update(&stored(), cmd, Some("20240401".to_string()));
        assert_eq!(update.repeat, "");
        assert_eq!(update.title, "Water cactus");
        assert_eq!(update.date.as_deref(), Some("20240401"));
    }
}
