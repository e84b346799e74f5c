use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::{OwoColorize, Style};
use sked_core::models::NewTaskData;
use sked_core::repository::TaskRepository;
use sked_core::scheduler::TaskScheduler;

use crate::cli::AddCommand;
use crate::parser::parse_task_date;

pub async fn add_task(
    scheduler: &TaskScheduler<impl TaskRepository>,
    command: AddCommand,
    today: NaiveDate,
) -> Result<()> {
    let date = command.date.as_deref().map(parse_task_date).transpose()?;

    let task = scheduler
        .add_task(
            NewTaskData {
                date,
                title: command.title,
                comment: command.comment,
                repeat: command.repeat,
            },
            today,
        )
        .await?;

    let success_style = Style::new().green().bold();
    if task.is_recurring() {
        println!(
            "{} Created recurring task {}: '{}' on {} (repeat: {})",
            "✓".style(success_style),
            task.id.to_string().cyan(),
            task.title,
            task.date.yellow(),
            task.repeat.magenta()
        );
    } else {
        println!(
            "{} Created task {}: '{}' on {}",
            "✓".style(success_style),
            task.id.to_string().cyan(),
            task.title,
            task.date.yellow()
        );
    }

    Ok(())
}
