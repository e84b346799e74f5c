use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use sked_core::models::CompletionResult;
use sked_core::repository::TaskRepository;
use sked_core::scheduler::TaskScheduler;

use crate::cli::DoneCommand;

pub async fn done_task(
    scheduler: &TaskScheduler<impl TaskRepository>,
    command: DoneCommand,
    today: NaiveDate,
) -> Result<()> {
    match scheduler.complete_task(command.id, today).await? {
        CompletionResult::Deleted(task) => {
            println!("Completed task: '{}'", task.title);
        }
        CompletionResult::Rescheduled {
            task,
            previous_date,
        } => {
            println!("Completed task: '{}'", task.title);
            println!(
                "Next occurrence on {} (was {})",
                task.date.yellow(),
                previous_date.dimmed()
            );
        }
    }

    Ok(())
}
