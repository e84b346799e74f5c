use anyhow::Result;
use chrono::NaiveDate;
use sked_core::repository::TaskRepository;
use sked_core::scheduler::TaskScheduler;

use crate::cli::ListCommand;
use crate::views::table::display_tasks;

pub async fn list_tasks(
    scheduler: &TaskScheduler<impl TaskRepository>,
    command: ListCommand,
    today: NaiveDate,
) -> Result<()> {
    let tasks = scheduler.list_tasks(command.search.as_deref()).await?;

    if command.json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
    } else {
        display_tasks(&tasks, today);
    }

    Ok(())
}
