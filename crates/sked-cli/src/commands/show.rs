use anyhow::Result;
use chrono::NaiveDate;
use sked_core::repository::TaskRepository;
use sked_core::scheduler::TaskScheduler;

use crate::cli::ShowCommand;
use crate::views::table::display_task;

pub async fn show_task(
    scheduler: &TaskScheduler<impl TaskRepository>,
    command: ShowCommand,
    today: NaiveDate,
) -> Result<()> {
    let task = scheduler.get_task(command.id).await?;

    if command.json {
        println!("{}", serde_json::to_string_pretty(&task)?);
    } else {
        display_task(&task, today);
    }

    Ok(())
}
