use anyhow::Result;
use dialoguer::Confirm;
use sked_core::repository::TaskRepository;
use sked_core::scheduler::TaskScheduler;

use crate::cli::DeleteCommand;

pub async fn delete_task(
    scheduler: &TaskScheduler<impl TaskRepository>,
    command: DeleteCommand,
) -> Result<()> {
    let task = scheduler.get_task(command.id).await?;

    if !command.force {
        let confirmation = Confirm::new()
            .with_prompt(format!(
                "Are you sure you want to delete task '{}'?",
                task.title
            ))
            .default(false)
            .interact()
            .unwrap_or(false);

        if !confirmation {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    scheduler.delete_task(task.id).await?;
    println!("Task deleted successfully.");
    Ok(())
}
