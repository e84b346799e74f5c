use chrono::NaiveDate;
use anyhow::Context;
use clap::Parser;
use owo_colors::{OwoColorize, Style};
use sked_core::db;
use sked_core::error::{CoreError, RecurrenceError};
use sked_core::repository::SqliteRepository;
use sked_core::scheduler::TaskScheduler;

mod cli;
mod commands;
mod config;
mod parser;
mod views;

const LOG_ENV: &str = "SKED_LOG";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = cli::Cli::parse();

    let today = parser::today();

    let result = match cli.command {
        // Pure computation, no store needed.
        cli::Commands::NextDate(command) => commands::next_date::next_date(command, today),
        command => run(command, today).await,
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

async fn run(command: cli::Commands, today: NaiveDate) -> anyhow::Result<()> {
    let config = config::Config::new().context("Invalid configuration")?;
    let db_pool = db::establish_connection(&config.database_path).await?;
    let scheduler =
        TaskScheduler::new(SqliteRepository::new(db_pool)).with_list_limit(config.list_limit);

    match command {
        cli::Commands::Add(command) => commands::add::add_task(&scheduler, command, today).await,
        cli::Commands::List(command) => {
            commands::list::list_tasks(&scheduler, command, today).await
        }
        cli::Commands::Show(command) => {
            commands::show::show_task(&scheduler, command, today).await
        }
        cli::Commands::Edit(command) => commands::edit::edit_task(&scheduler, command, today).await,
        cli::Commands::Done(command) => commands::done::done_task(&scheduler, command, today).await,
        cli::Commands::Delete(command) => commands::delete::delete_task(&scheduler, command).await,
        cli::Commands::NextDate(command) => commands::next_date::next_date(command, today),
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.downcast_ref::<CoreError>() {
        match core_error {
            CoreError::NotFound(id) => {
                eprintln!(
                    "{} Task with ID '{}' not found.",
                    "Error:".style(error_style),
                    id
                );
            }
            CoreError::InvalidInput(s) => {
                eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
            }
            CoreError::Recurrence(e) => {
                eprintln!("{} {}", "Error:".style(error_style), e.yellow());
            }
            CoreError::Database(e) => {
                eprintln!("{} Database error: {}", "Error:".style(error_style), e);
            }
            _ => eprintln!("{} {:#}", "Error:".style(error_style), err),
        }
    } else if let Some(e) = err.downcast_ref::<RecurrenceError>() {
        eprintln!("{} {}", "Error:".style(error_style), e);
    } else {
        eprintln!("{} {:#}", "Error:".style(error_style), err);
    }
}
