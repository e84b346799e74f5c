use clap::{Parser, Subcommand};

/// A small task scheduler with compact repeat rules
#[derive(Parser, Debug)]
#[command(name = "sked", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a new task
    Add(AddCommand),
    /// List upcoming tasks
    List(ListCommand),
    /// Show a single task
    Show(ShowCommand),
    /// Edit a task
    Edit(EditCommand),
    /// Mark a task as done
    Done(DoneCommand),
    /// Delete a task
    Delete(DeleteCommand),
    /// Compute the next date for a repeat rule
    NextDate(NextDateCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// The title of the task
    pub title: String,
    /// Due date (YYYYMMDD or e.g. "tomorrow"); defaults to today
    #[clap(short, long)]
    pub date: Option<String>,
    /// Free-form comment
    #[clap(short, long, default_value = "")]
    pub comment: String,
    /// Repeat rule: "d N", "y", "w 1,3,5" or "m 1,-1 [months]"
    #[clap(short, long, default_value = "")]
    pub repeat: String,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// Text to match in title or comment, or a date as DD.MM.YYYY
    pub search: Option<String>,
    /// Print tasks as JSON
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ShowCommand {
    /// The ID of the task
    pub id: i64,
    /// Print the task as JSON
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct EditCommand {
    /// The ID of the task to edit
    pub id: i64,
    /// New title
    #[clap(short, long)]
    pub title: Option<String>,
    /// New due date
    #[clap(short, long)]
    pub date: Option<String>,
    /// New comment
    #[clap(short, long)]
    pub comment: Option<String>,
    /// New repeat rule
    #[clap(short, long, conflicts_with = "repeat_clear")]
    pub repeat: Option<String>,
    /// Turn the task into a one-off task
    #[clap(long)]
    pub repeat_clear: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DoneCommand {
    /// The ID of the task to complete
    pub id: i64,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteCommand {
    /// The ID of the task to delete
    pub id: i64,
    /// Force deletion without confirmation
    #[clap(short, long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct NextDateCommand {
    /// Start date as YYYYMMDD
    #[clap(long)]
    pub date: String,
    /// Repeat rule
    #[clap(long)]
    pub repeat: String,
    /// Reference date as YYYYMMDD; defaults to today
    #[clap(long)]
    pub now: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_repeat_and_repeat_clear_conflict() {
        let result = Cli::try_parse_from(["sked", "edit", "1", "--repeat", "y", "--repeat-clear"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_next_date_arguments() {
        let cli = Cli::try_parse_from([
            "sked", "next-date", "--date", "20240301", "--repeat", "d 3", "--now", "20240301",
        ])
        .unwrap();
        match cli.command {
            Commands::NextDate(cmd) => {
                assert_eq!(cmd.date, "20240301");
                assert_eq!(cmd.repeat, "d 3");
                assert_eq!(cmd.now.as_deref(), Some("20240301"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
