pub mod add;
pub mod delete;
pub mod done;
pub mod edit;
pub mod init;
pub mod list;
pub mod show;

use crate::db::db::Db;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task::PartialTask;
use crate::msg_debug;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Create the task store and remember its location")]
    Init(init::InitArgs),
    #[command(about = "Create task", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "Change some fields of a task, keeping the rest", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Mark a task as done", arg_required_else_help = true)]
    Done(done::DoneArgs),
    #[command(about = "Show one task", arg_required_else_help = true)]
    Show(show::ShowArgs),
    #[command(about = "List all tasks")]
    List(list::ListArgs),
    #[command(about = "Delete tasks", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Task database file (overrides the configured location)
    #[arg(long, global = true, env = "TINYTODO_DB")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        Self::parse().run()
    }

    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Init(args) => init::cmd(self.db, args),
            command => dispatch(&open_store(self.db)?, command),
        }
    }
}

fn dispatch(db: &Db, command: Commands) -> Result<()> {
    match command {
        Commands::Init(_) => unreachable!("init runs before the store is opened"),
        Commands::Add(args) => add::cmd(db, args),
        Commands::Edit(args) => edit::cmd(db, args),
        Commands::Done(args) => done::cmd(db, args),
        Commands::Show(args) => show::cmd(db, args),
        Commands::List(args) => list::cmd(db, args),
        Commands::Delete(args) => delete::cmd(db, args),
    }
}

/// Opens the store at the resolved database path.
pub fn open_store(explicit: Option<PathBuf>) -> Result<Db> {
    let path = Config::read()?.resolve_db_path(explicit)?;
    let db = Db::open(&path)?;
    msg_debug!(Message::StoreOpened(path.display().to_string()));

    Ok(db)
}

/// Optional task fields shared by `add` and `edit`.
#[derive(Debug, Default, Args)]
pub struct FieldArgs {
    /// Category, e.g. "work"
    #[arg(short, long)]
    pub category: Option<String>,
    /// Start date (free-form text)
    #[arg(long = "start")]
    pub start_date: Option<String>,
    /// Due date (free-form text)
    #[arg(long = "due")]
    pub due_date: Option<String>,
    /// Completion date (free-form text)
    #[arg(long = "completed")]
    pub completion_date: Option<String>,
    /// Status, e.g. "open" or "done"
    #[arg(short, long)]
    pub status: Option<String>,
    /// Priority, e.g. "low" or "high"
    #[arg(short, long)]
    pub priority: Option<String>,
    /// Longer description
    #[arg(short, long)]
    pub description: Option<String>,
}

impl FieldArgs {
    pub fn into_partial(self, name: Option<String>) -> PartialTask {
        PartialTask {
            name,
            category: self.category,
            start_date: self.start_date,
            due_date: self.due_date,
            completion_date: self.completion_date,
            status: self.status,
            priority: self.priority,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_edit_parses_only_given_fields() {
        let cli = Cli::try_parse_from(["tinytodo", "edit", "4", "--due", "2024-02-02"]).unwrap();
        match cli.command {
            Commands::Edit(args) => {
                let partial = args.into_partial();
                assert_eq!(partial.due_date.as_deref(), Some("2024-02-02"));
                assert_eq!(partial.name, None);
                assert_eq!(partial.category, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_db_flag() {
        let cli = Cli::try_parse_from(["tinytodo", "list", "--db", "/tmp/t.db"]).unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/t.db")));
    }
}
