use crate::db::{db::Db, tasks::Tasks};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print tasks as JSON
    #[arg(long)]
    json: bool,
}

pub fn cmd(db: &Db, args: ListArgs) -> Result<()> {
    let tasks = Tasks::new(db).list_all_vec()?;

    if args.json {
        return View::tasks_json(&tasks);
    }

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&tasks)
}
