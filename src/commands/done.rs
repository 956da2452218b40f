use super::edit;
use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::task::{PartialTask, TaskId};
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use clap::Args;

/// Status written by `done`.
pub const DONE_STATUS: &str = "done";

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Id of the finished task
    id: TaskId,

    /// Completion date, defaults to today (YYYY-MM-DD)
    #[arg(long)]
    date: Option<String>,
}

pub fn cmd(db: &Db, args: DoneArgs) -> Result<()> {
    let date = args.date.unwrap_or_else(|| Local::now().date_naive().format("%Y-%m-%d").to_string());

    let partial = PartialTask {
        status: Some(DONE_STATUS.to_string()),
        completion_date: Some(date.clone()),
        ..Default::default()
    };
    edit::apply(db, args.id, partial)?;

    msg_success!(Message::TaskCompleted(args.id, date));
    Ok(())
}
