use crate::db::{db::Db, tasks::Tasks};
use crate::libs::messages::Message;
use crate::libs::task::TaskId;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Id of the task to show
    id: TaskId,
}

pub fn cmd(db: &Db, args: ShowArgs) -> Result<()> {
    let Some(task) = Tasks::new(db).get_by_id(args.id)? else {
        msg_bail_anyhow!(Message::TaskNotFound(args.id));
    };

    msg_print!(Message::TaskHeader(task.id), true);
    View::task(&task)
}
