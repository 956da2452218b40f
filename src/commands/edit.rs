use super::FieldArgs;
use crate::db::{db::Db, tasks::Tasks};
use crate::libs::error::StoreError;
use crate::libs::messages::Message;
use crate::libs::task::{PartialTask, TaskId};
use crate::{msg_bail_anyhow, msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Id of the task to edit
    id: TaskId,

    /// New task name
    #[arg(short, long)]
    name: Option<String>,

    #[command(flatten)]
    fields: FieldArgs,
}

impl EditArgs {
    pub fn into_partial(self) -> PartialTask {
        self.fields.into_partial(self.name)
    }
}

pub fn cmd(db: &Db, args: EditArgs) -> Result<()> {
    let id = args.id;
    let partial = args.into_partial();

    if partial.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    apply(db, id, partial)?;
    msg_success!(Message::TaskUpdated(id));
    Ok(())
}

/// Runs a partial update, turning a missing task into a user-facing error.
pub(super) fn apply(db: &Db, id: TaskId, partial: PartialTask) -> Result<()> {
    match Tasks::new(db).update(id, partial) {
        Err(StoreError::NotFound(id)) => msg_bail_anyhow!(Message::TaskNotFound(id)),
        result => Ok(result?),
    }
}
