use crate::db::{db::Db, tasks::Tasks};
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskId};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Ids of the tasks to delete
    #[arg(required = true)]
    ids: Vec<TaskId>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(db: &Db, args: DeleteArgs) -> Result<()> {
    let tasks_db = Tasks::new(db);

    let mut found: Vec<Task> = Vec::new();
    for id in &args.ids {
        match tasks_db.get_by_id(*id)? {
            Some(task) => found.push(task),
            None => msg_warning!(Message::TaskNotFound(*id)),
        }
    }

    if found.is_empty() {
        return Ok(());
    }

    if !args.yes {
        msg_print!(Message::TasksToBeDeleted, true);
        View::tasks(&found)?;

        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTasks(found.len()).to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::DeletionCancelled);
            return Ok(());
        }
    }

    if let [task] = found.as_slice() {
        if tasks_db.delete(task.id)? {
            msg_success!(Message::TaskDeleted(task.id));
        } else {
            msg_error!(Message::TaskNotFound(task.id));
        }
        return Ok(());
    }

    let ids: Vec<TaskId> = found.iter().map(|task| task.id).collect();
    let deleted = tasks_db.delete_many(&ids)?;
    for id in &ids {
        if deleted.contains(id) {
            msg_success!(Message::TaskDeleted(*id));
        } else {
            msg_error!(Message::TaskNotFound(*id));
        }
    }
    msg_success!(Message::TasksDeletedCount(deleted.len()));

    Ok(())
}
