use super::FieldArgs;
use crate::db::{db::Db, tasks::Tasks};
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task name
    #[arg(required = true)]
    name: String,

    #[command(flatten)]
    fields: FieldArgs,
}

pub fn cmd(db: &Db, args: AddArgs) -> Result<()> {
    let task = args.fields.into_partial(Some(args.name));
    let id = Tasks::new(db).create(&task)?;

    msg_success!(Message::TaskCreated(id));
    Ok(())
}
