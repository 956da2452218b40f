use crate::db::db::Db;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remember this database location in the configuration
    #[arg(long)]
    db_path: Option<PathBuf>,
}

pub fn cmd(explicit: Option<PathBuf>, args: InitArgs) -> Result<()> {
    let mut config = Config::read()?;

    if let Some(db_path) = args.db_path {
        config.db_path = Some(db_path.clone());
        config.save()?;
        msg_success!(Message::ConfigSaved(db_path.display().to_string()));
    }

    let path = config.resolve_db_path(explicit)?;
    Db::open(&path)?.close()?;
    msg_success!(Message::StoreReady(path.display().to_string()));

    Ok(())
}
