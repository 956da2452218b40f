//! Configuration management for tinytodo.
//!
//! The configuration is a small JSON document kept in the platform data
//! directory next to the default database file. Its only setting today is the
//! location of the task database.
//!
//! ## Database path resolution
//!
//! 1. An explicit path (the `--db` flag or the `TINYTODO_DB` variable)
//! 2. `db_path` from `config.json`
//! 3. `<data dir>/tinytodo.db`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tinytodo::libs::config::Config;
//!
//! let config = Config::read()?;
//! let db_path = config.resolve_db_path(None)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default database file name inside the data directory.
pub const DB_FILE_NAME: &str = "tinytodo.db";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Location of the task database. `None` means the data directory default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,

    #[serde(skip)]
    storage: Option<DataStorage>,
}

impl Config {
    /// Loads the configuration from the platform data directory.
    ///
    /// A missing file yields the default configuration.
    pub fn read() -> Result<Config> {
        Self::read_from(DataStorage::new())
    }

    /// Loads the configuration from the given data directory.
    pub fn read_from(storage: DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;

        let mut config = if config_file_path.exists() {
            let config_str = fs::read_to_string(config_file_path)?;
            serde_json::from_str::<Config>(&config_str)?
        } else {
            Config::default()
        };
        config.storage = Some(storage);

        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = self.storage().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Picks the database path: `explicit` first, then the configured path,
    /// then the default file in the data directory.
    pub fn resolve_db_path(&self, explicit: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = explicit.or_else(|| self.db_path.clone()) {
            return Ok(path);
        }
        self.storage().get_path(DB_FILE_NAME)
    }

    fn storage(&self) -> DataStorage {
        self.storage.clone().unwrap_or_default()
    }
}
