use super::schema;
use crate::libs::error::{Result, StoreError};
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path reported for stores opened with [`Db::open_in_memory`].
pub const MEMORY_PATH: &str = ":memory:";

/// An open task store.
///
/// The handle owns its SQLite connection and is passed by reference into
/// [`Tasks`](super::tasks::Tasks). Opening a handle always runs the schema
/// initializer, so a `Db` in hand is ready for use. The connection closes when
/// the handle is dropped; call [`Db::close`] to observe close errors.
#[derive(Debug)]
pub struct Db {
    conn: Connection,
    path: PathBuf,
}

impl Db {
    /// Opens (or creates) the store at `path` and ensures its schema.
    ///
    /// Missing parent directories are created. Any failure here is reported
    /// as [`StoreError::SchemaInit`].
    pub fn open(path: impl AsRef<Path>) -> Result<Db> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::schema_init(path, e))?;
        }
        let conn = Connection::open(path).map_err(|e| StoreError::schema_init(path, e))?;

        Self::with_connection(conn, path.to_path_buf())
    }

    /// Opens a private in-memory store. Nothing is persisted.
    pub fn open_in_memory() -> Result<Db> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::schema_init(MEMORY_PATH, e))?;

        Self::with_connection(conn, PathBuf::from(MEMORY_PATH))
    }

    fn with_connection(conn: Connection, path: PathBuf) -> Result<Db> {
        let db = Db { conn, path };
        db.ensure_schema()?;
        debug!(path = %db.path.display(), "task store opened");

        Ok(db)
    }

    /// Creates the tasks table if it is absent and checks that an existing
    /// table is compatible. Safe to call any number of times.
    pub fn ensure_schema(&self) -> Result<()> {
        schema::ensure_schema(&self.conn, &self.path)
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Closes the connection, reporting any error from the engine.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| StoreError::Write(e))
    }
}
