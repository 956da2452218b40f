//! Schema initializer for the tasks table.
//!
//! The table is created with `CREATE TABLE IF NOT EXISTS`, so running the
//! initializer against a ready store changes nothing. Because that statement
//! silently accepts any pre-existing table named `Tasks`, the live columns are
//! checked afterwards and an incompatible table is rejected.

use crate::libs::error::{Result, StoreError};
use rusqlite::Connection;
use std::path::Path;
use tracing::info;

/// Name of the tasks table.
pub const TABLE_TASKS: &str = "Tasks";

/// Column names in storage order.
pub const COLUMNS: [&str; 9] = [
    "Id",
    "Name",
    "Category",
    "StartDate",
    "DueDate",
    "CompletionDate",
    "Status",
    "Priority",
    "Description",
];

/// Date columns are declared TEXT so values stay opaque strings.
/// AUTOINCREMENT keeps ids from being reused after the highest row is deleted.
const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS Tasks (
    Id INTEGER PRIMARY KEY AUTOINCREMENT,
    Name TEXT NOT NULL,
    Category TEXT,
    StartDate TEXT,
    DueDate TEXT,
    CompletionDate TEXT,
    Status TEXT,
    Priority TEXT,
    Description TEXT
)";

const TABLE_INFO: &str = "PRAGMA table_info(Tasks)";

/// One row of `PRAGMA table_info`.
struct ColumnInfo {
    name: String,
    not_null: bool,
    primary_key: bool,
}

/// Ensures the tasks table exists with a compatible layout.
pub fn ensure_schema(conn: &Connection, path: &Path) -> Result<()> {
    conn.execute_batch(SCHEMA_TASKS).map_err(|e| StoreError::schema_init(path, e))?;

    let columns = table_info(conn).map_err(|e| StoreError::schema_init(path, e))?;
    check_columns(&columns).map_err(|reason| StoreError::schema_init(path, reason))?;

    info!(path = %path.display(), table = TABLE_TASKS, "task schema ready");
    Ok(())
}

fn table_info(conn: &Connection) -> rusqlite::Result<Vec<ColumnInfo>> {
    let mut stmt = conn.prepare(TABLE_INFO)?;
    let rows = stmt.query_map([], |row| {
        Ok(ColumnInfo {
            name: row.get(1)?,
            not_null: row.get::<_, i64>(3)? != 0,
            primary_key: row.get::<_, i64>(5)? != 0,
        })
    })?;

    rows.collect()
}

fn check_columns(columns: &[ColumnInfo]) -> std::result::Result<(), String> {
    let find = |name: &str| columns.iter().find(|column| column.name.eq_ignore_ascii_case(name));

    for expected in COLUMNS {
        if find(expected).is_none() {
            return Err(format!("existing {} table has no {} column", TABLE_TASKS, expected));
        }
    }

    if !find("Id").is_some_and(|column| column.primary_key) {
        return Err(format!("existing {} table does not use Id as its primary key", TABLE_TASKS));
    }
    if !find("Name").is_some_and(|column| column.not_null) {
        return Err(format!("existing {} table allows NULL names", TABLE_TASKS));
    }

    Ok(())
}
