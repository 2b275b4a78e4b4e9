//! Store schema: `activities` and `times`, plus the internal `log` table.

use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, Result};

/// Tables shared with stores created by earlier versions of the timer.
const SCHEMA: &str = r#"
    CREATE TABLE activities (
        id       INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
        activity TEXT NOT NULL
    );

    CREATE TABLE times (
        time_id     INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
        activity_id INTEGER,
        start       TEXT,
        stop        TEXT,
        FOREIGN KEY(activity_id) REFERENCES activities(id)
    );
"#;

/// Create every table on a fresh, empty database.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(SCHEMA)?;
    ensure_log_table(conn)?;
    Ok(())
}

/// Ensure that the `log` table exists. Stores written by other tools lack it.
pub fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check whether a table exists.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// True when both timer tables are present.
pub fn has_schema(conn: &Connection) -> Result<bool> {
    Ok(table_exists(conn, "activities")? && table_exists(conn, "times")?)
}
