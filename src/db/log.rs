use crate::db::schema::ensure_log_table;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// One row of the internal `log` table.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Write an internal log line into the `log` table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    ensure_log_table(conn)?;

    // Local timestamp, ISO 8601
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Like `ttlog`, but a failure only prints a warning: the internal log
/// never fails the command it describes.
pub fn ttlog_or_warn(conn: &Connection, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(conn, operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

/// Read the whole log in id order.
pub fn load_log(conn: &Connection) -> AppResult<Vec<LogEntry>> {
    ensure_log_table(conn)?;

    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, IFNULL(target, ''), message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(LogEntry {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get(3)?,
            message: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
