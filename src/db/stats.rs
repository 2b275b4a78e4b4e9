use crate::errors::AppResult;
use crate::models::interval::OPEN_SENTINEL;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};
use rusqlite::Connection;
use std::fs;

/// Raw row counts of a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreInfo {
    pub activities: i64,
    pub intervals: i64,
    pub open_intervals: i64,
}

pub fn collect_info(conn: &Connection) -> AppResult<StoreInfo> {
    let count = |sql: &str| -> rusqlite::Result<i64> { conn.query_row(sql, [], |row| row.get(0)) };

    Ok(StoreInfo {
        activities: count("SELECT COUNT(*) FROM activities")?,
        intervals: count("SELECT COUNT(*) FROM times")?,
        open_intervals: conn.query_row(
            "SELECT COUNT(*) FROM times WHERE stop = ?1",
            [OPEN_SENTINEL],
            |row| row.get(0),
        )?,
    })
}

/// `PRAGMA integrity_check`; Ok(None) when the store is healthy.
pub fn integrity_check(conn: &Connection) -> AppResult<Option<String>> {
    let integrity: String = conn.query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
    Ok(if integrity == "ok" { None } else { Some(integrity) })
}

pub fn print_db_info(conn: &Connection, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) ROW COUNTS
    //
    let info = collect_info(conn)?;
    println!(
        "{}• Activities:{} {}{}{}",
        CYAN, RESET, GREEN, info.activities, RESET
    );
    println!(
        "{}• Intervals:{} {}{}{}",
        CYAN, RESET, GREEN, info.intervals, RESET
    );
    println!(
        "{}• Open intervals:{} {}{}{}",
        CYAN, RESET, YELLOW, info.open_intervals, RESET
    );

    println!();
    Ok(())
}
