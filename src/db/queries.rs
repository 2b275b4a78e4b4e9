use crate::errors::AppResult;
use crate::models::activity::Activity;
use crate::models::interval::{Interval, OPEN_SENTINEL};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// All activity names, in creation order.
pub fn activity_names(conn: &Connection) -> AppResult<Vec<String>> {
    Ok(load_activities(conn)?.into_iter().map(|a| a.name).collect())
}

pub fn load_activities(conn: &Connection) -> AppResult<Vec<Activity>> {
    let mut stmt = conn.prepare("SELECT id, activity FROM activities ORDER BY id ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok(Activity {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Id of the activity named `name`. Names are not unique in the schema;
/// the oldest row wins.
pub fn find_activity_id(conn: &Connection, name: &str) -> AppResult<Option<i64>> {
    let id = conn
        .query_row(
            "SELECT id FROM activities WHERE activity = ?1 ORDER BY id ASC LIMIT 1",
            [name],
            |row| row.get(0),
        )
        .optional()?;
    Ok(id)
}

pub fn insert_activity(conn: &Connection, name: &str) -> AppResult<i64> {
    conn.execute("INSERT INTO activities (activity) VALUES (?1)", [name])?;
    Ok(conn.last_insert_rowid())
}

/// Insert an open interval (stop = sentinel) and return its id.
pub fn insert_interval(conn: &Connection, activity_id: i64, start: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO times (activity_id, start, stop) VALUES (?1, ?2, ?3)",
        params![activity_id, start, OPEN_SENTINEL],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Set the stop time of interval `id`, only while it is still open.
/// Returns false when nothing was updated.
pub fn close_interval(conn: &Connection, id: i64, stop: &str) -> AppResult<bool> {
    let changed = conn.execute(
        "UPDATE times SET stop = ?1 WHERE time_id = ?2 AND stop = ?3",
        params![stop, id, OPEN_SENTINEL],
    )?;
    Ok(changed == 1)
}

const INTERVAL_SELECT: &str = "SELECT t.time_id, t.activity_id, a.activity, t.start, t.stop
     FROM times t
     LEFT JOIN activities a ON a.id = t.activity_id";

fn map_interval(row: &Row) -> Result<Interval> {
    Ok(Interval {
        id: row.get(0)?,
        activity_id: row.get(1)?,
        activity: row.get(2)?,
        start: row.get(3)?,
        stop: row.get(4)?,
    })
}

pub fn load_interval(conn: &Connection, id: i64) -> AppResult<Option<Interval>> {
    let sql = format!("{INTERVAL_SELECT} WHERE t.time_id = ?1");
    let interval = conn.query_row(&sql, [id], map_interval).optional()?;
    Ok(interval)
}

/// Row filter for `load_intervals`.
#[derive(Debug, Default, Clone)]
pub struct IntervalFilter {
    pub activity_id: Option<i64>,
    pub open_only: bool,
}

pub fn load_intervals(conn: &Connection, filter: &IntervalFilter) -> AppResult<Vec<Interval>> {
    let sql = format!(
        "{INTERVAL_SELECT}
         WHERE (?1 IS NULL OR t.activity_id = ?1)
           AND (?2 = 0 OR t.stop = ?3)
         ORDER BY t.time_id ASC"
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(
        params![filter.activity_id, filter.open_only, OPEN_SENTINEL],
        map_interval,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
