#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rusqlite::{Connection, params};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// `timer` running inside `dir`, with HOME pointed there too so no user
/// configuration leaks into the test.
pub fn timer(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("timer");
    cmd.current_dir(dir).env("HOME", dir);
    cmd
}

/// A scratch directory with `timer init timer.db` already run in it.
pub fn initialized_workspace() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    timer(dir.path())
        .args(["init", "timer.db"])
        .assert()
        .success();
    dir
}

pub fn db_path(dir: &Path) -> PathBuf {
    dir.join("timer.db")
}

/// Insert an activity straight into the store, bypassing the CLI.
pub fn add_activity(dir: &Path, name: &str) -> i64 {
    let conn = Connection::open(db_path(dir)).expect("open db");
    conn.execute("INSERT INTO activities (activity) VALUES (?1)", [name])
        .expect("insert activity");
    conn.last_insert_rowid()
}

/// Insert an interval straight into the store.
pub fn add_interval(dir: &Path, activity_id: i64, start: &str, stop: &str) -> i64 {
    let conn = Connection::open(db_path(dir)).expect("open db");
    conn.execute(
        "INSERT INTO times (activity_id, start, stop) VALUES (?1, ?2, ?3)",
        params![activity_id, start, stop],
    )
    .expect("insert interval");
    conn.last_insert_rowid()
}

pub fn activity_names(dir: &Path) -> Vec<String> {
    let conn = Connection::open(db_path(dir)).expect("open db");
    let mut stmt = conn
        .prepare("SELECT activity FROM activities ORDER BY id")
        .expect("prepare");
    let names: Vec<String> = stmt
        .query_map([], |r| r.get(0))
        .expect("query")
        .collect::<Result<_, _>>()
        .expect("rows");
    names
}

/// (time_id, stop) for every interval.
pub fn interval_stops(dir: &Path) -> Vec<(i64, String)> {
    let conn = Connection::open(db_path(dir)).expect("open db");
    let mut stmt = conn
        .prepare("SELECT time_id, stop FROM times ORDER BY time_id")
        .expect("prepare");
    let stops: Vec<(i64, String)> = stmt
        .query_map([], |r| Ok((r.get(0)?, r.get(1)?)))
        .expect("query")
        .collect::<Result<_, _>>()
        .expect("rows");
    stops
}
