//! SQLite connection wrapper (lightweight for CLI usage).

use crate::db::schema;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use rusqlite::{Connection, OpenFlags, Transaction};

pub struct DbPool {
    pub conn: Connection,
    pub path: String,
}

impl DbPool {
    /// Create a new database file at `path` and lay down the schema.
    /// The file must not exist yet.
    pub fn create(path: &str) -> AppResult<Self> {
        let conn = Connection::open_with_flags(
            expand_tilde(path),
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE,
        )?;
        schema::init_db(&conn)?;
        Ok(Self {
            conn,
            path: path.to_string(),
        })
    }

    /// Open an existing timer database. Never creates a file: a missing file,
    /// a file SQLite cannot read or one without the timer tables all fail
    /// with `StoreNotFound`.
    pub fn open(path: &str) -> AppResult<Self> {
        let file = expand_tilde(path);
        if !file.is_file() {
            return Err(AppError::StoreNotFound(format!(
                "database '{}' does not exist",
                path
            )));
        }

        let conn = Connection::open_with_flags(&file, OpenFlags::SQLITE_OPEN_READ_WRITE)
            .map_err(|e| AppError::StoreNotFound(format!("cannot open '{}': {}", path, e)))?;

        if !matches!(schema::has_schema(&conn), Ok(true)) {
            return Err(AppError::StoreNotFound(format!(
                "'{}' is not a timer database",
                path
            )));
        }

        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        Ok(Self {
            conn,
            path: path.to_string(),
        })
    }

    /// Run `func` inside one transaction; commit on success, roll back on error.
    pub fn in_transaction<F, T>(&mut self, func: F) -> AppResult<T>
    where
        F: FnOnce(&Transaction<'_>) -> AppResult<T>,
    {
        let tx = self.conn.transaction()?;
        let out = func(&tx)?;
        tx.commit()?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn open_never_creates_a_file() {
        let dir = tempdir().unwrap();
        let db = dir.path().join("missing.db");
        let path = db.to_string_lossy().to_string();

        assert!(matches!(
            DbPool::open(&path),
            Err(AppError::StoreNotFound(_))
        ));
        assert!(!db.exists());
    }

    #[test]
    fn open_rejects_foreign_files() {
        let dir = tempdir().unwrap();

        let text = dir.path().join("notes.txt");
        fs::write(&text, "definitely not sqlite, just some text padding it out").unwrap();
        assert!(matches!(
            DbPool::open(&text.to_string_lossy()),
            Err(AppError::StoreNotFound(_))
        ));

        let other = dir.path().join("other.db");
        Connection::open(&other)
            .unwrap()
            .execute_batch("CREATE TABLE foo (x INTEGER);")
            .unwrap();
        assert!(matches!(
            DbPool::open(&other.to_string_lossy()),
            Err(AppError::StoreNotFound(_))
        ));
    }

    #[test]
    fn created_store_can_be_reopened() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("t.db").to_string_lossy().to_string();

        drop(DbPool::create(&path).unwrap());
        let pool = DbPool::open(&path).unwrap();
        assert_eq!(pool.path, path);
    }

    #[test]
    fn failed_transaction_rolls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("t.db").to_string_lossy().to_string();
        let mut pool = DbPool::create(&path).unwrap();

        let res: AppResult<()> = pool.in_transaction(|tx| {
            tx.execute("INSERT INTO activities (activity) VALUES ('x')", [])?;
            Err(AppError::IntervalNotOpen(1))
        });
        assert!(res.is_err());

        let n: i64 = pool
            .conn
            .query_row("SELECT COUNT(*) FROM activities", [], |r| r.get(0))
            .unwrap();
        assert_eq!(n, 0);
    }
}
