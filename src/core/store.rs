use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::path::{expand_tilde, is_occupied};
use std::fs;
use std::io;
use std::path::Path;

/// Creates timer databases and the side-record that names them.
pub struct StoreLogic;

impl StoreLogic {
    /// Create an empty database at `location` and write `location` into
    /// `side_record`. Without `overwrite`, an existing file at either path is
    /// an error and nothing is touched; with it, both are replaced.
    pub fn init(location: &str, side_record: &Path, overwrite: bool) -> AppResult<DbPool> {
        if location.trim().is_empty() {
            return Err(AppError::InvalidLocation(
                "the database location must not be empty".into(),
            ));
        }

        let db_file = expand_tilde(location);

        if !overwrite {
            if is_occupied(&db_file) {
                return Err(AppError::AlreadyExists(location.to_string()));
            }
            if is_occupied(side_record) {
                return Err(AppError::AlreadyExists(
                    side_record.display().to_string(),
                ));
            }
        } else {
            remove_if_present(&db_file)?;
            remove_if_present(side_record)?;
        }

        let pool = DbPool::create(location)?;
        if let Err(e) = fs::write(side_record, location) {
            // no side-record, no store: a retry must not hit AlreadyExists
            drop(pool);
            remove_if_present(&db_file)?;
            return Err(e.into());
        }

        Ok(pool)
    }
}

fn remove_if_present(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::queries::{insert_activity, load_activities};
    use tempfile::{TempDir, tempdir};

    fn paths(dir: &TempDir) -> (String, std::path::PathBuf) {
        (
            dir.path().join("timer.db").to_string_lossy().to_string(),
            dir.path().join(".env"),
        )
    }

    #[test]
    fn init_creates_store_and_side_record() {
        let dir = tempdir().unwrap();
        let (db, record) = paths(&dir);

        let pool = StoreLogic::init(&db, &record, false).unwrap();
        assert!(load_activities(&pool.conn).unwrap().is_empty());
        assert_eq!(fs::read_to_string(&record).unwrap(), db);
    }

    #[test]
    fn second_init_without_overwrite_fails() {
        let dir = tempdir().unwrap();
        let (db, record) = paths(&dir);
        StoreLogic::init(&db, &record, false).unwrap();

        assert!(matches!(
            StoreLogic::init(&db, &record, false),
            Err(AppError::AlreadyExists(p)) if p == db
        ));
    }

    #[test]
    fn existing_side_record_blocks_a_new_store() {
        let dir = tempdir().unwrap();
        let (db, record) = paths(&dir);
        fs::write(&record, "other.db").unwrap();

        assert!(matches!(
            StoreLogic::init(&db, &record, false),
            Err(AppError::AlreadyExists(_))
        ));
        // nothing was created and the record is untouched
        assert!(!Path::new(&db).exists());
        assert_eq!(fs::read_to_string(&record).unwrap(), "other.db");
    }

    #[test]
    fn overwrite_yields_an_empty_store_again() {
        let dir = tempdir().unwrap();
        let (db, record) = paths(&dir);
        let pool = StoreLogic::init(&db, &record, false).unwrap();
        insert_activity(&pool.conn, "writing").unwrap();
        drop(pool);

        let pool = StoreLogic::init(&db, &record, true).unwrap();
        assert!(load_activities(&pool.conn).unwrap().is_empty());
        assert_eq!(fs::read_to_string(&record).unwrap(), db);
    }

    #[test]
    fn failed_side_record_write_removes_the_new_store() {
        let dir = tempdir().unwrap();
        let (db, _) = paths(&dir);
        let record = dir.path().join("missing-dir").join(".env");

        assert!(matches!(
            StoreLogic::init(&db, &record, false),
            Err(AppError::Io(_))
        ));
        assert!(!Path::new(&db).exists());

        // a later init with a usable side-record succeeds without --overwrite
        let (_, good_record) = paths(&dir);
        StoreLogic::init(&db, &good_record, false).unwrap();
    }

    #[test]
    fn empty_location_is_rejected() {
        let dir = tempdir().unwrap();
        let (_, record) = paths(&dir);
        assert!(matches!(
            StoreLogic::init("  ", &record, true),
            Err(AppError::InvalidLocation(_))
        ));
        assert!(!record.exists());
    }
}
