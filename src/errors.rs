//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("The file '{0}' already exists. Set [-o, --overwrite] to overwrite.")]
    AlreadyExists(String),

    #[error("No timer database found: {0}. Run `timer init <location>` first.")]
    StoreNotFound(String),

    #[error("Invalid database location: {0}")]
    InvalidLocation(String),

    // ---------------------------
    // Activity / session errors
    // ---------------------------
    #[error(
        "The activity '{name}' does not yet exist in the database. \
         Choose one of the following stored activities: {known:?} \
         or add a new one using [-n, --new]."
    )]
    UnknownActivity { name: String, known: Vec<String> },

    #[error(
        "The activity '{0}' already exists in the database. \
         The argument [-n, --new] is not required."
    )]
    ActivityAlreadyExists(String),

    #[error("Interval #{0} is not open (already stopped or missing)")]
    IntervalNotOpen(i64),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Failed to wait for the interrupt signal: {0}")]
    Signal(String),

    // ---------------------------
    // Output
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,
}

pub type AppResult<T> = Result<T, AppError>;
