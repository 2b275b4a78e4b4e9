use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Default name of the side-record naming the active database.
pub const DEFAULT_SIDE_RECORD: &str = ".env";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// File recording which database `timer init` created last.
    #[serde(default = "default_side_record")]
    pub side_record: String,

    /// Explicit database path; when set the side-record is not read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

fn default_side_record() -> String {
    DEFAULT_SIDE_RECORD.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            side_record: default_side_record(),
            database: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("timer")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".timer")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timer.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn side_record_path(&self) -> PathBuf {
        expand_tilde(&self.side_record)
    }

    /// Resolve the database path: an explicit path wins, otherwise the
    /// side-record written by `init` is read.
    pub fn resolve_database(&self) -> AppResult<String> {
        if let Some(db) = &self.database {
            return Ok(db.clone());
        }

        let record = self.side_record_path();
        let content = fs::read_to_string(&record).map_err(|_| {
            AppError::StoreNotFound(format!("side-record '{}' is missing", record.display()))
        })?;

        let location = content.trim_end_matches(['\r', '\n']);
        if location.is_empty() {
            return Err(AppError::StoreNotFound(format!(
                "side-record '{}' is empty",
                record.display()
            )));
        }

        Ok(location.to_string())
    }
}
