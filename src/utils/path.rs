//! Path utilities: expand ~ and check whether something already occupies a path.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// True when a file, directory or dangling symlink sits at `path`.
pub fn is_occupied(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}
