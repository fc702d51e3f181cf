//! Resolution of the data root and the locations derived from it.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Overrides the application data root.
pub const DATA_DIR_ENV: &str = "PLANTSTORE_DATA_DIR";

/// Overrides the `SQLite` database file location.
pub const DB_PATH_ENV: &str = "PLANTSTORE_DB_PATH";

/// Overrides the uploaded images directory.
pub const UPLOADS_DIR_ENV: &str = "PLANTSTORE_UPLOADS_DIR";

fn env_path(key: &str) -> Result<Option<PathBuf>, PathError> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Err(PathError::EmptyPath),
        Ok(value) => Ok(Some(PathBuf::from(value.trim()))),
        Err(_) => Ok(None),
    }
}

/// Get the root directory for application data (database, uploads).
///
/// Resolution order:
/// 1. `PLANTSTORE_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/plantstore`)
///
/// Nothing is created here; see [`super::ensure_directory`].
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Some(path) = env_path(DATA_DIR_ENV)? {
        return Ok(path);
    }

    let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
    Ok(data_dir.join("plantstore"))
}

/// Get the path to the plantstore database file.
///
/// `PLANTSTORE_DB_PATH` wins; otherwise `<data root>/data/plantstore.db`.
pub fn database_path() -> Result<PathBuf, PathError> {
    if let Some(path) = env_path(DB_PATH_ENV)? {
        return Ok(path);
    }
    Ok(data_root()?.join("data").join("plantstore.db"))
}

/// Get the directory uploaded images are written to.
///
/// `PLANTSTORE_UPLOADS_DIR` wins; otherwise `<data root>/uploads`.
pub fn uploads_dir() -> Result<PathBuf, PathError> {
    if let Some(path) = env_path(UPLOADS_DIR_ENV)? {
        return Ok(path);
    }
    Ok(data_root()?.join("uploads"))
}
