//! Path utilities for plantstore data directories.
//!
//! This module provides the canonical path resolution for all plantstore components:
//! - Application data root
//! - Database location
//! - Uploaded images directory
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - Environment variables override every default
//! - No interactive/terminal I/O - adapters handle user prompts separately

mod ensure;
mod error;
mod platform;

#[cfg(test)]
mod test_utils;

// Error type
pub use error::PathError;

// Roots and well-known locations
pub use platform::{
    DATA_DIR_ENV, DB_PATH_ENV, UPLOADS_DIR_ENV, data_root, database_path, uploads_dir,
};

// Directory operations
pub use ensure::{DirectoryCreationStrategy, ensure_directory, verify_writable};
