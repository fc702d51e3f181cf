//! Paths command handler.

use anyhow::Result;
use plantstore_core::paths::{data_root, database_path, uploads_dir};

/// Print the resolved data, database and uploads locations.
pub fn execute() -> Result<()> {
    println!("Data root:   {}", data_root()?.display());
    println!("Database:    {}", database_path()?.display());
    println!("Uploads dir: {}", uploads_dir()?.display());
    Ok(())
}
