//! Database setup and initialization.
//!
//! This module provides the `setup_database()` function for initializing
//! the `SQLite` database with full schema. Entry points call this with the
//! resolved database path and own the returned pool until shutdown.

use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::path::Path;

/// Sets up the `SQLite` database connection and ensures the schema exists.
///
/// This function:
/// 1. Creates the parent directory of `db_path` if needed
/// 2. Opens (or creates) the database file
/// 3. Creates all tables and indexes
///
/// # Example
///
/// ```rust,no_run
/// use plantstore_db::setup_database;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let pool = setup_database(Path::new("/var/lib/plantstore/plantstore.db")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true),
    )
    .await?;

    create_schema(&pool).await?;

    tracing::debug!(target: "plantstore.db", path = %db_path.display(), "Database ready");
    Ok(pool)
}

/// Close the pool, waiting for in-flight queries to finish.
pub async fn close_database(pool: &SqlitePool) {
    pool.close().await;
    tracing::debug!(target: "plantstore.db", "Database closed");
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// The pool holds a single connection that never expires, since every
/// `SQLite` in-memory connection is its own database.
#[cfg(test)]
pub async fn setup_test_database() -> Result<SqlitePool> {
    use sqlx::sqlite::SqlitePoolOptions;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// Creates the complete database schema.
///
/// Safe to call multiple times as all statements use IF NOT EXISTS.
async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS plants (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            search_name TEXT NOT NULL,
            price REAL NOT NULL CHECK (price >= 0),
            categories TEXT NOT NULL DEFAULT '[]',
            availability INTEGER NOT NULL DEFAULT 1,
            image_ref TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Listing is always newest first
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_plants_created_at ON plants(created_at)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_plants_search_name ON plants(search_name)")
        .execute(pool)
        .await?;

    Ok(())
}
