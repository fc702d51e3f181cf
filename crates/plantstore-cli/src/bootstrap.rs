//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter: the database pool and repository (via plantstore-db)
//! and the image store (via plantstore-files). Command handlers receive the
//! composed `PlantService` through `CliContext`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use plantstore_core::PlantService;
use plantstore_core::paths::{database_path, uploads_dir};
use plantstore_db::{CoreFactory, SqlitePool, close_database, setup_database};
use plantstore_files::FsImageStore;

/// Fully composed application context for CLI commands.
pub struct CliContext {
    plants: PlantService,
    pool: SqlitePool,
    database_path: PathBuf,
}

impl CliContext {
    /// The catalog service.
    pub const fn plants(&self) -> &PlantService {
        &self.plants
    }

    /// Database file this context is connected to.
    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    /// Close the database pool.
    pub async fn close(self) {
        close_database(&self.pool).await;
    }
}

/// Bootstrap the CLI context from the resolved default paths.
pub async fn bootstrap() -> Result<CliContext> {
    bootstrap_at(&database_path()?, &uploads_dir()?).await
}

/// Bootstrap the CLI context against explicit paths.
pub async fn bootstrap_at(db_path: &Path, uploads: &Path) -> Result<CliContext> {
    tracing::debug!(
        target: "plantstore.paths",
        database_path = %db_path.display(),
        uploads_dir = %uploads.display(),
        "CLI bootstrap resolved paths"
    );

    let pool = setup_database(db_path).await?;
    let images = Arc::new(FsImageStore::new(uploads));
    let plants = CoreFactory::build_plant_service(pool.clone(), images);

    Ok(CliContext {
        plants,
        pool,
        database_path: db_path.to_path_buf(),
    })
}
