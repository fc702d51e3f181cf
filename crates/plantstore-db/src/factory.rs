//! Composition utilities for building `PlantService` with `SQLite` backends.
//!
//! This module provides factory functions for wiring up the application
//! with `SQLite` repositories. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use plantstore_core::ports::ImageStore;
use plantstore_core::{PlantService, Repos};

use crate::repositories::SqlitePlantRepository;

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build the `Repos` bundle from a pool and an image store.
    ///
    /// The image store is supplied by the caller since file storage lives
    /// outside this crate.
    pub fn build_repos(pool: SqlitePool, images: Arc<dyn ImageStore>) -> Repos {
        Repos::new(Arc::new(SqlitePlantRepository::new(pool)), images)
    }

    /// Build a complete `PlantService` from a pool and an image store.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let repos = CoreFactory::build_repos(pool, images);
    /// let service = PlantService::new(repos);
    /// ```
    pub fn build_plant_service(pool: SqlitePool, images: Arc<dyn ImageStore>) -> PlantService {
        PlantService::new(Self::build_repos(pool, images))
    }
}

/// Test database helper for repository tests.
///
/// Provides an in-memory `SQLite` database with the production schema applied.
#[cfg(test)]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(test)]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a plant repository using this test database.
    pub fn plant_repository(&self) -> SqlitePlantRepository {
        SqlitePlantRepository::new(self.pool.clone())
    }
}
