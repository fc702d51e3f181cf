//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - No filesystem layout details (the uploads directory belongs to the adapter)
//! - Repository traits are minimal and CRUD-focused

pub mod image_store;
pub mod plant_repository;

use std::sync::Arc;
use thiserror::Error;

pub use image_store::ImageStore;
pub use plant_repository::PlantRepository;

/// Container for the adapters a `PlantService` is built from.
///
/// Lives in `plantstore-core` so composition roots can hand it around
/// without depending on concrete implementations.
#[derive(Clone)]
pub struct Repos {
    /// Plant persistence.
    pub plants: Arc<dyn PlantRepository>,
    /// Uploaded image storage.
    pub images: Arc<dyn ImageStore>,
}

impl Repos {
    pub fn new(plants: Arc<dyn PlantRepository>, images: Arc<dyn ImageStore>) -> Self {
        Self { plants, images }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, connection, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A constraint was violated (e.g., CHECK constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Errors raised by an [`ImageStore`].
#[derive(Debug, Error)]
pub enum StorageError {
    /// The reference does not point inside the uploads area.
    #[error("Invalid image reference: {0}")]
    InvalidReference(String),

    /// Filesystem I/O failed.
    #[error("I/O error on {path}: {reason}")]
    Io { path: String, reason: String },
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes,
/// CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Malformed or missing input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The target record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(RepositoryError),

    /// Image storage failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<RepositoryError> for CoreError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(what) => Self::NotFound(what),
            other => Self::Repository(other),
        }
    }
}
