//! Plant repository trait definition.
//!
//! This port defines the interface for plant persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{ImageRef, NewPlant, Plant, PlantId, PlantPatch};
use crate::query::PlantFilter;

/// Repository for plant persistence operations.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - Returned image references are always root-relative
/// - Validation belongs in the service layer, not here
#[async_trait]
pub trait PlantRepository: Send + Sync {
    /// List plants matching `filter`, most recently created first.
    async fn list(&self, filter: &PlantFilter) -> Result<Vec<Plant>, RepositoryError>;

    /// Get a plant by its ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the plant doesn't exist.
    async fn get_by_id(&self, id: &PlantId) -> Result<Plant, RepositoryError>;

    /// Insert a new plant. The store assigns the ID and timestamps.
    async fn insert(&self, plant: &NewPlant) -> Result<Plant, RepositoryError>;

    /// Apply the supplied fields of `patch` (and `image`, when given) to a
    /// stored plant in one atomic write, bumping `updated_at`.
    ///
    /// Fields the patch leaves out keep whatever value is stored at write
    /// time, so concurrent updates of different fields do not clobber each
    /// other. Returns the stored record, or `Err(RepositoryError::NotFound)`.
    async fn update(
        &self,
        id: &PlantId,
        patch: &PlantPatch,
        image: Option<&ImageRef>,
    ) -> Result<Plant, RepositoryError>;

    /// Delete a plant by ID, returning the removed record.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the plant doesn't exist.
    async fn delete(&self, id: &PlantId) -> Result<Plant, RepositoryError>;

    /// Rewrite stored image references that lack the leading `/`.
    ///
    /// Returns the number of rewritten records.
    async fn normalize_image_refs(&self) -> Result<u64, RepositoryError>;
}
