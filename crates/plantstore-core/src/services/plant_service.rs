//! Plant service - catalog CRUD with image lifecycle handling.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{ImageRef, NewPlant, Plant, PlantFields, PlantId, UploadedImage};
use crate::images::{ImageNamer, stale_on_delete};
use crate::ports::{CoreError, ImageStore, PlantRepository, Repos};
use crate::query::build_query;

/// Message returned by a successful delete.
pub const DELETE_CONFIRMATION: &str = "Plant deleted";

/// Service for catalog operations.
///
/// Validates input, resolves image references, performs the store write and
/// then removes any image file that is no longer referenced. File removal is
/// best-effort: failures are logged and never fail the operation.
pub struct PlantService {
    repo: Arc<dyn PlantRepository>,
    images: Arc<dyn ImageStore>,
    namer: ImageNamer,
}

impl PlantService {
    /// Create a new plant service from the injected adapters.
    pub fn new(repos: Repos) -> Self {
        Self {
            repo: repos.plants,
            images: repos.images,
            namer: ImageNamer::new(),
        }
    }

    /// List plants matching the optional search and category terms,
    /// newest first.
    pub async fn list(
        &self,
        search: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<Plant>, CoreError> {
        let filter = build_query(search, category);
        debug!(target: "plantstore.catalog", ?filter, "Listing plants");
        Ok(self.repo.list(&filter).await?)
    }

    /// Get a single plant.
    pub async fn get(&self, id: &PlantId) -> Result<Plant, CoreError> {
        Ok(self.repo.get_by_id(id).await?)
    }

    /// Create a plant from form fields and an optional image.
    pub async fn create(
        &self,
        fields: PlantFields,
        upload: Option<UploadedImage>,
    ) -> Result<Plant, CoreError> {
        let mut new_plant = fields.into_new_plant()?;

        let image_ref = self.namer.resolve_new_image(upload.as_ref());
        if let (Some(image), Some(upload)) = (&image_ref, &upload) {
            self.images.save(image, &upload.bytes).await?;
        }
        new_plant.image_ref.clone_from(&image_ref);

        match self.repo.insert(&new_plant).await {
            Ok(plant) => {
                info!(
                    target: "plantstore.catalog",
                    id = %plant.id,
                    name = %plant.name,
                    image = ?plant.image_ref.as_ref().map(ImageRef::as_str),
                    "Plant created"
                );
                Ok(plant)
            }
            Err(e) => {
                // The uploaded file is referenced by nothing.
                if let Some(image) = &image_ref {
                    self.discard(image).await;
                }
                Err(e.into())
            }
        }
    }

    /// Apply a partial update and an optional image replacement.
    ///
    /// Fails with `NotFound` before touching the store or the uploads area
    /// when `id` is unknown. Only the supplied fields are written, so a
    /// concurrent update of other fields is preserved.
    pub async fn update(
        &self,
        id: &PlantId,
        fields: PlantFields,
        upload: Option<UploadedImage>,
    ) -> Result<Plant, CoreError> {
        let current = self.repo.get_by_id(id).await?;
        let patch = fields.into_patch()?;

        let transition = self
            .namer
            .resolve_updated_image(current.image_ref.as_ref(), upload.as_ref());
        if let (Some(image), Some(upload)) = (&transition.new_ref, &upload) {
            self.images.save(image, &upload.bytes).await?;
        }

        let updated = match self
            .repo
            .update(id, &patch, transition.new_ref.as_ref())
            .await
        {
            Ok(updated) => updated,
            Err(e) => {
                if let Some(image) = &transition.new_ref {
                    self.discard(image).await;
                }
                return Err(e.into());
            }
        };

        if let Some(stale) = &transition.stale_ref {
            self.discard(stale).await;
        }

        info!(target: "plantstore.catalog", id = %updated.id, "Plant updated");
        Ok(updated)
    }

    /// Delete a plant and its image file.
    pub async fn delete(&self, id: &PlantId) -> Result<&'static str, CoreError> {
        let removed = self.repo.delete(id).await?;
        if let Some(stale) = stale_on_delete(&removed) {
            self.discard(&stale).await;
        }
        info!(target: "plantstore.catalog", id = %removed.id, "Plant deleted");
        Ok(DELETE_CONFIRMATION)
    }

    /// Insert starter records. Returns how many were inserted.
    pub async fn seed(&self, plants: Vec<NewPlant>) -> Result<usize, CoreError> {
        let mut inserted = 0;
        for plant in &plants {
            self.repo.insert(plant).await?;
            inserted += 1;
        }
        info!(target: "plantstore.catalog", inserted, "Seeded catalog");
        Ok(inserted)
    }

    /// Rewrite legacy image references stored without a leading `/`.
    pub async fn normalize_stored_image_refs(&self) -> Result<u64, CoreError> {
        let fixed = self.repo.normalize_image_refs().await?;
        info!(target: "plantstore.catalog", fixed, "Normalized stored image references");
        Ok(fixed)
    }

    async fn discard(&self, image: &ImageRef) {
        if let Err(e) = self.images.remove(image).await {
            warn!(
                target: "plantstore.images",
                image = %image,
                error = %e,
                "Failed to remove stale image"
            );
        }
    }
}
