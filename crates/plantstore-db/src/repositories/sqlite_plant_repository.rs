//! `SQLite` implementation of the `PlantRepository` trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use plantstore_core::{
    ImageRef, NewPlant, Plant, PlantFilter, PlantId, PlantPatch, PlantRepository,
    RepositoryError, fold_case,
};

use super::filter_sql::push_filter;
use super::row_mappers::{PLANT_SELECT_COLUMNS, format_datetime, map_write_error, row_to_plant};

fn categories_json(categories: &[String]) -> Result<String, RepositoryError> {
    serde_json::to_string(categories).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

/// `SQLite` implementation of the `PlantRepository` trait.
///
/// Assigns UUID identifiers and maintains `created_at` / `updated_at`.
pub struct SqlitePlantRepository {
    pool: SqlitePool,
}

impl SqlitePlantRepository {
    /// Create a new `SQLite` plant repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool (for testing only).
    #[cfg(test)]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl PlantRepository for SqlitePlantRepository {
    async fn list(&self, filter: &PlantFilter) -> Result<Vec<Plant>, RepositoryError> {
        let mut qb =
            QueryBuilder::<Sqlite>::new(format!("SELECT {PLANT_SELECT_COLUMNS} FROM plants"));
        push_filter(&mut qb, filter);
        qb.push(" ORDER BY created_at DESC, rowid DESC");

        let rows = qb
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_plant).collect()
    }

    async fn get_by_id(&self, id: &PlantId) -> Result<Plant, RepositoryError> {
        let query = format!("SELECT {PLANT_SELECT_COLUMNS} FROM plants WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| RepositoryError::NotFound(format!("Plant with ID {id}")))?;

        row_to_plant(&row)
    }

    async fn insert(&self, plant: &NewPlant) -> Result<Plant, RepositoryError> {
        let id = PlantId::generate();
        let now = format_datetime(&Utc::now());

        sqlx::query(
            r#"INSERT INTO plants (
                id, name, search_name, price, categories, availability,
                image_ref, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(id.as_str())
        .bind(&plant.name)
        .bind(fold_case(&plant.name))
        .bind(plant.price)
        .bind(categories_json(&plant.categories)?)
        .bind(plant.availability)
        .bind(plant.image_ref.as_ref().map(ImageRef::as_str))
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        self.get_by_id(&id).await
    }

    async fn update(
        &self,
        id: &PlantId,
        patch: &PlantPatch,
        image: Option<&ImageRef>,
    ) -> Result<Plant, RepositoryError> {
        // Absent fields bind NULL and keep the stored value
        let query = format!(
            "UPDATE plants SET \
                name = COALESCE(?, name), \
                search_name = COALESCE(?, search_name), \
                price = COALESCE(?, price), \
                categories = COALESCE(?, categories), \
                availability = COALESCE(?, availability), \
                image_ref = COALESCE(?, image_ref), \
                updated_at = ? \
             WHERE id = ? RETURNING {PLANT_SELECT_COLUMNS}"
        );
        let categories = patch.categories.as_deref().map(categories_json).transpose()?;

        let row = sqlx::query(&query)
            .bind(patch.name.as_deref())
            .bind(patch.name.as_deref().map(fold_case))
            .bind(patch.price)
            .bind(categories)
            .bind(patch.availability)
            .bind(image.map(ImageRef::as_str))
            .bind(format_datetime(&Utc::now()))
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_write_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Plant with ID {id}")))?;

        row_to_plant(&row)
    }

    async fn delete(&self, id: &PlantId) -> Result<Plant, RepositoryError> {
        let query = format!("DELETE FROM plants WHERE id = ? RETURNING {PLANT_SELECT_COLUMNS}");

        let row = sqlx::query(&query)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| RepositoryError::NotFound(format!("Plant with ID {id}")))?;

        row_to_plant(&row)
    }

    async fn normalize_image_refs(&self) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            "UPDATE plants SET image_ref = '/' || image_ref \
             WHERE image_ref IS NOT NULL AND image_ref <> '' AND substr(image_ref, 1, 1) <> '/'",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(result.rows_affected())
    }
}
