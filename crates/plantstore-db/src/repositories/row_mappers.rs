//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, SecondsFormat, Utc};
use plantstore_core::{ImageRef, Plant, PlantId, RepositoryError};
use sqlx::Row;

/// Shared SELECT column list for plant queries.
pub const PLANT_SELECT_COLUMNS: &str =
    "id, name, price, categories, availability, image_ref, created_at, updated_at";

/// Format a timestamp for storage.
///
/// Fixed-width RFC 3339 with microseconds, so text order equals time order.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_datetime(column: &str, raw: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Serialization(format!("{column} {raw:?}: {e}")))
}

fn storage(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

/// Parse a database row into a Plant.
///
/// Stored image references are normalized to be root-relative.
pub fn row_to_plant(row: &sqlx::sqlite::SqliteRow) -> Result<Plant, RepositoryError> {
    let categories_json: String = row.try_get("categories").map_err(storage)?;
    let categories: Vec<String> = serde_json::from_str(&categories_json)
        .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

    let image_ref = row
        .try_get::<Option<String>, _>("image_ref")
        .map_err(storage)?
        .filter(|raw| !raw.trim().is_empty())
        .map(ImageRef::new);

    let created_at: String = row.try_get("created_at").map_err(storage)?;
    let updated_at: String = row.try_get("updated_at").map_err(storage)?;

    Ok(Plant {
        id: PlantId::from(row.try_get::<String, _>("id").map_err(storage)?),
        name: row.try_get("name").map_err(storage)?,
        price: row.try_get("price").map_err(storage)?,
        categories,
        availability: row.try_get("availability").map_err(storage)?,
        image_ref,
        created_at: parse_datetime("created_at", &created_at)?,
        updated_at: parse_datetime("updated_at", &updated_at)?,
    })
}

/// Map a sqlx error to the repository error taxonomy.
pub fn map_write_error(e: sqlx::Error) -> RepositoryError {
    if let Some(db) = e.as_database_error() {
        if db.is_check_violation() {
            return RepositoryError::Constraint(db.message().to_string());
        }
    }
    storage(e)
}
