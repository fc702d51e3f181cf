//! Plant handlers - catalog CRUD over HTTP.

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, Path, Query, State};
use serde::{Deserialize, Serialize};

use plantstore_core::{Plant, PlantId};

use crate::error::HttpError;
use crate::multipart::read_plant_form;
use crate::state::AppState;

/// Query parameters for `GET /plants`.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub category: Option<String>,
}

/// Body returned by a successful delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// List plants, optionally filtered.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Plant>>, HttpError> {
    let plants = state
        .plants
        .list(params.search.as_deref(), params.category.as_deref())
        .await?;
    Ok(Json(plants))
}

/// Get a single plant by ID.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Plant>, HttpError> {
    Ok(Json(state.plants.get(&PlantId::from(id)).await?))
}

/// Create a plant from a multipart form.
pub async fn create(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Plant>, HttpError> {
    let form = read_plant_form(multipart, state.max_upload_bytes).await?;
    Ok(Json(state.plants.create(form.fields, form.image).await?))
}

/// Update a plant. Only the supplied fields change.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Plant>, HttpError> {
    let form = read_plant_form(multipart, state.max_upload_bytes).await?;
    let plant = state
        .plants
        .update(&PlantId::from(id), form.fields, form.image)
        .await?;
    Ok(Json(plant))
}

/// Delete a plant and its image.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, HttpError> {
    let message = state.plants.delete(&PlantId::from(id)).await?;
    Ok(Json(MessageResponse {
        message: message.to_string(),
    }))
}
