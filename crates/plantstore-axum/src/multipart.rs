//! Decoding of plant create/update forms.
//!
//! Both `POST /plants` and `PUT /plants/{id}` accept `multipart/form-data`
//! with text fields and an optional `image` file part.

use axum::extract::Multipart;
use axum::extract::multipart::{Field, MultipartError, MultipartRejection};
use plantstore_core::{PlantFields, UploadedImage};

use crate::error::HttpError;

/// Form part carrying the image file.
pub const IMAGE_FIELD: &str = "image";

/// A decoded plant form.
#[derive(Debug, Default)]
pub struct PlantForm {
    pub fields: PlantFields,
    /// `None` when no image part was sent, or the part was empty.
    pub image: Option<UploadedImage>,
}

fn bad_multipart(e: &MultipartError) -> HttpError {
    HttpError::BadRequest(format!("Invalid form data: {}", e.body_text()))
}

async fn read_text(field: Field<'_>) -> Result<String, HttpError> {
    field.text().await.map_err(|e| bad_multipart(&e))
}

/// Read every part of a plant form.
///
/// Unknown parts are ignored. An image larger than `max_image_bytes`
/// is rejected.
pub async fn read_plant_form(
    multipart: Result<Multipart, MultipartRejection>,
    max_image_bytes: usize,
) -> Result<PlantForm, HttpError> {
    let mut multipart = multipart.map_err(|e| HttpError::BadRequest(e.body_text()))?;
    let mut form = PlantForm::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| bad_multipart(&e))? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "name" => form.fields.name = Some(read_text(field).await?),
            "price" => form.fields.price = Some(read_text(field).await?),
            "categories" => form.fields.categories = Some(read_text(field).await?),
            "availability" => form.fields.availability = Some(read_text(field).await?),
            IMAGE_FIELD => form.image = read_image(field, max_image_bytes).await?,
            _ => {}
        }
    }

    Ok(form)
}

async fn read_image(
    field: Field<'_>,
    max_image_bytes: usize,
) -> Result<Option<UploadedImage>, HttpError> {
    let original_name = field.file_name().unwrap_or_default().to_string();
    let content_type = field.content_type().map(str::to_string);
    let bytes = field.bytes().await.map_err(|e| bad_multipart(&e))?;

    // Browsers send an empty part when the file input is left blank
    if bytes.is_empty() && original_name.is_empty() {
        return Ok(None);
    }
    if bytes.len() > max_image_bytes {
        return Err(HttpError::BadRequest(format!(
            "Image exceeds the {max_image_bytes} byte upload limit"
        )));
    }

    Ok(Some(UploadedImage {
        original_name,
        content_type,
        bytes: bytes.to_vec(),
    }))
}
