//! Plant domain types.
//!
//! These types represent catalog records, independent of any
//! infrastructure concerns (database, filesystem, etc.).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::image::ImageRef;

/// Opaque identifier of a persisted plant.
///
/// Assigned by the store on creation and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlantId(String);

impl PlantId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PlantId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PlantId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Plant Types
// ─────────────────────────────────────────────────────────────────────────────

/// A plant that exists in the catalog with a store-assigned ID.
///
/// Serialized with the field names the storefront expects
/// (`_id`, `imageUrl`, camelCase timestamps).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    /// Store-assigned identifier.
    #[serde(rename = "_id")]
    pub id: PlantId,
    /// Display name, trimmed and never empty.
    pub name: String,
    /// Price, never negative.
    pub price: f64,
    /// Lowercase category tokens in input order.
    pub categories: Vec<String>,
    /// Whether the plant is currently in stock.
    pub availability: bool,
    /// Root-relative reference to the plant's image, if one was uploaded.
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<ImageRef>,
    /// UTC timestamp of creation.
    pub created_at: DateTime<Utc>,
    /// UTC timestamp of the last write.
    pub updated_at: DateTime<Utc>,
}

/// A plant to be inserted into the catalog (no ID yet).
///
/// After insertion, the repository returns a `Plant` with the assigned ID
/// and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPlant {
    pub name: String,
    pub price: f64,
    pub categories: Vec<String>,
    pub availability: bool,
    pub image_ref: Option<ImageRef>,
}

impl NewPlant {
    /// Create a new available plant without an image.
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64, categories: Vec<String>) -> Self {
        Self {
            name: name.into(),
            price,
            categories,
            availability: true,
            image_ref: None,
        }
    }
}

/// Partial update of a plant's scalar fields.
///
/// `None` means "leave unchanged". The image reference is not part of the
/// patch; it only changes through an upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlantPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub categories: Option<Vec<String>>,
    pub availability: Option<bool>,
}
