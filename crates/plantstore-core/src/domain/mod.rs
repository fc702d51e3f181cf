//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, filesystem, HTTP).
//!
//! # Structure
//!
//! - `plant` - Plant record types (`Plant`, `NewPlant`, `PlantPatch`)
//! - `image` - Image references and uploaded image payloads
//! - `input` - Raw form input and its validation into domain types

mod image;
mod input;
mod plant;

pub use image::{ImageRef, UploadedImage};
pub use input::{PlantFields, parse_availability, parse_categories, parse_price};
pub use plant::{NewPlant, Plant, PlantId, PlantPatch};
