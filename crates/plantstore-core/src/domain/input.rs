//! Raw plant input and its validation.
//!
//! Form submissions arrive as untyped text. Validation lives here, independent
//! of the storage layer, so create/update rules are testable without a store.

use super::plant::{NewPlant, PlantPatch};
use crate::ports::CoreError;
use crate::query::fold_case;

const REQUIRED_FIELDS_MESSAGE: &str = "name, price, categories required";

/// Text fields of a create or update submission.
///
/// `None` means the field was not supplied at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlantFields {
    pub name: Option<String>,
    pub price: Option<String>,
    /// Comma-separated category list.
    pub categories: Option<String>,
    /// Boolean as text (`"true"` / `"false"`).
    pub availability: Option<String>,
}

impl PlantFields {
    /// Validate a create submission.
    ///
    /// Requires a non-empty name, a price, and at least one category.
    /// Availability defaults to `true` when not supplied.
    pub fn into_new_plant(self) -> Result<NewPlant, CoreError> {
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| CoreError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()))?;

        let price = self
            .price
            .as_deref()
            .ok_or_else(|| CoreError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()))?;
        let price = parse_price(price)?;

        let categories = parse_categories(self.categories.as_deref().unwrap_or_default());
        if categories.is_empty() {
            return Err(CoreError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
        }

        Ok(NewPlant {
            name: name.to_string(),
            price,
            categories,
            availability: self.availability.as_deref().is_none_or(parse_availability),
            image_ref: None,
        })
    }

    /// Validate an update submission. Only supplied fields are checked.
    pub fn into_patch(self) -> Result<PlantPatch, CoreError> {
        let name = match self.name {
            Some(name) => {
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    return Err(CoreError::Validation("name cannot be empty".to_string()));
                }
                Some(trimmed.to_string())
            }
            None => None,
        };

        let price = self.price.as_deref().map(parse_price).transpose()?;

        Ok(PlantPatch {
            name,
            price,
            categories: self.categories.as_deref().map(parse_categories),
            availability: self.availability.as_deref().map(parse_availability),
        })
    }
}

/// Split comma-separated text into trimmed, lowercase, non-empty tokens.
///
/// Order is preserved and duplicates are kept.
pub fn parse_categories(text: &str) -> Vec<String> {
    text.split(',')
        .map(|c| fold_case(c.trim()))
        .filter(|c| !c.is_empty())
        .collect()
}

/// Parse a price, rejecting negative and non-finite values.
pub fn parse_price(text: &str) -> Result<f64, CoreError> {
    let invalid = || CoreError::Validation(format!("invalid price: {text:?}"));
    let price: f64 = text.trim().parse().map_err(|_| invalid())?;
    if !price.is_finite() || price < 0.0 {
        return Err(invalid());
    }
    Ok(price)
}

/// Only `"true"` (any case) is true; any other supplied text is false.
pub fn parse_availability(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("true")
}
