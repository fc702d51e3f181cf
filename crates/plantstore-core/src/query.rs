//! Catalog query construction.
//!
//! Turns the storefront's free-text search and category filter into a
//! [`PlantFilter`]. Store adapters translate the filter into their own query
//! language; [`PlantFilter::matches`] is the reference semantics they must
//! agree with.

use serde::{Deserialize, Serialize};

use crate::domain::Plant;

/// Predicate over plant records.
///
/// Both terms are stored already lowercased. An empty filter matches every
/// record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantFilter {
    /// Case-insensitive substring of the name or of any category.
    pub search: Option<String>,
    /// Exact (lowercase) category membership.
    pub category: Option<String>,
}

/// Build a filter from optional search and category terms.
///
/// Empty terms are ignored. Terms are used as given, whitespace included.
/// When both are present they combine with AND.
pub fn build_query(search: Option<&str>, category: Option<&str>) -> PlantFilter {
    PlantFilter {
        search: normalize_term(search),
        category: normalize_term(category),
    }
}

fn normalize_term(term: Option<&str>) -> Option<String> {
    term.filter(|t| !t.is_empty()).map(fold_case)
}

/// Lowercase `text` one character at a time.
///
/// Unlike [`str::to_lowercase`] this ignores the word-final sigma rule, so a
/// folded term is always a substring of the folded text it was cut from.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

impl PlantFilter {
    /// Evaluate the filter against a record.
    pub fn matches(&self, plant: &Plant) -> bool {
        if let Some(search) = &self.search {
            let in_name = fold_case(&plant.name).contains(search.as_str());
            let in_categories = plant
                .categories
                .iter()
                .any(|c| fold_case(c).contains(search.as_str()));
            if !in_name && !in_categories {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if !plant.categories.iter().any(|c| c == category) {
                return false;
            }
        }

        true
    }
}
