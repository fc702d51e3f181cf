#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod images;
pub mod paths;
pub mod ports;
pub mod query;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    ImageRef, NewPlant, Plant, PlantFields, PlantId, PlantPatch, UploadedImage, parse_categories,
};
pub use images::{ImageNamer, ImageTransition, UPLOADS_PREFIX, sanitize_filename, stale_on_delete};
pub use ports::{CoreError, ImageStore, PlantRepository, Repos, RepositoryError, StorageError};
pub use query::{PlantFilter, build_query, fold_case};
pub use services::{DELETE_CONFIRMATION, PlantService};

// Re-export path utilities
pub use paths::{
    DirectoryCreationStrategy, PathError, data_root, database_path, ensure_directory,
    uploads_dir, verify_writable,
};
