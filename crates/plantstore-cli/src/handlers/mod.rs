//! Command handlers.
//!
//! Each handler takes the composed context and delegates to `PlantService`.

pub mod fix_image_paths;
pub mod list;
pub mod paths;
pub mod seed;
pub mod serve;
