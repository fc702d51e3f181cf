#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export repository implementations
pub use repositories::SqlitePlantRepository;

// Re-export setup functions for convenient access
pub use setup::{close_database, setup_database};

// Pool type handed to composition roots
pub use sqlx::SqlitePool;

// Only linked for its `bundled` feature
use libsqlite3_sys as _;
