//! Main commands enum.
//!
//! This module defines the available commands for the CLI tool.

use clap::Subcommand;

use plantstore_axum::bootstrap::{DEFAULT_CORS_ORIGINS, DEFAULT_PORT};

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Comma-separated list of allowed CORS origins, or `*` for any
        #[arg(long, env = "CORS_ORIGINS", default_value = DEFAULT_CORS_ORIGINS)]
        cors_origins: String,
    },

    /// Insert the starter plant catalog
    Seed {
        /// Seed even if the catalog already has plants
        #[arg(short, long)]
        force: bool,
    },

    /// Rewrite stored image paths that lack a leading `/`
    FixImagePaths,

    /// List plants in the catalog
    List {
        /// Match against name or categories (substring, case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
        /// Require this exact category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show resolved paths for the database and uploads directory
    Paths,
}
