//! Serve command handler.

use anyhow::Result;
use plantstore_axum::{CorsConfig, ServerConfig, start_server};

/// Run the HTTP API until shutdown.
pub async fn execute(port: u16, cors_origins: &str) -> Result<()> {
    let config = ServerConfig::with_defaults()?
        .with_port(port)
        .with_cors(CorsConfig::from_origin_list(cors_origins));

    start_server(config).await
}
