//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. All concrete implementations are instantiated here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;

use plantstore_core::PlantService;
use plantstore_core::paths::{
    DirectoryCreationStrategy, database_path, ensure_directory, uploads_dir,
};
use plantstore_db::{CoreFactory, SqlitePool, close_database, setup_database};
use plantstore_files::FsImageStore;

/// Port used when none is configured.
pub const DEFAULT_PORT: u16 = 5000;

/// Largest accepted image upload (5 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Origins allowed when none are configured (the frontend dev server).
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000";

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

impl CorsConfig {
    /// Parse a comma-separated origin list. `*` allows every origin.
    pub fn from_origin_list(raw: &str) -> Self {
        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            Self::AllowAll
        } else {
            Self::AllowOrigins(origins)
        }
    }
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// `SQLite` database file.
    pub database_path: PathBuf,
    /// Directory holding uploaded images, served under `/uploads`.
    pub uploads_dir: PathBuf,
    /// Largest accepted image upload in bytes.
    pub max_upload_bytes: usize,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with default paths.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self {
            port: DEFAULT_PORT,
            database_path: database_path()?,
            uploads_dir: uploads_dir()?,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            cors: CorsConfig::from_origin_list(DEFAULT_CORS_ORIGINS),
        })
    }

    /// Set the listening port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Replace the CORS configuration.
    #[must_use]
    pub fn with_cors(mut self, cors: CorsConfig) -> Self {
        self.cors = cors;
        self
    }
}

/// Application context for the Axum adapter.
///
/// This struct holds all initialized services for the web server.
pub struct AxumContext {
    /// The catalog service.
    pub plants: Arc<PlantService>,
    /// Database pool, closed on shutdown.
    pub pool: SqlitePool,
    /// Directory served under `/uploads`.
    pub uploads_dir: PathBuf,
    /// Largest accepted image upload in bytes.
    pub max_upload_bytes: usize,
}

/// Bootstrap the Axum server with all services.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    // Log resolved paths at startup for diagnostics
    info!(
        target: "plantstore.paths",
        database_path = %config.database_path.display(),
        uploads_dir = %config.uploads_dir.display(),
        "Axum bootstrap resolved paths"
    );

    // 1. Uploads directory must exist before ServeDir and the first write
    ensure_directory(&config.uploads_dir, DirectoryCreationStrategy::AutoCreate)?;

    // 2. Create database pool with full schema setup
    let pool = setup_database(&config.database_path).await?;

    // 3. Wire repositories and the image store into the service
    let images = Arc::new(FsImageStore::new(&config.uploads_dir));
    let plants = Arc::new(CoreFactory::build_plant_service(pool.clone(), images));

    Ok(AxumContext {
        plants,
        pool,
        uploads_dir: config.uploads_dir.clone(),
        max_upload_bytes: config.max_upload_bytes,
    })
}

/// Start the web server on the configured port.
///
/// Runs until Ctrl-C or SIGTERM, then drains in-flight requests and closes
/// the database pool.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config).await?;
    let pool = ctx.pool.clone();

    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("plantstore API listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down");
    close_database(&pool).await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
