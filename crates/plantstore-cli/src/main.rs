//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers which delegate to `PlantService`.
//! `serve` bootstraps through plantstore-axum; every other command uses
//! `CliContext`.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use plantstore_cli::{Cli, Commands, bootstrap, handlers};

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before parsing so clap `env` fallbacks see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Serve { port, cors_origins } => {
            handlers::serve::execute(port, &cors_origins).await?;
        }
        Commands::Paths => {
            handlers::paths::execute()?;
        }
        command => {
            let ctx = bootstrap().await?;
            let result = match command {
                Commands::Seed { force } => handlers::seed::execute(&ctx, force).await.map(drop),
                Commands::FixImagePaths => handlers::fix_image_paths::execute(&ctx).await.map(drop),
                Commands::List { search, category } => {
                    handlers::list::execute(&ctx, search.as_deref(), category.as_deref())
                        .await
                        .map(drop)
                }
                Commands::Serve { .. } | Commands::Paths => Ok(()),
            };
            ctx.close().await;
            result?;
        }
    }

    Ok(())
}
