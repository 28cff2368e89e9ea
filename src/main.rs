//! albumd - minimal album catalog HTTP service
//!
//! Startup sequence: resolve configuration, connect to the database, ensure
//! the schema, then serve. Connection or configuration failure is fatal.

use std::path::PathBuf;

use albumd::{build_router, config::Config, db, AppState};
use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "albumd", about = "Album catalog HTTP service", version)]
struct Args {
    /// Database connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Listen address (host:port)
    #[arg(long, env = "ALBUMD_BIND")]
    bind: Option<String>,

    /// Path to an optional TOML config file
    #[arg(long, default_value = "albumd.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting albumd v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let config = Config::resolve(args.database_url, args.bind, &args.config)?;
    info!("Database: {}", config.database_url);

    let pool = match db::connect(&config.database_url).await {
        Ok(pool) => {
            info!("✓ Connected to database");
            pool
        }
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    // Idempotent; additive column changes only
    db::ensure_schema(&pool).await?;

    let state = AppState::new(pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    info!("albumd listening on http://{}", config.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
