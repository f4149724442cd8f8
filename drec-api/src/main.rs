//! drec-api - DreamRecords resource API service
//!
//! Serves the label dashboard's release/artist/label resources over HTTP
//! with SQLite persistence.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use drec_api::{build_router, AppState};
use drec_common::config;

#[derive(Debug, Parser)]
#[command(name = "drec-api", about = "DreamRecords resource API")]
struct Args {
    /// HTTP port to listen on (falls back to DREC_PORT, then the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Data directory (database lives here)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Explicit database path, overriding the data directory default
    #[arg(long)]
    database: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting DreamRecords API (drec-api) v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let data_dir = config::resolve_data_dir(args.data_dir.as_deref());
    config::ensure_data_dir(&data_dir)?;

    let db_path = args
        .database
        .unwrap_or_else(|| config::database_path(&data_dir));
    info!("Database path: {}", db_path.display());

    let pool = drec_common::db::init_database(&db_path).await?;

    let state = AppState::new(pool);
    let app = build_router(state);

    let port = config::resolve_port(args.port);
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    info!("drec-api listening on http://127.0.0.1:{}", port);
    info!("Health check: http://127.0.0.1:{}/health", port);

    axum::serve(listener, app).await?;

    Ok(())
}
