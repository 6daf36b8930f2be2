//! Serve command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use pulse_api::{build_router, AppState};
use pulse_config::Config;

/// Arguments for the serve command
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to a JSON data snapshot
    #[arg(short, long)]
    pub snapshot: Option<PathBuf>,
}

/// Run the API server
pub async fn run(args: ServeArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => Config::default(),
    };

    let engine = super::engine_from_snapshot(args.snapshot.as_deref())?;
    let state = AppState::new(engine, config.dashboard.clone());
    let app = build_router(state);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(addr = %addr, "pulse API listening");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
