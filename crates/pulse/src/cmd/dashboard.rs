//! Dashboard command
//!
//! Computes one supplier's dashboard from a snapshot and prints it as JSON.
//! Useful for inspecting data offline without running the server.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use pulse_model::SupplierId;

/// Arguments for the dashboard command
#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Path to a JSON data snapshot
    #[arg(short, long)]
    pub snapshot: Option<PathBuf>,

    /// Supplier to report on
    #[arg(long)]
    pub supplier: String,

    /// Length of the daily series
    #[arg(long, default_value_t = 7)]
    pub days: u32,

    /// Leaderboard size
    #[arg(long, default_value_t = 5)]
    pub top: usize,
}

/// Print a supplier dashboard to stdout
pub async fn run(args: DashboardArgs) -> Result<()> {
    let supplier = SupplierId::new(&args.supplier).context("invalid supplier id")?;
    let engine = super::engine_from_snapshot(args.snapshot.as_deref())?;

    let dashboard = engine
        .dashboard(&supplier, args.days, args.top)
        .await
        .context("failed to compute dashboard")?;

    println!("{}", serde_json::to_string_pretty(&dashboard)?);
    Ok(())
}
