//! Pulse - supplier analytics for the marketplace
//!
//! # Usage
//!
//! ```bash
//! # Run the API server over a snapshot (default)
//! pulse --snapshot data/snapshot.json
//! pulse serve --config configs/pulse.toml --snapshot data/snapshot.json
//!
//! # Print one supplier's dashboard as JSON
//! pulse dashboard --snapshot data/snapshot.json --supplier sup-123
//! ```

mod cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pulse_config::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Pulse - supplier analytics for the marketplace
#[derive(Parser, Debug)]
#[command(name = "pulse")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    // Global args that apply to serve when no subcommand given
    /// Path to configuration file (error if specified but not found)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Path to a JSON data snapshot
    #[arg(short, long, global = true)]
    snapshot: Option<std::path::PathBuf>,

    /// Log level (trace, debug, info, warn, error). Overrides config file.
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the API server
    Serve(cmd::serve::ServeArgs),

    /// Print one supplier's dashboard as JSON
    Dashboard(cmd::dashboard::DashboardArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Serve(mut args)) => {
            // CLI global flags override subcommand values if both specified
            if args.config.is_none() && cli.config.is_some() {
                args.config = cli.config;
            }
            if args.snapshot.is_none() && cli.snapshot.is_some() {
                args.snapshot = cli.snapshot;
            }
            let log_level = resolve_log_level(cli.log_level.as_deref(), args.config.as_deref());
            init_logging(&log_level)?;
            cmd::serve::run(args).await
        }
        Some(Command::Dashboard(mut args)) => {
            // Dashboard prints to stdout, no logging needed
            if args.snapshot.is_none() && cli.snapshot.is_some() {
                args.snapshot = cli.snapshot;
            }
            cmd::dashboard::run(args).await
        }
        // No subcommand = run server (default behavior)
        None => {
            let log_level = resolve_log_level(cli.log_level.as_deref(), cli.config.as_deref());
            init_logging(&log_level)?;
            let args = cmd::serve::ServeArgs {
                config: cli.config,
                snapshot: cli.snapshot,
            };
            cmd::serve::run(args).await
        }
    }
}

/// Resolve log level: CLI flag > config file > default "info"
fn resolve_log_level(cli_level: Option<&str>, config_path: Option<&std::path::Path>) -> String {
    if let Some(level) = cli_level {
        return level.to_string();
    }

    if let Some(path) = config_path {
        if path.exists() {
            if let Ok(config) = Config::from_file(path) {
                return config.log.level.as_str().to_string();
            }
        }
    }

    "info".to_string()
}

/// Initialize the tracing subscriber for logging
fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| anyhow::anyhow!("invalid log level: {}", e))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(filter)
        .init();

    Ok(())
}
