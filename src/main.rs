mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "schedsync")]
#[command(about = "Reconcile a CSV appointment schedule against a Google calendar")]
struct Cli {
    /// Config file (defaults to ~/.config/schedsync/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create, update and flag calendar events to match the schedule file
    Run,
    /// Show what `run` would change without writing anything
    Plan,
}

fn init_logging() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Run => commands::run::run(config).await,
        Commands::Plan => commands::plan::run(config).await,
    }
}
