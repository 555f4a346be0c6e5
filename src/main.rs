//! RepoLens - Command-line entry point

use anyhow::{Context, Result};
use clap::Parser;

use repolens::cli::commands::analyze;
use repolens::cli::{Cli, Commands};
use repolens::{create_app, init_tracing, Config};

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        // Only warn if it's not a "file not found" error
        if !e.not_found() {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration. Check REPOLENS__* env vars")?;

    init_tracing(&config.logging).context("Failed to initialize logging")?;

    let app = create_app(&config).context("Failed to create application")?;

    match &cli.command {
        Commands::Analyze(args) => analyze::run(args, &app).await,
    }
}
