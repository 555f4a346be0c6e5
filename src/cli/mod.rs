//! RepoLens CLI
//!
//! `repolens analyze <SOURCE>` clones (or, with `--local`, reads) a repository
//! and prints its profile.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// RepoLens - Profile a repository before you run it
#[derive(Parser, Debug)]
#[command(
    name = "repolens",
    version,
    about = "Profile a repository: structure, environment, dependencies, secrets and startup readiness"
)]
pub struct Cli {
    /// Configuration file path
    #[arg(long, global = true, env = "REPOLENS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a repository and print its profile
    #[command(visible_alias = "a")]
    Analyze(commands::analyze::AnalyzeArgs),
}

/// Output format for the analyze command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Full profile as pretty-printed JSON
    Json,
    /// Human-readable digest
    #[default]
    Summary,
}
