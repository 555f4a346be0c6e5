//! RepoLens - Repository profiler
//!
//! Wires the analysis crates together behind the `repolens` command line.

mod app;
pub mod cli;

pub use app::{create_app, AppHandle};
pub use repolens_core::{init_tracing, Config};

// Re-export for convenience
pub use repolens_core;
pub use repolens_orchestrator;
