//! RepoLens Core - Foundation crate for the RepoLens repository profiler
//!
//! This crate provides the pieces shared by every analysis stage:
//!
//! # Modules
//!
//! - [`config`] - Strongly-typed configuration with TOML and environment variable support
//! - [`domain`] - Repository profile model and the profile store interface
//! - [`infrastructure`] - Per-file reading outcomes and profile store backends
//! - [`logging`] - Structured logging with tracing
//!
//! # Configuration
//!
//! Load configuration from files and environment:
//!
//! ```rust,ignore
//! use repolens_core::Config;
//!
//! let config = Config::load()?;
//! ```
//!
//! Environment variables use the `REPOLENS__` prefix with double underscore separators:
//!
//! ```bash
//! REPOLENS__ANALYSIS__MAX_DEPENDENCIES=100
//! REPOLENS__STORE__BACKEND=bounded
//! ```
//!
//! # Logging
//!
//! ```rust,ignore
//! use repolens_core::init_tracing;
//!
//! init_tracing(&config.logging)?;
//! ```

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;

pub use config::Config;
pub use logging::init_tracing;
