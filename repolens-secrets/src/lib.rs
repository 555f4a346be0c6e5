//! RepoLens Secrets - Leaked credential detection
//!
//! Streams every text-like file of a checkout and matches a fixed table of
//! high-confidence credential patterns, one physical line at a time.
//!
//! ## Features
//!
//! - Default rules for AWS access keys, hardcoded JWT bearer headers and
//!   `api_key = "..."` assignments
//! - Additional rules from a TOML or JSON rule file
//! - Hidden files, image/lockfile extensions, symlinks and binary content are skipped
//! - Every skipped path is reported with its reason
//!
//! ## Usage
//!
//! ```rust,ignore
//! use repolens_secrets::ScanForSecretsUseCase;
//! use repolens_core::config::SecretDetectionConfig;
//!
//! let scanner = ScanForSecretsUseCase::with_config(&SecretDetectionConfig::default());
//! let result = scanner.execute(checkout_path)?;
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::*;
