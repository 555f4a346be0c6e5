//! Configuration management

pub mod validation;

pub use validation::{Validate, ValidationError};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub analysis: AnalysisConfig,
    pub secret_detection: SecretDetectionConfig,
    pub git: GitConfig,
    pub store: StoreConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `json` or `pretty`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Analysis pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of dependency records kept on a profile (tail is dropped)
    pub max_dependencies: usize,
    /// Directories nested deeper than this are left out of the file tree
    pub max_tree_depth: usize,
    /// Emit `dev` for entries declared under `devDependencies`.
    /// When false every dependency is reported as `prod`.
    pub track_dependency_provenance: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_dependencies: 50,
            max_tree_depth: 64,
            track_dependency_provenance: false,
        }
    }
}

/// Secret Detection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecretDetectionConfig {
    /// Directory names that are never descended into
    pub exclude_dirs: Vec<String>,
    /// File extensions to skip (compared case-insensitively, without the dot)
    pub exclude_extensions: Vec<String>,
    /// Optional path to an additional rule file (TOML or JSON)
    pub rule_file_path: Option<PathBuf>,
}

impl Default for SecretDetectionConfig {
    fn default() -> Self {
        Self {
            exclude_dirs: vec![".git".to_string()],
            exclude_extensions: vec![
                "png".to_string(),
                "jpg".to_string(),
                "jpeg".to_string(),
                "gif".to_string(),
                "ico".to_string(),
                "lock".to_string(),
            ],
            rule_file_path: None,
        }
    }
}

/// Repository materialization configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Parent directory for temporary checkouts. Defaults to the system temp dir.
    pub checkout_parent: Option<PathBuf>,
    /// libgit2 connect/read timeout
    pub fetch_timeout_seconds: u64,
    /// Upper bound for a whole clone, including the blocking worker
    pub clone_timeout_seconds: u64,
    /// Accept `file://` URLs and plain local paths in addition to `https://`
    pub allow_local_sources: bool,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            checkout_parent: None,
            fetch_timeout_seconds: 30,
            clone_timeout_seconds: 120,
            allow_local_sources: false,
        }
    }
}

impl GitConfig {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_seconds)
    }

    pub fn clone_timeout(&self) -> Duration {
        Duration::from_secs(self.clone_timeout_seconds)
    }
}

/// Backend used for the profile store
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    /// Unbounded map, entries live until process exit
    #[default]
    Memory,
    /// Size-bounded cache with optional expiry
    Bounded,
}

/// Profile store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Maximum number of profiles kept by the bounded backend
    pub max_entries: u64,
    /// Expiry for the bounded backend (None = no expiry)
    pub ttl_seconds: Option<u64>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Memory,
            max_entries: 1_000,
            ttl_seconds: None,
        }
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigLoadError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false));

        // Add environment-specific config if ENV is set
        if let Ok(env) = std::env::var("ENV") {
            builder = builder
                .add_source(config::File::with_name(&format!("config/{}", env)).required(false));
        }

        // Local config and environment variables last (highest priority)
        builder = builder
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("REPOLENS").separator("__"));

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a single explicit file, layered under environment variables
    pub fn load_from(path: &std::path::Path) -> Result<Self, ConfigLoadError> {
        let config: Config = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("REPOLENS").separator("__"))
            .build()?
            .try_deserialize()?;
        config.validate()?;

        Ok(config)
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.analysis.validate()?;
        self.secret_detection.validate()?;
        self.git.validate()?;
        self.store.validate()?;
        Ok(())
    }
}

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Configuration file error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Configuration validation error: {0}")]
    Validation(#[from] ValidationError),
}
