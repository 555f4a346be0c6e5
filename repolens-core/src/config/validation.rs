//! Configuration validation module

use crate::config::{
    AnalysisConfig, GitConfig, LoggingConfig, SecretDetectionConfig, StoreBackend, StoreConfig,
};

/// Trait for validating configuration sections
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Logging configuration error: {message}")]
    Logging { message: String },

    #[error("Analysis configuration error: {message}")]
    Analysis { message: String },

    #[error("Secret detection configuration error: {message}")]
    SecretDetection { message: String },

    #[error("Git configuration error: {message}")]
    Git { message: String },

    #[error("Store configuration error: {message}")]
    Store { message: String },
}

impl ValidationError {
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }

    pub fn analysis(message: impl Into<String>) -> Self {
        Self::Analysis {
            message: message.into(),
        }
    }

    pub fn secret_detection(message: impl Into<String>) -> Self {
        Self::SecretDetection {
            message: message.into(),
        }
    }

    pub fn git(message: impl Into<String>) -> Self {
        Self::Git {
            message: message.into(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if !matches!(self.format.as_str(), "json" | "pretty") {
            return Err(ValidationError::logging(format!(
                "format must be 'json' or 'pretty', got: {}",
                self.format
            )));
        }

        if self.level.trim().is_empty() {
            return Err(ValidationError::logging("level cannot be empty"));
        }

        Ok(())
    }
}

impl Validate for AnalysisConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.max_tree_depth == 0 {
            return Err(ValidationError::analysis(
                "max_tree_depth must be greater than 0",
            ));
        }

        Ok(())
    }
}

impl Validate for SecretDetectionConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(ext) = self.exclude_extensions.iter().find(|e| e.starts_with('.')) {
            return Err(ValidationError::secret_detection(format!(
                "exclude_extensions entries are given without a leading dot, got: {}",
                ext
            )));
        }

        if let Some(path) = &self.rule_file_path {
            let supported = matches!(
                path.extension().and_then(|s| s.to_str()),
                Some("toml") | Some("json")
            );
            if !supported {
                return Err(ValidationError::secret_detection(format!(
                    "rule_file_path must be a .toml or .json file, got: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }
}

impl Validate for GitConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.fetch_timeout_seconds == 0 {
            return Err(ValidationError::git(
                "fetch_timeout_seconds must be greater than 0",
            ));
        }

        if self.clone_timeout_seconds == 0 {
            return Err(ValidationError::git(
                "clone_timeout_seconds must be greater than 0",
            ));
        }

        Ok(())
    }
}

impl Validate for StoreConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == StoreBackend::Bounded && self.max_entries == 0 {
            return Err(ValidationError::store(
                "max_entries must be greater than 0 for the bounded backend",
            ));
        }

        if self.ttl_seconds == Some(0) {
            return Err(ValidationError::store("ttl_seconds must be greater than 0"));
        }

        Ok(())
    }
}
