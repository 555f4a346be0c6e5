//! Rule loader for secret detection rules

use crate::domain::value_objects::SecretRule;
use crate::infrastructure::rules::default_rules::get_default_rules;
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

/// Repository for secret detection rules
#[derive(Debug, Clone)]
pub struct RuleRepository {
    rules: Vec<SecretRule>,
}

/// On-disk rule file layout: `[[rules]]` tables in TOML, `{"rules": [...]}` in JSON
#[derive(Debug, Deserialize)]
struct RuleFile {
    #[serde(default)]
    rules: Vec<SecretRule>,
}

impl RuleRepository {
    /// Create a new rule repository with default rules
    pub fn new() -> Self {
        Self {
            rules: get_default_rules(),
        }
    }

    pub fn from_rules(rules: Vec<SecretRule>) -> Self {
        Self { rules }
    }

    /// Default rules followed by the rules from `rule_file_path`.
    ///
    /// A file that cannot be read or parsed is logged and ignored.
    pub fn with_file_and_defaults(rule_file_path: &Path) -> Self {
        let mut rules = get_default_rules();

        match Self::load_rules_from_file(rule_file_path) {
            Ok(mut file_rules) => {
                info!(
                    rule_count = file_rules.len(),
                    path = %rule_file_path.display(),
                    "Loaded rules from file"
                );
                rules.append(&mut file_rules);
            }
            Err(e) => {
                warn!(
                    error = %e,
                    path = %rule_file_path.display(),
                    "Failed to load rules from file, using defaults only"
                );
            }
        }

        Self { rules }
    }

    /// Load rules from a TOML or JSON file
    pub fn load_rules_from_file(rule_file_path: &Path) -> Result<Vec<SecretRule>, RuleLoadError> {
        let content = std::fs::read_to_string(rule_file_path)?;

        match rule_file_path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Self::load_rules_from_toml(&content),
            Some("json") => Self::load_rules_from_json(&content),
            _ => Err(RuleLoadError::UnsupportedFormat(
                "Only TOML and JSON formats are supported".to_string(),
            )),
        }
    }

    fn load_rules_from_toml(content: &str) -> Result<Vec<SecretRule>, RuleLoadError> {
        let file: RuleFile = toml::from_str(content)
            .map_err(|e| RuleLoadError::ParseError(format!("TOML parse error: {}", e)))?;
        Ok(file.rules)
    }

    fn load_rules_from_json(content: &str) -> Result<Vec<SecretRule>, RuleLoadError> {
        let file: RuleFile = serde_json::from_str(content)
            .map_err(|e| RuleLoadError::ParseError(format!("JSON parse error: {}", e)))?;
        Ok(file.rules)
    }

    /// Get all rules
    pub fn get_all_rules(&self) -> &[SecretRule] {
        &self.rules
    }
}

impl Default for RuleRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Error loading rules
#[derive(Debug, thiserror::Error)]
pub enum RuleLoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
