//! Secret detection value objects

use repolens_core::domain::Severity;
use serde::{Deserialize, Serialize};

/// Secret type categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SecretType {
    AwsAccessKey,
    JwtToken,
    ApiKey,
    #[default]
    Other,
}

/// Secret detection rule.
///
/// `pattern` is a regular expression applied to one physical line at a time.
/// `keywords` are case-sensitive literals of which at least one must occur on
/// the line before the regex runs; an empty list always runs the regex.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretRule {
    pub id: String,
    /// Label copied into every finding
    pub description: String,
    #[serde(default)]
    pub secret_type: SecretType,
    #[serde(default = "default_severity")]
    pub severity: Severity,
    pub pattern: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

fn default_severity() -> Severity {
    Severity::High
}
