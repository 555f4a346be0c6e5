//! Default secret detection rules

use repolens_core::domain::Severity;

use crate::domain::value_objects::{SecretRule, SecretType};

/// Get all default secret detection rules, in evaluation order
pub fn get_default_rules() -> Vec<SecretRule> {
    vec![aws_access_key_rule(), jwt_token_rule(), generic_api_key_rule()]
}

/// AWS access key assigned to the conventional environment variable
pub fn aws_access_key_rule() -> SecretRule {
    SecretRule {
        id: "aws-access-key".to_string(),
        description: "Potential AWS Access Key".to_string(),
        secret_type: SecretType::AwsAccessKey,
        severity: Severity::High,
        pattern: r#"AWS_ACCESS_KEY_ID\s*=\s*['"][A-Z0-9]{20}['"]"#.to_string(),
        keywords: vec!["AWS_ACCESS_KEY_ID".to_string()],
    }
}

/// Authorization header carrying a literal JWT bearer token
pub fn jwt_token_rule() -> SecretRule {
    SecretRule {
        id: "hardcoded-jwt".to_string(),
        description: "Hardcoded JWT Token".to_string(),
        secret_type: SecretType::JwtToken,
        severity: Severity::High,
        pattern: r#"Authorization\s*:\s*['"]Bearer\s+ey"#.to_string(),
        keywords: vec!["Bearer".to_string()],
    }
}

/// `api_key = "<20+ alphanumerics>"`
pub fn generic_api_key_rule() -> SecretRule {
    SecretRule {
        id: "generic-api-key".to_string(),
        description: "Hardcoded API Key".to_string(),
        secret_type: SecretType::ApiKey,
        severity: Severity::High,
        pattern: r#"api_key\s*=\s*['"][a-zA-Z0-9]{20,}['"]"#.to_string(),
        keywords: vec!["api_key".to_string()],
    }
}
