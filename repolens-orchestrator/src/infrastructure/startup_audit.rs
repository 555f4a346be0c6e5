//! Startup readiness checks

use std::path::Path;
use tracing::{debug, instrument};

use repolens_core::domain::{EnvironmentProfile, IssueKind, StartupIssue};

/// Lockfiles that pin a JavaScript dependency tree
const JS_LOCKFILES: &[&str] = &[
    "package-lock.json",
    "npm-shrinkwrap.json",
    "yarn.lock",
    "pnpm-lock.yaml",
];

/// Finds reasons a checkout would fail, or misbehave, on first start.
///
/// Rules are independent and additive; an empty list means ready to run.
#[derive(Debug, Clone, Default)]
pub struct StartupAuditor;

impl StartupAuditor {
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip(self, environment), fields(root = %root.display()))]
    pub fn audit(&self, root: &Path, environment: &EnvironmentProfile) -> Vec<StartupIssue> {
        let mut issues = Vec::new();

        if present(root, ".env.example") && !present(root, ".env") {
            issues.push(StartupIssue {
                kind: IssueKind::Error,
                title: "Missing Config".to_string(),
                description: "Missing .env file".to_string(),
                fix: "cp .env.example .env".to_string(),
            });
        }

        if environment.is_javascript() && !JS_LOCKFILES.iter().any(|name| present(root, name)) {
            issues.push(StartupIssue {
                kind: IssueKind::Warning,
                title: "No Lockfile".to_string(),
                description: "Inconsistent builds".to_string(),
                fix: "npm install".to_string(),
            });
        }

        debug!(issue_count = issues.len(), "Startup audit completed");
        issues
    }
}

/// Entry exists at the root, without following symlinks
fn present(root: &Path, name: &str) -> bool {
    std::fs::symlink_metadata(root.join(name)).is_ok()
}
