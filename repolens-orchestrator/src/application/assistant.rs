//! Follow-up question answering over stored profiles

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use repolens_core::domain::{ProfileStore, RepositoryProfile, StoreError};

/// Answers a free-text question about an analysed repository
#[async_trait]
pub trait QuestionAnswerer: Send + Sync {
    async fn answer(&self, repo_id: &str, message: &str) -> Result<String, StoreError>;
}

/// Keyword-driven answers built from the stored profile
pub struct RuleBasedAnswerer {
    store: Arc<dyn ProfileStore>,
}

impl RuleBasedAnswerer {
    pub const NO_PROFILE: &'static str = "Analyze a repo first.";
    pub const FALLBACK: &'static str = "I can help check configuration and structure.";

    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    fn respond(profile: &RepositoryProfile, message: &str) -> String {
        let message = message.to_lowercase();

        if message.contains("security") {
            format!(
                "Checked for secrets. See the Security tab. {} potential secret(s) found.",
                profile.security.len()
            )
        } else if message.contains("run") {
            format!(
                "Check the tasks list for run commands: {}",
                profile.tasks.join(", ")
            )
        } else {
            Self::FALLBACK.to_string()
        }
    }
}

#[async_trait]
impl QuestionAnswerer for RuleBasedAnswerer {
    async fn answer(&self, repo_id: &str, message: &str) -> Result<String, StoreError> {
        match self.store.get(repo_id).await? {
            Some(profile) => Ok(Self::respond(&profile, message)),
            None => {
                debug!(repo_id = %repo_id, "No profile stored for repository");
                Ok(Self::NO_PROFILE.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use repolens_core::domain::{EnvironmentProfile, FileNode, SecurityFinding, Severity};
    use repolens_core::infrastructure::InMemoryProfileStore;

    fn profile() -> RepositoryProfile {
        RepositoryProfile {
            repo_id: "https://github.com/org/app".to_string(),
            environment: EnvironmentProfile::default(),
            dependencies: vec![],
            structure: FileNode::folder("app", vec![]),
            tasks: vec!["git clone <repo>".to_string(), "npm install".to_string()],
            security: vec![SecurityFinding {
                severity: Severity::High,
                file: "config.py".to_string(),
                line: 3,
                description: "Hardcoded API Key".to_string(),
            }],
            startup_issues: vec![],
        }
    }

    async fn answerer() -> RuleBasedAnswerer {
        let store = Arc::new(InMemoryProfileStore::new());
        store.put(Arc::new(profile())).await.unwrap();
        RuleBasedAnswerer::new(store)
    }

    #[tokio::test]
    async fn test_unknown_repository() {
        let answerer = answerer().await;

        let answer = answerer
            .answer("https://github.com/org/other", "how do I run it?")
            .await
            .unwrap();
        assert_eq!(answer, RuleBasedAnswerer::NO_PROFILE);
    }

    #[tokio::test]
    async fn test_security_question_mentions_finding_count() {
        let answerer = answerer().await;

        let answer = answerer
            .answer("https://github.com/org/app", "Any SECURITY problems?")
            .await
            .unwrap();
        assert!(answer.starts_with("Checked for secrets. See the Security tab."));
        assert!(answer.contains("1 potential secret"));
    }

    #[tokio::test]
    async fn test_run_question_lists_tasks() {
        let answerer = answerer().await;

        let answer = answerer
            .answer("https://github.com/org/app", "how do I run this")
            .await
            .unwrap();
        assert_eq!(
            answer,
            "Check the tasks list for run commands: git clone <repo>, npm install"
        );
    }

    #[tokio::test]
    async fn test_fallback_answer() {
        let answerer = answerer().await;

        let answer = answerer
            .answer("https://github.com/org/app", "what is this?")
            .await
            .unwrap();
        assert_eq!(answer, RuleBasedAnswerer::FALLBACK);
    }
}
