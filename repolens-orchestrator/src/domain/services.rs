//! Collaborator interfaces

use async_trait::async_trait;

use super::working_copy::WorkingCopy;

/// Materialization errors
#[derive(Debug, thiserror::Error)]
pub enum MaterializeError {
    #[error("Unsupported repository source {0}. Only HTTPS is supported.")]
    UnsupportedScheme(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),
    #[error("Clone did not finish within {0} seconds")]
    Timeout(u64),
    #[error("Blocking clone task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Produces a local working copy for a repository URL
#[async_trait]
pub trait RepositoryMaterializer: Send + Sync {
    async fn materialize(&self, url: &str) -> Result<WorkingCopy, MaterializeError>;
}
