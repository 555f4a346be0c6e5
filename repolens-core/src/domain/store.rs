//! Profile store interface

use async_trait::async_trait;
use std::sync::Arc;

use super::profile::RepositoryProfile;

/// Profile store errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store backend unavailable: {0}")]
    Unavailable(String),
}

/// Keyed storage for the most recent profile of each repository.
///
/// Values are replaced whole on `put`; a reader gets either the previous or
/// the new profile, never a mix. `get` returning `Ok(None)` means the
/// repository has not been analysed yet.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get(&self, repo_id: &str) -> Result<Option<Arc<RepositoryProfile>>, StoreError>;

    async fn put(&self, profile: Arc<RepositoryProfile>) -> Result<(), StoreError>;
}
