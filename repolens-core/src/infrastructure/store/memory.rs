//! Unbounded in-memory profile store

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::profile::RepositoryProfile;
use crate::domain::store::{ProfileStore, StoreError};

/// Process-lifetime map from repository identifier to its latest profile
#[derive(Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<String, Arc<RepositoryProfile>>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get(&self, repo_id: &str) -> Result<Option<Arc<RepositoryProfile>>, StoreError> {
        Ok(self.profiles.read().await.get(repo_id).cloned())
    }

    async fn put(&self, profile: Arc<RepositoryProfile>) -> Result<(), StoreError> {
        let repo_id = profile.repo_id.clone();
        self.profiles.write().await.insert(repo_id.clone(), profile);
        tracing::debug!(repo_id = %repo_id, "Profile stored");
        Ok(())
    }
}
