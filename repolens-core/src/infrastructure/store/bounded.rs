//! Size-bounded profile store backed by moka

use async_trait::async_trait;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::profile::RepositoryProfile;
use crate::domain::store::{ProfileStore, StoreError};

/// Evicting profile store for long-running processes
pub struct BoundedProfileStore {
    cache: Cache<String, Arc<RepositoryProfile>>,
}

impl BoundedProfileStore {
    /// Keep at most `max_entries` profiles, each for at most `ttl` when given
    pub fn new(max_entries: u64, ttl: Option<Duration>) -> Self {
        let mut builder = Cache::builder().max_capacity(max_entries);
        if let Some(ttl) = ttl {
            builder = builder.time_to_live(ttl);
        }

        Self {
            cache: builder.build(),
        }
    }

    /// Flush pending evictions; mostly useful to make `entry_count` exact
    pub async fn sync(&self) {
        self.cache.run_pending_tasks().await;
    }

    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }
}

#[async_trait]
impl ProfileStore for BoundedProfileStore {
    async fn get(&self, repo_id: &str) -> Result<Option<Arc<RepositoryProfile>>, StoreError> {
        Ok(self.cache.get(repo_id).await)
    }

    async fn put(&self, profile: Arc<RepositoryProfile>) -> Result<(), StoreError> {
        let repo_id = profile.repo_id.clone();
        self.cache.insert(repo_id.clone(), profile).await;
        tracing::debug!(repo_id = %repo_id, "Profile cached");
        Ok(())
    }
}
