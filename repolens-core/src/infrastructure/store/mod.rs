//! Profile store implementations

pub mod bounded;
pub mod memory;

pub use bounded::BoundedProfileStore;
pub use memory::InMemoryProfileStore;

use std::sync::Arc;
use std::time::Duration;

use crate::config::{StoreBackend, StoreConfig};
use crate::domain::store::ProfileStore;

/// Build the store selected by configuration
pub fn build_profile_store(config: &StoreConfig) -> Arc<dyn ProfileStore> {
    match config.backend {
        StoreBackend::Memory => Arc::new(InMemoryProfileStore::new()),
        StoreBackend::Bounded => Arc::new(BoundedProfileStore::new(
            config.max_entries,
            config.ttl_seconds.map(Duration::from_secs),
        )),
    }
}
