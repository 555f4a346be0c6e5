//! Profile store behaviour shared by both backends

use std::sync::Arc;
use std::time::Duration;

use repolens_core::config::{StoreBackend, StoreConfig};
use repolens_core::domain::{EnvironmentProfile, FileNode, ProfileStore, RepositoryProfile};
use repolens_core::infrastructure::store::{
    build_profile_store, BoundedProfileStore, InMemoryProfileStore,
};

fn profile(repo_id: &str, tasks: &[&str]) -> Arc<RepositoryProfile> {
    Arc::new(RepositoryProfile {
        repo_id: repo_id.to_string(),
        environment: EnvironmentProfile::default(),
        dependencies: vec![],
        structure: FileNode::folder("repo", vec![]),
        tasks: tasks.iter().map(|t| t.to_string()).collect(),
        security: vec![],
        startup_issues: vec![],
    })
}

async fn assert_store_contract(store: &dyn ProfileStore) {
    let repo = "https://github.com/example/app";

    // Absence is a distinguishable state, not an error
    assert!(store.get(repo).await.unwrap().is_none());

    store.put(profile(repo, &["git clone <repo>"])).await.unwrap();
    let first = store.get(repo).await.unwrap().expect("profile stored");
    assert_eq!(first.tasks, vec!["git clone <repo>"]);

    // Whole-value replacement; the earlier handle still sees the old profile
    store
        .put(profile(repo, &["git clone <repo>", "npm install"]))
        .await
        .unwrap();
    let second = store.get(repo).await.unwrap().expect("profile replaced");
    assert_eq!(second.tasks.len(), 2);
    assert_eq!(first.tasks.len(), 1);

    // Other identifiers are unaffected
    assert!(store.get("https://github.com/example/other").await.unwrap().is_none());
}

#[tokio::test]
async fn test_in_memory_store_contract() {
    let store = InMemoryProfileStore::new();
    assert_store_contract(&store).await;
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_bounded_store_contract() {
    let store = BoundedProfileStore::new(16, None);
    assert_store_contract(&store).await;
}

#[tokio::test]
async fn test_bounded_store_evicts_beyond_capacity() {
    let store = BoundedProfileStore::new(2, None);
    for i in 0..10 {
        store
            .put(profile(&format!("repo-{}", i), &[]))
            .await
            .unwrap();
    }
    store.sync().await;

    assert!(store.entry_count() <= 2);
}

#[tokio::test]
async fn test_bounded_store_expires_entries() {
    let store = BoundedProfileStore::new(16, Some(Duration::from_millis(50)));
    store.put(profile("repo", &[])).await.unwrap();
    tokio::time::sleep(Duration::from_millis(150)).await;

    assert!(store.get("repo").await.unwrap().is_none());
}

#[tokio::test]
async fn test_concurrent_writers_do_not_interfere() {
    let store: Arc<dyn ProfileStore> = Arc::new(InMemoryProfileStore::new());

    let mut handles = Vec::new();
    for i in 0..16 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            let id = format!("repo-{}", i);
            store.put(profile(&id, &["git clone <repo>"])).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    for i in 0..16 {
        let id = format!("repo-{}", i);
        let stored = store.get(&id).await.unwrap().expect("each writer stored");
        assert_eq!(stored.repo_id, id);
    }
}

#[tokio::test]
async fn test_factory_selects_backend() {
    let memory = build_profile_store(&StoreConfig::default());
    assert_store_contract(memory.as_ref()).await;

    let bounded = build_profile_store(&StoreConfig {
        backend: StoreBackend::Bounded,
        max_entries: 4,
        ttl_seconds: Some(60),
    });
    assert_store_contract(bounded.as_ref()).await;
}
