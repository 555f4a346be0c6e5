//! Application setup and wiring

use std::sync::Arc;

use repolens_core::domain::ProfileStore;
use repolens_core::infrastructure::build_profile_store;
use repolens_core::Config;
use repolens_orchestrator::application::{
    AnalysisService, AnalyzeRepositoryUseCase, QuestionAnswerer, RuleBasedAnswerer,
};
use repolens_orchestrator::infrastructure::{GitService, GitServiceConfig};

/// Long-lived services shared by every command
pub struct AppHandle {
    pub analysis: AnalysisService,
    pub answerer: Arc<dyn QuestionAnswerer>,
    pub store: Arc<dyn ProfileStore>,
}

/// Build the profile store, clone service and pipeline from `config`
pub fn create_app(config: &Config) -> std::io::Result<AppHandle> {
    let store = build_profile_store(&config.store);
    let git_service = Arc::new(GitService::new(GitServiceConfig::from(&config.git))?);
    let pipeline = AnalyzeRepositoryUseCase::new(config, Arc::clone(&store));

    tracing::debug!(backend = ?config.store.backend, "Application services created");

    Ok(AppHandle {
        analysis: AnalysisService::new(git_service, pipeline),
        answerer: Arc::new(RuleBasedAnswerer::new(Arc::clone(&store))),
        store,
    })
}
