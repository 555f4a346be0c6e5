//! Repository analysis pipeline

use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

use repolens_core::config::Config;
use repolens_core::domain::{ProfileStore, RepositoryProfile};
use repolens_deps::DetectEnvironmentUseCase;
use repolens_secrets::ScanForSecretsUseCase;

use super::errors::{AnalysisError, PipelineError};
use crate::domain::{synthesize_tasks, RepositoryMaterializer, WorkingCopy};
use crate::infrastructure::{StartupAuditor, TreeWalker};

/// The scanners run over one checkout, in order
struct ProfileBuilder {
    tree_walker: TreeWalker,
    environment_detector: DetectEnvironmentUseCase,
    secret_scanner: ScanForSecretsUseCase,
    startup_auditor: StartupAuditor,
    max_dependencies: usize,
}

impl ProfileBuilder {
    fn build(&self, repo_id: &str, root: &Path) -> Result<RepositoryProfile, PipelineError> {
        let structure = self.tree_walker.walk(root)?;

        let detection = self.environment_detector.execute(root);
        let mut dependencies = detection.dependencies;
        if dependencies.len() > self.max_dependencies {
            debug!(
                declared = dependencies.len(),
                kept = self.max_dependencies,
                "Truncating dependency list"
            );
            dependencies.truncate(self.max_dependencies);
        }

        let security = self.secret_scanner.execute(root)?;
        let startup_issues = self.startup_auditor.audit(root, &detection.environment);
        let tasks = synthesize_tasks(&detection.environment);

        for skipped in structure.skipped.iter().chain(&security.skipped) {
            debug!(path = %skipped.path, reason = %skipped.reason, "Path skipped");
        }

        Ok(RepositoryProfile {
            repo_id: repo_id.to_string(),
            environment: detection.environment,
            dependencies,
            structure: structure.root,
            tasks,
            security: security.findings,
            startup_issues,
        })
    }
}

/// Use case for analysing one working copy and storing its profile
pub struct AnalyzeRepositoryUseCase {
    builder: Arc<ProfileBuilder>,
    store: Arc<dyn ProfileStore>,
}

impl AnalyzeRepositoryUseCase {
    pub fn new(config: &Config, store: Arc<dyn ProfileStore>) -> Self {
        let builder = ProfileBuilder {
            tree_walker: TreeWalker::new(config.analysis.max_tree_depth),
            environment_detector: DetectEnvironmentUseCase::with_config(&config.analysis),
            secret_scanner: ScanForSecretsUseCase::with_config(&config.secret_detection),
            startup_auditor: StartupAuditor::new(),
            max_dependencies: config.analysis.max_dependencies,
        };

        Self {
            builder: Arc::new(builder),
            store,
        }
    }

    /// Build the profile of `working_copy`, store it under `repo_id` and
    /// return it.
    ///
    /// An owned working copy is always removed: in the background after a
    /// successful store, before returning on failure.
    #[instrument(skip(self, working_copy), fields(root = %working_copy.path().display()))]
    pub async fn execute(
        &self,
        repo_id: &str,
        working_copy: WorkingCopy,
    ) -> Result<Arc<RepositoryProfile>, AnalysisError> {
        info!("Starting repository analysis");

        let builder = Arc::clone(&self.builder);
        let root = working_copy.path().to_path_buf();
        let id = repo_id.to_string();
        let built = tokio::task::spawn_blocking(move || builder.build(&id, &root))
            .await
            .unwrap_or_else(|e| Err(PipelineError::Worker(e.to_string())));

        let profile = match built {
            Ok(profile) => Arc::new(profile),
            Err(e) => {
                error!(error = %e, "Repository analysis failed");
                remove_now(working_copy).await;
                return Err(e.into());
            }
        };

        if let Err(e) = self.store.put(Arc::clone(&profile)).await {
            error!(error = %e, "Failed to store repository profile");
            remove_now(working_copy).await;
            return Err(e.into());
        }

        remove_in_background(working_copy);

        info!(
            dependencies = profile.dependencies.len(),
            findings = profile.security.len(),
            startup_issues = profile.startup_issues.len(),
            "Repository analysis completed"
        );
        Ok(profile)
    }
}

async fn remove_now(working_copy: WorkingCopy) {
    if !working_copy.is_owned() {
        return;
    }
    match tokio::task::spawn_blocking(move || working_copy.remove()).await {
        Ok(Ok(())) => debug!("Removed working copy"),
        Ok(Err(e)) => warn!(error = %e, "Failed to remove working copy"),
        Err(e) => warn!(error = %e, "Working copy removal task failed"),
    }
}

fn remove_in_background(working_copy: WorkingCopy) {
    if !working_copy.is_owned() {
        return;
    }
    tokio::task::spawn_blocking(move || {
        if let Err(e) = working_copy.remove() {
            warn!(error = %e, "Failed to remove working copy");
        }
    });
}

/// Materializes a repository URL and runs the pipeline on it
pub struct AnalysisService {
    materializer: Arc<dyn RepositoryMaterializer>,
    pipeline: AnalyzeRepositoryUseCase,
}

impl AnalysisService {
    pub fn new(
        materializer: Arc<dyn RepositoryMaterializer>,
        pipeline: AnalyzeRepositoryUseCase,
    ) -> Self {
        Self {
            materializer,
            pipeline,
        }
    }

    /// Analyse the repository at `url`; the URL is the profile's identifier.
    /// The store is untouched when the repository cannot be obtained.
    #[instrument(skip(self))]
    pub async fn analyze(&self, url: &str) -> Result<Arc<RepositoryProfile>, AnalysisError> {
        let working_copy = self.materializer.materialize(url).await.map_err(|e| {
            error!(error = %e, "Could not obtain repository");
            AnalysisError::Acquisition(e)
        })?;
        self.pipeline.execute(url, working_copy).await
    }

    /// Analyse a directory the caller keeps ownership of
    pub async fn analyze_local(&self, path: &Path) -> Result<Arc<RepositoryProfile>, AnalysisError> {
        let repo_id = path.display().to_string();
        self.pipeline
            .execute(&repo_id, WorkingCopy::Borrowed(path.to_path_buf()))
            .await
    }
}
