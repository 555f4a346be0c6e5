//! Environment detection use case

use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

use repolens_core::config::AnalysisConfig;
use repolens_core::domain::{Dependency, EnvironmentProfile};

use crate::domain::{DetectionOptions, ManifestError};
use crate::infrastructure::parsers::{default_parsers, ManifestParser};

/// Environment facts and dependencies inferred from root manifests
#[derive(Debug, Default)]
pub struct DetectionResult {
    pub environment: EnvironmentProfile,
    /// Every declared dependency, unbounded, in manifest then declaration order
    pub dependencies: Vec<Dependency>,
    /// Manifests that were present but contributed nothing
    pub manifest_errors: Vec<ManifestError>,
}

/// Use case for detecting a project's environment from its manifests
pub struct DetectEnvironmentUseCase {
    parsers: Vec<Box<dyn ManifestParser>>,
    options: DetectionOptions,
}

impl DetectEnvironmentUseCase {
    pub fn new() -> Self {
        Self::with_options(DetectionOptions::default())
    }

    pub fn with_config(config: &AnalysisConfig) -> Self {
        Self::with_options(DetectionOptions {
            track_dependency_provenance: config.track_dependency_provenance,
        })
    }

    pub fn with_options(options: DetectionOptions) -> Self {
        Self {
            parsers: default_parsers(),
            options,
        }
    }

    /// Inspect the manifests at `root`. Never fails; broken manifests are
    /// reported in [`DetectionResult::manifest_errors`].
    #[instrument(skip(self), fields(root = %root.display()))]
    pub fn execute(&self, root: &Path) -> DetectionResult {
        let mut result = DetectionResult::default();

        for parser in &self.parsers {
            let path = root.join(parser.filename());
            let Ok(metadata) = fs::symlink_metadata(&path) else {
                continue;
            };
            if metadata.is_dir() {
                continue;
            }

            debug!(manifest = parser.filename(), "Found manifest");
            result.environment.language = parser.language().to_string();
            result.environment.build_system = parser.build_system().to_string();

            let parsed = if metadata.file_type().is_symlink() {
                Err(ManifestError::Invalid {
                    manifest: parser.filename().to_string(),
                    message: "symlinked manifests are not followed".to_string(),
                })
            } else {
                fs::read(&path)
                    .map_err(|source| ManifestError::Read {
                        manifest: parser.filename().to_string(),
                        source,
                    })
                    .and_then(|content| parser.parse(&content, self.options))
            };

            match parsed {
                Ok(facts) => {
                    if let Some(framework) = facts.framework {
                        result.environment.framework = framework;
                    }
                    if let Some(node_version) = facts.node_version {
                        result.environment.node_version = node_version;
                    }
                    result.dependencies.extend(facts.dependencies);
                }
                Err(e) => {
                    warn!(error = %e, "Manifest contributed nothing");
                    result.manifest_errors.push(e);
                }
            }
        }

        info!(
            language = %result.environment.language,
            framework = %result.environment.framework,
            dependency_count = result.dependencies.len(),
            manifest_errors = result.manifest_errors.len(),
            "Environment detection completed"
        );
        result
    }
}

impl Default for DetectEnvironmentUseCase {
    fn default() -> Self {
        Self::new()
    }
}
