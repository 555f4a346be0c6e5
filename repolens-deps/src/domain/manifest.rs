//! Manifest parse results

use repolens_core::domain::Dependency;

/// Options affecting how manifest entries are classified
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetectionOptions {
    /// Mark `devDependencies` entries as `dev` instead of `prod`
    pub track_dependency_provenance: bool,
}

/// What a single manifest contributes to the environment profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestFacts {
    /// Framework label, `None` when no rule matched
    pub framework: Option<String>,
    pub node_version: Option<String>,
    pub dependencies: Vec<Dependency>,
}

/// A manifest was present but contributed nothing
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to read {manifest}: {source}")]
    Read {
        manifest: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {manifest}: {message}")]
    Parse { manifest: String, message: String },

    #[error("Unexpected structure in {manifest}: {message}")]
    Invalid { manifest: String, message: String },
}

impl ManifestError {
    pub fn manifest(&self) -> &str {
        match self {
            Self::Read { manifest, .. }
            | Self::Parse { manifest, .. }
            | Self::Invalid { manifest, .. } => manifest,
        }
    }
}
