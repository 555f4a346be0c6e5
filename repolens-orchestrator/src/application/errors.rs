//! Analysis errors

use repolens_core::domain::StoreError;
use repolens_secrets::ScanError;

use crate::domain::MaterializeError;
use crate::infrastructure::WalkError;

/// A component failed while building the profile
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("File tree walk failed: {0}")]
    Walk(#[from] WalkError),
    #[error("Secret scan failed: {0}")]
    SecretScan(#[from] ScanError),
    #[error("Analysis worker failed: {0}")]
    Worker(String),
}

/// Analysis errors. No profile is stored for any of these.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Could not obtain repository: {0}")]
    Acquisition(#[from] MaterializeError),
    #[error("Analysis failed: {0}")]
    Pipeline(#[from] PipelineError),
    #[error("Failed to store profile: {0}")]
    Store(#[from] StoreError),
}
