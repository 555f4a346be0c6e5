//! Dependency detection domain

pub mod frameworks;
pub mod manifest;

pub use frameworks::{is_flagged_stale, javascript_framework, python_framework};
pub use manifest::{DetectionOptions, ManifestError, ManifestFacts};
