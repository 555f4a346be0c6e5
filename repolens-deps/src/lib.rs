//! RepoLens Deps - Environment and dependency detection
//!
//! Infers language, framework, build system and a flat dependency list from
//! the well-known manifests at the root of a checkout.
//!
//! ## Supported Manifests
//!
//! | Manifest | Language | Build system |
//! |----------|----------|--------------|
//! | `package.json` | JavaScript/TypeScript | npm |
//! | `requirements.txt` | Python | pip |
//!
//! Manifests are processed in that order; when both are present the Python
//! facts win. A manifest that cannot be read or parsed is reported in
//! [`DetectionResult::manifest_errors`] and never aborts detection.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{DetectEnvironmentUseCase, DetectionResult};
pub use domain::{DetectionOptions, ManifestError};
