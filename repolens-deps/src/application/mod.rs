//! Application layer for dependency detection

pub mod use_cases;

pub use use_cases::{DetectEnvironmentUseCase, DetectionResult};
