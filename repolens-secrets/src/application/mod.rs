//! Application layer for secret detection

pub mod use_cases;

pub use use_cases::{ScanError, ScanForSecretsUseCase, ScanResult};
