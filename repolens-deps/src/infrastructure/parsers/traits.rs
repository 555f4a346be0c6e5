//! Traits for manifest parsers

use crate::domain::{DetectionOptions, ManifestError, ManifestFacts};

/// Parser for one well-known manifest at the repository root
pub trait ManifestParser: Send + Sync {
    /// File name looked up at the repository root
    fn filename(&self) -> &'static str;

    /// Language label set when the manifest is present
    fn language(&self) -> &'static str;

    /// Build system label set when the manifest is present
    fn build_system(&self) -> &'static str;

    /// Parse the raw manifest bytes
    fn parse(
        &self,
        content: &[u8],
        options: DetectionOptions,
    ) -> Result<ManifestFacts, ManifestError>;
}

/// Parsers in processing order; later manifests overwrite earlier facts
pub fn default_parsers() -> Vec<Box<dyn ManifestParser>> {
    vec![
        Box::new(super::npm::NpmParser::new()),
        Box::new(super::python::RequirementsTxtParser::new()),
    ]
}
