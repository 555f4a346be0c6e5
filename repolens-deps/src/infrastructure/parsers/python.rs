//! Python manifest parser

use super::traits::ManifestParser;
use crate::domain::{python_framework, DetectionOptions, ManifestError, ManifestFacts};
use repolens_core::domain::{Dependency, DependencyKind, EnvironmentProfile};

/// Parser for requirements.txt files.
///
/// Only the `name==version` shape is understood; any other specifier is kept
/// verbatim as part of the name with version `latest`.
pub struct RequirementsTxtParser;

impl Default for RequirementsTxtParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RequirementsTxtParser {
    pub fn new() -> Self {
        Self
    }

    fn parse_line(&self, line: &str) -> Option<Dependency> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            return None;
        }

        let mut parts = line.split("==");
        let name = parts.next().unwrap_or_default().trim();
        let version = parts.next().map(str::trim).unwrap_or("latest");

        Some(Dependency {
            name: name.to_string(),
            version: version.to_string(),
            kind: DependencyKind::Prod,
            is_flagged_stale: false,
        })
    }
}

impl ManifestParser for RequirementsTxtParser {
    fn filename(&self) -> &'static str {
        "requirements.txt"
    }

    fn language(&self) -> &'static str {
        EnvironmentProfile::PYTHON
    }

    fn build_system(&self) -> &'static str {
        "pip"
    }

    fn parse(
        &self,
        content: &[u8],
        _options: DetectionOptions,
    ) -> Result<ManifestFacts, ManifestError> {
        let content = String::from_utf8_lossy(content);
        let mut facts = ManifestFacts::default();

        for dependency in content.lines().filter_map(|line| self.parse_line(line)) {
            if let Some(framework) = python_framework(&dependency.name) {
                facts.framework = Some(framework.to_string());
            }
            facts.dependencies.push(dependency);
        }

        Ok(facts)
    }
}
