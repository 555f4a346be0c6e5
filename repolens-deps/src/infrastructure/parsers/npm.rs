//! Node.js manifest parser

use super::traits::ManifestParser;
use crate::domain::{
    is_flagged_stale, javascript_framework, DetectionOptions, ManifestError, ManifestFacts,
};
use repolens_core::domain::{Dependency, DependencyKind, EnvironmentProfile};
use serde_json::{Map, Value};
use std::collections::HashMap;

const MANIFEST: &str = "package.json";

/// Parser for package.json files
pub struct NpmParser;

impl Default for NpmParser {
    fn default() -> Self {
        Self::new()
    }
}

impl NpmParser {
    pub fn new() -> Self {
        Self
    }

    fn section<'a>(
        &self,
        json: &'a Map<String, Value>,
        key: &str,
    ) -> Result<Option<&'a Map<String, Value>>, ManifestError> {
        match json.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(_) => Err(invalid(format!("`{}` is not an object", key))),
        }
    }

    /// Merge `dependencies` then `devDependencies` in declaration order. A dev
    /// entry whose name was already seen replaces that entry in place.
    fn merge_dependencies(
        &self,
        json: &Map<String, Value>,
        options: DetectionOptions,
    ) -> Result<Vec<Dependency>, ManifestError> {
        let mut dependencies: Vec<Dependency> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for (key, declared_kind) in [
            ("dependencies", DependencyKind::Prod),
            ("devDependencies", DependencyKind::Dev),
        ] {
            let Some(section) = self.section(json, key)? else {
                continue;
            };

            for (name, value) in section {
                let version = value.as_str().ok_or_else(|| {
                    invalid(format!("version for package {} is not a string", name))
                })?;
                let kind = if options.track_dependency_provenance {
                    declared_kind
                } else {
                    DependencyKind::Prod
                };
                let dependency = Dependency {
                    name: name.clone(),
                    version: version.to_string(),
                    kind,
                    is_flagged_stale: is_flagged_stale(name, version),
                };

                match positions.get(name) {
                    Some(&index) => dependencies[index] = dependency,
                    None => {
                        positions.insert(name.clone(), dependencies.len());
                        dependencies.push(dependency);
                    }
                }
            }
        }

        Ok(dependencies)
    }
}

impl ManifestParser for NpmParser {
    fn filename(&self) -> &'static str {
        MANIFEST
    }

    fn language(&self) -> &'static str {
        EnvironmentProfile::JAVASCRIPT
    }

    fn build_system(&self) -> &'static str {
        "npm"
    }

    fn parse(
        &self,
        content: &[u8],
        options: DetectionOptions,
    ) -> Result<ManifestFacts, ManifestError> {
        let json: Value = serde_json::from_slice(content).map_err(|e| ManifestError::Parse {
            manifest: MANIFEST.to_string(),
            message: e.to_string(),
        })?;
        let Value::Object(json) = json else {
            return Err(invalid("top-level value is not an object".to_string()));
        };

        let dependencies = self.merge_dependencies(&json, options)?;
        let framework =
            javascript_framework(dependencies.iter().map(|d| d.name.as_str())).map(String::from);
        let node_version = json
            .get("engines")
            .and_then(|engines| engines.get("node"))
            .and_then(Value::as_str)
            .map(String::from);

        Ok(ManifestFacts {
            framework,
            node_version,
            dependencies,
        })
    }
}

fn invalid(message: String) -> ManifestError {
    ManifestError::Invalid {
        manifest: MANIFEST.to_string(),
        message,
    }
}
