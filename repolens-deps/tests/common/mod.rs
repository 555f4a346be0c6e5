//! Test helpers for repolens-deps

use std::path::PathBuf;
use tempfile::TempDir;

/// Create a file at the root of `dir` with content
pub fn write_manifest(dir: &TempDir, filename: &str, content: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.path().join(filename);
    std::fs::write(&path, content).expect("Failed to write test manifest");
    path
}

/// Next.js application manifest
pub fn sample_next_package_json() -> &'static str {
    r#"{
  "name": "storefront",
  "engines": { "node": ">=18.17" },
  "dependencies": {
    "next": "14.1.0",
    "react": "^18.2.0"
  },
  "devDependencies": {
    "typescript": "^5.3.0"
  }
}"#
}

/// FastAPI service requirements
pub fn sample_fastapi_requirements() -> &'static str {
    "fastapi==0.100.0\nuvicorn\n"
}
