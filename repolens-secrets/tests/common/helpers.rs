//! Test helper functions for repolens-secrets

use std::path::PathBuf;
use tempfile::TempDir;

/// Create a file (and its parent directories) with content
pub fn create_test_file(dir: &TempDir, relative: &str, content: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}
