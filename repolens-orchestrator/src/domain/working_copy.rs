//! Checked-out repository handed to the pipeline

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Directory tree the pipeline analyses.
///
/// An owned copy is a temporary checkout that is deleted once analysis ends;
/// a borrowed copy is a caller's directory and is left alone.
#[derive(Debug)]
pub enum WorkingCopy {
    Owned(TempDir),
    Borrowed(PathBuf),
}

impl WorkingCopy {
    pub fn path(&self) -> &Path {
        match self {
            Self::Owned(dir) => dir.path(),
            Self::Borrowed(path) => path,
        }
    }

    pub fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }

    /// Delete an owned checkout. Blocking; borrowed copies are untouched.
    pub fn remove(self) -> std::io::Result<()> {
        match self {
            Self::Owned(dir) => dir.close(),
            Self::Borrowed(_) => Ok(()),
        }
    }
}
