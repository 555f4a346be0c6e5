//! File scanner for secret detection

use repolens_core::infrastructure::fs::{relative_display, SkipReason, SkippedPath};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, trace};
use walkdir::WalkDir;

/// File to scan
#[derive(Debug, Clone)]
pub struct ScanFile {
    pub path: PathBuf,
    /// Path relative to the scan root, `/`-separated
    pub relative_path: String,
}

/// Files selected for scanning plus the paths that could not be visited
#[derive(Debug, Default)]
pub struct DirectoryListing {
    pub files: Vec<ScanFile>,
    pub skipped: Vec<SkippedPath>,
}

/// Directory scanner for finding files to scan
#[derive(Debug, Clone)]
pub struct DirectoryScanner {
    exclude_dirs: Vec<String>,
    exclude_extensions: Vec<String>,
}

impl DirectoryScanner {
    pub fn new(exclude_dirs: Vec<String>, exclude_extensions: Vec<String>) -> Self {
        Self {
            exclude_dirs,
            exclude_extensions: exclude_extensions
                .into_iter()
                .map(|e| e.to_ascii_lowercase())
                .collect(),
        }
    }

    /// Walk `root` in file-name order without following symlinks.
    ///
    /// Hidden files and excluded extensions are dropped silently; symlinks and
    /// unreadable directories are reported in `skipped`.
    #[instrument(skip(self), fields(root = %root.display()))]
    pub fn scan(&self, root: &Path) -> Result<DirectoryListing, std::io::Error> {
        if !root.is_dir() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("scan root is not a directory: {}", root.display()),
            ));
        }

        let mut listing = DirectoryListing::default();
        let mut excluded_count = 0usize;

        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !self.is_excluded_dir(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e
                        .path()
                        .map(|p| relative_display(root, p))
                        .unwrap_or_default();
                    let reason = e
                        .io_error()
                        .map(SkipReason::from)
                        .unwrap_or_else(|| SkipReason::Io(e.to_string()));
                    debug!(path = %path, reason = %reason, "Skipping unreadable entry");
                    listing.skipped.push(SkippedPath::new(path, reason));
                    continue;
                }
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                continue;
            }

            let relative_path = relative_display(root, entry.path());
            if file_type.is_symlink() {
                trace!(file = %relative_path, "Skipping symlink");
                listing
                    .skipped
                    .push(SkippedPath::new(relative_path, SkipReason::Symlink));
                continue;
            }

            if !self.is_candidate_file(entry.path()) {
                trace!(file = %relative_path, "Excluding file");
                excluded_count += 1;
                continue;
            }

            listing.files.push(ScanFile {
                path: entry.path().to_path_buf(),
                relative_path,
            });
        }

        debug!(
            file_count = listing.files.len(),
            excluded = excluded_count,
            skipped = listing.skipped.len(),
            "Directory scan completed"
        );
        Ok(listing)
    }

    fn is_excluded_dir(&self, entry: &walkdir::DirEntry) -> bool {
        entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .map(|name| self.exclude_dirs.iter().any(|d| d == name))
                .unwrap_or(false)
    }

    /// Hidden files and excluded extensions are never scanned
    fn is_candidate_file(&self, path: &Path) -> bool {
        let hidden = path
            .file_name()
            .map(|n| n.to_string_lossy().starts_with('.'))
            .unwrap_or(true);
        if hidden {
            return false;
        }

        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => !self
                .exclude_extensions
                .iter()
                .any(|excluded| excluded.eq_ignore_ascii_case(ext)),
            None => true,
        }
    }
}
