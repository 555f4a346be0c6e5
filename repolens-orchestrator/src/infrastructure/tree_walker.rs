//! File tree construction with per-file line counts

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, trace};

use repolens_core::domain::FileNode;
use repolens_core::infrastructure::fs::{
    count_lines, relative_display, FileRead, SkipReason, SkippedPath,
};

/// Directory name never descended into
const CACHE_DIR: &str = "__pycache__";

/// Walk outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeWalk {
    pub root: FileNode,
    /// Paths that were omitted or counted as zero lines, with the reason
    pub skipped: Vec<SkippedPath>,
}

/// Tree walk errors
#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    #[error("Walk root {0} does not exist")]
    NotFound(PathBuf),
    #[error("Walk root {0} is not a directory")]
    NotADirectory(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Counts the line records of one regular file
pub type LineCounter = fn(&Path) -> FileRead<u64>;

/// Builds the [`FileNode`] tree of a checkout
#[derive(Debug, Clone)]
pub struct TreeWalker {
    max_depth: usize,
    line_counter: LineCounter,
}

impl TreeWalker {
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            line_counter: count_lines,
        }
    }

    /// Replace the per-file line counter
    pub fn with_line_counter(mut self, line_counter: LineCounter) -> Self {
        self.line_counter = line_counter;
        self
    }

    /// Walk `root` depth-first without following symlinks.
    ///
    /// Hidden entries and `__pycache__` are left out. Files that cannot be
    /// read, look binary or are symlinks get `loc = 0`. A subdirectory that
    /// cannot be listed, or is nested deeper than the limit, is omitted.
    #[instrument(skip(self), fields(root = %root.display()))]
    pub fn walk(&self, root: &Path) -> Result<TreeWalk, WalkError> {
        let metadata = fs::metadata(root).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => WalkError::NotFound(root.to_path_buf()),
            _ => WalkError::Io(e),
        })?;
        if !metadata.is_dir() {
            return Err(WalkError::NotADirectory(root.to_path_buf()));
        }

        let root_name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string());

        let mut skipped = Vec::new();
        let children = match self.children(root, root, 0, &mut skipped) {
            Ok(children) => children,
            Err(e) => {
                debug!(error = %e, "Walk root is not listable");
                skipped.push(SkippedPath::new("", SkipReason::from(&e)));
                Vec::new()
            }
        };

        let walk = TreeWalk {
            root: FileNode::folder(root_name, children),
            skipped,
        };
        debug!(
            files = walk.root.file_count(),
            total_loc = walk.root.total_loc(),
            skipped = walk.skipped.len(),
            "Tree walk completed"
        );
        Ok(walk)
    }

    /// Children of `dir`, which sits `depth` levels below the root
    fn children(
        &self,
        root: &Path,
        dir: &Path,
        depth: usize,
        skipped: &mut Vec<SkippedPath>,
    ) -> std::io::Result<Vec<FileNode>> {
        let entries = fs::read_dir(dir)?;

        let mut nodes = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    skipped.push(SkippedPath::new(
                        relative_display(root, dir),
                        SkipReason::from(&e),
                    ));
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') || name == CACHE_DIR {
                continue;
            }

            let path = entry.path();
            let relative = relative_display(root, &path);
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(e) => {
                    skipped.push(SkippedPath::new(relative, SkipReason::from(&e)));
                    nodes.push(FileNode::file(name, 0));
                    continue;
                }
            };

            if file_type.is_dir() {
                if depth + 1 > self.max_depth {
                    skipped.push(SkippedPath::new(relative, SkipReason::DepthLimit));
                    continue;
                }
                match self.children(root, &path, depth + 1, skipped) {
                    Ok(children) => nodes.push(FileNode::folder(name, children)),
                    Err(e) => {
                        trace!(dir = %relative, error = %e, "Omitting unlistable directory");
                        skipped.push(SkippedPath::new(relative, SkipReason::from(&e)));
                    }
                }
            } else if file_type.is_symlink() {
                skipped.push(SkippedPath::new(relative, SkipReason::Symlink));
                nodes.push(FileNode::file(name, 0));
            } else if file_type.is_file() {
                let loc = match (self.line_counter)(&path) {
                    FileRead::Read(loc) => loc,
                    FileRead::Skipped(reason) => {
                        skipped.push(SkippedPath::new(relative, reason));
                        0
                    }
                };
                nodes.push(FileNode::file(name, loc));
            } else {
                // fifo, socket or device: opening could block
                skipped.push(SkippedPath::new(
                    relative,
                    SkipReason::Io("not a regular file".to_string()),
                ));
                nodes.push(FileNode::file(name, 0));
            }
        }
        Ok(nodes)
    }
}
