//! Repository profile entities

use serde::{Deserialize, Serialize};

use super::value_objects::{DependencyKind, IssueKind, Severity};

/// Node of the repository file tree.
///
/// A file never carries children and a folder always does, so the two shapes
/// are separate variants rather than optional fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FileNode {
    File {
        name: String,
        /// Newline-delimited record count, 0 for unreadable or binary files
        loc: u64,
    },
    Folder {
        name: String,
        children: Vec<FileNode>,
    },
}

impl FileNode {
    pub fn file(name: impl Into<String>, loc: u64) -> Self {
        Self::File {
            name: name.into(),
            loc,
        }
    }

    /// Build a folder, ordering children folders first and then by name
    pub fn folder(name: impl Into<String>, mut children: Vec<FileNode>) -> Self {
        children.sort_by(|a, b| {
            b.is_folder()
                .cmp(&a.is_folder())
                .then_with(|| a.name().cmp(b.name()))
        });
        Self::Folder {
            name: name.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::File { name, .. } | Self::Folder { name, .. } => name,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder { .. })
    }

    pub fn loc(&self) -> Option<u64> {
        match self {
            Self::File { loc, .. } => Some(*loc),
            Self::Folder { .. } => None,
        }
    }

    pub fn children(&self) -> &[FileNode] {
        match self {
            Self::File { .. } => &[],
            Self::Folder { children, .. } => children,
        }
    }

    /// Depth-first iterator over every node below (and including) this one
    pub fn iter(&self) -> impl Iterator<Item = &FileNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children().iter().rev());
            Some(node)
        })
    }

    /// Number of file nodes in the subtree
    pub fn file_count(&self) -> usize {
        self.iter().filter(|n| !n.is_folder()).count()
    }

    /// Sum of `loc` across the subtree
    pub fn total_loc(&self) -> u64 {
        self.iter().filter_map(FileNode::loc).sum()
    }
}

/// Declared dependency of the analysed project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    /// Version as declared, `"latest"` when the manifest gives none
    pub version: String,
    #[serde(rename = "type")]
    pub kind: DependencyKind,
    #[serde(rename = "is_deprecated")]
    pub is_flagged_stale: bool,
}

/// Leaked-credential finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityFinding {
    pub severity: Severity,
    /// Path relative to the repository root, `/`-separated
    pub file: String,
    /// 1-based line number
    pub line: u32,
    pub description: String,
}

/// Reason the project would fail (or misbehave) on first start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartupIssue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub title: String,
    pub description: String,
    /// Literal remediation command or instruction
    pub fix: String,
}

/// Inferred toolchain facts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentProfile {
    pub language: String,
    pub framework: String,
    pub build_system: String,
    pub node_version: String,
}

impl EnvironmentProfile {
    pub const UNKNOWN: &'static str = "Unknown";
    pub const JAVASCRIPT: &'static str = "JavaScript/TypeScript";
    pub const PYTHON: &'static str = "Python";

    pub fn is_javascript(&self) -> bool {
        self.language == Self::JAVASCRIPT
    }

    pub fn is_python(&self) -> bool {
        self.language == Self::PYTHON
    }
}

impl Default for EnvironmentProfile {
    fn default() -> Self {
        Self {
            language: Self::UNKNOWN.to_string(),
            framework: Self::UNKNOWN.to_string(),
            build_system: Self::UNKNOWN.to_string(),
            node_version: Self::UNKNOWN.to_string(),
        }
    }
}

/// Everything known about one analysed repository.
///
/// Built once per analysis and stored whole; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryProfile {
    pub repo_id: String,
    pub environment: EnvironmentProfile,
    pub dependencies: Vec<Dependency>,
    pub structure: FileNode,
    pub tasks: Vec<String>,
    pub security: Vec<SecurityFinding>,
    pub startup_issues: Vec<StartupIssue>,
}

impl RepositoryProfile {
    /// No startup issue was raised
    pub fn is_ready_to_run(&self) -> bool {
        self.startup_issues.is_empty()
    }
}
