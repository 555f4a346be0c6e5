//! Infrastructure layer for the orchestrator

pub mod git;
pub mod startup_audit;
pub mod tree_walker;

pub use git::{GitService, GitServiceConfig};
pub use startup_audit::StartupAuditor;
pub use tree_walker::{LineCounter, TreeWalk, TreeWalker, WalkError};
