//! Infrastructure layer - filesystem access and store backends

pub mod fs;
pub mod store;

pub use fs::{
    count_lines, count_lines_from, read_lines, read_lines_from, relative_display, FileRead,
    SkipReason, SkippedPath,
};
pub use store::{build_profile_store, BoundedProfileStore, InMemoryProfileStore};
