//! Manifest parsers

pub mod npm;
pub mod python;
pub mod traits;

pub use npm::NpmParser;
pub use python::RequirementsTxtParser;
pub use traits::{default_parsers, ManifestParser};
