//! Secret detection rules

pub mod default_rules;
pub mod loader;

pub use default_rules::*;
pub use loader::*;
