//! Infrastructure layer for dependency detection

pub mod parsers;

pub use parsers::*;
