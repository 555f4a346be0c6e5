//! Infrastructure layer for secret detection

pub mod detectors;
pub mod rules;
pub mod scanner;

pub use detectors::*;
pub use rules::*;
pub use scanner::*;
