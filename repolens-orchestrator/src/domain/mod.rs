//! Orchestrator domain

pub mod services;
pub mod tasks;
pub mod working_copy;

pub use services::{MaterializeError, RepositoryMaterializer};
pub use tasks::synthesize_tasks;
pub use working_copy::WorkingCopy;
