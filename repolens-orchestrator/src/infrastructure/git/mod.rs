mod service;

pub use crate::domain::services::{MaterializeError, RepositoryMaterializer};
pub use service::{GitService, GitServiceConfig};
