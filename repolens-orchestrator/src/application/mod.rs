//! Application layer for the orchestrator

pub mod assistant;
pub mod errors;
pub mod pipeline;

pub use assistant::{QuestionAnswerer, RuleBasedAnswerer};
pub use errors::{AnalysisError, PipelineError};
pub use pipeline::{AnalysisService, AnalyzeRepositoryUseCase};
