//! RepoLens Orchestrator - Repository analysis pipeline
//!
//! Turns a freshly materialized checkout into a [`RepositoryProfile`] and
//! stores it for follow-up questions.
//!
//! # Architecture
//!
//! ```text
//! repolens-orchestrator/
//! ├── application/      # Pipeline, analysis service, question answering
//! ├── infrastructure/   # Tree walker, startup auditor, git clone service
//! └── domain/           # Tasks, working copies, collaborator traits
//! ```
//!
//! # Pipeline
//!
//! | Step | Component |
//! |------|-----------|
//! | structure | [`infrastructure::TreeWalker`] |
//! | environment, dependencies | [`repolens_deps::DetectEnvironmentUseCase`] |
//! | security | [`repolens_secrets::ScanForSecretsUseCase`] |
//! | startup issues | [`infrastructure::StartupAuditor`] |
//! | tasks | [`domain::synthesize_tasks`] |
//!
//! All filesystem work runs on the blocking pool. Code from the analysed
//! repository is never executed.
//!
//! [`RepositoryProfile`]: repolens_core::domain::RepositoryProfile

pub mod application;
pub mod domain;
pub mod infrastructure;
