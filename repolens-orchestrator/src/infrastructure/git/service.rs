use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use git2::{build::RepoBuilder, opts, FetchOptions};
use tempfile::TempDir;
use tracing::{debug, info, warn};

use repolens_core::config::GitConfig;

use crate::domain::services::{MaterializeError, RepositoryMaterializer};
use crate::domain::WorkingCopy;

/// Configuration for the Git service.
#[derive(Debug, Clone)]
pub struct GitServiceConfig {
    /// Optional parent directory for temporary checkouts. Defaults to std::env::temp_dir().
    pub checkout_parent: Option<PathBuf>,
    /// Timeout applied to network fetches (passed down to libgit2).
    pub fetch_timeout: Duration,
    /// Upper bound for the whole clone.
    pub clone_timeout: Duration,
    /// Also accept `file://` URLs and local paths.
    pub allow_local_sources: bool,
}

impl Default for GitServiceConfig {
    fn default() -> Self {
        Self::from(&GitConfig::default())
    }
}

impl From<&GitConfig> for GitServiceConfig {
    fn from(config: &GitConfig) -> Self {
        Self {
            checkout_parent: config.checkout_parent.clone(),
            fetch_timeout: config.fetch_timeout(),
            clone_timeout: config.clone_timeout(),
            allow_local_sources: config.allow_local_sources,
        }
    }
}

/// Where a clone reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceKind {
    Remote,
    Local,
}

/// Clones repositories at shallow depth into temporary checkouts.
#[derive(Debug)]
pub struct GitService {
    checkout_parent: PathBuf,
    config: GitServiceConfig,
}

impl GitService {
    /// Create a new Git service with the provided configuration.
    pub fn new(config: GitServiceConfig) -> std::io::Result<Self> {
        let checkout_parent = config
            .checkout_parent
            .clone()
            .unwrap_or_else(std::env::temp_dir);

        if !checkout_parent.exists() {
            std::fs::create_dir_all(&checkout_parent)?;
        }

        Ok(Self {
            checkout_parent,
            config,
        })
    }

    fn source_kind(&self, repository_url: &str) -> Result<SourceKind, MaterializeError> {
        if repository_url.starts_with("https://") {
            return Ok(SourceKind::Remote);
        }
        if self.config.allow_local_sources
            && (repository_url.starts_with("file://") || Path::new(repository_url).is_dir())
        {
            return Ok(SourceKind::Local);
        }
        Err(MaterializeError::UnsupportedScheme(
            repository_url.to_string(),
        ))
    }

    fn perform_clone(
        destination: &Path,
        repository_url: &str,
        source: SourceKind,
    ) -> Result<Option<String>, MaterializeError> {
        let mut fetch_options = FetchOptions::new();
        fetch_options.download_tags(git2::AutotagOption::None);
        fetch_options.update_fetchhead(true);
        fetch_options.proxy_options(git2::ProxyOptions::new());
        // the local transport does not support shallow fetches
        if source == SourceKind::Remote {
            fetch_options.depth(1);
        }

        let mut builder = RepoBuilder::new();
        builder.fetch_options(fetch_options);
        let repo = builder.clone(repository_url, destination)?;
        let head = repo
            .head()
            .ok()
            .and_then(|h| h.target())
            .map(|oid| oid.to_string());
        Ok(head)
    }

    fn configure_git_timeouts(fetch_timeout: Duration) -> Result<(), MaterializeError> {
        let timeout_ms = fetch_timeout.as_millis().clamp(1, i32::MAX as u128) as i32;
        unsafe {
            opts::set_server_connect_timeout_in_milliseconds(timeout_ms)?;
            opts::set_server_timeout_in_milliseconds(timeout_ms)?;
        }
        Ok(())
    }
}

#[async_trait]
impl RepositoryMaterializer for GitService {
    /// Clone `url` into a fresh temp directory owned by the returned working copy.
    async fn materialize(&self, url: &str) -> Result<WorkingCopy, MaterializeError> {
        let source = self.source_kind(url)?;

        let checkout_dir = tempfile::Builder::new()
            .prefix("repolens-git-")
            .tempdir_in(&self.checkout_parent)?;
        let repo_url = url.to_string();
        let clone_timeout = self.config.clone_timeout;

        info!(repository = %repo_url, "Starting Git clone");

        if source == SourceKind::Remote {
            Self::configure_git_timeouts(self.config.fetch_timeout)?;
        }

        // The checkout moves into the worker so an abandoned clone still
        // removes its directory when it finishes.
        let clone = tokio::task::spawn_blocking(move || -> Result<TempDir, MaterializeError> {
            let head = Self::perform_clone(checkout_dir.path(), &repo_url, source)?;
            debug!(path = %checkout_dir.path().display(), head = ?head, "Git clone completed");
            Ok(checkout_dir)
        });

        match tokio::time::timeout(clone_timeout, clone).await {
            Ok(joined) => Ok(WorkingCopy::Owned(joined??)),
            Err(_) => {
                warn!(repository = %url, "Git clone timed out");
                Err(MaterializeError::Timeout(clone_timeout.as_secs()))
            }
        }
    }
}
