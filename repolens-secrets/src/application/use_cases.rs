//! Secret detection use cases

use std::path::Path;
use tracing::{debug, error, info, instrument};

use repolens_core::config::SecretDetectionConfig;
use repolens_core::domain::SecurityFinding;
use repolens_core::infrastructure::fs::{read_lines, FileRead, SkippedPath};

use crate::infrastructure::detectors::RegexDetector;
use crate::infrastructure::rules::RuleRepository;
use crate::infrastructure::scanner::{DirectoryScanner, ScanFile};

/// Result of a secret detection scan
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Findings in traversal order, then line order, then rule order
    pub findings: Vec<SecurityFinding>,
    pub files_scanned: usize,
    /// Files and directories that contributed nothing, with the reason
    pub skipped: Vec<SkippedPath>,
}

/// Use case for scanning a project for secrets
#[derive(Debug, Clone)]
pub struct ScanForSecretsUseCase {
    scanner: DirectoryScanner,
    detector: RegexDetector,
}

impl ScanForSecretsUseCase {
    pub fn new() -> Self {
        Self::with_config(&SecretDetectionConfig::default())
    }

    pub fn with_config(config: &SecretDetectionConfig) -> Self {
        let scanner = DirectoryScanner::new(
            config.exclude_dirs.clone(),
            config.exclude_extensions.clone(),
        );

        let detector = match config.rule_file_path {
            Some(ref rule_file_path) => RegexDetector::new(
                RuleRepository::with_file_and_defaults(rule_file_path)
                    .get_all_rules()
                    .to_vec(),
            ),
            None => RegexDetector::with_default_rules(),
        };

        Self { scanner, detector }
    }

    /// Scan with an explicit rule table instead of the configured one
    pub fn with_rules(config: &SecretDetectionConfig, rules: RuleRepository) -> Self {
        Self {
            scanner: DirectoryScanner::new(
                config.exclude_dirs.clone(),
                config.exclude_extensions.clone(),
            ),
            detector: RegexDetector::new(rules.get_all_rules().to_vec()),
        }
    }

    #[instrument(skip(self), fields(root = %root.display()))]
    pub fn execute(&self, root: &Path) -> Result<ScanResult, ScanError> {
        info!("Starting secret detection scan");
        let listing = self.scanner.scan(root).map_err(|e| {
            error!(error = %e, "Failed to scan directory");
            ScanError::Io(e)
        })?;

        let mut result = ScanResult {
            skipped: listing.skipped,
            ..ScanResult::default()
        };

        for file in &listing.files {
            match self.scan_file(file) {
                FileRead::Read(findings) => {
                    result.files_scanned += 1;
                    result.findings.extend(findings);
                }
                FileRead::Skipped(reason) => {
                    debug!(file = %file.relative_path, reason = %reason, "Skipping file");
                    result
                        .skipped
                        .push(SkippedPath::new(file.relative_path.clone(), reason));
                }
            }
        }

        info!(
            finding_count = result.findings.len(),
            files_scanned = result.files_scanned,
            skipped = result.skipped.len(),
            "Secret detection scan completed"
        );
        Ok(result)
    }

    /// Findings for one file; a file that fails mid-read contributes nothing
    fn scan_file(&self, file: &ScanFile) -> FileRead<Vec<SecurityFinding>> {
        let mut findings = Vec::new();
        let outcome = read_lines(&file.path, |line_number, line| {
            for rule in self.detector.detect_line(line, line_number) {
                findings.push(SecurityFinding {
                    severity: rule.severity,
                    file: file.relative_path.clone(),
                    line: line_number,
                    description: rule.description.clone(),
                });
            }
        });

        match outcome {
            FileRead::Read(_) => FileRead::Read(findings),
            FileRead::Skipped(reason) => FileRead::Skipped(reason),
        }
    }
}

impl Default for ScanForSecretsUseCase {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan error
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
