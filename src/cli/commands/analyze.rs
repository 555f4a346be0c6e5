//! Analyze Command - Profile one repository

use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use repolens_core::domain::RepositoryProfile;

use crate::app::AppHandle;
use crate::cli::OutputFormat;

/// Arguments for the analyze command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// HTTPS clone URL, or a directory path with --local
    pub source: String,

    /// Analyze a local directory in place instead of cloning
    #[arg(long)]
    pub local: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,

    /// Ask a follow-up question about the analysed repository
    #[arg(long)]
    pub ask: Option<String>,
}

/// Run the analyze command, printing the profile (and answer) to stdout
pub async fn run(args: &AnalyzeArgs, app: &AppHandle) -> Result<()> {
    let profile = if args.local {
        let path = PathBuf::from(&args.source);
        app.analysis
            .analyze_local(&path)
            .await
            .with_context(|| format!("Failed to analyze {}", path.display()))?
    } else {
        app.analysis
            .analyze(&args.source)
            .await
            .with_context(|| format!("Failed to analyze {}", args.source))?
    };

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(profile.as_ref())
                .context("Failed to serialize profile")?;
            println!("{}", json);
        }
        OutputFormat::Summary => print!("{}", Summary(&profile)),
    }

    if let Some(question) = &args.ask {
        let answer = app
            .answerer
            .answer(&profile.repo_id, question)
            .await
            .context("Failed to answer question")?;
        println!("\n> {}\n{}", question, answer);
    }

    Ok(())
}

/// Human-readable digest of a profile
pub struct Summary<'a>(pub &'a RepositoryProfile);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = self.0;
        let env = &profile.environment;

        writeln!(f, "Repository: {}", profile.repo_id)?;
        writeln!(
            f,
            "Environment: {} / {} (build: {}, node: {})",
            env.language, env.framework, env.build_system, env.node_version
        )?;
        writeln!(
            f,
            "Structure: {} files, {} lines",
            profile.structure.file_count(),
            profile.structure.total_loc()
        )?;

        let stale = profile
            .dependencies
            .iter()
            .filter(|d| d.is_flagged_stale)
            .count();
        writeln!(
            f,
            "Dependencies: {} ({} flagged stale)",
            profile.dependencies.len(),
            stale
        )?;

        writeln!(f, "Security findings: {}", profile.security.len())?;
        for finding in &profile.security {
            writeln!(
                f,
                "  [{}] {}:{} {}",
                finding.severity, finding.file, finding.line, finding.description
            )?;
        }

        if profile.is_ready_to_run() {
            writeln!(f, "Startup issues: none")?;
        } else {
            writeln!(f, "Startup issues: {}", profile.startup_issues.len())?;
            for issue in &profile.startup_issues {
                writeln!(
                    f,
                    "  [{}] {}: {} (fix: {})",
                    issue.kind, issue.title, issue.description, issue.fix
                )?;
            }
        }

        writeln!(f, "Tasks:")?;
        for (index, task) in profile.tasks.iter().enumerate() {
            writeln!(f, "  {}. {}", index + 1, task)?;
        }
        Ok(())
    }
}
