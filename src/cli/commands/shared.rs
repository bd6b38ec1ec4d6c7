//! Shared components for CLI commands
//!
//! Common types and helpers used by the rename and inspect commands:
//! logging setup, document discovery, progress reporting, and batch
//! statistics.

use std::path::PathBuf;
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Statistics for one batch run, reported at the end
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Number of documents attempted
    pub documents: usize,
    /// Number of documents renamed
    pub renamed: usize,
    /// Number of documents skipped because the target already existed
    pub skipped_existing: usize,
    /// Number of dry-run rename reports
    pub dry_run: usize,
    /// Number of documents that failed parsing or extraction
    pub failed: usize,
    /// Total wall-clock time
    pub processing_time: Duration,
}

impl ProcessingStats {
    /// Print a human-readable summary to stdout
    pub fn print_summary(&self) {
        println!();
        println!("{}", "Summary".bold());
        println!("  documents:        {}", self.documents);
        println!("  renamed:          {}", self.renamed.to_string().green());
        if self.dry_run > 0 {
            println!("  dry-run:          {}", self.dry_run.to_string().cyan());
        }
        if self.skipped_existing > 0 {
            println!(
                "  target existed:   {}",
                self.skipped_existing.to_string().yellow()
            );
        }
        if self.failed > 0 {
            println!("  failed:           {}", self.failed.to_string().red());
        }
        println!("  elapsed:          {:.2?}", self.processing_time);
    }
}

/// Set up structured logging for a command run
pub fn setup_logging(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("billet_renamer={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Create a progress bar for batch processing
pub fn create_progress_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-"),
    );
    bar
}

/// Expand the given paths into a flat, ordered list of ticket documents.
///
/// Files are taken as-is; directories are walked recursively for `.pdf`
/// files (case-insensitive). A missing path is an error.
pub fn discover_documents(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut documents = Vec::new();

    for path in paths {
        if path.is_file() {
            documents.push(path.clone());
        } else if path.is_dir() {
            let mut found = Vec::new();
            for entry in WalkDir::new(path).follow_links(false) {
                let entry = entry.map_err(|e| {
                    Error::configuration(format!(
                        "failed to walk directory {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                if entry.file_type().is_file() && is_pdf(entry.path()) {
                    found.push(entry.path().to_path_buf());
                }
            }
            found.sort();
            debug!("Discovered {} documents under {}", found.len(), path.display());
            documents.extend(found);
        } else {
            return Err(Error::DocumentNotFound { path: path.clone() });
        }
    }

    Ok(documents)
}

fn is_pdf(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}
