//! Rename command implementation
//!
//! The main workflow: extract text from each document, parse it into a
//! ticket record, format the canonical identifier, and rename the file.
//! Documents are independent; a failure is logged and counted and the
//! batch continues.

use std::path::Path;
use std::time::Instant;

use futures::StreamExt;
use tracing::{debug, error, info};

use super::shared::{ProcessingStats, create_progress_bar, discover_documents, setup_logging};
use crate::app::models::RenameOutcome;
use crate::app::services::formatter::format_identifier;
use crate::app::services::renamer::rename_to_identifier;
use crate::app::services::text_extractor::extract_text;
use crate::app::services::ticket_parser::TicketParser;
use crate::cli::args::RenameArgs;
use crate::config::Config;
use crate::error::Result;

/// Rename command runner
///
/// Orchestrates the workflow:
/// 1. Set up logging and validate arguments
/// 2. Discover the documents to process
/// 3. Process documents concurrently with progress reporting
/// 4. Report summary statistics
pub async fn run_rename(args: RenameArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(args.log_level());
    args.validate()?;

    let config = Config::new(args.workers, args.dry_run, args.date_hint, args.quiet)?;
    let documents = discover_documents(&args.paths)?;

    info!(
        "Processing {} documents with {} workers{}",
        documents.len(),
        config.workers,
        if config.dry_run { " (dry run)" } else { "" }
    );

    let mut stats = ProcessingStats {
        documents: documents.len(),
        ..Default::default()
    };

    let progress = args
        .show_progress()
        .then(|| create_progress_bar(documents.len() as u64));

    let parser = TicketParser::with_date_hint(config.date_hint);
    let mut outcomes = futures::stream::iter(documents)
        .map(|document| {
            let parser = parser.clone();
            let dry_run = config.dry_run;
            async move {
                let outcome = process_document(&parser, &document, dry_run).await;
                (document, outcome)
            }
        })
        .buffer_unordered(config.workers);

    while let Some((document, outcome)) = outcomes.next().await {
        match outcome {
            Ok(RenameOutcome::Renamed(target)) => {
                stats.renamed += 1;
                debug!("{} -> {}", document.display(), target.display());
            }
            Ok(RenameOutcome::DryRun(target)) => {
                stats.dry_run += 1;
                if let Some(bar) = &progress {
                    bar.println(format!(
                        "would rename {} -> {}",
                        document.display(),
                        target.display()
                    ));
                }
            }
            Ok(RenameOutcome::TargetExists(_)) => {
                stats.skipped_existing += 1;
            }
            Err(e) => {
                // Per-document failure; the batch continues
                error!("Failed to process {}: {}", document.display(), e);
                stats.failed += 1;
            }
        }
        if let Some(bar) = &progress {
            bar.inc(1);
        }
    }

    if let Some(bar) = &progress {
        bar.finish_and_clear();
    }

    stats.processing_time = start_time.elapsed();
    if !config.quiet {
        stats.print_summary();
    }

    Ok(stats)
}

/// Process one document end to end: extract, parse, format, rename
async fn process_document(
    parser: &TicketParser,
    document: &Path,
    dry_run: bool,
) -> Result<RenameOutcome> {
    let raw = extract_text(document).await?;
    let parsed = parser.parse(document, &raw)?;
    debug!(
        "{}: price {:?}, fare kinds {:?}",
        document.display(),
        parsed.summary.last_price,
        parsed.summary.fare_kinds
    );

    let identifier = format_identifier(&parsed.record);
    rename_to_identifier(document, &identifier, dry_run)
}
