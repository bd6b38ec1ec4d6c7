//! Inspect command implementation
//!
//! Parses tickets and prints the resolved record and the proposed
//! filename without touching the filesystem. Useful for verifying what
//! a rename run would do, one document at a time.

use std::time::Instant;

use colored::Colorize;
use tracing::error;

use super::shared::{ProcessingStats, discover_documents, setup_logging};
use crate::app::models::TicketRecord;
use crate::app::services::formatter::format_identifier;
use crate::app::services::renamer::target_path;
use crate::app::services::text_extractor::extract_text;
use crate::app::services::ticket_parser::TicketParser;
use crate::cli::args::InspectArgs;
use crate::error::Result;

/// Inspect command runner
pub async fn run_inspect(args: InspectArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(args.log_level());

    let documents = discover_documents(&args.paths)?;
    let parser = TicketParser::with_date_hint(args.date_hint);

    let mut stats = ProcessingStats {
        documents: documents.len(),
        ..Default::default()
    };

    for document in &documents {
        match inspect_document(&parser, document).await {
            Ok(()) => {}
            Err(e) => {
                error!("Failed to inspect {}: {}", document.display(), e);
                stats.failed += 1;
            }
        }
    }

    stats.processing_time = start_time.elapsed();
    Ok(stats)
}

async fn inspect_document(parser: &TicketParser, document: &std::path::Path) -> Result<()> {
    let raw = extract_text(document).await?;
    let parsed = parser.parse(document, &raw)?;
    let identifier = format_identifier(&parsed.record);

    println!("{}", document.display().to_string().bold());
    print_record(&parsed.record);
    if let Some(price) = parsed.summary.last_price {
        println!("  price:          {} kr.", price);
    }
    println!(
        "  proposed name:  {}",
        target_path(document, &identifier).display().to_string().green()
    );
    println!();
    Ok(())
}

fn print_record(record: &TicketRecord) {
    println!(
        "  departure:      {:04}-{:02}-{:02} {:02}:{:02}",
        record.year, record.month, record.day, record.from_hour, record.from_minute
    );
    println!(
        "  arrival:        {:02}:{:02}",
        record.to_hour, record.to_minute
    );
    println!("  origin:         {}", record.origin);
    println!("  destination:    {}", record.destination);
    if let Some(control) = &record.control_number {
        println!("  control number: {}", control);
    }
    if let Some(ticket_type) = &record.ticket_type {
        println!("  ticket type:    {}", ticket_type);
    }
    if let Some(train) = &record.train_number {
        println!("  train:          {}", train);
    }
    if let (Some(wagon), Some(seat)) = (&record.wagon, &record.seat) {
        println!("  wagon/seat:     {} / {}", wagon, seat);
    }
    if let Some(seat_type) = &record.seat_type {
        println!("  seat type:      {}", seat_type);
    }
}
