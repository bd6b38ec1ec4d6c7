//! Command-line argument definitions for the billet renamer
//!
//! This module defines the complete CLI interface using the clap derive
//! API.

use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// CLI arguments for the billet renamer
///
/// Parses DSB "Print Selv-billet" PDFs and renames them to canonical,
/// sortable filenames derived from the ticket contents.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "billet-renamer",
    version,
    about = "Rename DSB Print Selv-billet PDFs to canonical, sortable filenames",
    long_about = "Extracts a structured ticket record from each self-print ticket PDF via \
                  pdftotext, infers the travel year from corroborating dates inside the \
                  document, and renames the file to a timestamp-first identifier such as \
                  2023-12-24T0815-1442_Kbh_Aarhus_Standard.pdf. Existing files are never \
                  overwritten."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the billet renamer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse tickets and rename the documents (main command)
    Rename(RenameArgs),
    /// Parse tickets and print the record and proposed name, touching nothing
    Inspect(InspectArgs),
}

/// Arguments for the rename command
#[derive(Debug, Clone, Parser)]
pub struct RenameArgs {
    /// Ticket PDFs to process, or directories to scan for PDFs
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Reference date (YYYY-MM-DD) used to disambiguate the travel year
    ///
    /// When supplied it takes precedence over date mentions found inside
    /// the documents.
    #[arg(long = "date-hint", value_name = "YYYY-MM-DD")]
    pub date_hint: Option<NaiveDate>,

    /// Report renames without touching the filesystem
    #[arg(long = "dry-run", help = "Report renames without touching the filesystem")]
    pub dry_run: bool,

    /// Number of documents processed concurrently
    ///
    /// Defaults to the number of logical CPUs.
    #[arg(short = 'w', long = "workers", value_name = "N")]
    pub workers: Option<usize>,

    /// Suppress progress bar and summary output
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl RenameArgs {
    /// Validate argument combinations before any work starts
    pub fn validate(&self) -> Result<()> {
        if self.quiet && self.verbose > 0 {
            return Err(Error::configuration(
                "--quiet and --verbose are mutually exclusive",
            ));
        }
        Ok(())
    }

    /// Log level implied by the verbosity flags
    pub fn log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }

    /// Whether a progress bar should be shown
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.verbose == 0
    }
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Ticket PDFs to inspect, or directories to scan for PDFs
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Reference date (YYYY-MM-DD) used to disambiguate the travel year
    #[arg(long = "date-hint", value_name = "YYYY-MM-DD")]
    pub date_hint: Option<NaiveDate>,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl InspectArgs {
    /// Log level implied by the verbosity flags
    pub fn log_level(&self) -> &'static str {
        log_level(self.verbose, false)
    }
}

fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
