//! Command implementations for the billet renamer CLI
//!
//! Each command lives in its own module:
//! - `rename`: the main extract-parse-format-rename workflow
//! - `inspect`: parse and report without touching the filesystem
//! - `shared`: logging setup, document discovery, batch statistics

pub mod inspect;
pub mod rename;
pub mod shared;

pub use shared::ProcessingStats;

use crate::cli::args::{Args, Commands};
use crate::error::{Error, Result};

/// Main command dispatcher
pub async fn run(args: Args) -> Result<ProcessingStats> {
    match args.command {
        Some(Commands::Rename(rename_args)) => rename::run_rename(rename_args).await,
        Some(Commands::Inspect(inspect_args)) => inspect::run_inspect(inspect_args).await,
        None => Err(Error::configuration("no command given")),
    }
}
