//! Runtime configuration for ticket processing.
//!
//! All options come from command-line flags; there is no configuration
//! file and no persisted state. The config is assembled once per run and
//! shared read-only across document tasks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Options controlling one batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Maximum number of documents processed concurrently
    pub workers: usize,

    /// Report renames without touching the filesystem
    pub dry_run: bool,

    /// Fallback disambiguation hint for year resolution. When supplied it
    /// takes precedence over hints found inside the document.
    pub date_hint: Option<NaiveDate>,

    /// Suppress the progress bar and summary output
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            dry_run: false,
            date_hint: None,
            quiet: false,
        }
    }
}

impl Config {
    /// Build a config from explicit options, validating worker count
    pub fn new(
        workers: Option<usize>,
        dry_run: bool,
        date_hint: Option<NaiveDate>,
        quiet: bool,
    ) -> Result<Self> {
        let workers = workers.unwrap_or_else(default_workers);
        if workers == 0 {
            return Err(Error::configuration("worker count must be at least 1"));
        }

        let config = Self {
            workers,
            dry_run,
            date_hint,
            quiet,
        };
        debug!("Resolved configuration: {:?}", config);
        Ok(config)
    }
}

/// Default worker count: one per logical CPU, at least one
fn default_workers() -> usize {
    num_cpus::get().max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_workers_positive() {
        assert!(Config::default().workers >= 1);
    }

    #[test]
    fn test_zero_workers_rejected() {
        let result = Config::new(Some(0), false, None, false);
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_explicit_workers_kept() {
        let config = Config::new(Some(3), true, None, true).unwrap();
        assert_eq!(config.workers, 3);
        assert!(config.dry_run);
        assert!(config.quiet);
    }
}
