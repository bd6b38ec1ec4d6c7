//! Error handling for ticket processing operations.
//!
//! Provides error types with document context for structural parse
//! failures, year resolution failures, and external tool failures.
//! Per-document errors are caught at the batch boundary; genuine
//! internal bugs stay panics and halt the run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("document marker 'Print Selv-billet' not found in: {path}")]
    MissingMarker { path: PathBuf },

    #[error("duplicate '{section}' section in: {path}")]
    DuplicateSection { path: PathBuf, section: String },

    #[error("unrecognized section header '{header}' in: {path}")]
    UnknownSection { path: PathBuf, header: String },

    #[error("document ended before 'VIGTIGT' terminator: {path}")]
    Unterminated { path: PathBuf },

    #[error(
        "'{section}' section in {path}: expected {expected} field values, found {found}"
    )]
    SectionArity {
        path: PathBuf,
        section: String,
        expected: usize,
        found: usize,
    },

    #[error("invalid price line '{line}' in: {path}")]
    InvalidPrice { path: PathBuf, line: String },

    #[error(
        "unexpected date/time sequence in {path}: {dates} date tokens, {times} time tokens"
    )]
    TokenSequence {
        path: PathBuf,
        dates: usize,
        times: usize,
    },

    #[error("year resolution failed for {path}: {reason}")]
    DateResolution { path: PathBuf, reason: String },

    #[error("empty {field} in parsed record for: {path}")]
    EmptyField { path: PathBuf, field: &'static str },

    #[error("text extraction failed for {path}: {reason}")]
    TextExtraction { path: PathBuf, reason: String },

    #[error("document not found: {path}")]
    DocumentNotFound { path: PathBuf },

    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a year resolution error with document context
    pub fn date_resolution(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::DateResolution {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a text extraction error with document context
    pub fn text_extraction(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::TextExtraction {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True for the structural-parse family of failures (the known
    /// document layout was violated, as opposed to year resolution or
    /// tooling trouble).
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::MissingMarker { .. }
                | Self::DuplicateSection { .. }
                | Self::UnknownSection { .. }
                | Self::Unterminated { .. }
                | Self::SectionArity { .. }
                | Self::InvalidPrice { .. }
                | Self::TokenSequence { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
