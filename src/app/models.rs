//! Core data structures for ticket processing.
//!
//! Defines section kinds, the resolved ticket record, scan by-products,
//! and rename outcomes used throughout the library.

use crate::constants::{
    SECTION_SEAT_RESERVATION, SECTION_TICKET_INFO, SEAT_RESERVATION_ARITY, TICKET_INFO_ARITY,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The two known section types of a self-print ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    TicketInformation,
    SeatReservation,
}

impl SectionKind {
    /// Detect a section kind from an exact header line
    pub fn from_header(line: &str) -> Option<Self> {
        match line {
            SECTION_TICKET_INFO => Some(SectionKind::TicketInformation),
            SECTION_SEAT_RESERVATION => Some(SectionKind::SeatReservation),
            _ => None,
        }
    }

    /// The header text of this section as it appears in the document
    pub fn header(&self) -> &'static str {
        match self {
            SectionKind::TicketInformation => SECTION_TICKET_INFO,
            SectionKind::SeatReservation => SECTION_SEAT_RESERVATION,
        }
    }

    /// The exact raw field count this section must yield
    pub fn expected_fields(&self) -> usize {
        match self {
            SectionKind::TicketInformation => TICKET_INFO_ARITY,
            SectionKind::SeatReservation => SEAT_RESERVATION_ARITY,
        }
    }
}

/// A partial departure/arrival date as printed on the ticket: day of
/// month plus a Danish month abbreviation, no year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateToken {
    pub day: u32,
    pub month_abbr: String,
}

/// A clock time as printed on the ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeToken {
    pub hour: u32,
    pub minute: u32,
}

/// The resolved, immutable output of parsing one document.
///
/// The year is inferred, never present verbatim in the source text.
/// Optional fields are populated only when the corresponding section
/// exists in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRecord {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub from_hour: u32,
    pub from_minute: u32,
    pub to_hour: u32,
    pub to_minute: u32,
    pub origin: String,
    pub destination: String,
    pub control_number: Option<String>,
    pub ticket_type: Option<String>,
    pub train_number: Option<String>,
    pub wagon: Option<String>,
    pub seat: Option<String>,
    pub seat_count: Option<String>,
    pub seat_type: Option<String>,
}

/// Informational by-products of the section scan. Not part of the
/// record; logged at debug level for operator visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Last seen total price in whole kroner
    pub last_price: Option<i64>,
    /// Fare-class lines seen in the ticket-information section
    pub fare_kinds: Vec<String>,
    /// Passenger-count lines seen in the ticket-information section
    /// (a lone "-" counts as zero)
    pub fare_counts: Vec<u64>,
}

/// A fully parsed document: the resolved record plus scan by-products
#[derive(Debug, Clone)]
pub struct ParsedTicket {
    pub record: TicketRecord,
    pub summary: ScanSummary,
}

/// Outcome of attempting to rename a document to its identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The document was renamed to the given target
    Renamed(PathBuf),
    /// A file already exists at the target; the original was left untouched
    TargetExists(PathBuf),
    /// Dry-run: the rename to the given target was only reported
    DryRun(PathBuf),
}

impl RenameOutcome {
    /// The target path this outcome refers to
    pub fn target(&self) -> &PathBuf {
        match self {
            RenameOutcome::Renamed(p)
            | RenameOutcome::TargetExists(p)
            | RenameOutcome::DryRun(p) => p,
        }
    }
}
