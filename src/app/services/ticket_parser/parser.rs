//! Core ticket parser implementation
//!
//! This module provides the main parser orchestration: decoding the
//! extracted bytes, locating the document-type marker, walking the
//! section state machine, and assembling the resolved record from the
//! sections' raw field lists.

use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::app::models::{ParsedTicket, ScanSummary, SectionKind, TicketRecord};
use crate::app::services::date_resolver::resolve_departure;
use crate::constants::{DOCUMENT_MARKER, SECTION_BOUNDARIES, TERMINAL_MARKER};
use crate::error::{Error, Result};

use super::scan::{DocumentScan, LineDisposition, SectionScan};

/// Parser for DSB self-print ticket documents
///
/// The parser is stateless across documents; an optional reference date
/// serves as the year-disambiguation hint of last resort and, when set,
/// takes precedence over hints found inside the document.
#[derive(Debug, Clone, Default)]
pub struct TicketParser {
    date_hint: Option<NaiveDate>,
}

impl TicketParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with an externally supplied date hint
    pub fn with_date_hint(date_hint: Option<NaiveDate>) -> Self {
        Self { date_hint }
    }

    /// Parse one document from the raw bytes produced by text extraction
    pub fn parse(&self, path: &Path, raw: &[u8]) -> Result<ParsedTicket> {
        let text = decode_text(raw);
        self.parse_text(path, &text)
    }

    /// Parse one document from already-decoded text
    pub fn parse_text(&self, path: &Path, text: &str) -> Result<ParsedTicket> {
        info!("Parsing ticket document: {}", path.display());

        // Blank lines carry no information in this layout
        let mut lines = text.lines().filter(|line| !line.trim().is_empty());

        let first = lines.next().ok_or_else(|| Error::Unterminated {
            path: path.to_path_buf(),
        })?;
        if !first.contains(DOCUMENT_MARKER) {
            return Err(Error::MissingMarker {
                path: path.to_path_buf(),
            });
        }

        let mut doc = DocumentScan::default();
        let mut summary = ScanSummary::default();
        let mut ticket_fields: Option<Vec<String>> = None;
        let mut seat_fields: Option<Vec<String>> = None;

        let mut line = next_line(&mut lines, path)?;
        while !line.starts_with(TERMINAL_MARKER) {
            let kind = SectionKind::from_header(line).ok_or_else(|| Error::UnknownSection {
                path: path.to_path_buf(),
                header: line.to_string(),
            })?;
            let occupied = match kind {
                SectionKind::TicketInformation => ticket_fields.is_some(),
                SectionKind::SeatReservation => seat_fields.is_some(),
            };
            if occupied {
                return Err(Error::DuplicateSection {
                    path: path.to_path_buf(),
                    section: kind.header().to_string(),
                });
            }

            let mut scan = SectionScan::new(kind);
            line = next_line(&mut lines, path)?;
            while !is_section_boundary(line) {
                match scan.observe(path, line, &mut doc)? {
                    LineDisposition::Consumed => {}
                    LineDisposition::AwaitingContinuation => {
                        let continuation = next_line(&mut lines, path)?;
                        scan.push_continuation(line, continuation);
                    }
                }
                line = next_line(&mut lines, path)?;
            }

            let (fields, section_summary) = scan.finish(path)?;
            merge_summary(&mut summary, section_summary);
            match kind {
                SectionKind::TicketInformation => ticket_fields = Some(fields),
                SectionKind::SeatReservation => seat_fields = Some(fields),
            }
        }

        debug!(
            "Collected {} date tokens, {} time tokens, summary {:?}",
            doc.dates.len(),
            doc.times.len(),
            summary
        );

        // Everything after the terminator is only scanned for date hints
        let remainder = lines.collect::<Vec<_>>().join("\n");
        let departure =
            resolve_departure(path, &doc.dates, &doc.times, &remainder, self.date_hint)?;

        let record = build_record(path, departure, ticket_fields, seat_fields)?;
        debug!("Parsed record: {:?}", record);

        Ok(ParsedTicket { record, summary })
    }
}

/// Replace the Unicode replacement character with a space and decode
/// the extracted bytes as UTF-8.
pub fn decode_text(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).replace('\u{FFFD}', " ")
}

/// True when the line starts a new section or the terminal block
fn is_section_boundary(line: &str) -> bool {
    SECTION_BOUNDARIES
        .iter()
        .any(|marker| line.starts_with(marker))
}

fn next_line<'a>(
    lines: &mut impl Iterator<Item = &'a str>,
    path: &Path,
) -> Result<&'a str> {
    lines.next().ok_or_else(|| Error::Unterminated {
        path: path.to_path_buf(),
    })
}

fn merge_summary(summary: &mut ScanSummary, section: ScanSummary) {
    if section.last_price.is_some() {
        summary.last_price = section.last_price;
    }
    summary.fare_kinds.extend(section.fare_kinds);
    summary.fare_counts.extend(section.fare_counts);
}

/// Map the sections' raw field lists onto the resolved record. Field
/// order within each section is fixed; the seat-reservation section's
/// origin/destination win when both sections are present.
fn build_record(
    path: &Path,
    departure: crate::app::services::date_resolver::ResolvedDeparture,
    ticket_fields: Option<Vec<String>>,
    seat_fields: Option<Vec<String>>,
) -> Result<TicketRecord> {
    let mut origin = String::new();
    let mut destination = String::new();
    let mut control_number = None;
    let mut ticket_type = None;
    let mut train_number = None;
    let mut wagon = None;
    let mut seat = None;
    let mut seat_count = None;
    let mut seat_type = None;

    if let Some(fields) = ticket_fields {
        // Arity was validated at section close
        let [kontrol, fra, til, billettype]: [String; 4] = fields
            .try_into()
            .unwrap_or_else(|_| unreachable!("ticket-information arity already validated"));
        control_number = Some(kontrol);
        origin = fra;
        destination = til;
        ticket_type = Some(billettype);
    }

    if let Some(fields) = seat_fields {
        let [fra, til, tognr, vogn, plads, antal, pladstype]: [String; 7] = fields
            .try_into()
            .unwrap_or_else(|_| unreachable!("seat-reservation arity already validated"));
        origin = fra;
        destination = til;
        train_number = Some(tognr);
        wagon = Some(vogn);
        seat = Some(plads);
        seat_count = Some(antal);
        seat_type = Some(pladstype);
    }

    if origin.trim().is_empty() {
        return Err(Error::EmptyField {
            path: path.to_path_buf(),
            field: "origin",
        });
    }
    if destination.trim().is_empty() {
        return Err(Error::EmptyField {
            path: path.to_path_buf(),
            field: "destination",
        });
    }

    Ok(TicketRecord {
        year: departure.year,
        month: departure.month,
        day: departure.day,
        from_hour: departure.from_hour,
        from_minute: departure.from_minute,
        to_hour: departure.to_hour,
        to_minute: departure.to_minute,
        origin,
        destination,
        control_number,
        ticket_type,
        train_number,
        wagon,
        seat,
        seat_count,
        seat_type,
    })
}
