//! Section scan state and line classification
//!
//! Lines inside a section are classified by an ordered list of rules,
//! first match wins; unmatched lines fall through to the default payload
//! action and are appended to the section's raw field list. All
//! accumulator state lives in an explicit [`SectionScan`] scoped to one
//! section, except date/time tokens which accumulate document-wide in a
//! [`DocumentScan`].

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::app::models::{DateToken, ScanSummary, SectionKind, TimeToken};
use crate::constants::{
    FARE_KINDS, PRICE_SUFFIX, SPLIT_TRAIN_BRAND, VIA_PREFIX, WRAPPED_CITY_FRAGMENT,
};
use crate::error::{Error, Result};

use super::vocabulary::is_label;

/// `<digits>.<3-4 lowercase letters>` with an optional trailing dot
fn date_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([0-9]+)\.([a-z]{3,4})\.?$").unwrap())
}

/// `<1-2 digits>:<1-2 digits>`
fn time_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([0-9]{1,2}):([0-9]{1,2})$").unwrap())
}

/// A line of only digits
fn count_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+$").unwrap())
}

/// What the caller must do after classifying one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDisposition {
    /// The line was fully handled
    Consumed,
    /// The line is a wrapped value fragment; feed the next line to
    /// [`SectionScan::push_continuation`]
    AwaitingContinuation,
}

/// Document-wide date/time token collector.
///
/// Dates and times interleave in pairs and at most two of each may be
/// collected across the whole document; any violation is a structural
/// parse failure.
#[derive(Debug, Default)]
pub struct DocumentScan {
    pub dates: Vec<DateToken>,
    pub times: Vec<TimeToken>,
}

impl DocumentScan {
    fn push_date(&mut self, path: &Path, day: u32, month_abbr: &str) -> Result<()> {
        self.dates.push(DateToken {
            day,
            month_abbr: month_abbr.to_string(),
        });
        if self.dates.len() > 2 || self.dates.len() != self.times.len() + 1 {
            return Err(self.sequence_error(path));
        }
        Ok(())
    }

    fn push_time(&mut self, path: &Path, hour: u32, minute: u32) -> Result<()> {
        self.times.push(TimeToken { hour, minute });
        if self.dates.len() > 2 || self.dates.len() != self.times.len() {
            return Err(self.sequence_error(path));
        }
        Ok(())
    }

    fn sequence_error(&self, path: &Path) -> Error {
        Error::TokenSequence {
            path: path.to_path_buf(),
            dates: self.dates.len(),
            times: self.times.len(),
        }
    }
}

/// Accumulator state for one section's scan, never shared across
/// sections or documents.
#[derive(Debug)]
pub struct SectionScan {
    kind: SectionKind,
    fields: Vec<String>,
    fare_kinds: Vec<String>,
    fare_counts: Vec<u64>,
    last_price: Option<i64>,
}

impl SectionScan {
    pub fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            fields: Vec::new(),
            fare_kinds: Vec::new(),
            fare_counts: Vec::new(),
            last_price: None,
        }
    }

    /// Classify one line using the ordered rule list, first match wins.
    pub fn observe(
        &mut self,
        path: &Path,
        line: &str,
        doc: &mut DocumentScan,
    ) -> Result<LineDisposition> {
        if let Some(caps) = date_line_re().captures(line) {
            let day: u32 = caps[1].parse().map_err(|_| Error::date_resolution(
                path,
                format!("day of month out of range in '{}'", line),
            ))?;
            doc.push_date(path, day, &caps[2])?;
        } else if let Some(caps) = time_line_re().captures(line) {
            // Captures are 1-2 digits each, parse cannot fail
            let hour: u32 = caps[1].parse().unwrap_or(0);
            let minute: u32 = caps[2].parse().unwrap_or(0);
            doc.push_time(path, hour, minute)?;
        } else if self.kind == SectionKind::TicketInformation && FARE_KINDS.contains(&line) {
            self.fare_kinds.push(line.to_string());
        } else if self.kind == SectionKind::TicketInformation && line == "-" {
            self.fare_counts.push(0);
        } else if self.kind == SectionKind::TicketInformation && count_line_re().is_match(line) {
            if let Ok(count) = line.parse::<u64>() {
                self.fare_counts.push(count);
            }
        } else if line.starts_with(VIA_PREFIX) {
            // Routing detail, not retained
        } else if line == WRAPPED_CITY_FRAGMENT {
            return Ok(LineDisposition::AwaitingContinuation);
        } else if let Some(prefix) = line.strip_suffix(PRICE_SUFFIX) {
            let price: i64 = prefix.trim().parse().map_err(|_| Error::InvalidPrice {
                path: path.to_path_buf(),
                line: line.to_string(),
            })?;
            if price < 0 {
                return Err(Error::InvalidPrice {
                    path: path.to_path_buf(),
                    line: line.to_string(),
                });
            }
            self.last_price = Some(price);
        } else if !is_label(self.kind, line) {
            self.fields.push(line.to_string());
        }
        Ok(LineDisposition::Consumed)
    }

    /// Append a value the source document wrapped across two lines
    pub fn push_continuation(&mut self, fragment: &str, next_line: &str) {
        self.fields.push(format!("{} {}", fragment, next_line));
    }

    /// Close the section: repair the split train brand if present, then
    /// validate arity and hand back the raw fields and scan by-products.
    pub fn finish(mut self, path: &Path) -> Result<(Vec<String>, ScanSummary)> {
        if self.kind == SectionKind::SeatReservation {
            if let Some(index) = self.fields.iter().position(|f| f == SPLIT_TRAIN_BRAND) {
                // The wrapped train number lands at the end of the
                // section in reading order. Nothing to merge when the
                // brand itself is the final value; the arity check below
                // decides that case.
                if index + 1 < self.fields.len() {
                    if let Some(tail) = self.fields.pop() {
                        self.fields[index] = format!("{} {}", self.fields[index], tail);
                    }
                }
            }
        }

        let expected = self.kind.expected_fields();
        if self.fields.len() != expected {
            return Err(Error::SectionArity {
                path: path.to_path_buf(),
                section: self.kind.header().to_string(),
                expected,
                found: self.fields.len(),
            });
        }

        debug!(
            "Closed '{}' section: {} fields, price {:?}",
            self.kind.header(),
            self.fields.len(),
            self.last_price
        );

        let summary = ScanSummary {
            last_price: self.last_price,
            fare_kinds: self.fare_kinds,
            fare_counts: self.fare_counts,
        };
        Ok((self.fields, summary))
    }
}
