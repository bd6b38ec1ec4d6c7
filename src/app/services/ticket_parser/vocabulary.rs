//! Section label vocabularies
//!
//! Each section type recognizes a common base vocabulary plus its own
//! field labels. A line matching a recognized label is a label, not a
//! value, and is skipped by the scanner.

use crate::app::models::SectionKind;
use crate::constants::{COMMON_LABELS, SEAT_RESERVATION_LABELS, TICKET_INFO_LABELS};

/// The section-specific labels recognized inside the given section,
/// excluding the common base vocabulary.
pub fn section_labels(kind: SectionKind) -> &'static [&'static str] {
    match kind {
        SectionKind::TicketInformation => TICKET_INFO_LABELS,
        SectionKind::SeatReservation => SEAT_RESERVATION_LABELS,
    }
}

/// True if the line is a recognized label for the given section
pub fn is_label(kind: SectionKind, line: &str) -> bool {
    COMMON_LABELS.contains(&line) || section_labels(kind).contains(&line)
}
