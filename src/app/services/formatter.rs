//! Canonical identifier formatting
//!
//! Maps a resolved [`TicketRecord`] into a sortable, filesystem-safe
//! identifier: a timestamp part, normalized origin and destination parts,
//! and optional ticket-type and seat parts joined with underscores.
//! Formatting is a pure function of the record.

use crate::app::models::TicketRecord;
use crate::constants::TRAIN_BRAND_SUBSTITUTIONS;

/// Build the canonical identifier for a record.
///
/// Output shape: `YYYY-MM-DDTHHMM-HHMM_Origin_Destination[_Type][_Seat]`.
pub fn format_identifier(record: &TicketRecord) -> String {
    let mut parts = vec![
        format!(
            "{}-{:02}-{:02}T{:02}{:02}-{:02}{:02}",
            record.year,
            record.month,
            record.day,
            record.from_hour,
            record.from_minute,
            record.to_hour,
            record.to_minute
        ),
        normalize_station(&record.origin),
        normalize_station(&record.destination),
    ];

    let ticket_type = ticket_type_part(record);
    if !ticket_type.is_empty() {
        parts.push(ticket_type);
    }

    let seat = seat_part(record);
    if !seat.is_empty() {
        parts.push(seat);
    }

    parts.join("_")
}

/// Normalize a station name to a single identifier token.
///
/// Copenhagen Airport spellings collapse to "CPHLufthavn"; a leading
/// "København" token collapses to "Kbh"; other names keep their first
/// whitespace-delimited token.
pub fn normalize_station(name: &str) -> String {
    if name.contains("Københavns") || name.contains("CPH") {
        return "CPHLufthavn".to_string();
    }
    let first = name.split_whitespace().next().unwrap_or("");
    if first == "København" {
        "Kbh".to_string()
    } else {
        first.to_string()
    }
}

fn ticket_type_part(record: &TicketRecord) -> String {
    let Some(ticket_type) = &record.ticket_type else {
        return String::new();
    };
    let collapsed = if ticket_type.contains("Standard") {
        "Standard"
    } else {
        ticket_type.as_str()
    };
    collapsed
        .replace(' ', "")
        .replace('\'', "")
        .replace("billet", "")
}

fn seat_part(record: &TicketRecord) -> String {
    let (Some(seat_type), Some(train_number), Some(wagon), Some(seat)) = (
        record.seat_type.as_deref(),
        record.train_number.as_deref(),
        record.wagon.as_deref(),
        record.seat.as_deref(),
    ) else {
        return String::new();
    };
    if seat_type.is_empty() || train_number.is_empty() || wagon.is_empty() || seat.is_empty() {
        return String::new();
    }

    let seat_type = seat_type
        .replace('\'', "")
        .replace("Standard", "")
        .replace("zone", "")
        .trim()
        .to_string();

    let mut train_number = train_number.to_string();
    for (brand, code) in TRAIN_BRAND_SUBSTITUTIONS {
        train_number = train_number.replace(brand, code);
    }
    train_number = train_number.replace(' ', "");

    let mut part = format!(
        "{}_{}_{}",
        train_number,
        wagon,
        seat.replace(' ', "").replace(',', "-")
    );
    if !seat_type.is_empty() {
        part.push('_');
        part.push_str(&seat_type);
    }
    part
}
