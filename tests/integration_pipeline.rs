//! Integration tests for the text -> record -> identifier pipeline
//!
//! Drives the public library API on realistic self-print ticket texts,
//! end to end from extracted bytes to the canonical identifier.

use std::path::Path;

use billet_renamer::Error;
use billet_renamer::app::services::formatter::format_identifier;
use billet_renamer::app::services::ticket_parser::TicketParser;

fn doc() -> &'static Path {
    Path::new("ticket.pdf")
}

fn ticket_info_text() -> String {
    [
        "Print Selv-billet – DSB",
        "Billetoplysninger",
        "Kontrolnummer",
        "K47210042",
        "Afgang fra",
        "København H",
        "24.dec",
        "08:15",
        "Ankomst til",
        "Aarhus H",
        "24.dec",
        "14:42",
        "Billettype",
        "Standard billet",
        "Voksne",
        "1",
        "Pris i alt",
        "199 kr.",
        "VIGTIGT: Husk gyldig legitimation",
        "Billet købt 24.12.23 07:00",
    ]
    .join("\n")
}

fn seat_reservation_text() -> String {
    [
        "Print Selv-billet – DSB",
        "Pladsreservation",
        "Afgang fra",
        "København H",
        "2.jan",
        "12:05",
        "Ankomst til",
        "Københavns",
        "Lufthavn",
        "2.jan",
        "12:21",
        "Tognr",
        "InterCityLyn",
        "Vognnr.",
        "12",
        "Pladsnr.",
        "3,4",
        "Antal",
        "2",
        "Pladstype",
        "Standard zone",
        "45",
        "Pris i alt",
        "60 kr.",
        "VIGTIGT: Husk gyldig legitimation",
        "Billet købt 28.12.23 19:12",
    ]
    .join("\n")
}

#[test]
fn ticket_info_document_formats_expected_identifier() {
    let parsed = TicketParser::new()
        .parse_text(doc(), &ticket_info_text())
        .unwrap();
    let identifier = format_identifier(&parsed.record);

    assert_eq!(identifier, "2023-12-24T0815-1442_Kbh_Aarhus_Standard");
}

#[test]
fn seat_reservation_document_formats_expected_identifier() {
    // Bought in late December, travel on January 2nd: year rolls over.
    // Both two-line wraps (station fragment and train brand) repaired.
    let parsed = TicketParser::new()
        .parse_text(doc(), &seat_reservation_text())
        .unwrap();
    let identifier = format_identifier(&parsed.record);

    assert_eq!(
        identifier,
        "2024-01-02T1205-1221_Kbh_CPHLufthavn_ICL45_12_3-4"
    );
}

#[test]
fn identifier_contains_no_filesystem_unsafe_characters() {
    for text in [ticket_info_text(), seat_reservation_text()] {
        let parsed = TicketParser::new().parse_text(doc(), &text).unwrap();
        let identifier = format_identifier(&parsed.record);
        assert!(
            identifier
                .chars()
                .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | 'T')),
            "unsafe character in {identifier}"
        );
    }
}

#[test]
fn formatting_is_pure() {
    let parsed = TicketParser::new()
        .parse_text(doc(), &ticket_info_text())
        .unwrap();
    assert_eq!(
        format_identifier(&parsed.record),
        format_identifier(&parsed.record)
    );
}

#[test]
fn record_is_reproducible_for_the_same_input() {
    let first = TicketParser::new()
        .parse_text(doc(), &ticket_info_text())
        .unwrap();
    let second = TicketParser::new()
        .parse_text(doc(), &ticket_info_text())
        .unwrap();
    assert_eq!(first.record, second.record);
}

#[test]
fn document_without_year_hint_fails_resolution() {
    let text = ticket_info_text().replace("Billet købt 24.12.23 07:00", "Ingen dato her");
    let result = TicketParser::new().parse_text(doc(), &text);
    assert!(matches!(result, Err(Error::DateResolution { .. })));
}

#[test]
fn structural_errors_are_distinguishable() {
    let text = ticket_info_text().replace("K47210042\n", "");
    let error = TicketParser::new().parse_text(doc(), &text).unwrap_err();
    assert!(error.is_structural());

    let text = ticket_info_text().replace("Billet købt 24.12.23 07:00", "Ingen dato her");
    let error = TicketParser::new().parse_text(doc(), &text).unwrap_err();
    assert!(!error.is_structural());
}
