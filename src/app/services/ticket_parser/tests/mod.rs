//! Test fixtures and helpers for the ticket parser
//!
//! Builders for realistic self-print ticket texts used across the test
//! modules. Documents are assembled from the line vocabulary the real
//! layout uses so tests exercise the same classification paths.


/// A complete document with only a ticket-information section
pub fn ticket_info_document() -> String {
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
        "Via: se rejseplanen",
        "Pris i alt",
        "199 kr.",
        "VIGTIGT: Husk gyldig legitimation",
        "Billet købt 24.12.23 07:00",
    ]
    .join("\n")
}

/// A complete document with only a seat-reservation section, featuring
/// both two-line wraps the real layout produces: the "Københavns"
/// station fragment and the "InterCityLyn" train brand.
pub fn seat_reservation_document() -> String {
    [
        "Print Selv-billet – DSB",
        "Pladsreservation",
        "Afgang fra",
        "Københavns",
        "Lufthavn",
        "24.dec",
        "08:15",
        "Ankomst til",
        "Aarhus H",
        "24.dec",
        "14:42",
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
        "150 kr.",
        "VIGTIGT: Husk gyldig legitimation",
        "Billet købt 24.12.23 07:00",
    ]
    .join("\n")
}

/// A complete document with both sections. The departure and arrival
/// tokens appear once, in the seat-reservation section; the year hint in
/// the remainder is long-form.
pub fn full_document() -> String {
    [
        "Print Selv-billet – DSB",
        "Billetoplysninger",
        "Kontrolnummer",
        "K47210042",
        "Afgang fra",
        "København H",
        "Ankomst til",
        "Aarhus H",
        "Billettype",
        "Standard billet",
        "Voksne",
        "1",
        "Pris i alt",
        "199 kr.",
        "Pladsreservation",
        "Afgang fra",
        "København H",
        "24.dec",
        "08:15",
        "Ankomst til",
        "Aarhus H",
        "24.dec",
        "14:42",
        "Tognr",
        "IC 833",
        "Vognnr.",
        "4",
        "Pladsnr.",
        "57",
        "Antal",
        "1",
        "Pladstype",
        "Stillezone",
        "Pris i alt",
        "30 kr.",
        "VIGTIGT: Husk gyldig legitimation",
        "Udstedt den 20. december 2023",
    ]
    .join("\n")
}
