//! Application constants for the billet renamer
//!
//! This module contains the fixed vocabulary of the DSB self-print ticket
//! layout: document markers, section names, field labels, fare-kind names,
//! Danish month tables, and the train-brand substitution table used when
//! formatting identifiers.

// =============================================================================
// Document Structure Markers
// =============================================================================

/// Document-type marker that must appear on the first non-blank line
pub const DOCUMENT_MARKER: &str = "Print Selv-billet";

/// Terminal marker; parsing of the structured body stops here
pub const TERMINAL_MARKER: &str = "VIGTIGT";

/// Section header for the ticket-information block
pub const SECTION_TICKET_INFO: &str = "Billetoplysninger";

/// Section header for the seat-reservation block
pub const SECTION_SEAT_RESERVATION: &str = "Pladsreservation";

/// A line starting with any of these ends the current section
pub const SECTION_BOUNDARIES: &[&str] = &[
    SECTION_TICKET_INFO,
    SECTION_SEAT_RESERVATION,
    TERMINAL_MARKER,
];

// =============================================================================
// Field Label Vocabulary
// =============================================================================

/// Labels common to both section types
pub const COMMON_LABELS: &[&str] = &["Afgang fra", "Ankomst til", "Pris i alt"];

/// Labels specific to the ticket-information section
pub const TICKET_INFO_LABELS: &[&str] = &["Kontrolnummer", "Billettype"];

/// Labels specific to the seat-reservation section
pub const SEAT_RESERVATION_LABELS: &[&str] =
    &["Tognr", "Vognnr.", "Pladsnr.", "Antal", "Pladstype"];

/// Fare-class names that may appear in the ticket-information section
pub const FARE_KINDS: &[&str] = &[
    "Voksne",
    "Ledsagende børn",
    "Betalende børn",
    "65-Billetter",
    "Ung",
    "Ung (DSB WildCard)",
    "Ung (DSB Ung Kort)",
];

/// Routing-detail prefix; such lines are discarded
pub const VIA_PREFIX: &str = "Via:";

/// Station-name fragment the source document wraps across two lines;
/// it is merged with the following line into a single value
pub const WRAPPED_CITY_FRAGMENT: &str = "Københavns";

/// Currency suffix marking a price line
pub const PRICE_SUFFIX: &str = "kr.";

// =============================================================================
// Section Arity
// =============================================================================

/// Expected raw field count for a ticket-information section
pub const TICKET_INFO_ARITY: usize = 4;

/// Expected raw field count for a seat-reservation section (post-merge)
pub const SEAT_RESERVATION_ARITY: usize = 7;

/// Train-service brand that the source document splits across two lines;
/// the trailing raw value is merged back before the arity check
pub const SPLIT_TRAIN_BRAND: &str = "InterCityLyn";

// =============================================================================
// Danish Month Tables
// =============================================================================

/// Three-letter Danish month abbreviations, January first
pub const MONTH_ABBREVIATIONS: &[&str] = &[
    "jan", "feb", "mar", "apr", "maj", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
];

/// Full Danish month names, January first
pub const MONTH_NAMES: &[&str] = &[
    "januar",
    "februar",
    "marts",
    "april",
    "maj",
    "juni",
    "juli",
    "august",
    "september",
    "oktober",
    "november",
    "december",
];

// =============================================================================
// Formatting
// =============================================================================

/// Ordered train-brand substitutions applied to the train number when
/// building the seat part of an identifier. Order matters: longer brand
/// spellings must be collapsed before their prefixes.
pub const TRAIN_BRAND_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("Lyn+", "ICLPlus"),
    ("IC-Lyntog", "ICL"),
    ("InterCityLyn", "ICL"),
    ("InterCity", "IC"),
];

/// Extension used for rename targets when the source has none
pub const DEFAULT_EXTENSION: &str = "pdf";

// =============================================================================
// External Tools
// =============================================================================

/// Text-extraction collaborator binary
pub const PDFTOTEXT_BIN: &str = "pdftotext";
