//! Section-aware parser for DSB self-print ticket documents
//!
//! The parser walks the line sequence of one document, partitions it into
//! the two known sections, classifies lines with an ordered rule list, and
//! enforces exact per-section field counts so malformed input is rejected
//! rather than silently mis-parsed.
//!
//! ## Architecture
//!
//! - [`parser`] - Orchestration: decoding, marker detection, the section
//!   state machine, record assembly
//! - [`scan`] - Per-section accumulator state and the ordered
//!   line-classification rules
//! - [`vocabulary`] - Per-section field-label vocabularies
//!
//! ## Usage
//!
//! ```rust
//! use billet_renamer::app::services::ticket_parser::TicketParser;
//!
//! # fn example(raw: &[u8]) -> billet_renamer::Result<()> {
//! let parser = TicketParser::new();
//! let parsed = parser.parse(std::path::Path::new("ticket.pdf"), raw)?;
//! println!("Departure {:04}-{:02}-{:02} from {}",
//!          parsed.record.year, parsed.record.month, parsed.record.day,
//!          parsed.record.origin);
//! # Ok(())
//! # }
//! ```

pub mod parser;
pub mod scan;
pub mod vocabulary;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::{TicketParser, decode_text};
pub use scan::{DocumentScan, LineDisposition, SectionScan};
