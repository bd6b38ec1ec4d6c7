//! Billet Renamer Library
//!
//! A Rust library for extracting structured ticket records from the
//! plain-text rendering of DSB "Print Selv-billet" travel documents and
//! deriving canonical, sortable filenames from them.
//!
//! This library provides tools for:
//! - Parsing the self-print ticket layout with proper section handling
//!   and strict per-section field-count validation
//! - Resolving the implicit travel year from corroborating date mentions
//!   elsewhere in the document
//! - Formatting resolved records into filesystem-safe identifiers
//! - Extracting document text via the external `pdftotext` collaborator
//! - Skip-if-exists renaming of the original documents

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod date_resolver;
        pub mod formatter;
        pub mod renamer;
        pub mod text_extractor;
        pub mod ticket_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{SectionKind, TicketRecord};
pub use config::Config;
pub use error::{Error, Result};
