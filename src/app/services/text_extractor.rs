//! External text extraction
//!
//! Converting the original document into plain text is delegated to the
//! `pdftotext` collaborator, invoked once per input document. Its failure
//! is fatal for that document only.

use std::path::Path;

use tokio::process::Command;
use tracing::debug;

use crate::constants::PDFTOTEXT_BIN;
use crate::error::{Error, Result};

/// Run `pdftotext <path> -` and capture the plain-text bytes it writes
/// to stdout.
pub async fn extract_text(path: &Path) -> Result<Vec<u8>> {
    debug!("Extracting text from {}", path.display());

    let output = Command::new(PDFTOTEXT_BIN)
        .arg(path)
        .arg("-")
        .output()
        .await
        .map_err(|e| {
            Error::text_extraction(path, format!("failed to run {}: {}", PDFTOTEXT_BIN, e))
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::text_extraction(
            path,
            format!(
                "{} exited with {}: {}",
                PDFTOTEXT_BIN,
                output.status,
                stderr.trim()
            ),
        ));
    }

    debug!(
        "Extracted {} bytes of text from {}",
        output.stdout.len(),
        path.display()
    );
    Ok(output.stdout)
}
