//! Skip-if-exists document renaming
//!
//! The rename target sits next to the original document and keeps its
//! extension. An existing file at the target is never overwritten; that
//! case is a reported skip, not an error.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::app::models::RenameOutcome;
use crate::constants::DEFAULT_EXTENSION;
use crate::error::Result;

/// Rename the document to `<identifier>.<ext>` in its own directory.
///
/// With `dry_run` set the target is computed and reported but the
/// filesystem is left untouched.
pub fn rename_to_identifier(path: &Path, identifier: &str, dry_run: bool) -> Result<RenameOutcome> {
    let target = target_path(path, identifier);

    if target.exists() {
        warn!(
            "Target already exists, leaving {} untouched: {}",
            path.display(),
            target.display()
        );
        return Ok(RenameOutcome::TargetExists(target));
    }

    if dry_run {
        info!("Would rename {} -> {}", path.display(), target.display());
        return Ok(RenameOutcome::DryRun(target));
    }

    fs::rename(path, &target)?;
    info!("Renamed {} -> {}", path.display(), target.display());
    Ok(RenameOutcome::Renamed(target))
}

/// Compute the rename target for a document and identifier
pub fn target_path(path: &Path, identifier: &str) -> PathBuf {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or(DEFAULT_EXTENSION);
    path.with_file_name(format!("{}.{}", identifier, extension))
}
