//! Placeholder cover photo provisioning.
//!
//! # Responsibility
//! - Create the per-restaurant media directory.
//! - Copy the shared placeholder image into the cover photo slot.
//!
//! # Invariants
//! - An existing cover photo is never overwritten.
//! - The placeholder source is only read, never modified or removed.
//! - A missing placeholder is a warning, not an error.

use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// What provisioning did for one destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// Placeholder copied into place.
    Copied,
    /// A file already sits at the destination.
    AlreadyPresent,
    /// No placeholder to copy; the destination stays empty.
    PlaceholderMissing,
}

impl ProvisionOutcome {
    /// Whether a new file was created.
    pub fn created(self) -> bool {
        matches!(self, Self::Copied)
    }
}

/// Directory creation or copy failure.
#[derive(Debug)]
pub struct AssetError {
    pub path: PathBuf,
    pub source: std::io::Error,
}

impl Display for AssetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "failed to provision photo at `{}`: {}",
            self.path.display(),
            self.source
        )
    }
}

impl Error for AssetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Ensures `dest` has a cover photo, copying `placeholder` when needed.
///
/// # Errors
/// - Returns `AssetError` when the destination directory cannot be created
///   or the copy itself fails.
pub fn provision_placeholder(
    placeholder: &Path,
    dest: &Path,
) -> Result<ProvisionOutcome, AssetError> {
    if let Some(dir) = dest.parent() {
        std::fs::create_dir_all(dir).map_err(|source| AssetError {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    if dest.exists() {
        info!(
            "event=media_provision module=media status=ok outcome=already_present dest={}",
            dest.display()
        );
        return Ok(ProvisionOutcome::AlreadyPresent);
    }

    if !placeholder.is_file() {
        warn!(
            "event=media_provision module=media status=warn outcome=placeholder_missing placeholder={}",
            placeholder.display()
        );
        return Ok(ProvisionOutcome::PlaceholderMissing);
    }

    std::fs::copy(placeholder, dest).map_err(|source| AssetError {
        path: dest.to_path_buf(),
        source,
    })?;
    info!(
        "event=media_provision module=media status=ok outcome=copied dest={}",
        dest.display()
    );
    Ok(ProvisionOutcome::Copied)
}
