//! Best-effort reader of the local machine identifier.
//!
//! On Linux, `/etc/machine-id` is stable across reboots for a given OS
//! install and carries no direct hardware identifiers. The reader trims
//! surrounding whitespace (the file ends in a newline) and treats a missing,
//! unreadable, or blank source as absence rather than failure.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default identifier source on Linux hosts.
pub const DEFAULT_MACHINE_ID_PATH: &str = "/etc/machine-id";

/// Why a machine identifier could not be produced.
///
/// Callers that fingerprint best-effort should go through
/// [`try_read_machine_id`], which degrades all of these to absence.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The identifier file does not exist.
    #[error("identifier source not found: {0}")]
    NotFound(PathBuf),

    /// The identifier file exists but could not be read.
    #[error("failed to read identifier source {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The identifier file contained only whitespace.
    #[error("identifier source is empty: {0}")]
    Empty(PathBuf),
}

/// Read and trim the machine identifier at `path`.
pub fn read_machine_id(path: &Path) -> Result<String, SourceError> {
    let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SourceError::NotFound(path.to_path_buf()),
        _ => SourceError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SourceError::Empty(path.to_path_buf()));
    }
    Ok(trimmed.to_string())
}

/// Best-effort variant of [`read_machine_id`].
///
/// A missing source is expected on non-Linux hosts and containers, so every
/// failure degrades to `None`; the cause is recorded at debug level.
pub fn try_read_machine_id(path: &Path) -> Option<String> {
    match read_machine_id(path) {
        Ok(id) => Some(id),
        Err(err) => {
            tracing::debug!(%err, "machine identifier unavailable");
            None
        }
    }
}
