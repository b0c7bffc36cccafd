//! Shared input validation.
//!
//! Every public operation runs [`validate_pair`] before opening any file
//! handle, so validation failures can never leak a resource.

use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Validate a source/destination path pair.
///
/// Both paths must name existing regular files. The destination is required
/// to pre-exist even though it is about to be overwritten; that asymmetry is
/// part of the validation contract.
///
/// # Errors
///
/// - [`Error::MissingPath`] if either path is empty, naming the argument
/// - [`Error::FileNotFound`] if either path is missing or not a regular file
/// - [`Error::Io`] for any other metadata failure
pub(crate) fn validate_pair(source: &Path, destination: &Path) -> Result<()> {
    require_regular_file(source, "source")?;
    require_regular_file(destination, "destination")
}

fn require_regular_file(path: &Path, role: &'static str) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::MissingPath(role));
    }

    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(()),
        // A directory or other non-regular file at the path counts as absent
        Ok(_) => Err(Error::FileNotFound(path.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(Error::FileNotFound(path.to_path_buf()))
        }
        Err(e) => Err(e.into()),
    }
}
