//! Error types for copycmp.
//!
//! This module provides the [`Error`] enum containing all possible errors
//! that can occur during copy and compare operations, and the [`Result`]
//! type alias.
//!
//! # Error Categories
//!
//! | Category | Errors |
//! |----------|--------|
//! | Validation | [`Error::MissingPath`], [`Error::FileNotFound`] |
//! | Placeholder | [`Error::Unimplemented`] |
//! | IO | [`Error::Io`] |

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for copycmp operations.
///
/// This is a type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during copy and compare operations.
///
/// Validation errors carry enough information to tell the caller which
/// argument or path was at fault; mid-transfer failures are passed through
/// untranslated as [`Error::Io`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// IO error during a transfer or compare loop
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A required path argument was empty
    ///
    /// Carries the name of the offending argument (`"source"` or
    /// `"destination"`). Raised before any file handle is opened.
    #[error("missing required {0} path")]
    MissingPath(&'static str),

    /// Path does not reference an existing regular file
    ///
    /// Both the source and the destination must pre-exist; a directory at
    /// either path counts as not found.
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// Placeholder operation that has not been built out
    #[error("operation not implemented: {0}")]
    Unimplemented(&'static str),
}
