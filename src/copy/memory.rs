//! In-memory text round-trip copy.

use crate::error::{Error, Result};
use crate::validate::validate_pair;
use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;

/// Copy a file through a full in-memory text round trip.
///
/// Reads the entire source and decodes it as UTF-8, re-encodes the text into
/// a byte buffer, replays that buffer through an in-memory stream
/// ([`Cursor`]) into a second buffer, decodes it back into text and writes
/// the text to the destination. The stream step copies nothing useful; it
/// exists to exercise the in-memory stream abstraction, matching the shape
/// of the other strategies.
///
/// Invalid UTF-8 in the source is replaced with U+FFFD during the first
/// decode, so the round trip is not byte-preserving for such input. For
/// sources that are valid UTF-8 the destination is content-equal to a plain
/// byte copy.
///
/// # Returns
///
/// The size in bytes of the encoded form (the destination's length).
///
/// # Errors
///
/// - [`Error::MissingPath`] / [`Error::FileNotFound`] from validation,
///   before any handle is opened
/// - [`Error::Io`] for read or write failures
pub fn copy_in_memory(source: &Path, destination: &Path) -> Result<u64> {
    validate_pair(source, destination)?;

    let raw = fs::read(source)?;
    let text = String::from_utf8_lossy(&raw).into_owned();
    let encoded = text.into_bytes();
    let encoded_len = encoded.len() as u64;

    // Replay the encoded bytes through an in-memory stream.
    let mut staged = Vec::with_capacity(encoded.len());
    let mut stream = Cursor::new(encoded);
    stream.read_to_end(&mut staged)?;

    // staged came out of a String, so this decode is lossless.
    let round_tripped = String::from_utf8_lossy(&staged);
    fs::write(destination, round_tripped.as_bytes())?;

    #[cfg(feature = "tracing")]
    tracing::debug!(bytes = encoded_len, "in-memory copy finished");

    Ok(encoded_len)
}

/// Block-wise variant of the in-memory round trip.
///
/// Placeholder for a version of [`copy_in_memory`] that replays the stream
/// in fixed-size chunks instead of a single read.
///
/// # Errors
///
/// Always fails with [`Error::Unimplemented`].
pub fn copy_in_memory_by_block(_source: &Path, _destination: &Path) -> Result<u64> {
    Err(Error::Unimplemented("copy_in_memory_by_block"))
}
