//! Byte-at-a-time copy.

use crate::error::Result;
use crate::validate::validate_pair;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Copy a file one byte at a time.
///
/// Drives the source through [`Read::bytes`], a lazy finite sequence that
/// ends at end-of-stream, and writes each byte to the destination as it
/// arrives. Deliberately unbuffered on both sides: this is the correctness
/// reference the other strategies are measured against, not a performance
/// path.
///
/// The destination is truncated and rewritten in place.
///
/// # Returns
///
/// The number of bytes copied, which equals the source's length.
///
/// # Errors
///
/// - [`Error::MissingPath`](crate::Error::MissingPath) /
///   [`Error::FileNotFound`](crate::Error::FileNotFound) from validation,
///   before any handle is opened
/// - [`Error::Io`](crate::Error::Io) for any failure inside the transfer loop
pub fn copy_by_byte(source: &Path, destination: &Path) -> Result<u64> {
    validate_pair(source, destination)?;

    let reader = File::open(source)?;
    let mut writer = File::create(destination)?;

    let mut byte_count = 0u64;
    for byte in reader.bytes() {
        writer.write_all(&[byte?])?;
        byte_count += 1;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(bytes = byte_count, "byte-by-byte copy finished");

    Ok(byte_count)
}
