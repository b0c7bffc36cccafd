//! Fixed-size block copy.

use crate::error::{Error, Result};
use crate::validate::validate_pair;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

/// Buffer size for the block strategy.
pub(crate) const BLOCK_SIZE: usize = 10_000;

/// Copy a file through a fixed 10,000-byte buffer.
///
/// Reads the source into the buffer repeatedly, writing each non-empty chunk
/// to the destination, until a zero-length read signals end-of-stream.
/// Produces output byte-identical to [`copy_by_byte`](crate::copy_by_byte)
/// for any input.
///
/// The destination is truncated and rewritten in place.
///
/// # Returns
///
/// The total number of bytes copied.
///
/// # Errors
///
/// - [`Error::MissingPath`] / [`Error::FileNotFound`] from validation,
///   before any handle is opened
/// - [`Error::Io`] for any failure inside the transfer loop
pub fn copy_by_block(source: &Path, destination: &Path) -> Result<u64> {
    validate_pair(source, destination)?;

    let mut reader = File::open(source)?;
    let mut writer = File::create(destination)?;

    let mut buffer = [0u8; BLOCK_SIZE];
    let mut byte_count = 0u64;
    loop {
        let chunk_len = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        writer.write_all(&buffer[..chunk_len])?;
        byte_count += chunk_len as u64;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(bytes = byte_count, "block copy finished");

    Ok(byte_count)
}

/// Copy a file through a buffering decorator pair.
///
/// Placeholder for a `BufReader`/`BufWriter` wrapped variant of the block
/// strategy.
///
/// # Errors
///
/// Always fails with [`Error::Unimplemented`].
pub fn copy_buffered(_source: &Path, _destination: &Path) -> Result<u64> {
    Err(Error::Unimplemented("copy_buffered"))
}
