//! Line-level content comparison.

use crate::error::Result;
use crate::lines::LineReader;
use crate::validate::validate_pair;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Compare two files line by line.
///
/// Advances a [`LineReader`] over each file in lock-step and compares the
/// corresponding lines for exact equality. Returns `false` on the first
/// mismatch (a present line against the end sentinel never matches, so a
/// shorter file fails at its end) and `true` only when both sequences reach
/// their end simultaneously.
///
/// This is a line-level check, not a byte-level one: terminator style
/// (`\r\n` vs `\n`) and the presence of a final trailing terminator are
/// normalized away by the reader and do not count as differences.
///
/// # Errors
///
/// - [`Error::MissingPath`](crate::Error::MissingPath) /
///   [`Error::FileNotFound`](crate::Error::FileNotFound) from validation,
///   before any handle is opened
/// - [`Error::Io`](crate::Error::Io) for any failure inside the compare loop
pub fn content_equals(source: &Path, destination: &Path) -> Result<bool> {
    validate_pair(source, destination)?;

    let mut left = LineReader::new(BufReader::new(File::open(source)?));
    let mut right = LineReader::new(BufReader::new(File::open(destination)?));

    loop {
        match (left.next_line()?, right.next_line()?) {
            (None, None) => return Ok(true),
            (Some(a), Some(b)) if a == b => {}
            _ => return Ok(false),
        }
    }
}
