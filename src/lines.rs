//! Pull-based line reading with end-of-stream lookahead.
//!
//! [`LineReader`] is the lazy line sequence shared by the line-oriented copy
//! and the content comparison. It yields lines with their terminators
//! stripped and reports end-of-stream the moment the last terminator has
//! been consumed, which is what the trailing-terminator rule in
//! [`copy_by_line`](crate::copy_by_line) depends on.

use std::io::{self, BufRead};

/// Lazy sequence of lines over any buffered reader.
///
/// Lines are split on `\n`; a preceding `\r` is stripped as well, so `\r\n`
/// terminated input reads the same as `\n` terminated input. Bytes that are
/// not valid UTF-8 are decoded with U+FFFD replacement rather than aborting
/// the pass, so arbitrary files can be walked line by line.
pub(crate) struct LineReader<R: BufRead> {
    inner: R,
}

impl<R: BufRead> LineReader<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Next line without its terminator; `Ok(None)` is the end sentinel.
    pub(crate) fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut raw = Vec::new();
        let n = self.inner.read_until(b'\n', &mut raw)?;
        if n == 0 {
            return Ok(None);
        }
        if raw.last() == Some(&b'\n') {
            raw.pop();
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&raw).into_owned()))
    }

    /// Whether the underlying stream has no more bytes.
    ///
    /// This is a lookahead, not a consumed-everything flag: immediately after
    /// reading a line that ended in a terminator, it already reports true
    /// when that terminator was the last byte of the stream.
    pub(crate) fn at_end(&mut self) -> io::Result<bool> {
        Ok(self.inner.fill_buf()?.is_empty())
    }
}
