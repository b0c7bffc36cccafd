//! Line-oriented copy.

use crate::error::Result;
use crate::lines::LineReader;
use crate::validate::validate_pair;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Copy a file line by line.
///
/// Pulls lines from the source through [`LineReader`] and writes each one to
/// the destination, appending a `\n` terminator after every line *except*
/// when the reader is already at end-of-stream, which it is as soon as the
/// final line's own terminator has been consumed. The destination's last
/// line therefore never carries a trailing terminator, even when the
/// source's did; that is the only way the destination may differ from the
/// source.
///
/// `\r\n` terminators in the source are rewritten as `\n`, and bytes that
/// are not valid UTF-8 are carried through the reader's lossy decode.
///
/// # Returns
///
/// The number of lines copied, by the reader's own line-splitting rule.
///
/// # Errors
///
/// - [`Error::MissingPath`](crate::Error::MissingPath) /
///   [`Error::FileNotFound`](crate::Error::FileNotFound) from validation,
///   before any handle is opened
/// - [`Error::Io`](crate::Error::Io) for any failure inside the transfer
///   loop, including the final flush
pub fn copy_by_line(source: &Path, destination: &Path) -> Result<u64> {
    validate_pair(source, destination)?;

    let mut reader = LineReader::new(BufReader::new(File::open(source)?));
    let mut writer = BufWriter::new(File::create(destination)?);

    let mut line_count = 0u64;
    while let Some(line) = reader.next_line()? {
        writer.write_all(line.as_bytes())?;
        if !reader.at_end()? {
            writer.write_all(b"\n")?;
        }
        line_count += 1;
    }
    writer.flush()?;

    #[cfg(feature = "tracing")]
    tracing::debug!(lines = line_count, "line copy finished");

    Ok(line_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_copy_by_line_trailing_terminator_dropped() {
        // Source has a trailing newline; the copy does not.
        let dir = tempdir().unwrap();
        let src = dir.path().join("src.txt");
        let dst = dir.path().join("dst.txt");
        fs::write(&src, "a\nb\nc\n").unwrap();
        fs::write(&dst, "").unwrap();

        let count = copy_by_line(&src, &dst).unwrap();

        assert_eq!(count, 3);
        assert_eq!(fs::read(&dst).unwrap(), b"a\nb\nc");
    }

    #[test]
    fn test_copy_by_line_no_trailing_terminator() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src.txt");
        let dst = dir.path().join("dst.txt");
        fs::write(&src, "a\nb\nc").unwrap();
        fs::write(&dst, "").unwrap();

        let count = copy_by_line(&src, &dst).unwrap();

        assert_eq!(count, 3);
        assert_eq!(fs::read(&dst).unwrap(), b"a\nb\nc");
    }

    #[test]
    fn test_copy_by_line_final_empty_line() {
        // "a\n\n" is two lines, the second empty; only the first keeps its
        // terminator in the copy.
        let dir = tempdir().unwrap();
        let src = dir.path().join("src.txt");
        let dst = dir.path().join("dst.txt");
        fs::write(&src, "a\n\n").unwrap();
        fs::write(&dst, "").unwrap();

        let count = copy_by_line(&src, &dst).unwrap();

        assert_eq!(count, 2);
        assert_eq!(fs::read(&dst).unwrap(), b"a\n");
    }

    #[test]
    fn test_copy_by_line_crlf_normalized() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src.txt");
        let dst = dir.path().join("dst.txt");
        fs::write(&src, "a\r\nb\r\n").unwrap();
        fs::write(&dst, "").unwrap();

        let count = copy_by_line(&src, &dst).unwrap();

        assert_eq!(count, 2);
        assert_eq!(fs::read(&dst).unwrap(), b"a\nb");
    }

    #[test]
    fn test_copy_by_line_empty_source() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src.txt");
        let dst = dir.path().join("dst.txt");
        fs::write(&src, "").unwrap();
        fs::write(&dst, "stale").unwrap();

        let count = copy_by_line(&src, &dst).unwrap();

        assert_eq!(count, 0);
        assert_eq!(fs::read(&dst).unwrap(), b"");
    }

    #[test]
    fn test_copy_by_line_single_line_no_newline() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src.txt");
        let dst = dir.path().join("dst.txt");
        fs::write(&src, "only").unwrap();
        fs::write(&dst, "").unwrap();

        let count = copy_by_line(&src, &dst).unwrap();

        assert_eq!(count, 1);
        assert_eq!(fs::read(&dst).unwrap(), b"only");
    }

    #[test]
    fn test_copy_by_line_missing_source() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("missing.txt");
        let dst = dir.path().join("dst.txt");
        fs::write(&dst, "").unwrap();

        let result = copy_by_line(&src, &dst);
        assert!(matches!(result, Err(Error::FileNotFound(path)) if path == src));
    }
}
