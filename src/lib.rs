//! # copycmp
//!
//! Single-file copy strategies and line-level content comparison.
//!
//! ## Core Features
//!
//! - **Byte-by-byte copy**: unbuffered reference implementation, one read and
//!   one write per byte
//! - **Block copy**: fixed-size buffer loop, functionally equivalent output
//! - **In-memory round trip**: decodes the source as UTF-8, re-encodes it and
//!   writes it back out through an in-memory stream
//! - **Line-oriented copy**: pull-based line sequence with an exact
//!   trailing-terminator rule on the final line
//! - **Content equality**: lock-step line comparison of two files
//!
//! Every operation validates its path pair up front and owns its file handles
//! for exactly the duration of one call. There is no shared state, no
//! concurrency, and no partial-result recovery: mid-transfer I/O failures
//! surface directly as [`Error::Io`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use copycmp::{content_equals, copy_by_block};
//! use std::path::Path;
//!
//! // Both paths must name existing regular files; the destination is
//! // overwritten in place.
//! let bytes = copy_by_block(Path::new("notes.txt"), Path::new("notes.bak"))?;
//! println!("copied {bytes} bytes");
//!
//! assert!(content_equals(Path::new("notes.txt"), Path::new("notes.bak"))?);
//! # Ok::<(), copycmp::Error>(())
//! ```
//!
//! ## Validation Contract
//!
//! All operations share one precondition: both the source *and* the
//! destination must already exist as regular files. An empty path fails with
//! [`Error::MissingPath`] and a missing file with [`Error::FileNotFound`],
//! in both cases before any handle is opened.
//!
//! ## Encoding Caveat
//!
//! [`copy_in_memory`] moves file contents through a UTF-8 decode/re-encode
//! cycle. Input bytes that are not valid UTF-8 are replaced with U+FFFD, so
//! the round trip is not byte-preserving for such files. The byte and block
//! strategies have no such restriction.
//!
//! ## Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `tracing` | Structured logging with the tracing crate |

mod compare;
mod copy;
mod error;
mod lines;
mod validate;

pub use compare::content_equals;
pub use copy::{
    copy_buffered, copy_by_block, copy_by_byte, copy_by_line, copy_in_memory,
    copy_in_memory_by_block,
};
pub use error::{Error, Result};
