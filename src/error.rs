//! Error types for encoding and decoding trees.
//!
//! Malformed input and stream failures are reported as [`Error`] values; they
//! never panic. Every error belongs to one of two categories, exposed through
//! [`Error::kind`]:
//!
//! - [`ErrorKind::Io`]: the stream failed to read, write or seek, or the input
//!   ended before the document was complete
//! - [`ErrorKind::InvalidData`]: the input does not follow the grammar at a
//!   specific position
//!
//! ## Error Context
//!
//! Syntax errors carry the byte offset where the unexpected character was read,
//! what the decoder expected at that point, and a window of the surrounding
//! input read back from the stream.
//!
//! ```rust
//! use shape_json::{from_str, Error, ErrorKind};
//!
//! let err = from_str(r#"{"a":}"#).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidData);
//!
//! if let Error::InvalidData { found, context, .. } = &err {
//!     assert_eq!(*found, '}');
//!     assert!(context.contains(r#"{"a":}"#));
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while encoding or decoding a tree.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Read, write or seek failure on the underlying stream
    #[error("IO error: {0}")]
    Io(String),

    /// The input ended in the middle of the document
    #[error("Unexpected end of input at byte {position}")]
    UnexpectedEof { position: u64 },

    /// Unexpected character at a decision point
    #[error("Invalid data at byte {position}: expected {expected} but found '{found}' near ...{context}...")]
    InvalidData {
        position: u64,
        expected: &'static str,
        found: char,
        context: String,
    },

    /// A key or scalar is longer than the configured bound
    #[error("Label longer than {max} bytes at byte {position}")]
    LabelTooLong { position: u64, max: usize },

    /// A key or scalar is not valid UTF-8
    #[error("Label ending at byte {position} is not valid UTF-8")]
    InvalidUtf8 { position: u64 },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

/// Broad category of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Stream failure or premature end of input.
    Io,
    /// Malformed input.
    InvalidData,
}

impl Error {
    /// Creates an I/O error for stream failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates an end-of-input error at the given byte offset.
    pub fn unexpected_eof(position: u64) -> Self {
        Error::UnexpectedEof { position }
    }

    /// Creates a syntax error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shape_json::Error;
    ///
    /// let err = Error::invalid_data(5, "':'", '}', r#"{"a"}"#);
    /// assert!(err.to_string().contains("expected ':' but found '}'"));
    /// ```
    pub fn invalid_data(position: u64, expected: &'static str, found: char, context: &str) -> Self {
        Error::InvalidData {
            position,
            expected,
            found,
            context: context.to_string(),
        }
    }

    /// Creates an error for a label exceeding `max` bytes.
    pub fn label_too_long(position: u64, max: usize) -> Self {
        Error::LabelTooLong { position, max }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns the category of this error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shape_json::{Error, ErrorKind};
    ///
    /// assert_eq!(Error::unexpected_eof(3).kind(), ErrorKind::Io);
    /// assert_eq!(Error::label_too_long(3, 2).kind(), ErrorKind::InvalidData);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_) | Error::UnexpectedEof { .. } => ErrorKind::Io,
            Error::InvalidData { .. }
            | Error::LabelTooLong { .. }
            | Error::InvalidUtf8 { .. }
            | Error::Custom(_) => ErrorKind::InvalidData,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
