//! Configuration options for encoding and decoding.
//!
//! [`JsonOptions`] controls the output layout of the encoder and the limits the
//! decoder enforces:
//!
//! ```rust
//! use shape_json::{tree, to_string_with_options, JsonOptions};
//!
//! let record = tree!({ "id": "7" });
//!
//! // 4-space pretty output
//! let options = JsonOptions::pretty().with_indent(4);
//! let json = to_string_with_options(&record, options).unwrap();
//! assert_eq!(json, "{\n    \"id\":\"7\"\n}\n");
//! ```

/// Longest key or scalar, in bytes, the decoder accepts by default.
pub const MAX_LABEL_LEN: usize = 500;

/// Default number of bytes captured on each side of a syntax error.
pub const CONTEXT_RADIUS: usize = 10;

/// Default number of spaces per nesting level in pretty mode.
pub const INDENT: usize = 2;

/// Configuration options for the encoder and the decoder.
///
/// # Examples
///
/// ```rust
/// use shape_json::JsonOptions;
///
/// // Compact output, default limits
/// let options = JsonOptions::new();
/// assert!(!options.pretty);
///
/// // Pretty-printed with 2-space indentation
/// let options = JsonOptions::pretty();
/// assert_eq!(options.indent, 2);
///
/// // Tighter decoder limits
/// let options = JsonOptions::new()
///     .with_max_label_len(64)
///     .with_context_radius(4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonOptions {
    pub pretty: bool,
    pub indent: usize,
    pub max_label_len: usize,
    pub context_radius: usize,
}

impl Default for JsonOptions {
    fn default() -> Self {
        JsonOptions {
            pretty: false,
            indent: INDENT,
            max_label_len: MAX_LABEL_LEN,
            context_radius: CONTEXT_RADIUS,
        }
    }
}

impl JsonOptions {
    /// Creates default options (compact output, 2-space indent, 500-byte labels).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shape_json::JsonOptions;
    ///
    /// let options = JsonOptions::new();
    /// assert_eq!(options.max_label_len, 500);
    /// assert!(!options.pretty);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output with newlines and indentation.
    #[must_use]
    pub fn pretty() -> Self {
        JsonOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// Only affects pretty-printed output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the longest key or scalar, in bytes, the decoder accepts.
    ///
    /// Longer strings fail with [`Error::LabelTooLong`](crate::Error::LabelTooLong)
    /// instead of being cut short.
    #[must_use]
    pub fn with_max_label_len(mut self, max_label_len: usize) -> Self {
        self.max_label_len = max_label_len;
        self
    }

    /// Sets how many bytes of input on each side of a syntax error are quoted
    /// in the error.
    #[must_use]
    pub fn with_context_radius(mut self, context_radius: usize) -> Self {
        self.context_radius = context_radius;
        self
    }
}
