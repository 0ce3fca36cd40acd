//! # shape_json
//!
//! A JSON document model built on a single labeled tree, with a codec that
//! reads and writes structured records as JSON text.
//!
//! ## What is a shape?
//!
//! Every node of a document is tagged with what it stands for: a scalar, an
//! object, an array of scalars or an array of objects. The encoder prints a
//! node according to its tag and the decoder assigns the tag from the first
//! significant byte of each value, so a record always comes back with the same
//! shape it was saved with.
//!
//! ## Key Features
//!
//! - **One node type**: keys, scalar text, objects and arrays are all [`Node`]s
//! - **Text-only scalars**: numbers and booleans are stored and compared as text
//! - **Two layouts**: compact single-line output, or pretty output with
//!   configurable indentation
//! - **Stream based**: encode to any [`io::Write`], decode from any
//!   [`io::Read`] + [`io::Seek`]
//! - **Serde bridge**: [`Node`] implements `Serialize` and `Deserialize`
//!
//! ## Quick Start
//!
//! ### Building and Saving a Record
//!
//! ```rust
//! use shape_json::{to_string, Node};
//!
//! let mut point = Node::new();
//! point.add_scalar_property("x", "1").add_scalar_property("y", "2");
//!
//! let mut record = Node::new();
//! record
//!     .add_scalar_property("id", "42")
//!     .add_scalar_array_property("tags", ["a", "b"])
//!     .add_object_property("point", point);
//!
//! let json = to_string(&record).unwrap();
//! assert_eq!(
//!     json,
//!     "{\"id\":\"42\",\"tags\":[\"a\",\"b\"],\"point\":{\"x\":\"1\",\"y\":\"2\"}}\n"
//! );
//! ```
//!
//! ### Loading It Back
//!
//! ```rust
//! use shape_json::{from_str, NodeKind};
//!
//! let record = from_str(r#"{"id":"42","points":[{"x":"1"},{"x":"3"}]}"#).unwrap();
//!
//! assert_eq!(record["id"].text(), Some("42"));
//! assert_eq!(record["points"].kind(), NodeKind::ArrayOfObjects);
//! assert_eq!(record["points"][1]["x"].text(), Some("3"));
//! ```
//!
//! ### Literal Trees with the tree! Macro
//!
//! ```rust
//! use shape_json::{tree, to_string_pretty};
//!
//! let record = tree!({ "id": 7, "tags": ["x"] });
//! assert_eq!(
//!     to_string_pretty(&record).unwrap(),
//!     "{\n  \"id\":\"7\",\n  \"tags\":[\"x\"]\n}\n"
//! );
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Encoding**: O(n) in the number of nodes, written straight to the sink
//! - **Decoding**: O(n) single pass with one byte of lookahead
//! - **Lookup**: [`Node::property`] scans children linearly
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Malformed input is reported as an [`Error`], with position and context
//! - Panics only through [`Index`](std::ops::Index) on a missing key or child
//!
//! ## Format
//!
//! The accepted grammar and the exact output layout are described in
//! [`format`].
//!
//! ## Examples
//!
//! `demos/record.rs` saves a record to a file in both layouts and reads it
//! back. Run it with: `cargo run --example record`

pub mod de;
pub mod error;
pub mod format;
pub mod macros;
pub mod node;
pub mod options;
pub mod property;
pub mod ser;

pub use de::Decoder;
pub use error::{Error, ErrorKind, Result};
pub use node::{Node, NodeKind};
pub use options::JsonOptions;
pub use property::IntoProperty;
pub use ser::Encoder;

use std::io;

/// Encodes a tree as a compact JSON string.
///
/// # Examples
///
/// ```rust
/// use shape_json::{to_string, Node};
///
/// let mut root = Node::new();
/// root.add_scalar_property("x", "1");
/// assert_eq!(to_string(&root).unwrap(), "{\"x\":\"1\"}\n");
/// ```
///
/// # Errors
///
/// Encoding into memory does not fail in practice; the `Result` mirrors
/// [`to_writer`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(node: &Node) -> Result<String> {
    to_string_with_options(node, JsonOptions::default())
}

/// Encodes a tree as a pretty-printed JSON string.
///
/// Pretty-printing puts every property and every array element on its own
/// line, indented by two spaces per level.
///
/// # Examples
///
/// ```rust
/// use shape_json::{to_string_pretty, Node};
///
/// let mut root = Node::new();
/// root.add_scalar_property("x", "1");
/// assert_eq!(to_string_pretty(&root).unwrap(), "{\n  \"x\":\"1\"\n}\n");
/// ```
///
/// # Errors
///
/// See [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty(node: &Node) -> Result<String> {
    to_string_with_options(node, JsonOptions::pretty())
}

/// Encodes a tree as a JSON string with custom options.
///
/// # Examples
///
/// ```rust
/// use shape_json::{to_string_with_options, JsonOptions, Node};
///
/// let mut root = Node::new();
/// root.add_scalar_property("x", "1");
/// let options = JsonOptions::pretty().with_indent(1);
/// assert_eq!(to_string_with_options(&root, options).unwrap(), "{\n \"x\":\"1\"\n}\n");
/// ```
///
/// # Errors
///
/// Returns an error if the encoded labels are not valid UTF-8, which cannot
/// happen for labels set through this crate.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options(node: &Node, options: JsonOptions) -> Result<String> {
    let mut buffer = Vec::with_capacity(256);
    to_writer_with_options(&mut buffer, node, options)?;
    String::from_utf8(buffer).map_err(Error::custom)
}

/// Encodes a tree as compact JSON into a writer.
///
/// # Examples
///
/// ```rust
/// use shape_json::{to_writer, tree};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &tree!({ "x": "1" })).unwrap();
/// assert_eq!(buffer, b"{\"x\":\"1\"}\n");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] as soon as a write to `writer` fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, node: &Node) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, node, JsonOptions::default())
}

/// Encodes a tree into a writer with custom options.
///
/// # Errors
///
/// Returns [`Error::Io`] as soon as a write to `writer` fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(writer: W, node: &Node, options: JsonOptions) -> Result<()>
where
    W: io::Write,
{
    Encoder::new(writer, options).encode(node)
}

/// Decodes a tree from a string of JSON text.
///
/// # Examples
///
/// ```rust
/// use shape_json::from_str;
///
/// let root = from_str("[\"8\",\"9\",\"10\"]\n").unwrap();
/// assert_eq!(root[0].len(), 3);
/// ```
///
/// # Errors
///
/// Returns an error if the input does not follow the grammar or ends early.
/// Syntax errors include the byte offset and the surrounding text.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Node> {
    from_slice(s.as_bytes())
}

/// Decodes a tree from bytes of JSON text.
///
/// # Errors
///
/// See [`from_str`]; keys and scalars must also be valid UTF-8.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Node> {
    from_reader(io::Cursor::new(v))
}

/// Decodes a tree from a seekable stream.
///
/// Reading stops right after the top-level value.
///
/// # Examples
///
/// ```rust
/// use shape_json::from_reader;
/// use std::io::Cursor;
///
/// let root = from_reader(Cursor::new(b"{\"x\":\"1\"}")).unwrap();
/// assert_eq!(root["x"].text(), Some("1"));
/// ```
///
/// # Errors
///
/// Returns an error if reading from the stream fails, the input ends early,
/// or the input does not follow the grammar.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(reader: R) -> Result<Node>
where
    R: io::Read + io::Seek,
{
    from_reader_with_options(reader, JsonOptions::default())
}

/// Decodes a tree from a seekable stream with custom limits.
///
/// # Examples
///
/// ```rust
/// use shape_json::{from_reader_with_options, Error, JsonOptions};
/// use std::io::Cursor;
///
/// let options = JsonOptions::new().with_max_label_len(4);
/// let err = from_reader_with_options(Cursor::new("{\"toolong\":\"1\"}"), options).unwrap_err();
/// assert!(matches!(err, Error::LabelTooLong { max: 4, .. }));
/// ```
///
/// # Errors
///
/// See [`from_reader`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader_with_options<R>(reader: R, options: JsonOptions) -> Result<Node>
where
    R: io::Read + io::Seek,
{
    Decoder::with_options(reader, options).decode()
}
