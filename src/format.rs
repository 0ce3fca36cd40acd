//! Document Format
//!
//! This module documents the JSON subset read and written by this library.
//! It contains no code.
//!
//! # Grammar
//!
//! ```text
//! document := struct | array
//! struct   := '{' (property (',' property)*)? '}'
//! property := string ':' value
//! value    := string | struct | array
//! array    := '[' (string (',' string)* | struct (',' struct)*)? ']'
//! string   := '"' (any byte except an unescaped '"')* '"'
//! ```
//!
//! **Rules**:
//! - All values are strings; `1`, `true` and `null` are not accepted unquoted
//! - An array holds only strings or only objects, never both, and never other
//!   arrays
//! - Spaces, tabs, line breaks and commas between tokens are skipped
//!   interchangeably, so `{"a":"1" "b":"2"}` is accepted
//! - Keys and scalars are at most 500 bytes by default
//!   (see [`JsonOptions::with_max_label_len`](crate::JsonOptions::with_max_label_len))
//! - Bytes after the closing bracket of the document are never read
//!
//! ## Strings
//!
//! A backslash stops the following byte from ending the string. Both bytes are
//! kept in the decoded text, and no escape sequence is translated:
//!
//! | Input        | Decoded text |
//! |--------------|--------------|
//! | `"plain"`    | `plain`      |
//! | `"a\"b"`     | `a\"b`       |
//! | `"tab\there"`| `tab\there`  |
//! | `"é"`        | `é`          |
//!
//! The encoder writes text back exactly as stored, so decoded strings survive
//! a round trip unchanged.
//!
//! # Shapes
//!
//! | JSON                  | Tree                                              |
//! |-----------------------|---------------------------------------------------|
//! | `"k":"v"`             | `Scalar` property `k` with one `Value` child `v`  |
//! | `"k":{...}`           | `Object` property `k` holding properties          |
//! | `"k":["a","b"]`       | `ArrayOfScalars` property `k` with `Value` children |
//! | `"k":[{...},{...}]`   | `ArrayOfObjects` property `k` with unlabeled `Object` children |
//! | `"k":[]`              | `ArrayOfScalars` property `k` with one unlabeled `Value` placeholder |
//!
//! A top-level array decodes into a root with one property whose key is empty.
//! Such a root, and any root whose single property has no key and holds a
//! scalar or an array, encodes back without surrounding braces. An anonymous
//! object property keeps its braces and key (`{"":{...}}`).
//!
//! An array of objects built empty encodes as `[]` and therefore decodes as an
//! empty array of scalars.
//!
//! # Layout
//!
//! ## Compact
//!
//! No whitespace at all, one trailing newline:
//!
//! ```text
//! {"id":"1","tags":["a","b"],"pos":{"x":"0"},"items":[{"n":"1"},{"n":"2"}]}
//! ```
//!
//! ## Pretty
//!
//! Every property and every element of an array of objects starts a new line,
//! indented by [`JsonOptions::indent`](crate::JsonOptions::indent) spaces per
//! level (2 by default). Arrays of scalars stay on one line, and there is no
//! space after the colon:
//!
//! ```text
//! {
//!   "id":"1",
//!   "tags":["a","b"],
//!   "pos":{
//!     "x":"0"
//!   },
//!   "items":[
//!     {
//!       "n":"1"
//!     },
//!     {
//!       "n":"2"
//!     }
//!   ]
//! }
//! ```
//!
//! # Errors
//!
//! | Condition                                  | Error                          |
//! |--------------------------------------------|--------------------------------|
//! | Unexpected byte at a decision point        | [`Error::InvalidData`](crate::Error::InvalidData) |
//! | Input ends before the document is complete | [`Error::UnexpectedEof`](crate::Error::UnexpectedEof) |
//! | Key or scalar above the length bound       | [`Error::LabelTooLong`](crate::Error::LabelTooLong) |
//! | Key or scalar not valid UTF-8              | [`Error::InvalidUtf8`](crate::Error::InvalidUtf8) |
//! | Read, write or seek failure                | [`Error::Io`](crate::Error::Io) |
