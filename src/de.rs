//! Text-to-tree decoding.
//!
//! This module provides the [`Decoder`] that reads JSON text from a seekable
//! stream and rebuilds the [`Node`] tree.
//!
//! ## Overview
//!
//! - **Single pass**: recursive descent with one byte of lookahead
//! - **Shape detection**: the first significant byte after `[` decides between
//!   an array of scalars and an array of objects
//! - **Lenient separators**: spaces, tabs, line breaks and commas between
//!   tokens are all skipped alike
//! - **Error context**: syntax errors quote the input around the failure,
//!   read back from the stream
//!
//! Backslashes inside strings are kept as-is; a backslash only stops the next
//! byte from closing the string. Anything after the top-level value is left
//! unread.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use shape_json::{from_str, NodeKind};
//!
//! let root = from_str(r#"{"owner":{"id":"9"},"tags":[]}"#).unwrap();
//! assert_eq!(root["owner"]["id"].text(), Some("9"));
//! assert_eq!(root["tags"].kind(), NodeKind::ArrayOfScalars);
//! ```
//!
//! ## Direct Decoder Usage
//!
//! [`Decoder::decode_into`] fills a caller-provided node and keeps whatever
//! was parsed before a failure:
//!
//! ```rust
//! use std::io::Cursor;
//! use shape_json::{Decoder, Node};
//!
//! let mut decoder = Decoder::new(Cursor::new(r#"{"a":"1","b":"#));
//! let mut root = Node::new();
//! assert!(decoder.decode_into(&mut root).is_err());
//! assert_eq!(root["a"].text(), Some("1"));
//! ```

use std::io::{self, Read, Seek, SeekFrom};

use crate::node::Node;
use crate::{Error, JsonOptions, Result};

/// Reads JSON text into trees.
///
/// The stream must be seekable: parsing an array of objects steps back over
/// the opening brace, and syntax errors re-read the surrounding bytes.
pub struct Decoder<R> {
    reader: R,
    position: u64,
    options: JsonOptions,
}

impl<R: Read + Seek> Decoder<R> {
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, JsonOptions::default())
    }

    pub fn with_options(reader: R, options: JsonOptions) -> Self {
        Decoder {
            reader,
            position: 0,
            options,
        }
    }

    /// Number of bytes consumed since the decoder was created.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Decodes one document into a fresh root node.
    pub fn decode(mut self) -> Result<Node> {
        let mut root = Node::new();
        self.decode_into(&mut root)?;
        Ok(root)
    }

    /// Decodes one document, appending its properties to `root`.
    ///
    /// On failure `root` keeps every property that was completely parsed, plus
    /// the nested objects that were being filled.
    pub fn decode_into(&mut self, root: &mut Node) -> Result<()> {
        tracing::trace!(max_label_len = self.options.max_label_len, "decoding tree");

        let result = self.parse_document(root);
        if let Err(err) = &result {
            tracing::debug!(position = self.position, error = %err, "decoding failed");
        }
        result
    }

    fn parse_document(&mut self, root: &mut Node) -> Result<()> {
        match self.next_significant()? {
            b'{' => self.parse_struct(root),
            b'[' => self.parse_array(root, String::new()),
            other => Err(self.invalid(other, "'{' or '['")),
        }
    }

    fn parse_struct(&mut self, node: &mut Node) -> Result<()> {
        loop {
            match self.next_significant()? {
                b'}' => return Ok(()),
                b'"' => self.parse_property(node)?,
                other => return Err(self.invalid(other, "'\"' or '}'")),
            }
        }
    }

    fn parse_property(&mut self, node: &mut Node) -> Result<()> {
        let key = self.parse_string()?;
        match self.next_significant()? {
            b':' => {}
            other => return Err(self.invalid(other, "':'")),
        }

        match self.next_significant()? {
            b'"' => {
                let text = self.parse_string()?;
                node.push(Node::scalar_property(key, Some(text)));
                Ok(())
            }
            b'[' => self.parse_array(node, key),
            b'{' => {
                let child = node.push(Node::object_property(key, Node::new()));
                self.parse_struct(child)
            }
            other => Err(self.invalid(other, "'\"', '{' or '['")),
        }
    }

    /// Parses an array whose `[` was just consumed.
    fn parse_array(&mut self, node: &mut Node, key: String) -> Result<()> {
        match self.next_significant()? {
            b'"' => self.parse_scalar_array(node, key),
            b'{' => {
                self.rewind()?;
                self.parse_object_array(node, key)
            }
            b']' => {
                node.push(Node::scalar_array_property(key, Vec::new()));
                Ok(())
            }
            other => Err(self.invalid(other, "'\"', '{' or ']'")),
        }
    }

    /// Parses scalars once the opening quote of the first one was consumed.
    fn parse_scalar_array(&mut self, node: &mut Node, key: String) -> Result<()> {
        let mut texts = Vec::new();
        loop {
            texts.push(self.parse_string()?);
            match self.next_significant()? {
                b'"' => {}
                b']' => break,
                other => return Err(self.invalid(other, "'\"' or ']'")),
            }
        }
        node.push(Node::scalar_array_property(key, texts));
        Ok(())
    }

    fn parse_object_array(&mut self, node: &mut Node, key: String) -> Result<()> {
        let mut elements = Vec::new();
        loop {
            elements.push(self.parse_element()?);
            match self.next_significant()? {
                b'{' => self.rewind()?,
                b']' => break,
                other => return Err(self.invalid(other, "'{' or ']'")),
            }
        }
        node.push(Node::object_array_property(key, elements));
        Ok(())
    }

    fn parse_element(&mut self) -> Result<Node> {
        match self.next_significant()? {
            b'{' => {
                let mut element = Node::new();
                self.parse_struct(&mut element)?;
                Ok(element)
            }
            other => Err(self.invalid(other, "'{'")),
        }
    }

    /// Reads string content once the opening quote was consumed.
    fn parse_string(&mut self) -> Result<String> {
        let max = self.options.max_label_len;
        let mut bytes = Vec::new();
        let mut escaped = false;
        loop {
            let byte = self.next_byte()?;
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                break;
            }
            if bytes.len() == max {
                return Err(Error::label_too_long(self.position - 1, max));
            }
            bytes.push(byte);
        }
        String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8 {
            position: self.position,
        })
    }

    fn next_byte(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Err(Error::unexpected_eof(self.position)),
                Ok(_) => {
                    self.position += 1;
                    return Ok(buf[0]);
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(Error::from(err)),
            }
        }
    }

    fn next_significant(&mut self) -> Result<u8> {
        loop {
            let byte = self.next_byte()?;
            if !matches!(byte, b' ' | b'\t' | b'\r' | b'\n' | b',') {
                return Ok(byte);
            }
        }
    }

    fn rewind(&mut self) -> Result<()> {
        self.reader.seek_relative(-1)?;
        self.position -= 1;
        Ok(())
    }

    /// Builds a syntax error for the byte just read.
    fn invalid(&mut self, found: u8, expected: &'static str) -> Error {
        let context = self.context();
        Error::invalid_data(self.position - 1, expected, char::from(found), &context)
    }

    /// Input around the current position, up to `context_radius` bytes on
    /// each side. The stream is put back where it was afterwards.
    fn context(&mut self) -> String {
        let radius = self.options.context_radius as u64;
        let back = radius.min(self.position);
        let Ok(offset) = i64::try_from(back) else {
            return String::new();
        };
        if self.reader.seek(SeekFrom::Current(-offset)).is_err() {
            return String::new();
        }

        let mut window = Vec::new();
        let read = (&mut self.reader).take(2 * radius).read_to_end(&mut window);
        let restore = offset - window.len() as i64;
        if self.reader.seek(SeekFrom::Current(restore)).is_err() || read.is_err() {
            tracing::trace!(position = self.position, "could not read error context");
        }
        String::from_utf8_lossy(&window).into_owned()
    }
}
