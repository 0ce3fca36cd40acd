//! Tree-to-text encoding.
//!
//! This module provides the [`Encoder`] that writes a [`Node`] tree as JSON text
//! to any [`io::Write`] sink.
//!
//! ## Overview
//!
//! Every property is printed according to its [`NodeKind`]:
//!
//! - **Scalar**: `"key":"text"`
//! - **Array of scalars**: `"key":["a","b"]`, always on one line
//! - **Object**: `"key":{ ... }` with one property per line in pretty mode
//! - **Array of objects**: `"key":[{ ... },{ ... }]`, one element per line in
//!   pretty mode
//!
//! A root holding a single property with an empty key is printed without the
//! surrounding braces, so a bare array round-trips as a bare array. The
//! document always ends with a newline.
//!
//! Labels are written verbatim: text that must contain a double quote has to be
//! stored with its backslash already in place.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use shape_json::{tree, to_string, to_string_pretty};
//!
//! let record = tree!({ "id": "1", "tags": ["a", "b"] });
//!
//! assert_eq!(to_string(&record).unwrap(), "{\"id\":\"1\",\"tags\":[\"a\",\"b\"]}\n");
//! assert_eq!(
//!     to_string_pretty(&record).unwrap(),
//!     "{\n  \"id\":\"1\",\n  \"tags\":[\"a\",\"b\"]\n}\n"
//! );
//! ```
//!
//! ## Direct Encoder Usage
//!
//! ```rust
//! use shape_json::{tree, Encoder, JsonOptions};
//!
//! let mut encoder = Encoder::new(Vec::new(), JsonOptions::new());
//! encoder.encode(&tree!(["8", "9", "10"])).unwrap();
//!
//! assert_eq!(encoder.into_inner(), b"[\"8\",\"9\",\"10\"]\n");
//! ```

use std::io;

use crate::node::{Node, NodeKind};
use crate::{Error, JsonOptions, Result};

/// Writes trees as JSON text.
///
/// Output goes straight to the underlying writer; a failed write aborts the
/// encoding with [`Error::Io`] and leaves whatever was already written.
pub struct Encoder<W> {
    writer: W,
    options: JsonOptions,
}

impl<W: io::Write> Encoder<W> {
    pub fn new(writer: W, options: JsonOptions) -> Self {
        Encoder { writer, options }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Encodes `node` as a complete document followed by a newline.
    ///
    /// An object node prints its properties between braces. Any other node
    /// prints its value, which makes it possible to encode a subtree taken
    /// from a larger document.
    pub fn encode(&mut self, node: &Node) -> Result<()> {
        tracing::trace!(pretty = self.options.pretty, properties = node.len(), "encoding tree");

        match node.elided_property() {
            Some(property) => self.write_value(property, 0)?,
            None => self.write_value(node, 0)?,
        }
        self.write("\n")?;
        self.writer.flush().map_err(Error::from)
    }

    fn write(&mut self, s: &str) -> Result<()> {
        self.writer.write_all(s.as_bytes()).map_err(Error::from)
    }

    fn write_newline(&mut self) -> Result<()> {
        if self.options.pretty {
            self.write("\n")?;
        }
        Ok(())
    }

    fn write_indent(&mut self, depth: usize) -> Result<()> {
        if self.options.pretty && depth > 0 {
            let indent = " ".repeat(depth * self.options.indent);
            self.write(&indent)?;
        }
        Ok(())
    }

    fn write_quoted(&mut self, label: Option<&str>) -> Result<()> {
        self.write("\"")?;
        self.write(label.unwrap_or(""))?;
        self.write("\"")
    }

    fn write_property(&mut self, property: &Node, depth: usize) -> Result<()> {
        self.write_indent(depth)?;
        self.write_quoted(property.label())?;
        self.write(":")?;
        self.write_value(property, depth)
    }

    fn write_value(&mut self, node: &Node, depth: usize) -> Result<()> {
        match node.kind() {
            NodeKind::Value | NodeKind::Scalar => self.write_quoted(node.text()),
            NodeKind::ArrayOfScalars => self.write_scalar_array(node),
            NodeKind::Object => self.write_object(node, depth),
            NodeKind::ArrayOfObjects => self.write_object_array(node, depth),
        }
    }

    fn write_object(&mut self, node: &Node, depth: usize) -> Result<()> {
        if node.is_empty() {
            return self.write("{}");
        }

        self.write("{")?;
        self.write_newline()?;
        let last = node.len() - 1;
        for (i, property) in node.iter().enumerate() {
            self.write_property(property, depth + 1)?;
            if i < last {
                self.write(",")?;
            }
            self.write_newline()?;
        }
        self.write_indent(depth)?;
        self.write("}")
    }

    fn write_scalar_array(&mut self, node: &Node) -> Result<()> {
        self.write("[")?;
        if !node.holds_placeholder() {
            for (i, value) in node.iter().enumerate() {
                if i > 0 {
                    self.write(",")?;
                }
                self.write_quoted(value.label())?;
            }
        }
        self.write("]")
    }

    fn write_object_array(&mut self, node: &Node, depth: usize) -> Result<()> {
        if node.holds_placeholder() {
            return self.write("[]");
        }

        self.write("[")?;
        self.write_newline()?;
        self.write_indent(depth + 1)?;
        let last = node.len() - 1;
        for (i, element) in node.iter().enumerate() {
            self.write_object(element, depth + 1)?;
            if i < last {
                self.write(",")?;
                self.write_newline()?;
                self.write_indent(depth + 1)?;
            } else {
                self.write_newline()?;
            }
        }
        self.write_indent(depth)?;
        self.write("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(node: &Node, options: JsonOptions) -> String {
        let mut encoder = Encoder::new(Vec::new(), options);
        encoder.encode(node).unwrap();
        String::from_utf8(encoder.into_inner()).unwrap()
    }

    fn element(key: &str, text: &str) -> Node {
        let mut node = Node::new();
        node.add_scalar_property(key, text);
        node
    }

    #[test]
    fn test_empty_root() {
        assert_eq!(encode(&Node::new(), JsonOptions::new()), "{}\n");
        assert_eq!(encode(&Node::new(), JsonOptions::pretty()), "{}\n");
    }

    #[test]
    fn test_scalar_and_placeholder() {
        let mut root = Node::new();
        root.add_scalar_property("a", "1")
            .add_scalar_array_property("b", Vec::<&str>::new())
            .add_object_array_property("c", Vec::new())
            .add_object_property("d", Node::new());

        assert_eq!(
            encode(&root, JsonOptions::new()),
            "{\"a\":\"1\",\"b\":[],\"c\":[],\"d\":{}}\n"
        );
    }

    #[test]
    fn test_object_array_compact() {
        let mut root = Node::new();
        root.add_object_array_property("xs", vec![element("v", "1"), element("v", "2")]);

        assert_eq!(
            encode(&root, JsonOptions::new()),
            "{\"xs\":[{\"v\":\"1\"},{\"v\":\"2\"}]}\n"
        );
    }

    #[test]
    fn test_object_array_pretty() {
        let mut root = Node::new();
        root.add_object_array_property("xs", vec![element("v", "1"), element("v", "2")]);

        let expected = "{\n  \"xs\":[\n    {\n      \"v\":\"1\"\n    },\n    {\n      \"v\":\"2\"\n    }\n  ]\n}\n";
        assert_eq!(encode(&root, JsonOptions::pretty()), expected);
    }

    #[test]
    fn test_nested_object_pretty() {
        let mut root = Node::new();
        root.add_object_property("o", element("k", "v"))
            .add_scalar_array_property("n", ["1", "2"]);

        let expected = "{\n  \"o\":{\n    \"k\":\"v\"\n  },\n  \"n\":[\"1\",\"2\"]\n}\n";
        assert_eq!(encode(&root, JsonOptions::pretty()), expected);
    }

    #[test]
    fn test_custom_indent() {
        let root = element("k", "v");
        assert_eq!(
            encode(&root, JsonOptions::pretty().with_indent(1)),
            "{\n \"k\":\"v\"\n}\n"
        );
    }

    #[test]
    fn test_elided_root() {
        let mut root = Node::new();
        root.add_scalar_array_property("", ["8", "9", "10"]);
        assert_eq!(encode(&root, JsonOptions::new()), "[\"8\",\"9\",\"10\"]\n");
        assert_eq!(encode(&root, JsonOptions::pretty()), "[\"8\",\"9\",\"10\"]\n");

        let mut empty = Node::new();
        empty.add_scalar_array_property("", Vec::<&str>::new());
        assert_eq!(encode(&empty, JsonOptions::new()), "[]\n");
    }

    #[test]
    fn test_elided_object_array_pretty() {
        let mut root = Node::new();
        root.add_object_array_property("", vec![element("a", "1")]);
        assert_eq!(
            encode(&root, JsonOptions::pretty()),
            "[\n  {\n    \"a\":\"1\"\n  }\n]\n"
        );
    }

    #[test]
    fn test_labels_written_verbatim() {
        let root = element("q", r#"say \"hi\""#);
        assert_eq!(encode(&root, JsonOptions::new()), "{\"q\":\"say \\\"hi\\\"\"}\n");
    }

    #[test]
    fn test_encode_subtree() {
        let mut root = Node::new();
        root.add_object_property("inner", element("k", "v"))
            .add_scalar_property("s", "x");

        assert_eq!(encode(&root["inner"], JsonOptions::new()), "{\"k\":\"v\"}\n");
        assert_eq!(encode(&root["s"], JsonOptions::new()), "\"x\"\n");
    }

    struct FailingWriter;

    impl io::Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let mut encoder = Encoder::new(FailingWriter, JsonOptions::new());
        let err = encoder.encode(&element("k", "v")).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Io);
    }
}
