//! Conversion of plain Rust values into properties.
//!
//! [`IntoProperty`] lets [`Node::add_property`](crate::Node::add_property) pick
//! the property shape from the argument type:
//!
//! | Argument                                   | Property kind     |
//! |--------------------------------------------|-------------------|
//! | `&str`, `String`, `&String`                | scalar            |
//! | `Node`                                     | object            |
//! | `Vec<&str>`, `Vec<String>`, slices, arrays | array of scalars  |
//! | `Vec<Node>`                                | array of objects  |
//!
//! Text is copied; nodes are moved.

use crate::node::{check_label, Node};

/// A value that can become a property named `key`.
pub trait IntoProperty {
    fn into_property(self, key: &str) -> Node;
}

impl IntoProperty for &str {
    fn into_property(self, key: &str) -> Node {
        check_label(self);
        Node::scalar_property(key.to_owned(), Some(self.to_owned()))
    }
}

impl IntoProperty for String {
    fn into_property(self, key: &str) -> Node {
        check_label(&self);
        Node::scalar_property(key.to_owned(), Some(self))
    }
}

impl IntoProperty for &String {
    fn into_property(self, key: &str) -> Node {
        self.as_str().into_property(key)
    }
}

impl IntoProperty for Node {
    fn into_property(self, key: &str) -> Node {
        Node::object_property(key.to_owned(), self)
    }
}

impl IntoProperty for Vec<Node> {
    fn into_property(self, key: &str) -> Node {
        Node::object_array_property(key.to_owned(), self)
    }
}

impl IntoProperty for Vec<String> {
    fn into_property(self, key: &str) -> Node {
        self.iter().for_each(|text| check_label(text));
        Node::scalar_array_property(key.to_owned(), self)
    }
}

impl IntoProperty for Vec<&str> {
    fn into_property(self, key: &str) -> Node {
        self.as_slice().into_property(key)
    }
}

impl IntoProperty for &[&str] {
    fn into_property(self, key: &str) -> Node {
        let texts = self
            .iter()
            .map(|text| {
                check_label(text);
                (*text).to_owned()
            })
            .collect();
        Node::scalar_array_property(key.to_owned(), texts)
    }
}

impl IntoProperty for &[String] {
    fn into_property(self, key: &str) -> Node {
        self.iter().for_each(|text| check_label(text));
        Node::scalar_array_property(key.to_owned(), self.to_vec())
    }
}

impl<const N: usize> IntoProperty for [&str; N] {
    fn into_property(self, key: &str) -> Node {
        self.as_slice().into_property(key)
    }
}
