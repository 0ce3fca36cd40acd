//! The labeled tree every document is made of.
//!
//! A [`Node`] carries an optional label, an ordered list of owned children and a
//! [`NodeKind`] tag. The meaning of the label depends on where the node sits:
//!
//! - on a **property** it is the key
//! - on a childless **value** node it is the literal scalar text, or absent for
//!   the placeholder of an empty array
//!
//! The root of a document and every element of an array of objects are
//! [`NodeKind::Object`] nodes whose children are properties.
//!
//! ## Building Trees
//!
//! ```rust
//! use shape_json::{Node, NodeKind};
//!
//! let mut point = Node::new();
//! point.add_scalar_property("x", "1").add_scalar_property("y", "2");
//!
//! let mut root = Node::new();
//! root.add_scalar_property("name", "origin")
//!     .add_scalar_array_property("tags", ["a", "b"])
//!     .add_object_property("point", point);
//!
//! assert_eq!(root.len(), 3);
//! assert_eq!(root["point"].kind(), NodeKind::Object);
//! assert_eq!(root["point"]["y"].text(), Some("2"));
//! ```
//!
//! ## Reading Trees
//!
//! Properties are found by key with [`Node::property`]; array elements and
//! scalar values are reached by position:
//!
//! ```rust
//! use shape_json::from_str;
//!
//! let root = from_str(r#"{"ids":["4","5"],"owner":{"id":"9"}}"#).unwrap();
//!
//! let ids = root.property("ids").unwrap();
//! assert_eq!(ids[1].label(), Some("5"));
//! assert_eq!(root["owner"].property("id").and_then(|p| p.text()), Some("9"));
//! assert!(root.property("missing").is_none());
//! ```

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::options::MAX_LABEL_LEN;
use crate::property::IntoProperty;
use crate::Error;

/// What a node stands for in the document.
///
/// The tag is assigned when the node is built or parsed, so the encoder never
/// has to guess a node's role from its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum NodeKind {
    /// Childless leaf whose label is scalar text.
    Value,
    /// Property holding exactly one value.
    Scalar,
    /// Root, nested object property, or array element; children are properties.
    #[default]
    Object,
    /// Property holding one or more values.
    ArrayOfScalars,
    /// Property holding unlabeled object elements.
    ArrayOfObjects,
}

impl NodeKind {
    /// Returns `true` for both array kinds.
    #[inline]
    #[must_use]
    pub const fn is_array(self) -> bool {
        matches!(self, NodeKind::ArrayOfScalars | NodeKind::ArrayOfObjects)
    }
}

/// An element of the labeled tree.
///
/// A node owns its label and its children; dropping it drops the whole
/// subtree.
///
/// # Examples
///
/// ```rust
/// use shape_json::{Node, NodeKind};
///
/// let mut root = Node::new();
/// root.add_scalar_property("id", "42");
///
/// let id = &root[0];
/// assert_eq!(id.label(), Some("id"));
/// assert_eq!(id.kind(), NodeKind::Scalar);
/// assert_eq!(id[0].label(), Some("42"));
/// assert!(id[0].is_value());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Node {
    label: Option<String>,
    kind: NodeKind,
    children: Vec<Node>,
}

pub(crate) fn check_label(label: &str) {
    debug_assert!(
        label.len() <= MAX_LABEL_LEN,
        "label longer than {} bytes",
        MAX_LABEL_LEN
    );
}

impl Node {
    /// Creates an empty, unlabeled object node.
    ///
    /// This is the starting point for a document root, a nested object or an
    /// element of an array of objects.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn value(label: Option<String>) -> Self {
        Node {
            label,
            kind: NodeKind::Value,
            children: Vec::new(),
        }
    }

    pub(crate) fn scalar_property(key: String, text: Option<String>) -> Self {
        Node {
            label: Some(key),
            kind: NodeKind::Scalar,
            children: vec![Node::value(text)],
        }
    }

    pub(crate) fn scalar_array_property(key: String, texts: Vec<String>) -> Self {
        let mut children: Vec<Node> = texts.into_iter().map(|t| Node::value(Some(t))).collect();
        if children.is_empty() {
            children.push(Node::value(None));
        }
        Node {
            label: Some(key),
            kind: NodeKind::ArrayOfScalars,
            children,
        }
    }

    pub(crate) fn object_property(key: String, mut subtree: Node) -> Self {
        debug_assert_eq!(subtree.kind, NodeKind::Object, "subtree must be an object");
        subtree.label = Some(key);
        subtree.kind = NodeKind::Object;
        subtree
    }

    pub(crate) fn object_array_property(key: String, elements: Vec<Node>) -> Self {
        let mut children = elements;
        for element in &mut children {
            debug_assert_eq!(element.kind, NodeKind::Object, "elements must be objects");
            element.label = None;
        }
        if children.is_empty() {
            children.push(Node::value(None));
        }
        Node {
            label: Some(key),
            kind: NodeKind::ArrayOfObjects,
            children,
        }
    }

    /// Appends `child` and returns it.
    pub(crate) fn push(&mut self, child: Node) -> &mut Node {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Returns the label, if any.
    #[inline]
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Replaces the label with a copy of `label`.
    ///
    /// On a property this renames the key; on a value node it replaces the
    /// scalar text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shape_json::Node;
    ///
    /// let mut node = Node::new();
    /// node.set_label("testlabel");
    /// assert_eq!(node.label(), Some("testlabel"));
    /// ```
    pub fn set_label(&mut self, label: &str) {
        check_label(label);
        self.label = Some(label.to_owned());
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns `true` if this is a childless value node.
    #[inline]
    #[must_use]
    pub fn is_value(&self) -> bool {
        self.kind == NodeKind::Value
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns the child at `index`, or `None` if out of range.
    #[inline]
    #[must_use]
    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    /// Number of direct children.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.children.iter()
    }

    /// Returns the scalar text held by this node.
    ///
    /// For a value node this is its own label, for a scalar property the label
    /// of its single value. Every other kind, and the placeholder value,
    /// yields `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shape_json::Node;
    ///
    /// let mut root = Node::new();
    /// root.add_scalar_property("pi", "3.14");
    /// assert_eq!(root["pi"].text(), Some("3.14"));
    /// assert_eq!(root.text(), None);
    /// ```
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self.kind {
            NodeKind::Value => self.label(),
            NodeKind::Scalar => self.children.first().and_then(Node::label),
            _ => None,
        }
    }

    /// Returns the first property whose key equals `key`.
    ///
    /// The scan is linear and in insertion order, so with duplicate keys the
    /// earliest property wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shape_json::Node;
    ///
    /// let mut root = Node::new();
    /// root.add_scalar_property("k", "first").add_scalar_property("k", "second");
    /// assert_eq!(root.property("k").and_then(|p| p.text()), Some("first"));
    /// ```
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&Node> {
        self.children
            .iter()
            .find(|child| !child.is_value() && child.label() == Some(key))
    }

    /// Mutable variant of [`Node::property`].
    pub fn property_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.children
            .iter_mut()
            .find(|child| !child.is_value() && child.label() == Some(key))
    }

    /// Appends a scalar property, copying `key` and `text`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shape_json::{Node, NodeKind};
    ///
    /// let mut root = Node::new();
    /// root.add_scalar_property("key", "val");
    /// assert_eq!(root[0].label(), Some("key"));
    /// assert_eq!(root[0][0].label(), Some("val"));
    /// ```
    pub fn add_scalar_property(&mut self, key: &str, text: &str) -> &mut Self {
        check_label(key);
        check_label(text);
        self.add(Node::scalar_property(key.to_owned(), Some(text.to_owned())))
    }

    /// Appends `subtree` as an object property named `key`.
    ///
    /// The subtree is moved into this node; any label it had is replaced by
    /// `key`.
    pub fn add_object_property(&mut self, key: &str, subtree: Node) -> &mut Self {
        check_label(key);
        self.add(Node::object_property(key.to_owned(), subtree))
    }

    /// Appends an array-of-scalars property, copying every text.
    ///
    /// An empty input still produces one unlabeled placeholder value, so the
    /// property is never mistaken for a missing one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shape_json::Node;
    ///
    /// let mut root = Node::new();
    /// root.add_scalar_array_property("empty", Vec::<String>::new());
    /// assert_eq!(root["empty"].len(), 1);
    /// assert_eq!(root["empty"][0].label(), None);
    /// ```
    pub fn add_scalar_array_property<I, S>(&mut self, key: &str, texts: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        check_label(key);
        let texts = texts
            .into_iter()
            .map(|text| {
                check_label(text.as_ref());
                text.as_ref().to_owned()
            })
            .collect();
        self.add(Node::scalar_array_property(key.to_owned(), texts))
    }

    /// Appends an array-of-objects property, moving `elements` in as-is.
    ///
    /// Elements lose any label they carried. An empty input yields one
    /// unlabeled placeholder value.
    pub fn add_object_array_property<I>(&mut self, key: &str, elements: I) -> &mut Self
    where
        I: IntoIterator<Item = Node>,
    {
        check_label(key);
        self.add(Node::object_array_property(
            key.to_owned(),
            elements.into_iter().collect(),
        ))
    }

    /// Appends a property whose shape is chosen by the type of `value`.
    ///
    /// See [`IntoProperty`] for the accepted types.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shape_json::{Node, NodeKind};
    ///
    /// let mut root = Node::new();
    /// root.add_property("n", "1")
    ///     .add_property("ns", vec!["1", "2"])
    ///     .add_property("obj", Node::new())
    ///     .add_property("objs", vec![Node::new()]);
    ///
    /// let kinds: Vec<_> = root.iter().map(Node::kind).collect();
    /// assert_eq!(
    ///     kinds,
    ///     [NodeKind::Scalar, NodeKind::ArrayOfScalars, NodeKind::Object, NodeKind::ArrayOfObjects]
    /// );
    /// ```
    pub fn add_property<V: IntoProperty>(&mut self, key: &str, value: V) -> &mut Self {
        check_label(key);
        self.add(value.into_property(key))
    }

    fn add(&mut self, property: Node) -> &mut Self {
        debug_assert_eq!(
            self.kind,
            NodeKind::Object,
            "properties can only be added to an object"
        );
        self.children.push(property);
        self
    }

    /// Returns `true` if every child is a value and none carries a label,
    /// i.e. the node only holds the placeholder of an empty array.
    pub(crate) fn holds_placeholder(&self) -> bool {
        self.children
            .iter()
            .all(|child| child.is_value() && child.label.is_none())
    }

    /// The single anonymous property of a root, printed without braces.
    ///
    /// Only array and scalar values qualify: a bare object would read back as
    /// the root itself.
    pub(crate) fn elided_property(&self) -> Option<&Node> {
        match self.children.as_slice() {
            [only]
                if self.kind == NodeKind::Object
                    && matches!(
                        only.kind,
                        NodeKind::Scalar | NodeKind::ArrayOfScalars | NodeKind::ArrayOfObjects
                    )
                    && only.label().map_or(true, str::is_empty) =>
            {
                Some(only)
            }
            _ => None,
        }
    }
}

impl Index<usize> for Node {
    type Output = Node;

    fn index(&self, index: usize) -> &Self::Output {
        &self.children[index]
    }
}

impl Index<&str> for Node {
    type Output = Node;

    fn index(&self, key: &str) -> &Self::Output {
        match self.property(key) {
            Some(property) => property,
            None => panic!("no property named {:?}", key),
        }
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

/// Compact JSON; the alternate flag (`{:#}`) selects pretty output.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = if f.alternate() {
            crate::to_string_pretty(self)
        } else {
            crate::to_string(self)
        };
        f.write_str(&encoded.map_err(|_| fmt::Error)?)
    }
}

impl FromStr for Node {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::from_str(s)
    }
}

/// Serializes the document the way the encoder prints it: objects as maps,
/// arrays as sequences, scalars as strings.
impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.elided_property() {
            Some(property) => PropertyValue(property).serialize(serializer),
            None => PropertyValue(self).serialize(serializer),
        }
    }
}

struct PropertyValue<'a>(&'a Node);

impl Serialize for PropertyValue<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let node = self.0;
        match node.kind {
            NodeKind::Value | NodeKind::Scalar => serializer.serialize_str(node.text().unwrap_or("")),
            NodeKind::Object => {
                let mut map = serializer.serialize_map(Some(node.len()))?;
                for property in node {
                    map.serialize_entry(property.label().unwrap_or(""), &PropertyValue(property))?;
                }
                map.end()
            }
            NodeKind::ArrayOfScalars | NodeKind::ArrayOfObjects => {
                let elements: &[Node] = if node.holds_placeholder() {
                    &[]
                } else {
                    &node.children
                };
                let mut seq = serializer.serialize_seq(Some(elements.len()))?;
                for element in elements {
                    seq.serialize_element(&PropertyValue(element))?;
                }
                seq.end()
            }
        }
    }
}

/// Builds a tree from any self-describing format.
///
/// Numbers and booleans become their textual form and `null` becomes an
/// absent scalar. A top-level array or scalar becomes the single anonymous
/// property of the root. Arrays must hold only scalars or only objects.
///
/// # Examples
///
/// ```rust
/// use shape_json::Node;
///
/// let json = serde_json::json!({ "id": 7, "tags": ["a", "b"], "ok": true });
/// let root: Node = serde_json::from_value(json).unwrap();
/// assert_eq!(root["id"].text(), Some("7"));
/// assert_eq!(root["ok"].text(), Some("true"));
/// assert_eq!(root["tags"].len(), 2);
/// ```
impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Item::deserialize(deserializer)? {
            Item::Object(root) => Ok(root),
            other => {
                let mut root = Node::new();
                root.push(other.into_property(String::new()).map_err(de::Error::custom)?);
                Ok(root)
            }
        }
    }
}

enum Item {
    Text(Option<String>),
    Object(Node),
    Array(Vec<Item>),
}

fn bounded(label: String) -> Result<String, String> {
    if label.len() > MAX_LABEL_LEN {
        return Err(format!("label longer than {} bytes", MAX_LABEL_LEN));
    }
    Ok(label)
}

impl Item {
    fn into_property(self, key: String) -> Result<Node, String> {
        let key = bounded(key)?;
        match self {
            Item::Text(text) => Ok(Node::scalar_property(key, text.map(bounded).transpose()?)),
            Item::Object(subtree) => Ok(Node::object_property(key, subtree)),
            Item::Array(items) => {
                if items.iter().all(|item| matches!(item, Item::Text(_))) {
                    let texts = items
                        .into_iter()
                        .filter_map(|item| match item {
                            Item::Text(text) => Some(bounded(text.unwrap_or_default())),
                            _ => None,
                        })
                        .collect::<Result<_, _>>()?;
                    Ok(Node::scalar_array_property(key, texts))
                } else if items.iter().all(|item| matches!(item, Item::Object(_))) {
                    let elements = items
                        .into_iter()
                        .filter_map(|item| match item {
                            Item::Object(element) => Some(element),
                            _ => None,
                        })
                        .collect();
                    Ok(Node::object_array_property(key, elements))
                } else {
                    Err("arrays must hold only scalars or only objects".to_string())
                }
            }
        }
    }
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ItemVisitor;

        impl<'de> Visitor<'de> for ItemVisitor {
            type Value = Item;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a scalar, an object or an array")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Item::Text(Some(value.to_string())))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Item::Text(Some(value.to_string())))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Item::Text(Some(value.to_string())))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Item::Text(Some(value.to_string())))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Item::Text(Some(value.to_string())))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Item::Text(Some(value)))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Item::Text(None))
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Item::Text(None))
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element::<Item>()? {
                    if matches!(item, Item::Array(_)) {
                        return Err(de::Error::custom("nested arrays are not supported"));
                    }
                    items.push(item);
                }
                Ok(Item::Array(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut object = Node::new();
                while let Some((key, item)) = map.next_entry::<String, Item>()? {
                    object.push(item.into_property(key).map_err(de::Error::custom)?);
                }
                Ok(Item::Object(object))
            }
        }

        deserializer.deserialize_any(ItemVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_empty_object() {
        let node = Node::new();
        assert_eq!(node.kind(), NodeKind::Object);
        assert_eq!(node.label(), None);
        assert!(node.is_empty());
    }

    #[test]
    fn test_set_label() {
        let mut node = Node::new();
        node.set_label("testlabel");
        assert_eq!(node.label(), Some("testlabel"));
        node.set_label("");
        assert_eq!(node.label(), Some(""));
    }

    #[test]
    fn test_add_scalar_property() {
        let mut node = Node::new();
        node.add_scalar_property("key", "val");

        let prop = &node[0];
        assert_eq!(prop.kind(), NodeKind::Scalar);
        assert_eq!(prop.label(), Some("key"));
        assert_eq!(prop.len(), 1);
        assert_eq!(prop[0].label(), Some("val"));
        assert!(prop[0].is_value());
    }

    #[test]
    fn test_add_object_property_moves_subtree() {
        let mut inner = Node::new();
        inner.add_scalar_property("key", "val");
        inner.set_label("ignored");

        let mut node = Node::new();
        node.add_scalar_property("key", "val");
        node.add_object_property("propkey", inner);

        let prop = &node[1];
        assert_eq!(prop.label(), Some("propkey"));
        assert_eq!(prop.kind(), NodeKind::Object);
        assert_eq!(prop["key"].text(), Some("val"));
    }

    #[test]
    fn test_scalar_array_copies_values() {
        let source = vec!["8".to_string(), "9".to_string(), "10".to_string()];
        let mut node = Node::new();
        node.add_scalar_array_property("", &source);

        let prop = &node[0];
        assert_eq!(prop.kind(), NodeKind::ArrayOfScalars);
        let labels: Vec<_> = prop.iter().map(Node::label).collect();
        assert_eq!(labels, [Some("8"), Some("9"), Some("10")]);
        assert_eq!(source.len(), 3);
    }

    #[test]
    fn test_empty_arrays_get_placeholder() {
        let mut node = Node::new();
        node.add_scalar_array_property("values", Vec::<&str>::new());
        node.add_object_array_property("objects", Vec::new());

        for key in ["values", "objects"] {
            let prop = node.property(key).unwrap();
            assert_eq!(prop.len(), 1);
            assert!(prop[0].is_value());
            assert_eq!(prop[0].label(), None);
            assert!(prop.holds_placeholder());
        }
    }

    #[test]
    fn test_object_array_clears_element_labels() {
        let mut element = Node::new();
        element.set_label("stray");
        element.add_scalar_property("a", "1");

        let mut node = Node::new();
        node.add_object_array_property("list", vec![element, Node::new()]);

        let prop = &node["list"];
        assert_eq!(prop.kind(), NodeKind::ArrayOfObjects);
        assert_eq!(prop.len(), 2);
        assert!(prop.iter().all(|e| e.label().is_none()));
        assert!(!prop.holds_placeholder());
    }

    #[test]
    fn test_property_lookup() {
        let mut node = Node::new();
        node.add_scalar_property("a", "1")
            .add_object_array_property("list", vec![Node::new()])
            .add_scalar_property("a", "2");

        assert_eq!(node.property("a").and_then(Node::text), Some("1"));
        assert_eq!(node.property("list").map(Node::kind), Some(NodeKind::ArrayOfObjects));
        assert!(node.property("b").is_none());
        assert!(node.property("[]list").is_none());
    }

    #[test]
    fn test_property_lookup_skips_values() {
        let mut node = Node::new();
        node.add_scalar_array_property("xs", ["a", "b"]);
        assert!(node["xs"].property("a").is_none());
    }

    #[test]
    fn test_property_mut() {
        let mut node = Node::new();
        node.add_object_property("inner", Node::new());
        node.property_mut("inner")
            .unwrap()
            .add_scalar_property("x", "1");
        assert_eq!(node["inner"]["x"].text(), Some("1"));
    }

    #[test]
    #[should_panic(expected = "no property named")]
    fn test_index_missing_key_panics() {
        let node = Node::new();
        let _ = &node["missing"];
    }

    #[test]
    fn test_elided_property() {
        let mut anonymous = Node::new();
        anonymous.add_scalar_array_property("", ["1", "2"]);
        assert!(anonymous.elided_property().is_some());

        let mut named = Node::new();
        named.add_scalar_array_property("xs", ["1", "2"]);
        assert!(named.elided_property().is_none());

        let mut two = Node::new();
        two.add_scalar_property("", "1").add_scalar_property("", "2");
        assert!(two.elided_property().is_none());

        let mut objects = Node::new();
        objects.add_object_array_property("", vec![Node::new()]);
        assert!(objects.elided_property().is_some());

        let mut object = Node::new();
        object.add_object_property("", Node::new());
        assert!(object.elided_property().is_none());
    }

    #[test]
    fn test_anonymous_object_keeps_braces() {
        let mut inner = Node::new();
        inner.add_scalar_property("a", "1");
        let mut root = Node::new();
        root.add_object_property("", inner);

        let json = crate::to_string(&root).unwrap();
        assert_eq!(json, "{\"\":{\"a\":\"1\"}}\n");
        assert_eq!(crate::from_str(&json).unwrap(), root);

        let pretty = crate::to_string_pretty(&root).unwrap();
        assert_eq!(crate::from_str(&pretty).unwrap(), root);

        let bridged = serde_json::to_string(&root).unwrap();
        assert_eq!(bridged, r#"{"":{"a":"1"}}"#);
        assert_eq!(serde_json::from_str::<Node>(&bridged).unwrap(), root);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "label longer than")]
    fn test_add_property_checks_text_length() {
        let long = "x".repeat(MAX_LABEL_LEN + 1);
        Node::new().add_property("k", long.as_str());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "label longer than")]
    fn test_add_property_checks_array_text_length() {
        let long = "x".repeat(MAX_LABEL_LEN + 1);
        Node::new().add_property("k", vec![long]);
    }

    #[test]
    fn test_deserialize_rejects_long_labels() {
        let at_limit = "x".repeat(MAX_LABEL_LEN);
        let over = "x".repeat(MAX_LABEL_LEN + 1);

        let ok = format!(r#"{{"{at_limit}":"{at_limit}"}}"#);
        let root: Node = serde_json::from_str(&ok).unwrap();
        assert_eq!(crate::from_str(&crate::to_string(&root).unwrap()).unwrap(), root);

        for json in [
            format!(r#"{{"k":"{over}"}}"#),
            format!(r#"{{"{over}":"v"}}"#),
            format!(r#"{{"k":["a","{over}"]}}"#),
            format!(r#"["{over}"]"#),
        ] {
            let err = serde_json::from_str::<Node>(&json).unwrap_err();
            assert!(err.to_string().contains("label longer than"), "{err}");
        }
    }

    #[test]
    fn test_kind_is_array() {
        assert!(NodeKind::ArrayOfScalars.is_array());
        assert!(NodeKind::ArrayOfObjects.is_array());
        assert!(!NodeKind::Object.is_array());
        assert!(!NodeKind::Scalar.is_array());
    }

    #[test]
    fn test_serialize_matches_encoder() {
        let mut element = Node::new();
        element.add_scalar_property("b", "2");
        let mut node = Node::new();
        node.add_scalar_property("a", "1")
            .add_scalar_array_property("empty", Vec::<String>::new())
            .add_object_array_property("list", vec![element]);

        let via_serde = serde_json::to_string(&node).unwrap();
        assert_eq!(via_serde, r#"{"a":"1","empty":[],"list":[{"b":"2"}]}"#);
        assert_eq!(format!("{}\n", via_serde), crate::to_string(&node).unwrap());
    }

    #[test]
    fn test_deserialize_from_json_value() {
        let json = serde_json::json!({
            "n": 1.5,
            "missing": null,
            "list": [{ "a": "x" }, { "a": "y" }],
            "empty": []
        });
        let node: Node = serde_json::from_value(json).unwrap();

        assert_eq!(node["n"].text(), Some("1.5"));
        assert_eq!(node["missing"].kind(), NodeKind::Scalar);
        assert_eq!(node["missing"].text(), None);
        assert_eq!(node["list"].kind(), NodeKind::ArrayOfObjects);
        assert_eq!(node["list"][1]["a"].text(), Some("y"));
        assert_eq!(node["empty"].kind(), NodeKind::ArrayOfScalars);
        assert!(node["empty"].holds_placeholder());
    }

    #[test]
    fn test_deserialize_top_level_array() {
        let node: Node = serde_json::from_str(r#"["8","9"]"#).unwrap();
        let prop = node.elided_property().unwrap();
        assert_eq!(prop.label(), Some(""));
        assert_eq!(prop.len(), 2);
    }

    #[test]
    fn test_deserialize_rejects_mixed_arrays() {
        assert!(serde_json::from_str::<Node>(r#"{"a":["1",{"b":"2"}]}"#).is_err());
        assert!(serde_json::from_str::<Node>(r#"{"a":[["1"]]}"#).is_err());
    }

    #[test]
    fn test_display_and_from_str() {
        let mut node = Node::new();
        node.add_scalar_property("v", "1");
        assert_eq!(node.to_string(), "{\"v\":\"1\"}\n");
        assert_eq!(format!("{:#}", node), "{\n  \"v\":\"1\"\n}\n");

        let parsed: Node = "{\"v\":\"1\"}".parse().unwrap();
        assert_eq!(parsed, node);
    }
}
