/// Builds a [`Node`](crate::Node) tree from JSON-like syntax.
///
/// Each value picks the matching construction helper:
///
/// - `"text"` or any `Display` expression: scalar property
/// - `{ ... }`: object property
/// - `[{ ... }, { ... }]`: array of objects
/// - `["a", 1, x]`: array of scalars, every item converted with `to_string`
///
/// A top-level array builds a root with one anonymous property, which encodes
/// as a bare array.
///
/// # Examples
///
/// ```rust
/// use shape_json::{tree, to_string, NodeKind};
///
/// let record = tree!({
///     "_intVal": 1,
///     "_intArr": [2, 3, 4],
///     "_structVal": { "_int": "5", "_float": "6.000000" },
///     "_structArr": [{ "_int": "7" }, { "_int": "8" }]
/// });
///
/// assert_eq!(record["_intVal"].text(), Some("1"));
/// assert_eq!(record["_structArr"].kind(), NodeKind::ArrayOfObjects);
///
/// let bare = tree!(["8", "9", "10"]);
/// assert_eq!(to_string(&bare).unwrap(), "[\"8\",\"9\",\"10\"]\n");
/// ```
#[macro_export]
macro_rules! tree {
    ({}) => {
        $crate::Node::new()
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut node = $crate::Node::new();
        $(
            $crate::tree!(@prop node, $key, $value);
        )*
        node
    }};

    ([ $($elem:tt),* $(,)? ]) => {{
        let mut node = $crate::Node::new();
        $crate::tree!(@prop node, "", [ $($elem),* ]);
        node
    }};

    (@prop $node:ident, $key:expr, { $($inner:tt)* }) => {
        $node.add_object_property($key, $crate::tree!({ $($inner)* }));
    };

    (@prop $node:ident, $key:expr, [ $({ $($inner:tt)* }),+ $(,)? ]) => {
        $node.add_object_array_property($key, vec![$($crate::tree!({ $($inner)* })),+]);
    };

    (@prop $node:ident, $key:expr, [ $($item:expr),* $(,)? ]) => {{
        let texts: Vec<String> = vec![$($item.to_string()),*];
        $node.add_scalar_array_property($key, texts);
    }};

    (@prop $node:ident, $key:expr, $text:expr) => {
        $node.add_scalar_property($key, &$text.to_string());
    };
}
