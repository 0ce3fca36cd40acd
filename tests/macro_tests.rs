use shape_json::{to_string, to_string_pretty, tree, Node, NodeKind};

#[test]
fn test_tree_macro_empty() {
    let node = tree!({});
    assert!(node.is_empty());
    assert_eq!(to_string(&node).unwrap(), "{}\n");
}

#[test]
fn test_tree_macro_strings() {
    let node = tree!({ "greeting": "hello world", "empty": "" });
    assert_eq!(node["greeting"].text(), Some("hello world"));
    assert_eq!(node["empty"].text(), Some(""));
}

#[test]
fn test_tree_macro_numbers_become_text() {
    let node = tree!({ "int": 42, "float": 3.5, "negative": (-123), "bool": true });
    assert_eq!(node["int"].text(), Some("42"));
    assert_eq!(node["float"].text(), Some("3.5"));
    assert_eq!(node["negative"].text(), Some("-123"));
    assert_eq!(node["bool"].text(), Some("true"));
}

#[test]
fn test_tree_macro_variables() {
    let name = "Alice";
    let age = 30;
    let tags = ["a", "b"];

    let node = tree!({ "name": name, "age": age, "tags": [tags[0], tags[1]] });
    assert_eq!(node["name"].text(), Some("Alice"));
    assert_eq!(node["age"].text(), Some("30"));
    assert_eq!(node["tags"][1].label(), Some("b"));
}

#[test]
fn test_tree_macro_scalar_arrays() {
    let node = tree!({ "nums": [1, 2, 3], "none": [] });

    let nums = &node["nums"];
    assert_eq!(nums.kind(), NodeKind::ArrayOfScalars);
    let labels: Vec<_> = nums.iter().filter_map(Node::label).collect();
    assert_eq!(labels, ["1", "2", "3"]);

    assert_eq!(node["none"].len(), 1);
    assert!(node["none"][0].label().is_none());
    assert_eq!(to_string(&node).unwrap(), "{\"nums\":[\"1\",\"2\",\"3\"],\"none\":[]}\n");
}

#[test]
fn test_tree_macro_nested_objects() {
    let node = tree!({
        "user": {
            "name": "Alice",
            "address": { "city": "Paris" }
        }
    });

    assert_eq!(node["user"].kind(), NodeKind::Object);
    assert_eq!(node["user"]["address"]["city"].text(), Some("Paris"));
}

#[test]
fn test_tree_macro_object_arrays() {
    let node = tree!({
        "items": [
            { "id": 1, "name": "first" },
            { "id": 2, "name": "second" },
        ],
    });

    let items = &node["items"];
    assert_eq!(items.kind(), NodeKind::ArrayOfObjects);
    assert_eq!(items.len(), 2);
    assert_eq!(items[1]["name"].text(), Some("second"));
    assert!(items.iter().all(|item| item.label().is_none()));
}

#[test]
fn test_tree_macro_trailing_commas() {
    let node = tree!({ "a": "1", "b": ["x", "y",], });
    assert_eq!(node.len(), 2);
    assert_eq!(node["b"].len(), 2);
}

#[test]
fn test_tree_macro_bare_arrays() {
    let scalars = tree!(["8", "9", "10"]);
    assert_eq!(to_string(&scalars).unwrap(), "[\"8\",\"9\",\"10\"]\n");

    let objects = tree!([{ "v": "1" }, { "v": "2" }]);
    assert_eq!(
        to_string_pretty(&objects).unwrap(),
        "[\n  {\n    \"v\":\"1\"\n  },\n  {\n    \"v\":\"2\"\n  }\n]\n"
    );
}

#[test]
fn test_tree_macro_matches_helpers() {
    let mut element = Node::new();
    element.add_scalar_property("id", "1");

    let mut expected = Node::new();
    expected
        .add_scalar_property("name", "x")
        .add_scalar_array_property("tags", ["a"])
        .add_object_array_property("items", vec![element]);

    let node = tree!({ "name": "x", "tags": ["a"], "items": [{ "id": "1" }] });
    assert_eq!(node, expected);
}
