use crate::include::IncludeTree;
use crate::include::IncludeValue;
use crate::include::ShapeEnvelope;
use crate::include::ShapeKind;
use serde_json::json;

fn select_of(field_names: &[&str]) -> ShapeEnvelope {
    ShapeEnvelope::Select(
        field_names.iter()
            .map(|field_name| (*field_name, IncludeValue::Leaf))
            .collect(),
    )
}

#[test]
fn empty_children_classify_as_leaf() {
    assert_eq!(IncludeValue::classify(IncludeTree::new()), IncludeValue::Leaf);
}

#[test]
fn empty_tree_envelope_is_include() {
    let envelope = ShapeEnvelope::classify(IncludeTree::new());
    assert_eq!(envelope, ShapeEnvelope::Include(IncludeTree::new()));
    assert_eq!(envelope.kind(), ShapeKind::Include);
}

#[test]
fn any_leaf_child_classifies_as_select() {
    let tree: IncludeTree = [
        ("posts", IncludeValue::Nested(select_of(&["title"]))),
        ("id", IncludeValue::Leaf),
    ].into_iter().collect();

    let envelope = ShapeEnvelope::classify(tree.to_owned());
    assert_eq!(envelope.kind(), ShapeKind::Select);
    assert_eq!(envelope.select(), Some(&tree));
    assert_eq!(envelope.include(), None);

    // Nested children of a `select` level are carried through untouched.
    assert_eq!(
        envelope.tree().get("posts"),
        Some(&IncludeValue::Nested(select_of(&["title"]))),
    );
}

#[test]
fn all_nested_children_classify_as_include() {
    let tree: IncludeTree = [
        ("posts", IncludeValue::Nested(select_of(&["title"]))),
        ("author", IncludeValue::Nested(select_of(&["name"]))),
    ].into_iter().collect();

    let envelope = ShapeEnvelope::classify(tree.to_owned());
    assert_eq!(envelope.kind(), ShapeKind::Include);
    assert_eq!(envelope.include(), Some(&tree));
    assert_eq!(envelope.into_tree(), tree);
}

#[test]
fn non_empty_children_classify_as_nested() {
    let children: IncludeTree = [("id", IncludeValue::Leaf)].into_iter().collect();
    let value = IncludeValue::classify(children);

    assert!(!value.is_leaf());
    assert_eq!(value.as_envelope(), Some(&select_of(&["id"])));
}

#[test]
fn envelopes_serialize_to_orm_query_options() {
    let tree: IncludeTree = [
        ("id", IncludeValue::Leaf),
        ("posts", IncludeValue::Nested(select_of(&["title"]))),
    ].into_iter().collect();

    assert_eq!(
        serde_json::to_value(ShapeEnvelope::classify(tree)).unwrap(),
        json!({ "select": { "id": true, "posts": { "select": { "title": true } } } }),
    );
    assert_eq!(
        serde_json::to_value(ShapeEnvelope::Include(IncludeTree::new())).unwrap(),
        json!({ "include": {} }),
    );
}

#[test]
fn merge_overwrites_existing_entries() {
    let mut tree: IncludeTree = [
        ("id", IncludeValue::Leaf),
        ("posts", IncludeValue::Leaf),
    ].into_iter().collect();
    let fragment_tree: IncludeTree = [
        ("posts", IncludeValue::Nested(select_of(&["title"]))),
    ].into_iter().collect();

    tree.merge(fragment_tree);

    assert_eq!(tree.len(), 2);
    assert_eq!(
        tree.get("posts"),
        Some(&IncludeValue::Nested(select_of(&["title"]))),
    );
}
