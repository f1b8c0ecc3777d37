use crate::operation::ResolveInfoBuildError;
use crate::operation::ResolveInfoBuilder;
use crate::operation::Selection;
use crate::operation::SelectionKind;

const DOCUMENT: &str = r#"
query GetUser {
    user {
        id
        posts { title }
        ...UserFriends
    }
}

query GetViewer {
    viewer: user { name }
}

fragment UserFriends on User {
    friends { id }
}
"#;

#[test]
fn first_top_level_field_is_used_by_default() {
    let info = ResolveInfoBuilder::from_str("{ user { id } posts { id } }", None)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(info.field_nodes().len(), 1);
    assert_eq!(info.root_field().map(|field| field.name()), Some("user"));
    assert_eq!(info.root_selections().len(), 1);
}

#[test]
fn operation_is_selected_by_name() {
    let info = ResolveInfoBuilder::from_str(DOCUMENT, None)
        .unwrap()
        .set_operation_name("GetViewer")
        .build()
        .unwrap();

    let root_field = info.root_field().unwrap();
    assert_eq!(root_field.name(), "user");
    assert_eq!(root_field.alias(), Some("viewer"));
    assert_eq!(root_field.response_key(), "viewer");
}

#[test]
fn fragments_are_collected_in_definition_order() {
    let info = ResolveInfoBuilder::from_str(DOCUMENT, None)
        .unwrap()
        .set_operation_name("GetUser")
        .build()
        .unwrap();

    assert_eq!(
        info.fragments().keys().collect::<Vec<_>>(),
        ["UserFriends"],
    );
    assert_eq!(info.fragments()["UserFriends"].type_condition(), "User");
    assert_eq!(
        info.root_selections().iter().map(Selection::kind).collect::<Vec<_>>(),
        [
            SelectionKind::Field,
            SelectionKind::Field,
            SelectionKind::FragmentSpread,
        ],
    );
}

#[test]
fn field_path_resolves_nested_fields() {
    let info = ResolveInfoBuilder::from_str(DOCUMENT, None)
        .unwrap()
        .set_operation_name("GetUser")
        .set_field_path("user.posts")
        .build()
        .unwrap();

    assert_eq!(info.root_field().map(|field| field.name()), Some("posts"));
}

#[test]
fn field_path_looks_through_fragments() {
    let info = ResolveInfoBuilder::from_str(DOCUMENT, None)
        .unwrap()
        .set_operation_name("GetUser")
        .set_field_path("user.friends")
        .build()
        .unwrap();

    assert_eq!(info.root_field().map(|field| field.name()), Some("friends"));
}

#[test]
fn field_nodes_with_the_same_response_key_are_all_collected() {
    let info = ResolveInfoBuilder::from_str(
        r#"
        { user { id } ...Extra ... on Query { user { email } } }
        fragment Extra on Query { user { name } }
        "#,
        None,
    )
    .unwrap()
    .set_field_path("user")
    .build()
    .unwrap();

    assert_eq!(info.field_nodes().len(), 3);
}

#[test]
fn field_without_nested_selections_has_empty_root_selections() {
    let info = ResolveInfoBuilder::from_str("{ count }", None)
        .unwrap()
        .build()
        .unwrap();

    assert!(info.root_field().unwrap().selections().is_none());
    assert!(info.root_selections().is_empty());
}

#[test]
fn multiple_operations_require_an_operation_name() {
    let result = ResolveInfoBuilder::from_str(DOCUMENT, None)
        .unwrap()
        .build();

    assert!(matches!(
        result,
        Err(ResolveInfoBuildError::OperationNameRequired { num_operations: 2 }),
    ));
}

#[test]
fn unknown_operation_name_fails() {
    let result = ResolveInfoBuilder::from_str(DOCUMENT, None)
        .unwrap()
        .set_operation_name("Nope")
        .build();

    assert!(matches!(
        result,
        Err(ResolveInfoBuildError::OperationNotFound { ref operation_name })
            if operation_name == "Nope",
    ));
}

#[test]
fn document_without_operations_fails() {
    let result = ResolveInfoBuilder::from_str("fragment F on User { id }", None)
        .unwrap()
        .build();

    assert!(matches!(result, Err(ResolveInfoBuildError::NoOperations)));
}

#[test]
fn unknown_field_path_segment_fails() {
    let result = ResolveInfoBuilder::from_str("{ user { id } }", None)
        .unwrap()
        .set_field_path("user.posts")
        .build();

    assert!(matches!(
        result,
        Err(ResolveInfoBuildError::FieldNotFound { ref segment, .. })
            if segment == "posts",
    ));
}

#[test]
fn duplicate_fragment_definitions_fail() {
    let result = ResolveInfoBuilder::from_str(
        r#"
        { user { ...F } }
        fragment F on User { id }
        fragment F on User { name }
        "#,
        None,
    )
    .unwrap()
    .build();

    assert!(matches!(
        result,
        Err(ResolveInfoBuildError::DuplicateFragmentDefinition { ref fragment_name, .. })
            if fragment_name == "F",
    ));
}

#[test]
fn invalid_syntax_fails_to_parse() {
    let result = ResolveInfoBuilder::from_str("{ user { id }", None);
    assert!(matches!(result, Err(ResolveInfoBuildError::ParseError(_))));
}

#[test]
fn missing_file_fails_to_read() {
    let result = ResolveInfoBuilder::from_file("/definitely/not/a/real/query.graphql");
    assert!(matches!(
        result,
        Err(ResolveInfoBuildError::ExecutableDocumentFileReadError(_)),
    ));
}

#[test]
fn source_locations_point_into_the_document() {
    let info = ResolveInfoBuilder::from_str("{\n  user {\n    id\n  }\n}", None)
        .unwrap()
        .build()
        .unwrap();

    let root_field = info.root_field().unwrap();
    assert_eq!(root_field.def_location().line, 2);
    assert!(root_field.def_location().file.is_none());
}
