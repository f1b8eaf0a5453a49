//! Tests for column definitions and their validation.

use serde::Serialize;
use serde_json::json;
use trellis_tables::{Accessor, ColumnDef, ColumnError, Header, ValueSource};
use trellis_tags::{Node, TagName};

#[derive(Serialize)]
struct Part {
    number: String,
}

// ========== Validation ==========

#[test]
fn test_missing_value_source() {
    let err = ColumnDef::<Part>::builder().header("Part").build().unwrap_err();
    assert_eq!(err, ColumnError::MissingValueSource);
}

#[test]
fn test_conflicting_value_source() {
    let err = ColumnDef::display(Accessor::field("number"))
        .transform(|p: &Part| p.number.clone())
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        ColumnError::ConflictingValueSource {
            accessor: "number".to_owned()
        }
    );
    assert_eq!(
        err.to_string(),
        "column `number` has both a display accessor and a transformation"
    );
}

#[test]
fn test_conflicting_header() {
    let err = ColumnDef::display(Accessor::<Part>::field("number"))
        .header("Number")
        .header_node(Node::new(TagName::Span))
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        ColumnError::ConflictingHeader {
            text: "Number".to_owned()
        }
    );
}

#[test]
fn test_transform_without_header() {
    let err = ColumnDef::transform(|p: &Part| p.number.clone())
        .build()
        .unwrap_err();
    assert_eq!(err, ColumnError::MissingHeader);
}

// ========== Headers ==========

#[test]
fn test_display_header_defaults_to_accessor_name() {
    let column = ColumnDef::<Part>::display(Accessor::field("number"))
        .build()
        .unwrap();

    assert_eq!(column.header(), &Header::Text("number".to_owned()));
    assert!(column.is_display_resolved());
    assert_eq!(column.name(), "number");
}

#[test]
fn test_explicit_header_text_wins() {
    let column = ColumnDef::<Part>::display(Accessor::field("number"))
        .header("Part #")
        .build()
        .unwrap();

    assert_eq!(column.header(), &Header::from("Part #"));
    assert_eq!(column.name(), "number");
}

#[test]
fn test_header_node() {
    let column = ColumnDef::transform(|p: &Part| p.number.clone())
        .header_node(TagName::Span)
        .build()
        .unwrap();

    assert_eq!(column.header(), &Header::Node(Node::new(TagName::Span)));
    assert!(!column.is_display_resolved());
    assert_eq!(column.name(), "span");
}

// ========== Value sources ==========

#[test]
fn test_display_source_keeps_accessor_identity() {
    let accessor = Accessor::new("number", |p: &Part| json!(p.number));
    let column = ColumnDef::display(accessor.clone()).build().unwrap();

    match column.source() {
        ValueSource::Display(a) => assert!(a.same_as(&accessor)),
        ValueSource::Transform(_) => panic!("expected a display column"),
    }
}

#[test]
fn test_debug_output_names_the_source() {
    let column = ColumnDef::display(Accessor::new("number", |p: &Part| json!(p.number)))
        .column_transformer(|cell| {
            cell.add_class("part");
        })
        .build()
        .unwrap();

    let debug = format!("{column:?}");
    assert!(debug.contains("Display"));
    assert!(debug.contains("\"number\""));
    assert!(debug.contains("column_transformers: 1"));
}
