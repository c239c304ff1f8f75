use pretty_assertions::assert_eq;

use super::*;
use crate::{Accessibility, IndexAnnotation, MemberDesc};

fn person_graph() -> TypeGraph {
    let desc = GraphDesc::new(vec![
        TypeDesc::class("Person")
            .formattable()
            .default_constructor()
            .member(MemberDesc::property("Age", "int").overridable().index(0))
            .member(MemberDesc::property("Tags", "IList<Tag>").overridable().index(1)),
        TypeDesc::generic(
            "IList<Tag>",
            TypeKind::Interface,
            "System.Collections.Generic.IList<>",
            ["Tag"],
        ),
        TypeDesc::enumeration("Tag"),
    ]);
    TypeGraph::build(&desc, std::iter::empty::<&str>()).unwrap()
}

#[test]
fn test_declared_types_come_first() {
    let graph = person_graph();
    let declared: Vec<&str> = graph
        .types()
        .into_iter()
        .map(|id| graph.display_name(id))
        .collect();
    assert_eq!(declared, vec!["Person", "IList<Tag>", "Tag"]);
    assert_eq!(graph.len(), 3 + BUILTIN_SCALARS.len());
}

#[test]
fn test_builtin_scalars_resolve_without_declaration() {
    let graph = person_graph();
    let person = graph.lookup("Person").unwrap();
    let age = &graph.members(person)[0];
    assert_eq!(graph.display_name(age.ty), "int");
    assert_eq!(graph.kind(age.ty), TypeKind::Struct);
    assert!(!graph.is_formattable(age.ty));
}

#[test]
fn test_generic_arguments_resolve() {
    let graph = person_graph();
    let list = graph.lookup("IList<Tag>").unwrap();
    let generic = graph.generic(list).unwrap();
    assert_eq!(generic.family(), "System.Collections.Generic.IList");
    assert_eq!(generic.arguments, vec![graph.lookup("Tag").unwrap()]);
}

#[test]
fn test_implicit_names_are_declared() {
    let desc = GraphDesc::new(vec![TypeDesc::class("Holder")
        .member(MemberDesc::property("Id", "System.Guid"))]);
    assert!(matches!(
        TypeGraph::build(&desc, std::iter::empty::<&str>()),
        Err(GraphError::UnresolvedType { .. })
    ));

    let graph = TypeGraph::build(&desc, ["System.Guid"]).unwrap();
    let holder = graph.lookup("Holder").unwrap();
    assert_eq!(graph.display_name(graph.members(holder)[0].ty), "System.Guid");
}

#[test]
fn test_duplicate_type_is_rejected() {
    let desc = GraphDesc::new(vec![TypeDesc::class("A"), TypeDesc::structure("A")]);
    let err = TypeGraph::build(&desc, std::iter::empty::<&str>()).unwrap_err();
    assert_eq!(err.to_string(), "type `A` is declared more than once");
}

#[test]
fn test_array_without_element_is_rejected() {
    let mut array = TypeDesc::array("Foo[]", "Foo");
    array.element = None;
    let desc = GraphDesc::new(vec![array]);
    assert!(matches!(
        TypeGraph::build(&desc, std::iter::empty::<&str>()),
        Err(GraphError::MissingElement(name)) if name == "Foo[]"
    ));
}

#[test]
fn test_json_round_trip_of_member_facts() {
    let json = r#"{
        "types": [
            {
                "name": "Point", "kind": "struct", "formattable": true,
                "qualified_name": "global::Geo.Point",
                "constructors": [["int", "int"]],
                "location": { "file": "Point.cs", "line": 3, "column": 1 },
                "members": [
                    { "name": "X", "kind": "field", "type": "int", "index": 0 },
                    { "name": "Y", "type": "int", "index": [1], "setter": "private" },
                    { "name": "Z", "type": "int", "index": null },
                    { "name": "W", "type": "int", "index": [] },
                    { "name": "V", "type": "int", "ignored": true, "accessibility": "internal" }
                ]
            }
        ]
    }"#;
    let graph = TypeGraph::from_json(json).unwrap();
    let point = graph.lookup("Point").unwrap();
    assert!(graph.is_value_type(point));
    assert_eq!(graph.qualified_name(point), "global::Geo.Point");
    assert_eq!(graph.location(point).to_string(), "Point.cs:3:1");
    assert_eq!(graph.constructors(point)[0].parameters.len(), 2);

    let members = graph.members(point);
    assert_eq!(members[0].kind, MemberKind::Field);
    assert_eq!(members[0].accessors, Accessors::default());
    assert_eq!(members[0].index, IndexAnnotation::Value(0));
    assert_eq!(members[1].index, IndexAnnotation::Value(1));
    assert_eq!(members[1].accessors.set, Some(Accessibility::Private));
    assert_eq!(members[2].index, IndexAnnotation::Null);
    assert_eq!(members[3].index, IndexAnnotation::Empty);
    assert_eq!(members[4].index, IndexAnnotation::Missing);
    assert!(members[4].is_ignored());
    assert_eq!(members[4].accessibility, Accessibility::Internal);
}

#[test]
fn test_malformed_json_is_reported() {
    let err = TypeGraph::from_json("{ \"types\": [ { \"name\": 3 } ] }").unwrap_err();
    assert!(matches!(err, GraphError::Json(_)));
}
