use pretty_assertions::assert_eq;
use zf_ir::{GraphDesc, TypeDesc, TypeGraph, TypeKind};

use super::*;

fn graph(types: Vec<TypeDesc>) -> TypeGraph {
    TypeGraph::build(&GraphDesc::new(types), std::iter::empty::<&str>()).unwrap()
}

fn classify(graph: &TypeGraph, name: &str) -> GenericShape {
    ShapeClassifier::new().classify(graph, graph.lookup(name).unwrap())
}

#[test]
fn test_builtin_families() {
    let g = graph(vec![
        TypeDesc::generic("int?", TypeKind::Struct, "T?", ["int"]),
        TypeDesc::generic("Nullable<int>", TypeKind::Struct, "System.Nullable<>", ["int"]),
        TypeDesc::generic(
            "IReadOnlyList<int>",
            TypeKind::Interface,
            "System.Collections.Generic.IReadOnlyList<>",
            ["int"],
        ),
        TypeDesc::generic(
            "ILookup<int, string>",
            TypeKind::Interface,
            "System.Linq.ILookup<,>",
            ["int", "string"],
        ),
        TypeDesc::generic(
            "ILazyDictionary<int, string>",
            TypeKind::Interface,
            "ZeroFormatter.ILazyDictionary<,>",
            ["int", "string"],
        ),
        TypeDesc::generic(
            "KeyValuePair<int, string>",
            TypeKind::Struct,
            "System.Collections.Generic.KeyValuePair<,>",
            ["int", "string"],
        ),
        TypeDesc::generic(
            "Tuple<int, int, int>",
            TypeKind::Class,
            "System.Tuple<,,>",
            ["int", "int", "int"],
        ),
        TypeDesc::generic(
            "KeyTuple<int>",
            TypeKind::Struct,
            "ZeroFormatter.KeyTuple`1",
            ["int"],
        ),
    ]);

    assert_eq!(classify(&g, "int?"), GenericShape::Optional);
    assert_eq!(classify(&g, "Nullable<int>"), GenericShape::Optional);
    assert_eq!(classify(&g, "IReadOnlyList<int>"), GenericShape::List);
    assert_eq!(classify(&g, "ILookup<int, string>"), GenericShape::Map);
    assert_eq!(classify(&g, "ILazyDictionary<int, string>"), GenericShape::Map);
    assert_eq!(classify(&g, "KeyValuePair<int, string>"), GenericShape::Pair);
    assert_eq!(classify(&g, "Tuple<int, int, int>"), GenericShape::Tuple);
    assert_eq!(classify(&g, "KeyTuple<int>"), GenericShape::Tuple);
}

#[test]
fn test_arity_mismatch_is_unrecognized() {
    let g = graph(vec![
        TypeDesc::generic("Odd?", TypeKind::Struct, "T?", ["int", "int"]),
        TypeDesc::generic(
            "KeyValuePair<int>",
            TypeKind::Struct,
            "System.Collections.Generic.KeyValuePair<>",
            ["int"],
        ),
    ]);
    assert_eq!(classify(&g, "Odd?"), GenericShape::Unrecognized);
    assert_eq!(classify(&g, "KeyValuePair<int>"), GenericShape::Unrecognized);
}

#[test]
fn test_collection_interface_fallback() {
    let g = graph(vec![
        TypeDesc::generic(
            "ICollection<Item>",
            TypeKind::Interface,
            "System.Collections.Generic.ICollection<>",
            ["Item"],
        ),
        TypeDesc::generic("Bag<Item>", TypeKind::Class, "Shop.Bag<>", ["Item"])
            .implements("ICollection<Item>"),
        TypeDesc::generic("Box<Item>", TypeKind::Class, "Shop.Box<>", ["Item"]),
        TypeDesc::class("Item"),
    ]);
    assert_eq!(classify(&g, "Bag<Item>"), GenericShape::Collection);
    assert_eq!(classify(&g, "Box<Item>"), GenericShape::Unrecognized);
}

#[test]
fn test_non_generic_is_unrecognized() {
    let g = graph(vec![
        TypeDesc::class("Plain").implements("ICollection<int>"),
        TypeDesc::generic(
            "ICollection<int>",
            TypeKind::Interface,
            "System.Collections.Generic.ICollection<>",
            ["int"],
        ),
    ]);
    assert_eq!(classify(&g, "Plain"), GenericShape::Unrecognized);
    assert!(!GenericShape::Unrecognized.is_wrapper());
    assert!(GenericShape::Collection.is_wrapper());
}

#[test]
fn test_family_ignores_namespace_lookalikes() {
    let g = graph(vec![TypeDesc::generic(
        "MyTuple<int>",
        TypeKind::Class,
        "System.TupleLike<>",
        ["int"],
    )]);
    assert_eq!(classify(&g, "MyTuple<int>"), GenericShape::Unrecognized);
}
