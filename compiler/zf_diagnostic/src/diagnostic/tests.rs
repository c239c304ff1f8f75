use pretty_assertions::assert_eq;

use super::*;

fn member_at(location: &Location) -> MemberSite<'_> {
    MemberSite {
        owner: "Person",
        name: "Age",
        location,
    }
}

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::new(ErrorCode::E1001)
        .with_message("test error")
        .with_label(Location::new("a.cs", 1, 1), "here")
        .with_note("some context");

    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.message, "test error");
    assert!(diag.is_error());
    assert_eq!(diag.labels.len(), 1);
    assert!(diag.labels[0].is_primary);
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn test_severity_follows_code() {
    assert!(Diagnostic::new(ErrorCode::W1001).is_warning());
    assert!(Diagnostic::new(ErrorCode::E2002).is_error());
}

#[test]
fn test_type_level_labels() {
    let caller = Location::new("Person.cs", 10, 5);
    let declared = Location::new("Address.cs", 2, 1);
    let diag = type_must_be_annotated(
        &caller,
        TypeSite {
            name: "Address",
            declared_at: &declared,
        },
    );

    assert_eq!(diag.kind(), "TypeMustBeAnnotated");
    assert_eq!(diag.primary_location(), Some(&caller));
    assert_eq!(diag.secondary_locations().collect::<Vec<_>>(), vec![&declared]);
    assert_eq!(diag.args, vec![DiagnosticArg::Type("Address".to_string())]);
}

#[test]
fn test_root_type_has_no_duplicate_secondary_label() {
    let declared = Location::new("Address.cs", 2, 1);
    let diag = type_needs_default_constructor(
        &declared,
        TypeSite {
            name: "Address",
            declared_at: &declared,
        },
    );
    assert_eq!(diag.labels.len(), 1);
}

#[test]
fn test_unknown_declaration_is_not_labeled() {
    let caller = Location::new("Person.cs", 10, 5);
    let unknown = Location::default();
    let diag = type_must_be_annotated(
        &caller,
        TypeSite {
            name: "External",
            declared_at: &unknown,
        },
    );
    assert_eq!(diag.labels.len(), 1);
}

#[test]
fn test_duplicate_index_arguments() {
    let location = Location::new("Person.cs", 4, 9);
    let diag = duplicate_index(member_at(&location), 3);

    assert_eq!(diag.code, ErrorCode::E1002);
    assert_eq!(
        diag.args,
        vec![
            DiagnosticArg::Type("Person".to_string()),
            DiagnosticArg::Member("Age".to_string()),
            DiagnosticArg::Index(3),
        ]
    );
    assert!(diag.message.contains("index 3"));
}

#[test]
fn test_index_too_large_is_warning() {
    let location = Location::new("Person.cs", 4, 9);
    let diag = index_too_large(member_at(&location), 150);

    assert!(diag.is_warning());
    assert_eq!(
        diag.args,
        vec![
            DiagnosticArg::Index(150),
            DiagnosticArg::Member("Age".to_string()),
        ]
    );
}

#[test]
fn test_matching_constructor_note() {
    let location = Location::new("Point.cs", 1, 1);
    let diag = value_type_needs_matching_constructor(
        &location,
        TypeSite {
            name: "Point",
            declared_at: &location,
        },
        &["int", "string"],
    );
    assert_eq!(diag.notes, vec!["expected a constructor `(int, string)`".to_string()]);
}

#[test]
fn test_diagnostic_display_format() {
    let diag = Diagnostic::new(ErrorCode::E1004)
        .with_message("test error")
        .with_label(Location::new("a.cs", 3, 7), "primary")
        .with_secondary_label(Location::new("b.cs", 1, 1), "secondary")
        .with_note("a note");

    let output = diag.to_string();
    assert!(output.contains("error [E1004]: test error"));
    assert!(output.contains("--> a.cs:3:7: primary"));
    assert!(output.contains("b.cs:1:1: secondary"));
    assert!(output.contains("= note: a note"));
}
