//! Core diagnostic types and one constructor per diagnostic kind.
//!
//! Defines [`Diagnostic`], [`Label`], [`Severity`] and [`DiagnosticArg`], plus
//! the helpers the checker uses so that every kind is always reported with
//! the same labels and arguments.

use std::fmt;

use zf_ir::Location;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A labeled location with a message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub location: Location,
    pub message: String,
    /// Whether this is the primary error location.
    pub is_primary: bool,
}

impl Label {
    /// Create a primary label (the main error location).
    pub fn primary(location: Location, message: impl Into<String>) -> Self {
        Label {
            location,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a secondary label (related context).
    pub fn secondary(location: Location, message: impl Into<String>) -> Self {
        Label {
            location,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// A positional message argument.
///
/// Hosts that localize messages format these themselves; the rendered
/// `message` is only the default English text.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum DiagnosticArg {
    Type(String),
    Member(String),
    Index(i32),
}

impl fmt::Display for DiagnosticArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticArg::Type(name) | DiagnosticArg::Member(name) => f.write_str(name),
            DiagnosticArg::Index(index) => write!(f, "{index}"),
        }
    }
}

/// A finding reported by the checker. Immutable once built.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    /// Default rendered message.
    pub message: String,
    /// Primary label first, then secondary labels.
    pub labels: Vec<Label>,
    pub args: Vec<DiagnosticArg>,
    /// Additional notes providing context.
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a diagnostic at the severity its code prescribes.
    #[cold]
    pub fn new(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            severity: code.severity(),
            message: String::new(),
            labels: Vec::new(),
            args: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add a primary label at the error location.
    pub fn with_label(mut self, location: Location, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(location, message));
        self
    }

    /// Add a secondary label for context.
    pub fn with_secondary_label(mut self, location: Location, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(location, message));
        self
    }

    pub fn with_arg(mut self, arg: DiagnosticArg) -> Self {
        self.args.push(arg);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Get the primary location (first primary label's location).
    pub fn primary_location(&self) -> Option<&Location> {
        self.labels
            .iter()
            .find(|l| l.is_primary)
            .map(|l| &l.location)
    }

    pub fn secondary_locations(&self) -> impl Iterator<Item = &Location> {
        self.labels
            .iter()
            .filter(|l| !l.is_primary)
            .map(|l| &l.location)
    }

    /// Stable kind identifier, e.g. `DuplicateIndex`.
    pub fn kind(&self) -> &'static str {
        self.code.kind()
    }

    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self.severity, Severity::Warning)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message)?;

        for label in &self.labels {
            let marker = if label.is_primary { "-->" } else { "   " };
            write!(f, "\n  {marker} {}: {}", label.location, label.message)?;
        }

        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }

        Ok(())
    }
}

/// The type a type-level diagnostic is about.
#[derive(Copy, Clone, Debug)]
pub struct TypeSite<'a> {
    pub name: &'a str,
    pub declared_at: &'a Location,
}

/// The member a member-level diagnostic is about.
#[derive(Copy, Clone, Debug)]
pub struct MemberSite<'a> {
    /// Display name of the declaring type.
    pub owner: &'a str,
    pub name: &'a str,
    pub location: &'a Location,
}

/// Type-level diagnostics point at the caller (the member that reached the
/// type, or the root declaration) and at the type's own declaration.
fn type_level(code: ErrorCode, caller: &Location, ty: TypeSite<'_>, message: String) -> Diagnostic {
    let diag = Diagnostic::new(code)
        .with_message(message)
        .with_label(caller.clone(), code.title());
    let diag = if ty.declared_at.is_known() && ty.declared_at != caller {
        diag.with_secondary_label(ty.declared_at.clone(), format!("`{}` declared here", ty.name))
    } else {
        diag
    };
    diag.with_arg(DiagnosticArg::Type(ty.name.to_string()))
}

fn member_level(code: ErrorCode, member: MemberSite<'_>, message: String) -> Diagnostic {
    Diagnostic::new(code)
        .with_message(message)
        .with_label(member.location.clone(), code.title())
        .with_arg(DiagnosticArg::Type(member.owner.to_string()))
        .with_arg(DiagnosticArg::Member(member.name.to_string()))
}

/// Create a "type must be annotated" diagnostic.
pub fn type_must_be_annotated(caller: &Location, ty: TypeSite<'_>) -> Diagnostic {
    type_level(
        ErrorCode::E0001,
        caller,
        ty,
        format!("type `{}` must be annotated as formattable", ty.name),
    )
}

/// Create a "type needs a parameterless constructor" diagnostic.
pub fn type_needs_default_constructor(caller: &Location, ty: TypeSite<'_>) -> Diagnostic {
    type_level(
        ErrorCode::E0002,
        caller,
        ty,
        format!("type `{}` needs a parameterless constructor", ty.name),
    )
}

/// Create a "member needs index" diagnostic.
pub fn member_needs_index(member: MemberSite<'_>) -> Diagnostic {
    member_level(
        ErrorCode::E1001,
        member,
        format!(
            "public member `{}.{}` needs an index or ignore annotation",
            member.owner, member.name
        ),
    )
}

/// Create a "duplicate index" diagnostic.
pub fn duplicate_index(member: MemberSite<'_>, index: i32) -> Diagnostic {
    member_level(
        ErrorCode::E1002,
        member,
        format!(
            "index {index} of `{}.{}` is already used by another member",
            member.owner, member.name
        ),
    )
    .with_arg(DiagnosticArg::Index(index))
}

/// Create a "property needs public accessors" diagnostic.
pub fn member_needs_public_accessors(member: MemberSite<'_>) -> Diagnostic {
    member_level(
        ErrorCode::E1003,
        member,
        format!(
            "property `{}.{}` needs both a get and a set accessor, neither private",
            member.owner, member.name
        ),
    )
}

/// Create a "property must be overridable" diagnostic.
pub fn member_must_be_overridable(member: MemberSite<'_>) -> Diagnostic {
    member_level(
        ErrorCode::E1004,
        member,
        format!(
            "property `{}.{}` must be virtual",
            member.owner, member.name
        ),
    )
}

/// Create a "field on reference type" diagnostic.
pub fn field_not_allowed_on_reference_type(member: MemberSite<'_>) -> Diagnostic {
    member_level(
        ErrorCode::E1005,
        member,
        format!(
            "public field `{}.{}` is not supported on a reference type",
            member.owner, member.name
        ),
    )
    .with_note("use a virtual property, or declare the type as a struct")
}

/// Create an "index too large" warning.
///
/// Arguments are `[index, member]`.
pub fn index_too_large(member: MemberSite<'_>, index: i32) -> Diagnostic {
    Diagnostic::new(ErrorCode::W1001)
        .with_message(format!(
            "index {index} of `{}.{}` is large; the layout grows with the highest index",
            member.owner, member.name
        ))
        .with_label(member.location.clone(), ErrorCode::W1001.title())
        .with_arg(DiagnosticArg::Index(index))
        .with_arg(DiagnosticArg::Member(member.name.to_string()))
}

/// Create a "value-type indices must be sequential" diagnostic.
pub fn value_type_indices_must_be_sequential(
    caller: &Location,
    ty: TypeSite<'_>,
    index: i32,
) -> Diagnostic {
    type_level(
        ErrorCode::E2001,
        caller,
        ty,
        format!(
            "indices of struct `{}` must start at 0 and be sequential; found {index}",
            ty.name
        ),
    )
    .with_arg(DiagnosticArg::Index(index))
}

/// Create a "value type needs matching constructor" diagnostic.
///
/// `expected` lists the indexed member types in index order.
pub fn value_type_needs_matching_constructor(
    caller: &Location,
    ty: TypeSite<'_>,
    expected: &[&str],
) -> Diagnostic {
    type_level(
        ErrorCode::E2002,
        caller,
        ty,
        format!(
            "struct `{}` needs a constructor taking every indexed member in index order",
            ty.name
        ),
    )
    .with_note(format!("expected a constructor `({})`", expected.join(", ")))
}

#[cfg(test)]
mod tests;
