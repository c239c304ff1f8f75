//! Error codes for all checker diagnostics.
//!
//! Each code is a unique identifier (e.g., `E1002`) with the first digit
//! indicating what was being checked. Used for `zfc explain` lookups.

use std::fmt;

use crate::Severity;

/// The ten diagnostic kinds.
///
/// Format: E#### / W#### where the first digit indicates the level:
/// - E0xxx: type-level requirements (annotation, constructor)
/// - E1xxx: member-level rules (index, accessors, virtuality)
/// - E2xxx: value-type layout (contiguity, matching constructor)
/// - W1xxx: member-level warnings
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ErrorCode {
    // Type Errors (E0xxx)
    /// Type reached from a formattable type is not annotated
    E0001,
    /// Reference type without a parameterless constructor
    E0002,

    // Member Errors (E1xxx)
    /// Public member without an index annotation
    E1001,
    /// Index already used by another member of the same type
    E1002,
    /// Property lacks a non-private getter or setter
    E1003,
    /// Property on a reference type is not overridable
    E1004,
    /// Public field declared on a reference type
    E1005,

    // Layout Errors (E2xxx)
    /// Value-type indices do not run 0, 1, 2, ...
    E2001,
    /// Value type has no constructor matching its indexed members
    E2002,

    // Member Warnings (W1xxx)
    /// Index of 100 or more inflates the binary layout
    W1001,
}

impl ErrorCode {
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::W1001,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::W1001 => "W1001",
        }
    }

    /// Stable kind identifier, independent of numbering.
    pub fn kind(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "TypeMustBeAnnotated",
            ErrorCode::E0002 => "TypeNeedsDefaultConstructor",
            ErrorCode::E1001 => "MemberNeedsIndex",
            ErrorCode::E1002 => "DuplicateIndex",
            ErrorCode::E1003 => "MemberNeedsPublicAccessors",
            ErrorCode::E1004 => "MemberMustBeOverridable",
            ErrorCode::E1005 => "FieldNotAllowedOnReferenceType",
            ErrorCode::E2001 => "ValueTypeIndicesMustBeSequentialFromZero",
            ErrorCode::E2002 => "ValueTypeNeedsMatchingConstructor",
            ErrorCode::W1001 => "IndexTooLarge",
        }
    }

    /// One-line summary shown by `zfc codes`.
    pub fn title(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "type must be annotated as formattable",
            ErrorCode::E0002 => "type needs a parameterless constructor",
            ErrorCode::E1001 => "public member needs an index or ignore annotation",
            ErrorCode::E1002 => "index is used more than once",
            ErrorCode::E1003 => "property needs non-private get and set accessors",
            ErrorCode::E1004 => "property must be overridable",
            ErrorCode::E1005 => "public fields are not supported on reference types",
            ErrorCode::E2001 => "value-type indices must start at 0 and be sequential",
            ErrorCode::E2002 => "value type needs a constructor matching its indexed members",
            ErrorCode::W1001 => "index is large",
        }
    }

    /// Severity every diagnostic with this code is reported at.
    pub fn severity(&self) -> Severity {
        if self.is_warning() {
            Severity::Warning
        } else {
            Severity::Error
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::W1001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parses either the code (`e1002`, `E1002`) or the kind (`DuplicateIndex`).
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper || code.kind().eq_ignore_ascii_case(s))
            .copied()
            .ok_or(())
    }
}
