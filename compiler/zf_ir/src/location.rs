//! Source locations attached to types and members.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a type or member was declared.
///
/// Locations are opaque to the checker: they are copied into diagnostic
/// labels and rendered by emitters, never inspected. A default location
/// (no file, line 0) stands for "unknown", e.g. for built-in scalars.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Path of the declaring file, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// 1-based line, 0 when unknown.
    #[serde(default)]
    pub line: u32,
    /// 1-based column, 0 when unknown.
    #[serde(default)]
    pub column: u32,
}

impl Location {
    /// Create a location inside `file`.
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Location {
            file: Some(file.into()),
            line,
            column,
        }
    }

    /// Whether this location points at real source.
    pub fn is_known(&self) -> bool {
        self.file.is_some() || self.line > 0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.file, self.line) {
            (Some(file), 0) => write!(f, "{file}"),
            (Some(file), line) => write!(f, "{file}:{line}:{}", self.column),
            (None, 0) => write!(f, "<unknown>"),
            (None, line) => write!(f, "{line}:{}", self.column),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Location::new("Foo.cs", 12, 5).to_string(), "Foo.cs:12:5");
        assert_eq!(Location::default().to_string(), "<unknown>");
        assert!(!Location::default().is_known());
        assert!(Location::new("Foo.cs", 0, 0).is_known());
    }
}
