//! Checker configuration.

use std::collections::BTreeSet;

use serde::Deserialize;

/// Index at or above which `IndexTooLarge` is reported.
pub const DEFAULT_INDEX_WARNING_THRESHOLD: i32 = 100;

/// Options that stay fixed for the lifetime of a [`Checker`](crate::Checker).
///
/// Deserializable from JSON, e.g.
/// `{"additional_allowed_type_names": ["System.Guid"]}`. Missing keys take
/// their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Type names treated as terminal in addition to the built-in scalars.
    /// Matched against the display name of a type.
    pub additional_allowed_type_names: BTreeSet<String>,
    pub index_warning_threshold: i32,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            additional_allowed_type_names: BTreeSet::new(),
            index_warning_threshold: DEFAULT_INDEX_WARNING_THRESHOLD,
        }
    }
}

impl CheckConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat `name` as terminal.
    #[must_use]
    pub fn allow(mut self, name: impl Into<String>) -> Self {
        self.additional_allowed_type_names.insert(name.into());
        self
    }

    #[must_use]
    pub fn with_index_warning_threshold(mut self, threshold: i32) -> Self {
        self.index_warning_threshold = threshold;
        self
    }

    /// Merge another configuration's allowed names into this one.
    pub fn extend_allowed<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional_allowed_type_names
            .extend(names.into_iter().map(Into::into));
    }
}
