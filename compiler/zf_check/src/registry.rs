//! Terminal-type registry.
//!
//! A type whose display name is registered here needs no annotation and no
//! further structural validation: the built-in scalars, plus whatever names
//! the configuration adds.

use rustc_hash::FxHashSet;
use zf_ir::BUILTIN_SCALARS;

use crate::CheckConfig;

/// Read-only set of terminal type names.
///
/// Built once per [`Checker`](crate::Checker) and shared by every root
/// analysis, so it never changes while an analysis runs.
#[derive(Clone, Debug)]
pub struct TerminalTypes {
    names: FxHashSet<String>,
}

impl TerminalTypes {
    /// Only the built-in scalars.
    pub fn builtin() -> Self {
        TerminalTypes {
            names: BUILTIN_SCALARS.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    pub fn new(config: &CheckConfig) -> Self {
        let mut terminals = Self::builtin();
        terminals
            .names
            .extend(config.additional_allowed_type_names.iter().cloned());
        terminals
    }

    #[inline]
    pub fn contains(&self, display_name: &str) -> bool {
        self.names.contains(display_name)
    }
}

impl Default for TerminalTypes {
    fn default() -> Self {
        Self::builtin()
    }
}
