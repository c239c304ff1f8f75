//! Index ledger of a root type.
//!
//! Records every index claimed while the root's members are validated
//! (properties and fields share one ledger), rejects duplicates, and for
//! value types checks the positional layout afterwards:
//!
//! 1. Sorted by index, the entries must read 0, 1, 2, ... with no gap.
//! 2. Some constructor must take the entries' types, in index order,
//!    compared by qualified name.
//!
//! An empty ledger is a valid layout with no constructor requirement.

use rustc_hash::FxHashSet;
use zf_ir::{TypeId, TypeIntrospection};

/// One claimed index.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct IndexEntry {
    pub index: i32,
    /// The type declaring the member.
    pub owner: TypeId,
    /// The member's own type.
    pub member_type: TypeId,
}

/// Outcome of [`IndexLedger::verify_layout`].
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum LayoutVerdict {
    Valid,
    /// The first sorted index that is not at its own position.
    IndexGap { index: i32 },
    /// No constructor takes `expected`, in this order.
    NoMatchingConstructor { expected: Vec<TypeId> },
}

#[derive(Clone, Debug, Default)]
pub struct IndexLedger {
    claimed: FxHashSet<i32>,
    entries: Vec<IndexEntry>,
}

impl IndexLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `entry.index`. Returns `false`, recording nothing, if another
    /// member already holds it.
    pub fn record(&mut self, entry: IndexEntry) -> bool {
        if !self.claimed.insert(entry.index) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Entries in claim order.
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Entries in ascending index order.
    pub fn sorted(&self) -> Vec<IndexEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by_key(|entry| entry.index);
        sorted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check the positional layout of value type `ty`.
    pub fn verify_layout<S: TypeIntrospection + ?Sized>(&self, source: &S, ty: TypeId) -> LayoutVerdict {
        let sorted = self.sorted();

        if let Some(index) = first_gap(&sorted) {
            return LayoutVerdict::IndexGap { index };
        }
        if sorted.is_empty() {
            return LayoutVerdict::Valid;
        }

        let matches = source.constructors(ty).iter().any(|ctor| {
            ctor.parameters.len() == sorted.len()
                && ctor
                    .parameters
                    .iter()
                    .zip(&sorted)
                    .all(|(&param, entry)| {
                        source.qualified_name(param) == source.qualified_name(entry.member_type)
                    })
        });

        if matches {
            LayoutVerdict::Valid
        } else {
            LayoutVerdict::NoMatchingConstructor {
                expected: sorted.iter().map(|entry| entry.member_type).collect(),
            }
        }
    }
}

/// First index in `sorted` that differs from its position.
fn first_gap(sorted: &[IndexEntry]) -> Option<i32> {
    sorted
        .iter()
        .zip(0_i32..)
        .find(|(entry, expected)| entry.index != *expected)
        .map(|(entry, _)| entry.index)
}
