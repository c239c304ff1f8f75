//! Generic-shape classification.
//!
//! Container and optional wrappers do not need the formattable annotation
//! themselves: only their type arguments are validated. The classifier
//! decides which constructed generic types count as such wrappers, from the
//! family of their generic definition, their arity, and the interfaces they
//! implement.

use std::fmt;

use rustc_hash::FxHashMap;
use zf_ir::{TypeId, TypeIntrospection};

/// Recognized wrapper shapes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum GenericShape {
    /// Nullable value, exactly one argument.
    Optional,
    List,
    Map,
    Tuple,
    /// Key/value pair, exactly two arguments.
    Pair,
    /// Any type implementing a generic collection interface.
    Collection,
    /// Not a wrapper: the type itself must be annotated.
    Unrecognized,
}

impl GenericShape {
    #[inline]
    pub fn is_wrapper(self) -> bool {
        !matches!(self, GenericShape::Unrecognized)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GenericShape::Optional => "optional",
            GenericShape::List => "list",
            GenericShape::Map => "map",
            GenericShape::Tuple => "tuple",
            GenericShape::Pair => "pair",
            GenericShape::Collection => "collection",
            GenericShape::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for GenericShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Definition families and the shape each one stands for.
const FAMILIES: &[(&str, GenericShape)] = &[
    ("T?", GenericShape::Optional),
    ("System.Nullable", GenericShape::Optional),
    ("System.Collections.Generic.IList", GenericShape::List),
    ("System.Collections.Generic.IReadOnlyList", GenericShape::List),
    ("System.Collections.Generic.IDictionary", GenericShape::Map),
    ("System.Collections.Generic.IReadOnlyDictionary", GenericShape::Map),
    ("System.Linq.ILookup", GenericShape::Map),
    ("ZeroFormatter.ILazyDictionary", GenericShape::Map),
    ("ZeroFormatter.ILazyReadOnlyDictionary", GenericShape::Map),
    ("ZeroFormatter.ILazyLookup", GenericShape::Map),
    ("System.Collections.Generic.KeyValuePair", GenericShape::Pair),
    ("System.Tuple", GenericShape::Tuple),
    ("ZeroFormatter.KeyTuple", GenericShape::Tuple),
];

/// Family of the generic collection interface behind [`GenericShape::Collection`].
const COLLECTION_INTERFACE: &str = "System.Collections.Generic.ICollection";

/// Maps generic types to their [`GenericShape`].
#[derive(Clone, Debug)]
pub struct ShapeClassifier {
    families: FxHashMap<&'static str, GenericShape>,
}

impl Default for ShapeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeClassifier {
    pub fn new() -> Self {
        ShapeClassifier {
            families: FAMILIES.iter().copied().collect(),
        }
    }

    /// Classify `ty`. Non-generic types are always `Unrecognized`.
    pub fn classify<S: TypeIntrospection + ?Sized>(&self, source: &S, ty: TypeId) -> GenericShape {
        let Some(generic) = source.generic(ty) else {
            return GenericShape::Unrecognized;
        };

        match self.families.get(generic.family()).copied() {
            Some(GenericShape::Optional) if generic.arity() != 1 => GenericShape::Unrecognized,
            Some(GenericShape::Pair) if generic.arity() != 2 => GenericShape::Unrecognized,
            Some(shape) => shape,
            None if Self::implements_collection(source, ty) => GenericShape::Collection,
            None => GenericShape::Unrecognized,
        }
    }

    fn implements_collection<S: TypeIntrospection + ?Sized>(source: &S, ty: TypeId) -> bool {
        source.interfaces(ty).iter().any(|&interface| {
            source
                .generic(interface)
                .is_some_and(|g| g.family() == COLLECTION_INTERFACE)
        })
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
