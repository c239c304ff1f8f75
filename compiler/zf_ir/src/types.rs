//! Resolved type definitions.

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::{Location, Member};

/// A 32-bit handle to a type inside a type source.
///
/// Equality is identity: two handles are equal exactly when they name the
/// same declared (or instantiated) type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    /// Create a handle from a raw index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({})", self.0)
    }
}

/// Structural kind of a type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// Reference-semantics class.
    Class,
    /// Reference-semantics interface (no constructors).
    Interface,
    /// Value-semantics aggregate.
    Struct,
    /// Enumeration; always terminal for the checker.
    Enum,
    /// Single-dimensional array with an element type.
    Array,
    /// An open generic parameter such as `T`; not analyzable on its own.
    TypeParameter,
}

impl TypeKind {
    /// Whether values of this kind are copied rather than referenced.
    #[inline]
    pub fn is_value_type(self) -> bool {
        matches!(self, TypeKind::Struct | TypeKind::Enum)
    }

    /// Lowercase name used in descriptions and messages.
    pub fn as_str(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
            TypeKind::Struct => "struct",
            TypeKind::Enum => "enum",
            TypeKind::Array => "array",
            TypeKind::TypeParameter => "type_parameter",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// Annotations carried by a type declaration.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TypeAttrs: u8 {
        /// Marked as participating in the positional binary format.
        const FORMATTABLE = 1 << 0;
    }
}

/// Generic instantiation facts for a constructed generic type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GenericInfo {
    /// Identity of the unbound generic definition, e.g.
    /// `System.Collections.Generic.IList<>`.
    pub definition: String,
    /// Type arguments in declaration order.
    pub arguments: Vec<TypeId>,
}

impl GenericInfo {
    /// The definition identity without its generic argument suffix.
    ///
    /// `System.Tuple<,>` and ``System.Tuple`2`` both yield `System.Tuple`.
    /// Definitions without a suffix (such as `T?`) are returned unchanged.
    pub fn family(&self) -> &str {
        definition_family(&self.definition)
    }

    /// Number of type arguments.
    #[inline]
    pub fn arity(&self) -> usize {
        self.arguments.len()
    }
}

pub(crate) fn definition_family(definition: &str) -> &str {
    if definition.ends_with('?') {
        return definition;
    }
    match definition.find(['<', '`']) {
        Some(pos) => &definition[..pos],
        None => definition,
    }
}

/// One constructor's parameter list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Constructor {
    /// Parameter types in declaration order.
    pub parameters: Vec<TypeId>,
}

impl Constructor {
    /// Whether this constructor takes no arguments.
    #[inline]
    pub fn is_parameterless(&self) -> bool {
        self.parameters.is_empty()
    }
}

/// A fully resolved type definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDef {
    /// Display name, as matched against the allow list (`int`, `Foo`).
    pub name: String,
    /// Fully-qualified identity used for constructor matching.
    pub qualified_name: String,
    /// Structural kind.
    pub kind: TypeKind,
    /// Annotations present on the declaration.
    pub attrs: TypeAttrs,
    /// Element type, for arrays.
    pub element: Option<TypeId>,
    /// Generic instantiation facts, for constructed generic types.
    pub generic: Option<GenericInfo>,
    /// Interfaces implemented, directly or through the base chain.
    pub interfaces: Vec<TypeId>,
    /// Declared constructors.
    pub constructors: Vec<Constructor>,
    /// Members, inherited ones included, properties and fields interleaved
    /// in declaration order.
    pub members: Vec<Member>,
    /// Declaration site.
    pub location: Location,
}

impl TypeDef {
    /// Whether the declaration carries the formattable annotation.
    #[inline]
    pub fn is_formattable(&self) -> bool {
        self.attrs.contains(TypeAttrs::FORMATTABLE)
    }
}
