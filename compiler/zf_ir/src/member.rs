//! Properties and fields.

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::{Location, TypeId};

/// Whether a member is a property or a field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Property,
    Field,
}

/// Declared accessibility of a member or accessor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessibility {
    #[default]
    Public,
    Protected,
    Internal,
    Private,
}

impl fmt::Display for Accessibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessibility::Public => write!(f, "public"),
            Accessibility::Protected => write!(f, "protected"),
            Accessibility::Internal => write!(f, "internal"),
            Accessibility::Private => write!(f, "private"),
        }
    }
}

bitflags! {
    /// Boolean facts about a member.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct MemberFlags: u8 {
        /// Overridable (virtual, abstract, or override).
        const VIRTUAL = 1 << 0;
        /// Carries the ignore annotation and is excluded from the layout.
        const IGNORED = 1 << 1;
    }
}

/// Read/write accessors of a property. Fields have neither.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Accessors {
    pub get: Option<Accessibility>,
    pub set: Option<Accessibility>,
}

impl Accessors {
    /// Public getter and setter.
    pub const PUBLIC: Accessors = Accessors {
        get: Some(Accessibility::Public),
        set: Some(Accessibility::Public),
    };

    /// Both accessors exist and neither is private.
    pub fn is_readable_and_writable(&self) -> bool {
        matches!(
            (self.get, self.set),
            (Some(get), Some(set)) if get != Accessibility::Private && set != Accessibility::Private
        )
    }
}

/// The index annotation on a member, as the host reports it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum IndexAnnotation {
    /// No index annotation.
    #[default]
    Missing,
    /// Annotation present without any argument.
    Empty,
    /// Annotation present with a null argument. The host's own compiler
    /// already rejects this, so it is never reported twice.
    Null,
    /// Annotation with an integer argument.
    Value(i32),
}

/// A property or field of a type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Member {
    pub name: String,
    pub kind: MemberKind,
    pub accessibility: Accessibility,
    pub flags: MemberFlags,
    pub accessors: Accessors,
    pub index: IndexAnnotation,
    /// The member's own type.
    pub ty: TypeId,
    pub location: Location,
}

impl Member {
    #[inline]
    pub fn is_public(&self) -> bool {
        self.accessibility == Accessibility::Public
    }

    #[inline]
    pub fn is_virtual(&self) -> bool {
        self.flags.contains(MemberFlags::VIRTUAL)
    }

    #[inline]
    pub fn is_ignored(&self) -> bool {
        self.flags.contains(MemberFlags::IGNORED)
    }

    #[inline]
    pub fn is_property(&self) -> bool {
        self.kind == MemberKind::Property
    }

    #[inline]
    pub fn is_field(&self) -> bool {
        self.kind == MemberKind::Field
    }
}
