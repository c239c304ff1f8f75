//! The host-facing introspection capability.

use crate::{Constructor, GenericInfo, Location, Member, TypeAttrs, TypeId, TypeKind};

/// Read-only access to type facts.
///
/// This is the only way the checker learns about types. Implement it over a
/// compiler's semantic model, a reflection API, or a pre-extracted
/// description such as [`TypeGraph`](crate::TypeGraph).
///
/// Every `TypeId` handed to these methods was produced by the same source
/// (from [`types`](Self::types), a member's type, a generic argument, an
/// element type, an interface, or a constructor parameter). Implementations
/// may panic on foreign handles.
pub trait TypeIntrospection {
    /// All declared types, in declaration order.
    fn types(&self) -> Vec<TypeId>;

    /// Display name, as matched against the allow list.
    fn display_name(&self, ty: TypeId) -> &str;

    /// Fully-qualified identity, used to compare constructor parameters.
    fn qualified_name(&self, ty: TypeId) -> &str;

    fn kind(&self, ty: TypeId) -> TypeKind;

    /// Value semantics (copied) versus reference semantics.
    fn is_value_type(&self, ty: TypeId) -> bool {
        self.kind(ty).is_value_type()
    }

    fn attributes(&self, ty: TypeId) -> TypeAttrs;

    /// Whether the type carries the formattable annotation.
    fn is_formattable(&self, ty: TypeId) -> bool {
        self.attributes(ty).contains(TypeAttrs::FORMATTABLE)
    }

    /// Element type of an array, `None` for every other kind.
    fn element_type(&self, ty: TypeId) -> Option<TypeId>;

    /// Instantiation facts of a constructed generic type.
    fn generic(&self, ty: TypeId) -> Option<&GenericInfo>;

    /// Implemented interfaces, including inherited ones.
    fn interfaces(&self, ty: TypeId) -> &[TypeId];

    fn constructors(&self, ty: TypeId) -> &[Constructor];

    /// All members including inherited ones.
    fn members(&self, ty: TypeId) -> &[Member];

    fn location(&self, ty: TypeId) -> &Location;
}
