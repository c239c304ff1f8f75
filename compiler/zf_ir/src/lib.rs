//! Type-description model for the formattable-type checker.
//!
//! The checker never talks to a compiler directly. Everything it needs to
//! know about a type (kind, annotations, constructors, members) is exposed
//! through the [`TypeIntrospection`] trait, which any host can implement over
//! its own reflection data.
//!
//! This crate also ships a ready-made host: [`TypeGraph`], an arena of
//! resolved type definitions built from a serde-friendly description
//! ([`GraphDesc`]). The command-line driver loads one from JSON.
//!
//! # Identity
//!
//! Types are referenced by [`TypeId`], a 32-bit handle into the owning
//! source. Handles are `Copy + Eq + Hash`, so they double as visited-set keys
//! during traversal.

mod desc;
mod graph;
mod introspect;
mod location;
mod member;
mod types;

pub use desc::{ConstructorDesc, GraphDesc, MemberDesc, TypeDesc};
pub use graph::{GraphError, TypeGraph, BUILTIN_SCALARS};
pub use introspect::TypeIntrospection;
pub use location::Location;
pub use member::{Accessibility, Accessors, IndexAnnotation, Member, MemberFlags, MemberKind};
pub use types::{Constructor, GenericInfo, TypeAttrs, TypeDef, TypeId, TypeKind};
