//! Resolved type graph: the bundled [`TypeIntrospection`] host.
//!
//! # Design
//!
//! - Arena storage: `Vec<TypeDef>` indexed by `TypeId`
//! - Name index: `FxHashMap<String, TypeId>` for resolution while building
//! - Built-in scalars are declared implicitly so descriptions need not
//!   repeat `int`, `string`, and friends

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::desc::{GraphDesc, MemberDesc, TypeDesc};
use crate::{
    Accessors, Constructor, GenericInfo, Location, Member, MemberFlags, MemberKind, TypeAttrs,
    TypeDef, TypeId, TypeIntrospection, TypeKind,
};

/// Display names of the built-in scalar types.
///
/// These are terminal for the checker and are declared implicitly by
/// [`TypeGraph::build`] when a description does not declare them.
pub const BUILTIN_SCALARS: &[&str] = &[
    "short",
    "int",
    "long",
    "ushort",
    "uint",
    "ulong",
    "float",
    "double",
    "bool",
    "byte",
    "sbyte",
    "decimal",
    "char",
    "string",
    "System.TimeSpan",
    "System.DateTime",
    "System.DateTimeOffset",
];

/// Failure to turn a description into a graph.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("type `{0}` is declared more than once")]
    DuplicateType(String),

    #[error("type `{owner}` refers to unknown type `{missing}`")]
    UnresolvedType { owner: String, missing: String },

    #[error("array type `{0}` has no element type")]
    MissingElement(String),

    #[error("type `{0}` has type arguments but no generic definition")]
    MissingDefinition(String),

    #[error("malformed type graph description: {0}")]
    Json(#[from] serde_json::Error),
}

/// An arena of resolved type definitions.
#[derive(Clone, Debug, Default)]
pub struct TypeGraph {
    types: Vec<TypeDef>,
    by_name: FxHashMap<String, TypeId>,
    /// Number of types declared by the description; implicit ones follow.
    declared: usize,
}

impl TypeGraph {
    /// Parse a JSON description and build the graph.
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        Self::from_json_with_implicit(json, std::iter::empty::<&str>())
    }

    /// Like [`from_json`](Self::from_json), additionally declaring `implicit`
    /// names (typically configured terminal types) when missing.
    pub fn from_json_with_implicit<I, S>(json: &str, implicit: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let desc: GraphDesc = serde_json::from_str(json)?;
        Self::build(&desc, implicit)
    }

    /// Resolve a description into a graph.
    ///
    /// Declared types receive ids in declaration order. Built-in scalars and
    /// the `implicit` names that the description does not declare are then
    /// appended as opaque, unannotated types.
    pub fn build<I, S>(desc: &GraphDesc, implicit: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut by_name = FxHashMap::default();
        for (i, ty) in desc.types.iter().enumerate() {
            let id = TypeId::from_raw(raw_id(i));
            if by_name.insert(ty.name.clone(), id).is_some() {
                return Err(GraphError::DuplicateType(ty.name.clone()));
            }
        }

        // Opaque types get ids after the declared ones so that declared
        // types can refer to them during resolution.
        let builtin = BUILTIN_SCALARS
            .iter()
            .map(|name| ((*name).to_string(), scalar_kind(name)));
        let extra = implicit
            .into_iter()
            .map(|name| (name.as_ref().to_string(), TypeKind::Class));
        let mut opaque = Vec::new();
        for (name, kind) in builtin.chain(extra) {
            if by_name.contains_key(&name) {
                continue;
            }
            let id = TypeId::from_raw(raw_id(desc.types.len() + opaque.len()));
            by_name.insert(name.clone(), id);
            opaque.push((name, kind));
        }

        let mut graph = TypeGraph {
            types: Vec::with_capacity(desc.types.len() + opaque.len()),
            by_name,
            declared: desc.types.len(),
        };

        for ty in &desc.types {
            let def = graph.resolve_type(ty)?;
            graph.types.push(def);
        }
        for (name, kind) in opaque {
            graph.types.push(opaque_type(name, kind));
        }

        Ok(graph)
    }

    fn resolve_name(&self, owner: &str, name: &str) -> Result<TypeId, GraphError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnresolvedType {
                owner: owner.to_string(),
                missing: name.to_string(),
            })
    }

    fn resolve_all(&self, owner: &str, names: &[String]) -> Result<Vec<TypeId>, GraphError> {
        names
            .iter()
            .map(|name| self.resolve_name(owner, name))
            .collect()
    }

    fn resolve_type(&self, desc: &TypeDesc) -> Result<TypeDef, GraphError> {
        let owner = desc.name.as_str();

        let element = match (desc.kind, &desc.element) {
            (TypeKind::Array, Some(element)) => Some(self.resolve_name(owner, element)?),
            (TypeKind::Array, None) => return Err(GraphError::MissingElement(desc.name.clone())),
            (_, _) => None,
        };

        let generic = match &desc.generic_definition {
            Some(definition) => Some(GenericInfo {
                definition: definition.clone(),
                arguments: self.resolve_all(owner, &desc.type_arguments)?,
            }),
            None if desc.type_arguments.is_empty() => None,
            None => return Err(GraphError::MissingDefinition(desc.name.clone())),
        };

        let constructors = desc
            .constructors
            .iter()
            .map(|ctor| {
                Ok(Constructor {
                    parameters: self.resolve_all(owner, &ctor.parameters)?,
                })
            })
            .collect::<Result<Vec<_>, GraphError>>()?;

        let members = desc
            .members
            .iter()
            .map(|member| self.resolve_member(owner, member))
            .collect::<Result<Vec<_>, GraphError>>()?;

        let mut attrs = TypeAttrs::empty();
        attrs.set(TypeAttrs::FORMATTABLE, desc.formattable);

        Ok(TypeDef {
            name: desc.name.clone(),
            qualified_name: desc
                .qualified_name
                .clone()
                .unwrap_or_else(|| desc.name.clone()),
            kind: desc.kind,
            attrs,
            element,
            generic,
            interfaces: self.resolve_all(owner, &desc.interfaces)?,
            constructors,
            members,
            location: desc.location.clone(),
        })
    }

    fn resolve_member(&self, owner: &str, desc: &MemberDesc) -> Result<Member, GraphError> {
        let mut flags = MemberFlags::empty();
        flags.set(MemberFlags::VIRTUAL, desc.is_virtual);
        flags.set(MemberFlags::IGNORED, desc.ignored);

        let accessors = match desc.kind {
            MemberKind::Property => Accessors {
                get: desc.getter,
                set: desc.setter,
            },
            MemberKind::Field => Accessors::default(),
        };

        Ok(Member {
            name: desc.name.clone(),
            kind: desc.kind,
            accessibility: desc.accessibility,
            flags,
            accessors,
            index: desc.index,
            ty: self.resolve_name(owner, &desc.ty)?,
            location: desc.location.clone(),
        })
    }

    /// Look up a type by display name.
    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        self.by_name.get(name).copied()
    }

    /// The definition behind a handle.
    ///
    /// # Panics
    /// Panics if `id` did not come from this graph.
    pub fn get(&self, id: TypeId) -> &TypeDef {
        &self.types[id.index()]
    }

    /// Total number of types, implicit scalars included.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate over every type with its handle.
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &TypeDef)> {
        self.types
            .iter()
            .enumerate()
            .map(|(i, def)| (TypeId::from_raw(raw_id(i)), def))
    }
}

fn opaque_type(name: String, kind: TypeKind) -> TypeDef {
    TypeDef {
        qualified_name: name.clone(),
        name,
        kind,
        attrs: TypeAttrs::empty(),
        element: None,
        generic: None,
        interfaces: Vec::new(),
        constructors: Vec::new(),
        members: Vec::new(),
        location: Location::default(),
    }
}

fn scalar_kind(name: &str) -> TypeKind {
    if name == "string" {
        TypeKind::Class
    } else {
        TypeKind::Struct
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "graphs beyond u32::MAX types are not representable"
)]
fn raw_id(index: usize) -> u32 {
    index as u32
}

impl TypeIntrospection for TypeGraph {
    fn types(&self) -> Vec<TypeId> {
        (0..self.declared)
            .map(|i| TypeId::from_raw(raw_id(i)))
            .collect()
    }

    fn display_name(&self, ty: TypeId) -> &str {
        &self.get(ty).name
    }

    fn qualified_name(&self, ty: TypeId) -> &str {
        &self.get(ty).qualified_name
    }

    fn kind(&self, ty: TypeId) -> TypeKind {
        self.get(ty).kind
    }

    fn attributes(&self, ty: TypeId) -> TypeAttrs {
        self.get(ty).attrs
    }

    fn element_type(&self, ty: TypeId) -> Option<TypeId> {
        self.get(ty).element
    }

    fn generic(&self, ty: TypeId) -> Option<&GenericInfo> {
        self.get(ty).generic.as_ref()
    }

    fn interfaces(&self, ty: TypeId) -> &[TypeId] {
        &self.get(ty).interfaces
    }

    fn constructors(&self, ty: TypeId) -> &[Constructor] {
        &self.get(ty).constructors
    }

    fn members(&self, ty: TypeId) -> &[Member] {
        &self.get(ty).members
    }

    fn location(&self, ty: TypeId) -> &Location {
        &self.get(ty).location
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
