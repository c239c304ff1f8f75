//! Serde-facing type descriptions.
//!
//! A [`GraphDesc`] is what a host extracts from its compiler and hands over,
//! typically as JSON. Types reference each other by display name; resolution
//! into [`TypeId`](crate::TypeId) handles happens in
//! [`TypeGraph::build`](crate::TypeGraph::build).
//!
//! ```json
//! {
//!   "types": [
//!     {
//!       "name": "Person", "kind": "class", "formattable": true,
//!       "constructors": [[]],
//!       "members": [
//!         { "name": "Age", "type": "int", "virtual": true, "index": 0 },
//!         { "name": "Tags", "type": "IList<Tag>", "virtual": true, "index": 1 }
//!       ]
//!     },
//!     {
//!       "name": "IList<Tag>", "kind": "interface",
//!       "generic_definition": "System.Collections.Generic.IList<>",
//!       "type_arguments": ["Tag"]
//!     },
//!     { "name": "Tag", "kind": "enum" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Deserializer};

use crate::{Accessibility, IndexAnnotation, Location, MemberKind, TypeKind};

/// A whole type graph description.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct GraphDesc {
    #[serde(default)]
    pub types: Vec<TypeDesc>,
}

impl GraphDesc {
    pub fn new(types: Vec<TypeDesc>) -> Self {
        GraphDesc { types }
    }
}

/// Description of one type.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TypeDesc {
    pub name: String,
    /// Defaults to `name`.
    #[serde(default)]
    pub qualified_name: Option<String>,
    pub kind: TypeKind,
    #[serde(default)]
    pub formattable: bool,
    /// Element type name, arrays only.
    #[serde(default)]
    pub element: Option<String>,
    /// Unbound generic definition identity, constructed generics only.
    #[serde(default)]
    pub generic_definition: Option<String>,
    #[serde(default)]
    pub type_arguments: Vec<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub constructors: Vec<ConstructorDesc>,
    #[serde(default)]
    pub members: Vec<MemberDesc>,
    #[serde(default)]
    pub location: Location,
}

impl TypeDesc {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        TypeDesc {
            name: name.into(),
            qualified_name: None,
            kind,
            formattable: false,
            element: None,
            generic_definition: None,
            type_arguments: Vec::new(),
            interfaces: Vec::new(),
            constructors: Vec::new(),
            members: Vec::new(),
            location: Location::default(),
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Class)
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Interface)
    }

    pub fn structure(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Struct)
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Enum)
    }

    pub fn type_parameter(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::TypeParameter)
    }

    /// An array type named `name` over `element`.
    pub fn array(name: impl Into<String>, element: impl Into<String>) -> Self {
        let mut desc = Self::new(name, TypeKind::Array);
        desc.element = Some(element.into());
        desc
    }

    /// A constructed generic type.
    pub fn generic<I, S>(
        name: impl Into<String>,
        kind: TypeKind,
        definition: impl Into<String>,
        arguments: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut desc = Self::new(name, kind);
        desc.generic_definition = Some(definition.into());
        desc.type_arguments = arguments.into_iter().map(Into::into).collect();
        desc
    }

    #[must_use]
    pub fn formattable(mut self) -> Self {
        self.formattable = true;
        self
    }

    #[must_use]
    pub fn qualified(mut self, qualified_name: impl Into<String>) -> Self {
        self.qualified_name = Some(qualified_name.into());
        self
    }

    #[must_use]
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Add a constructor taking the named parameter types.
    #[must_use]
    pub fn constructor<I, S>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constructors.push(ConstructorDesc {
            parameters: parameters.into_iter().map(Into::into).collect(),
        });
        self
    }

    #[must_use]
    pub fn default_constructor(self) -> Self {
        self.constructor(std::iter::empty::<String>())
    }

    #[must_use]
    pub fn member(mut self, member: MemberDesc) -> Self {
        self.members.push(member);
        self
    }

    #[must_use]
    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }
}

/// A constructor's parameter type names. Serialized as a bare array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ConstructorDesc {
    pub parameters: Vec<String>,
}

/// Description of a property or field.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MemberDesc {
    pub name: String,
    #[serde(default = "default_member_kind")]
    pub kind: MemberKind,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(default, rename = "virtual")]
    pub is_virtual: bool,
    #[serde(default)]
    pub ignored: bool,
    /// `null` means the accessor does not exist. Ignored for fields.
    #[serde(default = "default_accessor")]
    pub getter: Option<Accessibility>,
    #[serde(default = "default_accessor")]
    pub setter: Option<Accessibility>,
    /// Absent: no annotation. `null`: null argument. `[]`: no argument.
    /// A number (or `[n]`): the index.
    #[serde(default, deserialize_with = "deserialize_index")]
    pub index: IndexAnnotation,
    #[serde(default)]
    pub location: Location,
}

fn default_member_kind() -> MemberKind {
    MemberKind::Property
}

#[allow(
    clippy::unnecessary_wraps,
    reason = "serde default functions must match the field type"
)]
fn default_accessor() -> Option<Accessibility> {
    Some(Accessibility::Public)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawIndex {
    Value(i32),
    Arguments(Vec<Option<i32>>),
}

fn deserialize_index<'de, D>(deserializer: D) -> Result<IndexAnnotation, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawIndex> = Option::deserialize(deserializer)?;
    Ok(match raw {
        None => IndexAnnotation::Null,
        Some(RawIndex::Value(index)) => IndexAnnotation::Value(index),
        Some(RawIndex::Arguments(args)) => match args.first() {
            None => IndexAnnotation::Empty,
            Some(None) => IndexAnnotation::Null,
            Some(Some(index)) => IndexAnnotation::Value(*index),
        },
    })
}

impl MemberDesc {
    fn new(name: impl Into<String>, kind: MemberKind, ty: impl Into<String>) -> Self {
        let accessor = match kind {
            MemberKind::Property => Some(Accessibility::Public),
            MemberKind::Field => None,
        };
        MemberDesc {
            name: name.into(),
            kind,
            ty: ty.into(),
            accessibility: Accessibility::Public,
            is_virtual: false,
            ignored: false,
            getter: accessor,
            setter: accessor,
            index: IndexAnnotation::Missing,
            location: Location::default(),
        }
    }

    /// A public property with public accessors and no annotations.
    pub fn property(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self::new(name, MemberKind::Property, ty)
    }

    /// A public field with no annotations.
    pub fn field(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self::new(name, MemberKind::Field, ty)
    }

    #[must_use]
    pub fn overridable(mut self) -> Self {
        self.is_virtual = true;
        self
    }

    #[must_use]
    pub fn ignored(mut self) -> Self {
        self.ignored = true;
        self
    }

    #[must_use]
    pub fn index(mut self, index: i32) -> Self {
        self.index = IndexAnnotation::Value(index);
        self
    }

    #[must_use]
    pub fn index_annotation(mut self, index: IndexAnnotation) -> Self {
        self.index = index;
        self
    }

    #[must_use]
    pub fn access(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    #[must_use]
    pub fn getter(mut self, getter: Option<Accessibility>) -> Self {
        self.getter = getter;
        self
    }

    #[must_use]
    pub fn setter(mut self, setter: Option<Accessibility>) -> Self {
        self.setter = setter;
        self
    }

    #[must_use]
    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }
}
