//! Immutable type descriptors, the output of extraction.
//!
//! One [`TypeDescriptor`] exists per reflected type. It is created exactly
//! once and never mutated; the runtime only reads it. Records carry their
//! included members and base relations, enums carry their enumerators.
//! Unreflected types simply have no descriptor.

pub mod enums;
pub mod member;
pub mod tags;

use serde::{Deserialize, Serialize};

use crate::access::AccessLevel;
use crate::decl::TypeKind;

pub use enums::{EnumShape, Enumerator};
pub use member::{ConstructorDescriptor, FieldDescriptor, FieldStorage, MethodDescriptor};
pub use tags::{TagSet, TagValue};

/// A direct base-class edge, by qualified name.
///
/// The edge alone says nothing about whether the base is itself reflected;
/// that is resolved against a registry at traversal time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseRelation {
    pub base: String,
    pub access: AccessLevel,
}

/// The members of a reflected record type, each in declaration order.
#[derive(Debug, Default)]
pub struct RecordShape {
    pub bases: Vec<BaseRelation>,
    pub fields: Vec<FieldDescriptor>,
    pub methods: Vec<MethodDescriptor>,
    pub constructors: Vec<ConstructorDescriptor>,
}

#[derive(Debug)]
pub enum TypeShape {
    Record(RecordShape),
    Enum(EnumShape),
}

/// The immutable description of one reflected type.
#[derive(Debug)]
pub struct TypeDescriptor {
    pub name: String,
    pub qualified_name: String,
    pub(crate) shape: TypeShape,
}

impl TypeDescriptor {
    pub(crate) fn record(
        name: impl Into<String>,
        qualified_name: impl Into<String>,
        shape: RecordShape,
    ) -> Self {
        TypeDescriptor {
            name: name.into(),
            qualified_name: qualified_name.into(),
            shape: TypeShape::Record(shape),
        }
    }

    pub(crate) fn enumeration(
        name: impl Into<String>,
        qualified_name: impl Into<String>,
        shape: EnumShape,
    ) -> Self {
        TypeDescriptor {
            name: name.into(),
            qualified_name: qualified_name.into(),
            shape: TypeShape::Enum(shape),
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self.shape {
            TypeShape::Record(_) => TypeKind::Record,
            TypeShape::Enum(_) => TypeKind::Enum,
        }
    }

    pub fn as_record(&self) -> Option<&RecordShape> {
        match &self.shape {
            TypeShape::Record(record) => Some(record),
            TypeShape::Enum(_) => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumShape> {
        match &self.shape {
            TypeShape::Enum(shape) => Some(shape),
            TypeShape::Record(_) => None,
        }
    }

    /// Direct base relations; empty for enums.
    pub fn bases(&self) -> &[BaseRelation] {
        self.as_record().map(|r| r.bases.as_slice()).unwrap_or(&[])
    }

    /// Included fields in declaration order; empty for enums.
    pub fn fields(&self) -> &[FieldDescriptor] {
        self.as_record().map(|r| r.fields.as_slice()).unwrap_or(&[])
    }

    /// Included methods in declaration order; empty for enums.
    pub fn methods(&self) -> &[MethodDescriptor] {
        self.as_record()
            .map(|r| r.methods.as_slice())
            .unwrap_or(&[])
    }

    /// Included constructors in declaration order; empty for enums.
    pub fn constructors(&self) -> &[ConstructorDescriptor] {
        self.as_record()
            .map(|r| r.constructors.as_slice())
            .unwrap_or(&[])
    }

    /// The field with the given bare name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields().iter().find(|f| f.name == name)
    }

    /// The method with the given full signature name.
    pub fn method(&self, full_name: &str) -> Option<&MethodDescriptor> {
        self.methods().iter().find(|m| m.full_name == full_name)
    }

    /// Every overload with the given bare name, in declaration order.
    pub fn methods_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a MethodDescriptor> {
        self.methods().iter().filter(move |m| m.name == name)
    }

    /// The constructor with the given full signature name.
    pub fn constructor(&self, full_name: &str) -> Option<&ConstructorDescriptor> {
        self.constructors()
            .iter()
            .find(|c| c.full_name == full_name)
    }

    pub fn default_constructor(&self) -> Option<&ConstructorDescriptor> {
        self.constructors().iter().find(|c| c.is_default())
    }

    pub fn copy_constructor(&self) -> Option<&ConstructorDescriptor> {
        self.constructors().iter().find(|c| c.is_copy())
    }

    pub fn move_constructor(&self) -> Option<&ConstructorDescriptor> {
        self.constructors().iter().find(|c| c.is_move())
    }
}
