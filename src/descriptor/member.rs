//! Member descriptors: fields, methods and constructors of a record type.
//!
//! A descriptor stores how to *reach* a member, never the member's value:
//! per-instance fields carry a slot index into hosted instances, static
//! fields own the one shared cell, and callables carry the body the front
//! end registered (if any).

use std::sync::RwLock;

use crate::access::AccessLevel;
use crate::decl::{MethodQuals, Param, TypeExpr};
use crate::descriptor::tags::TagSet;
use crate::value::{NativeCtor, NativeFn, Value};

/// Where a field's value lives.
#[derive(Debug)]
pub enum FieldStorage {
    /// Index into the slots of instances of the owning type.
    Slot(usize),
    /// The single shared cell of a static field.
    Shared(RwLock<Value>),
}

/// One reflected data member.
#[derive(Debug)]
pub struct FieldDescriptor {
    pub name: String,
    pub qualified_name: String,
    pub access: AccessLevel,
    pub ty: TypeExpr,
    /// Writable through the runtime; `false` for fields declared immutable.
    pub mutable: bool,
    pub default_value: Option<Value>,
    pub tags: TagSet,
    pub(crate) storage: FieldStorage,
    pub(crate) owner: String,
}

impl FieldDescriptor {
    pub fn is_static(&self) -> bool {
        matches!(self.storage, FieldStorage::Shared(_))
    }

    /// Slot index on instances of the owning type; `None` for statics.
    pub fn slot(&self) -> Option<usize> {
        match self.storage {
            FieldStorage::Slot(index) => Some(index),
            FieldStorage::Shared(_) => None,
        }
    }

    /// Qualified name of the declaring type.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn has_tag<T: std::any::Any>(&self) -> bool {
        self.tags.has::<T>()
    }

    pub fn with_tag<T: std::any::Any>(&self, visit: impl FnOnce(&T)) -> bool {
        self.tags.with(visit)
    }

    pub(crate) fn shared_cell(&self) -> Option<&RwLock<Value>> {
        match &self.storage {
            FieldStorage::Shared(cell) => Some(cell),
            FieldStorage::Slot(_) => None,
        }
    }
}

/// One reflected method, operators included.
///
/// `full_name` is the synthesized overload-unique signature, e.g.
/// `load(int,int)const&`; `name` is the bare declared name.
#[derive(Debug)]
pub struct MethodDescriptor {
    pub name: String,
    pub full_name: String,
    pub qualified_name: String,
    pub access: AccessLevel,
    pub is_static: bool,
    pub is_virtual: bool,
    pub return_type: TypeExpr,
    pub quals: MethodQuals,
    pub params: Vec<Param>,
    pub tags: TagSet,
    pub(crate) body: Option<NativeFn>,
    pub(crate) owner: String,
}

impl MethodDescriptor {
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Declared parameter names, in order; unnamed parameters yield `None`.
    pub fn param_names(&self) -> impl Iterator<Item = Option<&str>> {
        self.params.iter().map(|p| p.name.as_deref())
    }

    /// Qualified name of the declaring type.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    pub fn has_tag<T: std::any::Any>(&self) -> bool {
        self.tags.has::<T>()
    }

    pub fn with_tag<T: std::any::Any>(&self, visit: impl FnOnce(&T)) -> bool {
        self.tags.with(visit)
    }
}

/// One reflected constructor.
///
/// Classification is purely structural, from the parameter list: no
/// parameters is the default constructor, a single read-only reference to
/// the owning type is the copy constructor, and a single transfer reference
/// to the owning type is the move constructor.
#[derive(Debug)]
pub struct ConstructorDescriptor {
    /// Synthesized name, e.g. `Widget(const Widget&)`.
    pub full_name: String,
    pub access: AccessLevel,
    pub params: Vec<Param>,
    pub tags: TagSet,
    pub(crate) body: Option<NativeCtor>,
    pub(crate) owner: String,
    pub(crate) owner_simple: String,
}

impl ConstructorDescriptor {
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Qualified name of the constructed type.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn is_default(&self) -> bool {
        self.params.is_empty()
    }

    pub fn is_copy(&self) -> bool {
        self.single_param_refs(TypeExpr::is_readonly_ref_to)
    }

    pub fn is_move(&self) -> bool {
        self.single_param_refs(TypeExpr::is_xfer_ref_to)
    }

    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    pub fn has_tag<T: std::any::Any>(&self) -> bool {
        self.tags.has::<T>()
    }

    pub fn with_tag<T: std::any::Any>(&self, visit: impl FnOnce(&T)) -> bool {
        self.tags.with(visit)
    }

    fn single_param_refs(&self, shape: impl Fn(&TypeExpr, &str) -> bool) -> bool {
        match self.params.as_slice() {
            [only] => shape(&only.ty, &self.owner_simple) || shape(&only.ty, &self.owner),
            _ => false,
        }
    }
}
