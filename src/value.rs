//! Runtime values for hosted instances.
//!
//! The runtime does not manipulate host-language memory. Instead, reflected
//! records are *hosted*: an [`Instance`] owns one [`Value`] slot per included
//! per-instance field, in declaration order, plus one nested sub-instance per
//! reflected base. Field descriptors carry slot indices into this layout, so a
//! descriptor plus an instance is enough to read or write a field without any
//! per-type generated code.

use std::fmt;
use std::sync::Arc;

use derive_more::{From, TryInto};
use serde::{Deserialize, Serialize};

use crate::errors::MetaResult;

/// A dynamically typed value held in an instance slot, passed as a call
/// argument, or returned from an invocation.
///
/// `Null` doubles as "no value": it is the default for slots whose field
/// declares no initializer, and the return of methods whose declared return
/// type is a void type.
#[derive(Debug, Clone, Default, PartialEq, From, TryInto, Serialize, Deserialize)]
#[try_into(owned, ref)]
pub enum Value {
    #[default]
    Null,
    #[from]
    Bool(bool),
    #[from]
    Int(i64),
    #[from]
    Float(f64),
    #[from]
    Str(String),
    #[from]
    Record(Instance),
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl Value {
    /// Short label used in argument-mismatch diagnostics.
    pub fn type_label(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(_) => "bool".to_string(),
            Value::Int(_) => "int".to_string(),
            Value::Float(_) => "float".to_string(),
            Value::Str(_) => "string".to_string(),
            Value::Record(inst) => format!("record `{}`", inst.type_name()),
        }
    }

    pub fn as_record(&self) -> Option<&Instance> {
        match self {
            Value::Record(inst) => Some(inst),
            _ => None,
        }
    }
}

/// Whether a declared type name refers to the type with the given qualified
/// name. Front ends may write either the simple or the qualified spelling.
pub(crate) fn names_type(declared: &str, qualified: &str) -> bool {
    declared == qualified
        || qualified
            .strip_suffix(declared)
            .is_some_and(|prefix| prefix.ends_with("::"))
}

/// One hosted object of a reflected record type.
///
/// Slots hold the included per-instance fields in declaration order; nested
/// `bases` hold one sub-instance per reflected base, mirroring how a derived
/// object embeds its base subobjects. Unreflected bases contribute nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    type_name: String,
    slots: Vec<Value>,
    bases: Vec<Instance>,
}

impl Instance {
    pub(crate) fn assemble(
        type_name: impl Into<String>,
        slots: Vec<Value>,
        bases: Vec<Instance>,
    ) -> Self {
        Instance {
            type_name: type_name.into(),
            slots,
            bases,
        }
    }

    /// Qualified name of the type this instance was constructed as.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// True if this instance is of the named type, simple or qualified.
    pub fn is(&self, name: &str) -> bool {
        names_type(name, &self.type_name)
    }

    pub fn slot(&self, index: usize) -> Option<&Value> {
        self.slots.get(index)
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.slots.get_mut(index)
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Reflected base subobjects, in base-declaration order.
    pub fn bases(&self) -> &[Instance] {
        &self.bases
    }

    /// The subobject of the given type: this instance itself, or a base
    /// subobject found depth-first. This is how base-declared fields and
    /// methods are reached through a derived instance.
    pub fn subobject(&self, qualified: &str) -> Option<&Instance> {
        if self.type_name == qualified {
            return Some(self);
        }
        self.bases.iter().find_map(|base| base.subobject(qualified))
    }

    pub fn subobject_mut(&mut self, qualified: &str) -> Option<&mut Instance> {
        if self.type_name == qualified {
            return Some(self);
        }
        self.bases
            .iter_mut()
            .find_map(|base| base.subobject_mut(qualified))
    }
}

/// A host-registered method body.
///
/// Instance methods receive `Some` receiver (the subobject of the declaring
/// type); static methods receive `None`. The runtime validates arity and
/// argument types before the body runs.
#[derive(Clone)]
pub struct NativeFn(Arc<NativeFnInner>);

type NativeFnInner = dyn Fn(Option<&mut Instance>, &[Value]) -> MetaResult<Value> + Send + Sync;

impl NativeFn {
    pub fn new(
        body: impl Fn(Option<&mut Instance>, &[Value]) -> MetaResult<Value> + Send + Sync + 'static,
    ) -> Self {
        NativeFn(Arc::new(body))
    }

    pub fn call(&self, receiver: Option<&mut Instance>, args: &[Value]) -> MetaResult<Value> {
        (self.0)(receiver, args)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NativeFn(..)")
    }
}

/// A host-registered constructor body. The receiver arrives pre-seeded with
/// field defaults; the body overwrites whatever the arguments determine.
#[derive(Clone)]
pub struct NativeCtor(Arc<NativeCtorInner>);

type NativeCtorInner = dyn Fn(&mut Instance, &[Value]) -> MetaResult<()> + Send + Sync;

impl NativeCtor {
    pub fn new(
        body: impl Fn(&mut Instance, &[Value]) -> MetaResult<()> + Send + Sync + 'static,
    ) -> Self {
        NativeCtor(Arc::new(body))
    }

    pub fn call(&self, receiver: &mut Instance, args: &[Value]) -> MetaResult<()> {
        (self.0)(receiver, args)
    }
}

impl fmt::Debug for NativeCtor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NativeCtor(..)")
    }
}
