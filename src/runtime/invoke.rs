//! Value access, method dispatch and construction against hosted instances.
//!
//! Every operation here validates before it touches anything: writes check
//! the mutability capability and the declared type, calls check arity and
//! argument types against the registry's host profile. Bodies only run after
//! validation passes.

use std::sync::RwLock;

use crate::decl::Param;
use crate::descriptor::{ConstructorDescriptor, FieldDescriptor, MethodDescriptor};
use crate::errors::{MetaError, MetaResult};
use crate::runtime::Registry;
use crate::value::{Instance, Value};

impl Registry {
    /// Reads a field off an instance. Static fields are readable through an
    /// instance as well; the instance is then ignored.
    pub fn get(&self, field: &FieldDescriptor, instance: &Instance) -> MetaResult<Value> {
        if let Some(cell) = field.shared_cell() {
            return Ok(read_cell(cell));
        }
        let owner = locate(instance, field.owner())?;
        read_slot(field, owner)
    }

    /// Writes a field on an instance, enforcing the write capability and the
    /// declared field type.
    pub fn set(
        &self,
        field: &FieldDescriptor,
        instance: &mut Instance,
        value: Value,
    ) -> MetaResult<()> {
        self.check_write(field, &value)?;
        if let Some(cell) = field.shared_cell() {
            write_cell(cell, value);
            return Ok(());
        }
        let owner = locate_mut(instance, field.owner())?;
        let slot = field.slot().unwrap_or_default();
        match owner.slot_mut(slot) {
            Some(dest) => {
                *dest = value;
                Ok(())
            }
            None => Err(MetaError::MalformedInstance {
                type_name: owner.type_name().to_string(),
            }),
        }
    }

    /// Reads a static field's shared cell.
    pub fn get_static(&self, field: &FieldDescriptor) -> MetaResult<Value> {
        match field.shared_cell() {
            Some(cell) => Ok(read_cell(cell)),
            None => Err(MetaError::ExpectedStaticField {
                field: field.qualified_name.clone(),
            }),
        }
    }

    /// Writes a static field's shared cell, with the same capability and
    /// type checks as [`Registry::set`].
    pub fn set_static(&self, field: &FieldDescriptor, value: Value) -> MetaResult<()> {
        let cell = field
            .shared_cell()
            .ok_or_else(|| MetaError::ExpectedStaticField {
                field: field.qualified_name.clone(),
            })?;
        self.check_write(field, &value)?;
        write_cell(cell, value);
        Ok(())
    }

    /// Invokes a method body. Instance methods require an instance of the
    /// declaring type (or one derived from it); static methods ignore any
    /// instance supplied. The receiver a body sees is the subobject of the
    /// declaring type, so bodies index their own type's slots.
    pub fn invoke(
        &self,
        method: &MethodDescriptor,
        instance: Option<&mut Instance>,
        args: &[Value],
    ) -> MetaResult<Value> {
        self.check_args(&method.full_name, &method.params, args)?;
        let body = method.body.as_ref().ok_or_else(|| MetaError::NotInvokable {
            method: method.full_name.clone(),
        })?;
        if method.is_static {
            return body.call(None, args);
        }
        let instance = instance.ok_or_else(|| MetaError::MissingInstance {
            method: method.full_name.clone(),
        })?;
        let receiver = locate_mut(instance, method.owner())?;
        body.call(Some(receiver), args)
    }

    /// Builds a new instance through a constructor.
    ///
    /// With a registered body, the body runs over a default-seeded instance.
    /// Without one, the structural constructors still work: the default
    /// constructor yields the seeded instance, and copy/move constructors
    /// clone their source. Anything else is not constructible.
    pub fn construct(&self, ctor: &ConstructorDescriptor, args: &[Value]) -> MetaResult<Instance> {
        self.check_args(&ctor.full_name, &ctor.params, args)?;
        if let Some(body) = &ctor.body {
            let mut instance = self.seed_instance(ctor.owner())?;
            body.call(&mut instance, args)?;
            return Ok(instance);
        }
        if ctor.is_copy() || ctor.is_move() {
            let source = args[0].as_record().ok_or_else(|| MetaError::ArgumentType {
                target: ctor.full_name.clone(),
                index: 0,
                expected: ctor.params[0].ty.to_string(),
                found: args[0].type_label(),
            })?;
            return Ok(source.clone());
        }
        if ctor.is_default() {
            return self.seed_instance(ctor.owner());
        }
        Err(MetaError::NotConstructible {
            constructor: ctor.full_name.clone(),
        })
    }

    /// A default-seeded instance of a registered record type: one slot per
    /// included per-instance field, holding the field's declared default or
    /// `Null`, plus one seeded subobject per reflected base. Base graphs are
    /// acyclic in any well-formed source program.
    fn seed_instance(&self, qualified: &str) -> MetaResult<Instance> {
        let desc = self
            .descriptor(qualified)
            .ok_or_else(|| MetaError::UnknownType {
                qualified_name: qualified.to_string(),
            })?
            .clone();
        let slots = desc
            .fields()
            .iter()
            .filter(|f| !f.is_static())
            .map(|f| f.default_value.clone().unwrap_or_default())
            .collect();
        let mut bases = Vec::new();
        for base in desc.bases() {
            if self.is_reflected(&base.base) {
                bases.push(self.seed_instance(&base.base)?);
            }
        }
        Ok(Instance::assemble(qualified, slots, bases))
    }

    fn check_write(&self, field: &FieldDescriptor, value: &Value) -> MetaResult<()> {
        if !field.mutable {
            return Err(MetaError::ImmutableField {
                field: field.qualified_name.clone(),
            });
        }
        if !self.profile().matches(&field.ty, value) {
            return Err(MetaError::FieldType {
                field: field.qualified_name.clone(),
                expected: field.ty.to_string(),
                found: value.type_label(),
            });
        }
        Ok(())
    }

    fn check_args(&self, target: &str, params: &[Param], args: &[Value]) -> MetaResult<()> {
        if params.len() != args.len() {
            return Err(MetaError::ArityMismatch {
                target: target.to_string(),
                expected: params.len(),
                found: args.len(),
            });
        }
        for (index, (param, arg)) in params.iter().zip(args).enumerate() {
            if !self.profile().matches(&param.ty, arg) {
                return Err(MetaError::ArgumentType {
                    target: target.to_string(),
                    index,
                    expected: param.ty.to_string(),
                    found: arg.type_label(),
                });
            }
        }
        Ok(())
    }
}

fn locate<'a>(instance: &'a Instance, owner: &str) -> MetaResult<&'a Instance> {
    instance
        .subobject(owner)
        .ok_or_else(|| MetaError::InstanceType {
            expected: owner.to_string(),
            found: instance.type_name().to_string(),
        })
}

fn locate_mut<'a>(instance: &'a mut Instance, owner: &str) -> MetaResult<&'a mut Instance> {
    let found = instance.type_name().to_string();
    instance.subobject_mut(owner).ok_or(MetaError::InstanceType {
        expected: owner.to_string(),
        found,
    })
}

fn read_slot(field: &FieldDescriptor, owner: &Instance) -> MetaResult<Value> {
    let slot = field.slot().unwrap_or_default();
    owner
        .slot(slot)
        .cloned()
        .ok_or_else(|| MetaError::MalformedInstance {
            type_name: owner.type_name().to_string(),
        })
}

fn read_cell(cell: &RwLock<Value>) -> Value {
    cell.read().unwrap_or_else(|e| e.into_inner()).clone()
}

fn write_cell(cell: &RwLock<Value>, value: Value) {
    *cell.write().unwrap_or_else(|e| e.into_inner()) = value;
}
