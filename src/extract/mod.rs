//! The extractor: one pass from declaration graphs to type descriptors.
//!
//! Extraction is per compilation unit and aborts on the first malformed
//! declaration, so a unit either yields descriptors for every type that
//! opted in, or a single located error. Types that never opted in are
//! skipped without trace; within an opted-in record, members pass through
//! the inclusion policy and the structural filter (implicit, deleted and
//! uninstantiated-generic callables never reflect).
//!
//! Slot indices are assigned here: included per-instance fields are numbered
//! in declaration order, statics and excluded fields claiming no slot. The
//! runtime relies on this numbering when it seeds instances.

pub mod policy;
pub mod signature;

use std::collections::HashSet;
use std::sync::RwLock;

use crate::decl::{CompilationUnit, TypeDecl, TypeKind};
use crate::descriptor::{
    BaseRelation, ConstructorDescriptor, EnumShape, Enumerator, FieldDescriptor, FieldStorage,
    MethodDescriptor, RecordShape, TypeDescriptor,
};
use crate::errors::{ExtractError, ExtractResult};

pub use policy::ReflectMode;

/// Extracts descriptors for every type in the unit that opts into
/// reflection. The first malformed declaration aborts the whole unit.
pub fn extract_unit(unit: CompilationUnit) -> ExtractResult<Vec<TypeDescriptor>> {
    let mut seen = HashSet::new();
    let mut descriptors = Vec::new();
    for decl in unit.types {
        let Some(mode) = policy::resolve_mode(&decl)? else {
            continue;
        };
        if !seen.insert(decl.qualified_name.clone()) {
            return Err(ExtractError::DuplicateType {
                qualified_name: decl.qualified_name,
                loc: decl.loc,
            });
        }
        let descriptor = match decl.kind {
            TypeKind::Record => extract_record(decl, mode)?,
            TypeKind::Enum => extract_enum(decl)?,
        };
        descriptors.push(descriptor);
    }
    Ok(descriptors)
}

fn extract_record(decl: TypeDecl, mode: ReflectMode) -> ExtractResult<TypeDescriptor> {
    let TypeDecl {
        name,
        qualified_name,
        bases,
        fields,
        methods,
        constructors,
        ..
    } = decl;

    let mut shape = RecordShape {
        bases: bases
            .into_iter()
            .map(|b| BaseRelation {
                base: b.base,
                access: b.access,
            })
            .collect(),
        ..RecordShape::default()
    };

    let mut next_slot = 0usize;
    let mut field_names = HashSet::new();
    for field in fields {
        policy::validate_member_directives(&field.directives)?;
        if !policy::member_included(mode, &field.directives) {
            continue;
        }
        if !field_names.insert(field.name.clone()) {
            return Err(ExtractError::DuplicateMember {
                name: field.name,
                type_name: qualified_name,
                loc: field.loc,
            });
        }
        let tags = policy::member_tags(&field.directives);
        let storage = if field.is_static {
            let initial = field.default_value.clone().unwrap_or_default();
            FieldStorage::Shared(RwLock::new(initial))
        } else {
            let slot = FieldStorage::Slot(next_slot);
            next_slot += 1;
            slot
        };
        shape.fields.push(FieldDescriptor {
            qualified_name: signature::qualified_member_name(&qualified_name, &field.name),
            name: field.name,
            access: field.access,
            ty: field.ty,
            mutable: !field.immutable,
            default_value: field.default_value,
            tags,
            storage,
            owner: qualified_name.clone(),
        });
    }

    let mut method_names = HashSet::new();
    for method in methods {
        policy::validate_member_directives(&method.directives)?;
        if method.is_implicit || method.is_deleted || method.is_generic {
            continue;
        }
        if !policy::member_included(mode, &method.directives) {
            continue;
        }
        let full_name = signature::method_full_name(&method.name, &method.params, &method.quals);
        if !method_names.insert(full_name.clone()) {
            return Err(ExtractError::DuplicateSignature {
                full_name,
                type_name: qualified_name,
                loc: method.loc,
            });
        }
        shape.methods.push(MethodDescriptor {
            qualified_name: signature::qualified_member_name(&qualified_name, &method.name),
            name: method.name,
            full_name,
            access: method.access,
            is_static: method.is_static,
            is_virtual: method.is_virtual,
            return_type: method.return_type,
            quals: method.quals,
            params: method.params,
            tags: policy::member_tags(&method.directives),
            body: method.body,
            owner: qualified_name.clone(),
        });
    }

    let mut ctor_names = HashSet::new();
    for ctor in constructors {
        policy::validate_member_directives(&ctor.directives)?;
        if ctor.is_implicit || ctor.is_deleted || ctor.is_generic {
            continue;
        }
        if !policy::member_included(mode, &ctor.directives) {
            continue;
        }
        let full_name = signature::constructor_full_name(&name, &ctor.params);
        if !ctor_names.insert(full_name.clone()) {
            return Err(ExtractError::DuplicateSignature {
                full_name,
                type_name: qualified_name,
                loc: ctor.loc,
            });
        }
        shape.constructors.push(ConstructorDescriptor {
            full_name,
            access: ctor.access,
            params: ctor.params,
            tags: policy::member_tags(&ctor.directives),
            body: ctor.body,
            owner: qualified_name.clone(),
            owner_simple: name.clone(),
        });
    }

    Ok(TypeDescriptor::record(name, qualified_name, shape))
}

fn extract_enum(decl: TypeDecl) -> ExtractResult<TypeDescriptor> {
    let TypeDecl {
        name,
        qualified_name,
        enumerators,
        ..
    } = decl;

    let mut shape = EnumShape {
        enumerators: Vec::with_capacity(enumerators.len()),
        owner: qualified_name.clone(),
    };
    // Value aliases are legal; duplicate names are not.
    let mut seen = HashSet::new();
    for enumerator in enumerators {
        if !seen.insert(enumerator.name.clone()) {
            return Err(ExtractError::DuplicateMember {
                name: enumerator.name,
                type_name: qualified_name,
                loc: enumerator.loc,
            });
        }
        shape.enumerators.push(Enumerator {
            name: enumerator.name,
            value: enumerator.value,
        });
    }
    Ok(TypeDescriptor::enumeration(name, qualified_name, shape))
}
