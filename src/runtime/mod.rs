//! The metadata runtime: registry, traversal and the process-wide registry.
//!
//! A [`Registry`] maps qualified type names to their immutable descriptors.
//! Queries against names it does not know answer "not reflected" (`None`,
//! empty traversal) rather than erroring, so callers can probe freely.
//!
//! Inherited traversals visit the type's own members first, then recurse
//! into each reflected base whose relation access admits the requested
//! bound, keeping the same bound throughout. Bases without descriptors
//! contribute nothing, and types reachable along two base paths are visited
//! once per path.

mod invoke;

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use crate::access::AccessLevel;
use crate::config::HostProfile;
use crate::descriptor::{BaseRelation, FieldDescriptor, MethodDescriptor, TypeDescriptor};
use crate::errors::{MetaError, MetaResult};

/// All reflected types known to one program, keyed by qualified name.
#[derive(Debug, Default)]
pub struct Registry {
    types: BTreeMap<String, Arc<TypeDescriptor>>,
    profile: HostProfile,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    /// A registry that checks values against a non-default host profile.
    pub fn with_profile(profile: HostProfile) -> Self {
        Registry {
            types: BTreeMap::new(),
            profile,
        }
    }

    pub fn profile(&self) -> &HostProfile {
        &self.profile
    }

    /// Adds one descriptor. Qualified names are unique per program, so a
    /// second registration under the same name is an error.
    pub fn register(&mut self, descriptor: TypeDescriptor) -> MetaResult<()> {
        match self.types.entry(descriptor.qualified_name.clone()) {
            Entry::Occupied(_) => Err(MetaError::DuplicateRegistration {
                qualified_name: descriptor.qualified_name.clone(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(descriptor));
                Ok(())
            }
        }
    }

    /// Adds every descriptor of an extracted unit, stopping at the first
    /// duplicate.
    pub fn extend(
        &mut self,
        descriptors: impl IntoIterator<Item = TypeDescriptor>,
    ) -> MetaResult<()> {
        for descriptor in descriptors {
            self.register(descriptor)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Whether the named type has a descriptor.
    pub fn is_reflected(&self, qualified: &str) -> bool {
        self.types.contains_key(qualified)
    }

    pub fn descriptor(&self, qualified: &str) -> Option<&Arc<TypeDescriptor>> {
        self.types.get(qualified)
    }

    /// Runs `query` against the named descriptor, if the type is reflected.
    pub fn with<R>(&self, qualified: &str, query: impl FnOnce(&TypeDescriptor) -> R) -> Option<R> {
        self.types.get(qualified).map(|desc| query(desc.as_ref()))
    }

    /// Every registered descriptor, ordered by qualified name.
    pub fn types(&self) -> impl Iterator<Item = &Arc<TypeDescriptor>> {
        self.types.values()
    }

    /// Visits the type's own fields in declaration order.
    pub fn for_each_field(&self, qualified: &str, mut visit: impl FnMut(&FieldDescriptor)) {
        if let Some(desc) = self.types.get(qualified) {
            desc.fields().iter().for_each(&mut visit);
        }
    }

    /// Visits the type's own methods in declaration order.
    pub fn for_each_method(&self, qualified: &str, mut visit: impl FnMut(&MethodDescriptor)) {
        if let Some(desc) = self.types.get(qualified) {
            desc.methods().iter().for_each(&mut visit);
        }
    }

    /// Visits the type's own constructors in declaration order. Constructors
    /// never traverse into bases.
    pub fn for_each_constructor(
        &self,
        qualified: &str,
        mut visit: impl FnMut(&crate::descriptor::ConstructorDescriptor),
    ) {
        if let Some(desc) = self.types.get(qualified) {
            desc.constructors().iter().for_each(&mut visit);
        }
    }

    /// Visits the type's direct base relations in declaration order.
    pub fn for_each_base(&self, qualified: &str, mut visit: impl FnMut(&BaseRelation)) {
        if let Some(desc) = self.types.get(qualified) {
            desc.bases().iter().for_each(&mut visit);
        }
    }

    /// Visits own fields, then fields of every base whose relation access is
    /// at least `min_access`, recursively with the same bound.
    pub fn for_each_field_inherited(
        &self,
        qualified: &str,
        min_access: AccessLevel,
        mut visit: impl FnMut(&FieldDescriptor),
    ) {
        self.walk(qualified, min_access, &TypeDescriptor::fields, &mut visit);
    }

    /// Visits own methods, then methods of every base whose relation access
    /// is at least `min_access`, recursively with the same bound.
    pub fn for_each_method_inherited(
        &self,
        qualified: &str,
        min_access: AccessLevel,
        mut visit: impl FnMut(&MethodDescriptor),
    ) {
        self.walk(qualified, min_access, &TypeDescriptor::methods, &mut visit);
    }

    fn walk<T, S, V>(&self, qualified: &str, min_access: AccessLevel, select: &S, visit: &mut V)
    where
        S: Fn(&TypeDescriptor) -> &[T],
        V: FnMut(&T),
    {
        let Some(desc) = self.types.get(qualified) else {
            return;
        };
        select(desc.as_ref()).iter().for_each(&mut *visit);
        for base in desc.bases() {
            if base.access.admits(min_access) {
                self.walk(&base.base, min_access, select, visit);
            }
        }
    }
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Installs the process-wide registry. Succeeds exactly once; descriptors
/// are immutable afterwards and safe for concurrent readers.
pub fn install_global(registry: Registry) -> MetaResult<()> {
    GLOBAL
        .set(registry)
        .map_err(|_| MetaError::GlobalAlreadyInstalled)
}

/// The process-wide registry, once installed.
pub fn global() -> Option<&'static Registry> {
    GLOBAL.get()
}
