//! Enum descriptors: named constants and the name/value operations over them.

use serde::{Deserialize, Serialize};

use crate::errors::{MetaError, MetaResult};

/// One named constant of a reflected enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enumerator {
    pub name: String,
    pub value: i64,
}

/// The enumerators of a reflected enum, in declaration order.
///
/// Value aliases are legal in the source language; when two enumerators share
/// a value, name lookups resolve to the one declared first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumShape {
    pub enumerators: Vec<Enumerator>,
    pub(crate) owner: String,
}

impl EnumShape {
    pub fn len(&self) -> usize {
        self.enumerators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enumerators.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Enumerator> {
        self.enumerators.iter()
    }

    /// Name of the enumerator with the given value, or an error when no
    /// enumerator has it.
    pub fn to_name(&self, value: i64) -> MetaResult<&str> {
        self.find(value)
            .map(|e| e.name.as_str())
            .ok_or_else(|| MetaError::UnknownEnumValue {
                enum_name: self.owner.clone(),
                value,
            })
    }

    /// Like [`EnumShape::to_name`], but unknown values yield an empty name
    /// instead of an error.
    pub fn to_name_safe(&self, value: i64) -> &str {
        self.find(value).map(|e| e.name.as_str()).unwrap_or("")
    }

    /// Value of the named enumerator, when one exists.
    pub fn from_name(&self, name: &str) -> Option<i64> {
        self.enumerators
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.value)
    }

    /// Whether some enumerator has the given value.
    pub fn is_valid(&self, value: i64) -> bool {
        self.find(value).is_some()
    }

    fn find(&self, value: i64) -> Option<&Enumerator> {
        self.enumerators.iter().find(|e| e.value == value)
    }
}
