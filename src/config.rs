//! Host-language profile configuration.
//!
//! Declared types arrive as opaque names chosen by the front end, so the
//! runtime needs to know which spellings mean "integer", "float" and so on
//! when it checks call arguments against declared parameter types. A
//! [`HostProfile`] carries those scalar name tables, built with
//! `typed-builder`; the default profile covers the common C-family
//! spellings.

use typed_builder::TypedBuilder;

use crate::decl::TypeExpr;
use crate::value::{names_type, Value};

/// Scalar type-name tables for one host language.
///
/// # Examples
///
/// ```
/// use typelens::config::HostProfile;
///
/// // Default C-family profile.
/// let profile = HostProfile::default();
///
/// // A host that spells integers differently.
/// let profile = HostProfile::builder()
///     .int_types(vec!["i32".into(), "i64".into()])
///     .build();
/// ```
#[derive(Debug, Clone, TypedBuilder)]
#[builder(doc)]
pub struct HostProfile {
    /// Names treated as integer scalars.
    #[builder(default = strings(&["int", "short", "long", "long long", "unsigned", "unsigned int", "size_t"]))]
    pub int_types: Vec<String>,

    /// Names treated as floating-point scalars.
    #[builder(default = strings(&["float", "double"]))]
    pub float_types: Vec<String>,

    /// Names treated as booleans.
    #[builder(default = strings(&["bool"]))]
    pub bool_types: Vec<String>,

    /// Names treated as strings.
    #[builder(default = strings(&["std::string", "string", "const char *", "const char*"]))]
    pub string_types: Vec<String>,

    /// Names treated as "no value".
    #[builder(default = strings(&["void"]))]
    pub void_types: Vec<String>,
}

fn strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

impl Default for HostProfile {
    fn default() -> Self {
        HostProfile::builder().build()
    }
}

impl HostProfile {
    /// Whether a value is acceptable where `declared` is the declared type.
    ///
    /// Scalars must match the declared scalar class exactly. Record values
    /// must be instances of the declared type. `Null` is accepted for void
    /// and for record-typed (non-scalar) declarations, where it plays the
    /// role of the host's null object.
    pub fn matches(&self, declared: &TypeExpr, value: &Value) -> bool {
        let root = declared.root_name();
        match value {
            Value::Null => self.is_void(root) || !self.is_scalar(root),
            Value::Bool(_) => contains(&self.bool_types, root),
            Value::Int(_) => contains(&self.int_types, root),
            Value::Float(_) => contains(&self.float_types, root),
            Value::Str(_) => contains(&self.string_types, root),
            Value::Record(inst) => {
                !self.is_scalar(root) && names_type(root, inst.type_name())
            }
        }
    }

    pub fn is_void(&self, name: &str) -> bool {
        contains(&self.void_types, name)
    }

    fn is_scalar(&self, name: &str) -> bool {
        self.is_void(name)
            || contains(&self.int_types, name)
            || contains(&self.float_types, name)
            || contains(&self.bool_types, name)
            || contains(&self.string_types, name)
    }
}

fn contains(table: &[String], name: &str) -> bool {
    table.iter().any(|t| t == name)
}
