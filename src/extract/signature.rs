//! Synthesis of overload-unique signature names.
//!
//! Overloaded declarations share a bare name, so descriptors are keyed by a
//! synthesized *full name*: the bare name, the comma-joined canonical
//! parameter type spellings, and the qualifier suffix. Constructors use the
//! owning type's simple name in place of a declared name.

use crate::decl::{MethodQuals, Param};

/// `name(ty1,ty2)quals`, e.g. `load(int,int)const&`.
pub fn method_full_name(name: &str, params: &[Param], quals: &MethodQuals) -> String {
    format!("{}({}){}", name, param_list(params), quals.suffix())
}

/// `Type(ty1,ty2)`, e.g. `Widget(const Widget&)`.
pub fn constructor_full_name(type_name: &str, params: &[Param]) -> String {
    format!("{}({})", type_name, param_list(params))
}

/// `{owner_qualified}::{member}`.
pub fn qualified_member_name(owner_qualified: &str, member: &str) -> String {
    format!("{owner_qualified}::{member}")
}

fn param_list(params: &[Param]) -> String {
    params
        .iter()
        .map(|p| p.ty.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
