//! Type expressions and method qualifiers as the host front end declares them.
//!
//! A [`TypeExpr`] is a tiny structural tree: a named type, possibly wrapped in
//! one of the three reference shapes the source language distinguishes. Its
//! `Display` impl produces the canonical spelling used in synthesized
//! signatures, so two front ends that build the same tree always agree on the
//! resulting full name.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::Display;

/// A declared parameter, field or return type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeExpr {
    /// A plain type name, simple (`"Widget"`) or qualified (`"gui::Widget"`).
    Named(String),
    /// Read-only reference, spelled `const T&`.
    Ref(Box<TypeExpr>),
    /// Mutable reference, spelled `T&`.
    RefMut(Box<TypeExpr>),
    /// Ownership-transfer reference, spelled `T&&`.
    Xfer(Box<TypeExpr>),
}

impl TypeExpr {
    pub fn named(name: impl Into<String>) -> Self {
        TypeExpr::Named(name.into())
    }

    pub fn reference(inner: TypeExpr) -> Self {
        TypeExpr::Ref(Box::new(inner))
    }

    pub fn ref_mut(inner: TypeExpr) -> Self {
        TypeExpr::RefMut(Box::new(inner))
    }

    pub fn xfer(inner: TypeExpr) -> Self {
        TypeExpr::Xfer(Box::new(inner))
    }

    /// The innermost named type, ignoring reference wrappers.
    pub fn root_name(&self) -> &str {
        match self {
            TypeExpr::Named(name) => name,
            TypeExpr::Ref(inner) | TypeExpr::RefMut(inner) | TypeExpr::Xfer(inner) => {
                inner.root_name()
            }
        }
    }

    /// True for `const T&` where `T` names `target` (simple or qualified).
    pub fn is_readonly_ref_to(&self, target: &str) -> bool {
        matches!(self, TypeExpr::Ref(inner) if inner.names(target))
    }

    /// True for `T&&` where `T` names `target` (simple or qualified).
    pub fn is_xfer_ref_to(&self, target: &str) -> bool {
        matches!(self, TypeExpr::Xfer(inner) if inner.names(target))
    }

    fn names(&self, target: &str) -> bool {
        matches!(self, TypeExpr::Named(name) if name == target)
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Named(name) => f.write_str(name),
            TypeExpr::Ref(inner) => write!(f, "const {inner}&"),
            TypeExpr::RefMut(inner) => write!(f, "{inner}&"),
            TypeExpr::Xfer(inner) => write!(f, "{inner}&&"),
        }
    }
}

/// Reference qualifier on an instance method.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize,
)]
pub enum RefQual {
    #[default]
    None,
    Lvalue,
    Rvalue,
}

/// Trailing qualifiers of an instance method signature.
///
/// Qualifiers participate in overload identity, so they are rendered into the
/// synthesized full name in a fixed order: `const`, then `volatile`, then the
/// reference qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MethodQuals {
    pub is_const: bool,
    pub is_volatile: bool,
    pub ref_qual: RefQual,
}

impl MethodQuals {
    pub fn const_only() -> Self {
        MethodQuals {
            is_const: true,
            ..MethodQuals::default()
        }
    }

    /// Canonical suffix appended to a synthesized signature, e.g. `const&`.
    pub fn suffix(&self) -> String {
        let mut out = String::new();
        if self.is_const {
            out.push_str("const");
        }
        if self.is_volatile {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str("volatile");
        }
        match self.ref_qual {
            RefQual::None => {}
            RefQual::Lvalue => out.push('&'),
            RefQual::Rvalue => out.push_str("&&"),
        }
        out
    }
}
