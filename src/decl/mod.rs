//! The declaration graph a host front end hands to the extractor.
//!
//! This is the boundary of the crate: everything upstream of it (parsing
//! source text, resolving names, instantiating generics) is the front end's
//! job, and everything downstream (policy, signature synthesis, descriptors)
//! is ours. Declarations are plain data built with `typed-builder`, so a
//! front end (or a test) can assemble a unit in a few lines.
//!
//! Reflection directives arrive as structured [`Directive`] values attached
//! to the declarations they annotate. The extractor validates placement and
//! arity; a directive in the wrong place is an extraction error, not a silent
//! no-op.

pub mod expr;

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use typed_builder::TypedBuilder;

use crate::access::AccessLevel;
use crate::descriptor::tags::TagValue;
use crate::value::{NativeCtor, NativeFn, Value};

pub use expr::{MethodQuals, RefQual, TypeExpr};

/// Position of a declaration in front-end source, carried into diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLoc {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl SourceLoc {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        SourceLoc {
            file: file.into(),
            line,
            column,
        }
    }
}

impl Default for SourceLoc {
    fn default() -> Self {
        SourceLoc {
            file: "<unknown>".to_string(),
            line: 0,
            column: 0,
        }
    }
}

impl fmt::Display for SourceLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Which record-like or enum-like shape a type declaration has.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
pub enum TypeKind {
    Record,
    Enum,
}

/// The reflection directives a front end can attach.
///
/// Placement and argument arity are validated during extraction; see the
/// policy rules on [`crate::extract::extract_unit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum DirectiveKind {
    /// Type-level: reflect every member not explicitly excluded.
    All,
    /// Type-level: reflect only members explicitly included or tagged.
    None,
    /// Member-level: include this member regardless of mode.
    Include,
    /// Member-level: exclude this member regardless of mode or tags.
    Exclude,
    /// Member-level: include this member and attach one tag payload.
    Tag,
}

/// One reflection directive with its arguments and source position.
#[derive(Clone)]
pub struct Directive {
    pub kind: DirectiveKind,
    pub args: Vec<TagValue>,
    pub loc: SourceLoc,
}

impl Directive {
    fn bare(kind: DirectiveKind) -> Self {
        Directive {
            kind,
            args: Vec::new(),
            loc: SourceLoc::default(),
        }
    }

    pub fn all() -> Self {
        Directive::bare(DirectiveKind::All)
    }

    pub fn none() -> Self {
        Directive::bare(DirectiveKind::None)
    }

    pub fn include() -> Self {
        Directive::bare(DirectiveKind::Include)
    }

    pub fn exclude() -> Self {
        Directive::bare(DirectiveKind::Exclude)
    }

    pub fn tag(payload: impl std::any::Any + Send + Sync) -> Self {
        Directive {
            kind: DirectiveKind::Tag,
            args: vec![std::sync::Arc::new(payload)],
            loc: SourceLoc::default(),
        }
    }

    pub fn at(mut self, loc: SourceLoc) -> Self {
        self.loc = loc;
        self
    }
}

impl fmt::Debug for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Directive({}, args={}, at {})",
            self.kind,
            self.args.len(),
            self.loc
        )
    }
}

/// A declared parameter: its type, and its name when the front end has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub ty: TypeExpr,
    pub name: Option<String>,
}

impl Param {
    pub fn of(ty: TypeExpr) -> Self {
        Param { ty, name: None }
    }

    pub fn named(ty: TypeExpr, name: impl Into<String>) -> Self {
        Param {
            ty,
            name: Some(name.into()),
        }
    }
}

/// Everything one front-end pass over one translation unit produced.
///
/// Units are independent: each is extracted on its own, and descriptors from
/// many units are merged later in a [`crate::runtime::Registry`].
#[derive(Debug, Clone, Default)]
pub struct CompilationUnit {
    pub name: String,
    pub types: Vec<TypeDecl>,
}

impl CompilationUnit {
    pub fn new(name: impl Into<String>) -> Self {
        CompilationUnit {
            name: name.into(),
            types: Vec::new(),
        }
    }

    pub fn push(&mut self, decl: TypeDecl) -> &mut Self {
        self.types.push(decl);
        self
    }
}

/// One type declaration: a record with members and bases, or an enum with
/// enumerators. Which children are meaningful depends on `kind`.
#[derive(Debug, Clone, TypedBuilder)]
#[builder(doc)]
pub struct TypeDecl {
    #[builder(setter(into))]
    pub name: String,
    #[builder(setter(into))]
    pub qualified_name: String,
    pub kind: TypeKind,
    #[builder(default)]
    pub directives: Vec<Directive>,
    #[builder(default)]
    pub bases: Vec<BaseDecl>,
    #[builder(default)]
    pub fields: Vec<FieldDecl>,
    #[builder(default)]
    pub methods: Vec<MethodDecl>,
    #[builder(default)]
    pub constructors: Vec<ConstructorDecl>,
    #[builder(default)]
    pub enumerators: Vec<EnumeratorDecl>,
    #[builder(default)]
    pub loc: SourceLoc,
}

/// A direct base-class relation, by qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseDecl {
    pub base: String,
    pub access: AccessLevel,
    pub loc: SourceLoc,
}

impl BaseDecl {
    pub fn new(base: impl Into<String>, access: AccessLevel) -> Self {
        BaseDecl {
            base: base.into(),
            access,
            loc: SourceLoc::default(),
        }
    }
}

/// A declared data member.
#[derive(Debug, Clone, TypedBuilder)]
#[builder(doc)]
pub struct FieldDecl {
    #[builder(setter(into))]
    pub name: String,
    pub ty: TypeExpr,
    #[builder(default = AccessLevel::Public)]
    pub access: AccessLevel,
    #[builder(default = false)]
    pub is_static: bool,
    /// Declared read-only; writes through the runtime are rejected.
    #[builder(default = false)]
    pub immutable: bool,
    #[builder(default = None)]
    pub default_value: Option<Value>,
    #[builder(default)]
    pub directives: Vec<Directive>,
    #[builder(default)]
    pub loc: SourceLoc,
}

/// A declared method, including operators (`name` carries the full operator
/// spelling, e.g. `"operator bool"`).
///
/// Destructors never appear here: they are structural, not declared members
/// of the graph. Implicit, deleted and uninstantiated-generic methods do
/// appear, flagged, and the extractor skips them.
#[derive(Debug, Clone, TypedBuilder)]
#[builder(doc)]
pub struct MethodDecl {
    #[builder(setter(into))]
    pub name: String,
    #[builder(default)]
    pub params: Vec<Param>,
    #[builder(default = TypeExpr::named("void"))]
    pub return_type: TypeExpr,
    #[builder(default = AccessLevel::Public)]
    pub access: AccessLevel,
    #[builder(default)]
    pub quals: MethodQuals,
    #[builder(default = false)]
    pub is_static: bool,
    #[builder(default = false)]
    pub is_virtual: bool,
    #[builder(default = false)]
    pub is_generic: bool,
    #[builder(default = false)]
    pub is_implicit: bool,
    #[builder(default = false)]
    pub is_deleted: bool,
    #[builder(default)]
    pub directives: Vec<Directive>,
    #[builder(default = None)]
    pub body: Option<NativeFn>,
    #[builder(default)]
    pub loc: SourceLoc,
}

/// A declared constructor. It has no name of its own; the extractor
/// synthesizes one from the owning type and the parameter list.
#[derive(Debug, Clone, TypedBuilder)]
#[builder(doc)]
pub struct ConstructorDecl {
    #[builder(default)]
    pub params: Vec<Param>,
    #[builder(default = AccessLevel::Public)]
    pub access: AccessLevel,
    #[builder(default = false)]
    pub is_generic: bool,
    #[builder(default = false)]
    pub is_implicit: bool,
    #[builder(default = false)]
    pub is_deleted: bool,
    #[builder(default)]
    pub directives: Vec<Directive>,
    #[builder(default = None)]
    pub body: Option<NativeCtor>,
    #[builder(default)]
    pub loc: SourceLoc,
}

/// One named constant of an enum declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumeratorDecl {
    pub name: String,
    pub value: i64,
    pub loc: SourceLoc,
}

impl EnumeratorDecl {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        EnumeratorDecl {
            name: name.into(),
            value,
            loc: SourceLoc::default(),
        }
    }
}
