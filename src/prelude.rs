//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types, allowing users to
//! get started quickly with a single import.
//!
//! # Usage
//!
//! ```rust,ignore
//! use typelens::prelude::*;
//! ```
//!
//! # What's Included
//!
//! ## Declaration Graph
//!
//! - [`CompilationUnit`], [`TypeDecl`], [`BaseDecl`], [`FieldDecl`],
//!   [`MethodDecl`], [`ConstructorDecl`], [`EnumeratorDecl`]: what a front
//!   end hands the extractor
//! - [`Directive`] / [`DirectiveKind`]: the reflection annotations
//! - [`TypeExpr`], [`MethodQuals`], [`RefQual`], [`Param`],
//!   [`SourceLoc`]: declaration vocabulary
//!
//! ## Extraction
//!
//! - [`extract_unit`]: the one-time pass from declarations to descriptors
//! - [`ReflectMode`]: how an opted-in type treats unmarked members
//!
//! ## Descriptors
//!
//! - [`TypeDescriptor`], [`FieldDescriptor`], [`MethodDescriptor`],
//!   [`ConstructorDescriptor`], [`BaseRelation`], [`EnumShape`],
//!   [`Enumerator`], [`TagSet`]: the immutable metadata graph
//!
//! ## Runtime
//!
//! - [`Registry`]: qualified-name lookup, traversal, invocation
//! - [`install_global`] / [`global`]: the write-once process registry
//! - [`Value`], [`Instance`], [`NativeFn`], [`NativeCtor`]: hosted values
//!   and registered bodies
//!
//! ## Error Handling
//!
//! - [`ExtractError`] / [`ExtractResult`]: located extraction failures
//! - [`MetaError`] / [`MetaResult`]: runtime operation failures

pub use crate::access::AccessLevel;
pub use crate::config::HostProfile;
pub use crate::decl::{
    BaseDecl, CompilationUnit, ConstructorDecl, Directive, DirectiveKind, EnumeratorDecl,
    FieldDecl, MethodDecl, MethodQuals, Param, RefQual, SourceLoc, TypeDecl, TypeExpr, TypeKind,
};
pub use crate::descriptor::{
    BaseRelation, ConstructorDescriptor, EnumShape, Enumerator, FieldDescriptor, MethodDescriptor,
    TagSet, TagValue, TypeDescriptor,
};
pub use crate::errors::{ExtractError, ExtractResult, MetaError, MetaResult};
pub use crate::extract::signature::{constructor_full_name, method_full_name};
pub use crate::extract::{extract_unit, ReflectMode};
pub use crate::runtime::{global, install_global, Registry};
pub use crate::value::{Instance, NativeCtor, NativeFn, Value};
