use thiserror::Error;

use crate::decl::{DirectiveKind, SourceLoc};

pub type ExtractResult<T> = Result<T, ExtractError>;
pub type MetaResult<T> = Result<T, MetaError>;

/// Errors raised while turning declaration graphs into descriptors.
///
/// Extraction aborts on the first error for a compilation unit; every variant
/// carries the source location of the offending declaration so front ends can
/// report it as a diagnostic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("{loc}: directive `{directive}` is not valid on {target}")]
    MisplacedDirective {
        directive: DirectiveKind,
        target: String,
        loc: SourceLoc,
    },

    #[error("{loc}: type `{type_name}` declares more than one reflection mode")]
    ConflictingModes { type_name: String, loc: SourceLoc },

    #[error("{loc}: directive `{directive}` accepts {expected} argument(s), found {found}")]
    DirectiveArity {
        directive: DirectiveKind,
        expected: usize,
        found: usize,
        loc: SourceLoc,
    },

    #[error("{loc}: duplicate signature `{full_name}` in type `{type_name}`")]
    DuplicateSignature {
        full_name: String,
        type_name: String,
        loc: SourceLoc,
    },

    #[error("{loc}: duplicate member name `{name}` in type `{type_name}`")]
    DuplicateMember {
        name: String,
        type_name: String,
        loc: SourceLoc,
    },

    #[error("{loc}: duplicate type `{qualified_name}` in compilation unit")]
    DuplicateType {
        qualified_name: String,
        loc: SourceLoc,
    },
}

/// Errors raised by runtime metadata operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetaError {
    #[error("Arity Mismatch: `{target}` takes {expected} argument(s), found {found}")]
    ArityMismatch {
        target: String,
        expected: usize,
        found: usize,
    },

    #[error("Argument Type Mismatch: argument {index} of `{target}` expects `{expected}`, found {found}")]
    ArgumentType {
        target: String,
        index: usize,
        expected: String,
        found: String,
    },

    #[error("Field Type Mismatch: `{field}` holds `{expected}`, found {found}")]
    FieldType {
        field: String,
        expected: String,
        found: String,
    },

    #[error("Immutable Field: `{field}` cannot be written")]
    ImmutableField { field: String },

    #[error("Missing Instance: `{method}` is an instance method")]
    MissingInstance { method: String },

    #[error("Instance Type Mismatch: expected `{expected}`, found `{found}`")]
    InstanceType { expected: String, found: String },

    #[error("Instance Field: `{field}` has no static storage")]
    ExpectedStaticField { field: String },

    #[error("Not Invokable: `{method}` has no registered body")]
    NotInvokable { method: String },

    #[error("Not Constructible: `{constructor}` has no registered body and no structural fallback")]
    NotConstructible { constructor: String },

    #[error("Malformed Instance: value of type `{type_name}` is missing storage slots")]
    MalformedInstance { type_name: String },

    #[error("Unknown Enum Value: {value} is not an enumerator of `{enum_name}`")]
    UnknownEnumValue { enum_name: String, value: i64 },

    #[error("Unknown Type: `{qualified_name}` has no registered descriptor")]
    UnknownType { qualified_name: String },

    #[error("Duplicate Registration: `{qualified_name}` is already registered")]
    DuplicateRegistration { qualified_name: String },

    #[error("Global Registry Already Installed")]
    GlobalAlreadyInstalled,
}
