//! # Typelens
//!
//! Static reflection metadata for hosted type systems: a one-time extractor
//! over declaration graphs plus a read-only runtime for querying what it
//! produced.
//!
//! ## Features
//!
//! - **Directive-Driven**: Types opt in with `all`/`none`; members refine
//!   with `include`, `exclude` and typed `tag` payloads
//! - **Overload-Aware**: Synthesized full-signature names keep overloads,
//!   operators and qualifier variants apart
//! - **Inheritance**: Access-bounded traversal across reflected base chains
//! - **Hosted Invocation**: Slot-addressed field access, checked method
//!   dispatch and constructor fallbacks over dynamic instances
//! - **Write-Once Global**: One immutable process-wide registry, installed
//!   at startup, safe for concurrent readers
//!
//! ## Quick Start
//!
//! ```rust
//! use typelens::prelude::*;
//!
//! // A front end hands the extractor a declaration graph.
//! let mut unit = CompilationUnit::new("widgets");
//! unit.push(
//!     TypeDecl::builder()
//!         .name("Widget")
//!         .qualified_name("gui::Widget")
//!         .kind(TypeKind::Record)
//!         .directives(vec![Directive::all()])
//!         .fields(vec![FieldDecl::builder()
//!             .name("width")
//!             .ty(TypeExpr::named("int"))
//!             .default_value(Some(Value::Int(0)))
//!             .build()])
//!         .build(),
//! );
//!
//! // Extract once, register, query forever.
//! let mut registry = Registry::new();
//! registry.extend(extract_unit(unit)?)?;
//! let widget = registry.descriptor("gui::Widget").unwrap();
//! assert_eq!(widget.fields()[0].qualified_name, "gui::Widget::width");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod access;
pub mod config;
pub mod decl;
pub mod descriptor;
pub mod errors;
pub mod extract;
pub mod prelude;
pub mod runtime;
pub mod value;

pub use access::AccessLevel;
pub use config::HostProfile;
pub use decl::{CompilationUnit, Directive, DirectiveKind, TypeDecl, TypeExpr, TypeKind};
pub use descriptor::TypeDescriptor;
pub use errors::{ExtractError, ExtractResult, MetaError, MetaResult};
pub use extract::{extract_unit, ReflectMode};
pub use runtime::{global, install_global, Registry};
pub use value::{Instance, Value};
