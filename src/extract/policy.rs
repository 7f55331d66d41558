//! Inclusion policy: which declarations participate in reflection.
//!
//! A type opts in with exactly one mode directive. Members are then decided
//! per member: `exclude` always wins; otherwise `all` mode includes
//! everything, and selective mode includes only members marked `include` or
//! `tag`. Directives in the wrong place or with the wrong argument count
//! abort extraction of the unit.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::decl::{Directive, DirectiveKind, TypeDecl};
use crate::descriptor::tags::TagSet;
use crate::errors::{ExtractError, ExtractResult};

/// How a reflected type treats members without member-level directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum ReflectMode {
    /// Every member is included unless excluded.
    All,
    /// Only members marked `include` or `tag` are included. Declared with
    /// the `none` directive.
    Selective,
}

/// Resolves the type-level mode, or `None` when the type never opted in.
///
/// Member-level directives on the type itself and repeated mode directives
/// are errors; an unannotated type is silently skipped.
pub(crate) fn resolve_mode(decl: &TypeDecl) -> ExtractResult<Option<ReflectMode>> {
    let mut mode = None;
    for directive in &decl.directives {
        let picked = match directive.kind {
            DirectiveKind::All => ReflectMode::All,
            DirectiveKind::None => ReflectMode::Selective,
            DirectiveKind::Include | DirectiveKind::Exclude | DirectiveKind::Tag => {
                return Err(ExtractError::MisplacedDirective {
                    directive: directive.kind,
                    target: "a type declaration".to_string(),
                    loc: directive.loc.clone(),
                });
            }
        };
        check_arity(directive, 0)?;
        if mode.is_some() {
            return Err(ExtractError::ConflictingModes {
                type_name: decl.qualified_name.clone(),
                loc: directive.loc.clone(),
            });
        }
        mode = Some(picked);
    }
    Ok(mode)
}

/// Rejects mode directives on members and wrong argument counts.
pub(crate) fn validate_member_directives(directives: &[Directive]) -> ExtractResult<()> {
    for directive in directives {
        match directive.kind {
            DirectiveKind::All | DirectiveKind::None => {
                return Err(ExtractError::MisplacedDirective {
                    directive: directive.kind,
                    target: "a member declaration".to_string(),
                    loc: directive.loc.clone(),
                });
            }
            DirectiveKind::Include | DirectiveKind::Exclude => check_arity(directive, 0)?,
            DirectiveKind::Tag => check_arity(directive, 1)?,
        }
    }
    Ok(())
}

/// The member inclusion rule. Assumes directives are already validated.
pub(crate) fn member_included(mode: ReflectMode, directives: &[Directive]) -> bool {
    let mut marked = false;
    for directive in directives {
        match directive.kind {
            DirectiveKind::Exclude => return false,
            DirectiveKind::Include | DirectiveKind::Tag => marked = true,
            DirectiveKind::All | DirectiveKind::None => {}
        }
    }
    match mode {
        ReflectMode::All => true,
        ReflectMode::Selective => marked,
    }
}

/// Collects tag payloads in directive order.
pub(crate) fn member_tags(directives: &[Directive]) -> TagSet {
    let values = directives
        .iter()
        .filter(|d| d.kind == DirectiveKind::Tag)
        .filter_map(|d| d.args.first().cloned())
        .collect();
    TagSet::from_values(values)
}

fn check_arity(directive: &Directive, expected: usize) -> ExtractResult<()> {
    if directive.args.len() != expected {
        return Err(ExtractError::DirectiveArity {
            directive: directive.kind,
            expected,
            found: directive.args.len(),
            loc: directive.loc.clone(),
        });
    }
    Ok(())
}
