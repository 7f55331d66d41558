//! Access levels for members and base-class relations.
//!
//! Levels are totally ordered (`Private < Protected < Public`) so that
//! inherited traversals can be bounded by a minimum access: a relation is
//! followed exactly when its access is at least the requested bound.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Declared visibility of a member or base-class relation.
///
/// The ordering follows how permissive each level is, which is what the
/// bounded traversal operations compare against.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    Serialize,
    Deserialize,
)]
pub enum AccessLevel {
    Private,
    Protected,
    Public,
}

impl AccessLevel {
    /// Whether this level satisfies a traversal bound of `min`.
    pub fn admits(self, min: AccessLevel) -> bool {
        self >= min
    }
}
