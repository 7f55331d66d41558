//! Ordered, typed tag payloads attached to members.
//!
//! Tags are arbitrary host values carried from a `tag(...)` directive onto the
//! extracted descriptor. Lookups are by payload type, and when several tags of
//! the same type are attached the *first* one in directive order wins.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// One tag payload. Payloads are opaque to the extractor; consumers downcast
/// to the concrete type they expect.
pub type TagValue = Arc<dyn Any + Send + Sync>;

/// The ordered tags of a single member.
#[derive(Clone, Default)]
pub struct TagSet {
    entries: Vec<TagValue>,
}

impl TagSet {
    pub(crate) fn from_values(entries: Vec<TagValue>) -> Self {
        TagSet { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether any attached tag has payload type `T`.
    pub fn has<T: Any>(&self) -> bool {
        self.first::<T>().is_some()
    }

    /// The first attached tag of payload type `T`, in directive order.
    pub fn first<T: Any>(&self) -> Option<&T> {
        self.entries
            .iter()
            .find_map(|entry| entry.downcast_ref::<T>())
    }

    /// Runs `visit` with the first tag of type `T`, if one is attached.
    /// Returns whether a tag was found.
    pub fn with<T: Any>(&self, visit: impl FnOnce(&T)) -> bool {
        match self.first::<T>() {
            Some(tag) => {
                visit(tag);
                true
            }
            None => false,
        }
    }

    /// All attached payloads, untyped, in directive order.
    pub fn iter(&self) -> impl Iterator<Item = &TagValue> {
        self.entries.iter()
    }
}

impl fmt::Debug for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TagSet(len={})", self.entries.len())
    }
}
