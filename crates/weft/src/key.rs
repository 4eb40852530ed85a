//! Identity keys
//!
//! A key is a reference-identity token: clones share identity, two keys
//! built from the same string do not.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::{Rc, Weak};

#[derive(Debug)]
pub(crate) struct KeyInner {
    string: Option<String>,
}

/// Opaque token requesting reuse of the same node across construction calls
#[derive(Clone)]
pub struct ElementKey(Rc<KeyInner>);

/// Address of a key's shared allocation.
///
/// Stable while any strong or weak handle exists, so a cache entry holding a
/// `WeakKey` can never see its id reused by another key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct KeyId(usize);

impl ElementKey {
    /// Key without a string marker
    pub fn new() -> Self {
        Self(Rc::new(KeyInner { string: None }))
    }

    /// Key whose identity is also persisted on the node as a marker attribute
    pub fn with_string(string: impl Into<String>) -> Self {
        Self(Rc::new(KeyInner {
            string: Some(string.into()),
        }))
    }

    /// The external string marker, if any
    pub fn string(&self) -> Option<&str> {
        self.0.string.as_deref()
    }

    pub(crate) fn id(&self) -> KeyId {
        KeyId(Rc::as_ptr(&self.0) as usize)
    }

    pub(crate) fn downgrade(&self) -> WeakKey {
        WeakKey(Rc::downgrade(&self.0))
    }
}

impl Default for ElementKey {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ElementKey {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ElementKey {}

impl Hash for ElementKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Debug for ElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementKey")
            .field("id", &format_args!("{:#x}", self.id().0))
            .field("string", &self.0.string)
            .finish()
    }
}

/// Non-owning handle kept by the cache
#[derive(Debug, Clone)]
pub(crate) struct WeakKey(Weak<KeyInner>);

impl WeakKey {
    /// Whether the caller still holds the key
    pub(crate) fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }

    /// Same id the key had, even after the key is dropped
    pub(crate) fn id(&self) -> KeyId {
        KeyId(self.0.as_ptr() as usize)
    }
}
