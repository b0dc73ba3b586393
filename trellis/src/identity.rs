//! Stable identity for renderable leaves.
//!
//! A [`Key`] is what the reconciler tracks across passes. Leaves carry an
//! explicit key by default; the positional fallback has to be asked for by
//! name (`Identity::Positional`, built with `Item::positional`).
//!
//! Positional keys are derived from the child-index path from the root. They
//! only stay stable while sibling order and count are unchanged: inserting or
//! removing a sibling shifts the key of every later sibling in that pass, which
//! misassigns transitions (geometry is still correct).

use std::fmt;
use std::sync::Arc;

/// Identity of a renderable leaf within one hosting surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Caller-assigned string key.
    Named(Arc<str>),
    /// Caller-assigned numeric key (row ids, database ids).
    Id(u64),
    /// Derived from the leaf's position in the tree.
    Positional(u64),
}

impl Key {
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        Key::Named(name.into())
    }

    pub const fn id(id: u64) -> Self {
        Key::Id(id)
    }

    /// The name of a `Named` key.
    pub fn name(&self) -> Option<&str> {
        match self {
            Key::Named(name) => Some(&**name),
            _ => None,
        }
    }

    /// Whether this key was derived from tree position.
    pub fn is_positional(&self) -> bool {
        matches!(self, Key::Positional(_))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Named(name) => write!(f, "{name:?}"),
            Key::Id(id) => write!(f, "#{id}"),
            Key::Positional(path) => write!(f, "@{path:016x}"),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Named(name.into())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Named(name.into())
    }
}

impl From<u64> for Key {
    fn from(id: u64) -> Self {
        Key::Id(id)
    }
}

/// How a leaf is identified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identity {
    Explicit(Key),
    /// Opt-in structural fallback, see the module docs.
    Positional,
}

impl Identity {
    /// Resolve to a concrete key given the leaf's path.
    #[inline]
    pub fn resolve(&self, path: KeyPath) -> Key {
        match self {
            Identity::Explicit(key) => key.clone(),
            Identity::Positional => Key::Positional(path.raw()),
        }
    }
}

/// Rolling hash of a child-index path, used to derive positional keys.
///
/// Uses splitmix64 mixing over `(parent, index)` so that sibling and cousin
/// paths do not collide structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPath(u64);

impl KeyPath {
    pub const ROOT: KeyPath = KeyPath(0x5452_454c_4c49_5300);

    /// Path of the `index`th child of this node.
    #[inline]
    pub const fn child(self, index: usize) -> KeyPath {
        KeyPath(Self::mix(self.0, index as u64))
    }

    pub const fn raw(self) -> u64 {
        self.0
    }

    const fn mix(a: u64, b: u64) -> u64 {
        let mut z = a.wrapping_add(b.wrapping_add(1).wrapping_mul(0x9E3779B97F4A7C15));
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sibling_paths_differ() {
        let root = KeyPath::ROOT;
        assert_ne!(root.child(0), root.child(1));
        assert_ne!(root.child(0).child(1), root.child(1).child(0));
    }

    #[test]
    fn paths_are_deterministic() {
        assert_eq!(KeyPath::ROOT.child(3).child(4), KeyPath::ROOT.child(3).child(4));
    }

    #[test]
    fn explicit_identity_ignores_path() {
        let id = Identity::Explicit(Key::named("a"));
        assert_eq!(id.resolve(KeyPath::ROOT.child(9)), Key::named("a"));
        let pos = Identity::Positional;
        assert!(pos.resolve(KeyPath::ROOT.child(9)).is_positional());
        assert_ne!(
            pos.resolve(KeyPath::ROOT.child(1)),
            pos.resolve(KeyPath::ROOT.child(2))
        );
    }

    #[test]
    fn display() {
        assert_eq!(Key::named("a").to_string(), "\"a\"");
        assert_eq!(Key::id(7).to_string(), "#7");
    }
}
