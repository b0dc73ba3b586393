//! Publishing a geometry tree to concurrent readers.

use std::sync::{Arc, PoisonError, RwLock};

use crate::layout::node::LayoutNode;
use crate::primitives::Rect;

use super::RenderItem;

/// The current geometry tree of a surface.
///
/// Layout passes build a complete tree off to the side and `publish` it in one
/// swap; readers take an `Arc` snapshot and query it without holding the lock,
/// so a query never sees a half-built tree and never blocks a publish for
/// longer than a pointer swap.
#[derive(Debug)]
pub struct SharedLayout {
    current: RwLock<Arc<LayoutNode>>,
}

impl SharedLayout {
    pub fn new(tree: LayoutNode) -> Self {
        Self {
            current: RwLock::new(Arc::new(tree)),
        }
    }

    /// Replace the tree. Returns the previous one.
    pub fn publish(&self, tree: LayoutNode) -> Arc<LayoutNode> {
        let tree = Arc::new(tree);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, tree)
    }

    /// The tree as of now.
    pub fn snapshot(&self) -> Arc<LayoutNode> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Query the current tree.
    pub fn query(&self, rect: Rect) -> Vec<RenderItem> {
        self.snapshot().query(rect)
    }
}
