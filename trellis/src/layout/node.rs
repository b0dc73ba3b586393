//! Layout nodes: the geometry tree produced by a layout pass.
//!
//! A node is the resolved result of laying out a component under a
//! constraint: its size, its positioned children, and either a renderable
//! leaf or the spatial index the layout chose for its children. Nodes are
//! immutable and can be kept around to answer repeated viewport queries
//! until the next state change produces a new tree.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::axis::Axis;
use crate::identity::Identity;
use crate::primitives::{Point, Rect, Size};
use crate::query::QueryIndex;

/// Opaque host data attached to a leaf (what to draw, how to configure the
/// visual object). Compared by pointer.
#[derive(Clone, Default)]
pub struct Payload(Option<Arc<dyn Any + Send + Sync>>);

impl Payload {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Some(Arc::new(value)))
    }

    pub const fn none() -> Self {
        Self(None)
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.as_deref().and_then(|v| v.downcast_ref::<T>())
    }
}

impl PartialEq for Payload {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            None => f.write_str("Payload(None)"),
            Some(_) => f.write_str("Payload(..)"),
        }
    }
}

/// Name of a transition registered on a reconciler.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionKey(Arc<str>);

impl TransitionKey {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TransitionKey {
    fn from(name: &str) -> Self {
        Self(name.into())
    }
}

/// A renderable leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    pub identity: Identity,
    pub payload: Payload,
    pub transition: Option<TransitionKey>,
}

/// What a node is.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Leaf(Leaf),
    Container(QueryIndex),
}

/// A sized, positioned node in the geometry tree.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    size: Size,
    children: Vec<LayoutNode>,
    positions: Vec<Point>,
    kind: NodeKind,
}

impl LayoutNode {
    /// A renderable leaf with no children.
    pub fn leaf(size: Size, leaf: Leaf) -> Self {
        Self {
            size,
            children: Vec::new(),
            positions: Vec::new(),
            kind: NodeKind::Leaf(leaf),
        }
    }

    /// A non-rendering box (spacers, empty containers).
    pub fn empty(size: Size) -> Self {
        Self {
            size,
            children: Vec::new(),
            positions: Vec::new(),
            kind: NodeKind::Container(QueryIndex::Unordered),
        }
    }

    /// A container whose children were placed along `axis`.
    ///
    /// Uses the ordered index when leading edges along `axis` are
    /// non-decreasing, and the unordered index otherwise.
    pub fn ordered(size: Size, children: Vec<LayoutNode>, positions: Vec<Point>, axis: Axis) -> Self {
        let index = QueryIndex::along(axis, &children, &positions);
        Self::with_index(size, children, positions, index)
    }

    /// A container with no usable ordering (absolute placement).
    pub fn unordered(size: Size, children: Vec<LayoutNode>, positions: Vec<Point>) -> Self {
        Self::with_index(size, children, positions, QueryIndex::Unordered)
    }

    /// A container with an explicit index.
    pub fn with_index(
        size: Size,
        children: Vec<LayoutNode>,
        positions: Vec<Point>,
        index: QueryIndex,
    ) -> Self {
        debug_assert_eq!(children.len(), positions.len(), "positions must parallel children");
        Self {
            size,
            children,
            positions,
            kind: NodeKind::Container(index),
        }
    }

    /// Wrap a single child at `offset` inside a box of `size`.
    pub fn wrap(size: Size, child: LayoutNode, offset: Point) -> Self {
        Self::with_index(size, vec![child], vec![offset], QueryIndex::Unordered)
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn children(&self) -> &[LayoutNode] {
        &self.children
    }

    #[inline]
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    #[inline]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn leaf_data(&self) -> Option<&Leaf> {
        match &self.kind {
            NodeKind::Leaf(leaf) => Some(leaf),
            NodeKind::Container(_) => None,
        }
    }

    pub fn index(&self) -> Option<&QueryIndex> {
        match &self.kind {
            NodeKind::Leaf(_) => None,
            NodeKind::Container(index) => Some(index),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    /// Frame of child `i` in this node's coordinate space.
    #[inline]
    pub fn frame_of(&self, i: usize) -> Rect {
        Rect::from_origin_size(self.positions[i], self.children[i].size)
    }

    pub(crate) fn into_parts(self) -> (Size, Vec<LayoutNode>, Vec<Point>) {
        (self.size, self.children, self.positions)
    }

    /// Number of renderable leaves in the subtree.
    pub fn leaf_count(&self) -> usize {
        match self.kind {
            NodeKind::Leaf(_) => 1,
            NodeKind::Container(_) => self.children.iter().map(LayoutNode::leaf_count).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Key;

    fn leaf(key: &str, w: f32, h: f32) -> LayoutNode {
        LayoutNode::leaf(
            Size::new(w, h),
            Leaf {
                identity: Identity::Explicit(Key::named(key)),
                payload: Payload::none(),
                transition: None,
            },
        )
    }

    #[test]
    fn sorted_children_get_ordered_index() {
        let node = LayoutNode::ordered(
            Size::new(10.0, 30.0),
            vec![leaf("a", 10.0, 10.0), leaf("b", 10.0, 20.0)],
            vec![Point::new(0.0, 0.0), Point::new(0.0, 10.0)],
            Axis::Vertical,
        );
        assert!(matches!(
            node.index(),
            Some(QueryIndex::Ordered { axis: Axis::Vertical, max_extent }) if *max_extent == 20.0
        ));
        assert_eq!(node.frame_of(1), Rect::new(0.0, 10.0, 10.0, 20.0));
        assert_eq!(node.leaf_count(), 2);
    }

    #[test]
    fn unsorted_children_fall_back() {
        let node = LayoutNode::ordered(
            Size::new(10.0, 30.0),
            vec![leaf("a", 10.0, 10.0), leaf("b", 10.0, 10.0)],
            vec![Point::new(0.0, 20.0), Point::new(0.0, 0.0)],
            Axis::Vertical,
        );
        assert_eq!(node.index(), Some(&QueryIndex::Unordered));
    }

    #[test]
    fn payload_compares_by_pointer() {
        let a = Payload::new(5u32);
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, Payload::new(5u32));
        assert_eq!(a.downcast_ref::<u32>(), Some(&5));
        assert_eq!(a.downcast_ref::<i64>(), None);
        assert!(Payload::none().is_none());
    }
}
