//! Explicit placement: absolute frames and edge-to-edge pages.

use crate::axis::Axis;
use crate::diagnostics::{self, Misuse};
use crate::primitives::{Point, Rect, Size};

use super::component::{Component, Element, IntoElement};
use super::constraints::SizeConstraint;
use super::node::LayoutNode;

// =========================================================================
// Absolute
// =========================================================================

/// Children at caller-supplied frames.
///
/// Each child is laid out tight to its frame's size. The container's size is
/// the union of all frames measured from the origin. Frames may overlap and
/// come in any order, so queries use the unordered strategy.
#[derive(Debug, Clone, Default)]
pub struct Absolute {
    children: Vec<(Rect, Element)>,
}

impl Absolute {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place(mut self, frame: Rect, child: impl IntoElement) -> Self {
        self.children.push((frame, child.into_element()));
        self
    }
}

impl Component for Absolute {
    fn layout(&self, constraint: SizeConstraint) -> LayoutNode {
        let mut extent = Size::ZERO;
        let mut nodes = Vec::with_capacity(self.children.len());
        let mut positions = Vec::with_capacity(self.children.len());

        for (frame, child) in &self.children {
            nodes.push(child.layout(SizeConstraint::tight(frame.size())));
            positions.push(frame.origin());
            extent.width = extent.width.max(frame.right());
            extent.height = extent.height.max(frame.bottom());
        }

        LayoutNode::unordered(constraint.bound(extent), nodes, positions)
    }
}

// =========================================================================
// Page
// =========================================================================

/// Pages tiled edge to edge along `axis`.
///
/// Each page is laid out tight to the full available size and placed at
/// `index * page_extent`. The node spans all pages along `axis`, so unlike
/// the other layouts its main size is the content extent rather than the
/// bounded one: the hosting scroll surface pages through it.
#[derive(Debug, Clone, Default)]
pub struct Page {
    axis: Axis,
    children: Vec<Element>,
}

impl Page {
    pub fn new(axis: Axis) -> Self {
        Self { axis, children: Vec::new() }
    }

    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    pub fn push(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_element());
        self
    }

    pub fn extend<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoElement,
    {
        self.children.extend(children.into_iter().map(IntoElement::into_element));
        self
    }
}

impl Component for Page {
    fn layout(&self, constraint: SizeConstraint) -> LayoutNode {
        let axis = self.axis;
        let page_extent = constraint.main_max(axis);
        let cross_max = constraint.cross_max(axis);
        let cross = if cross_max.is_finite() {
            (cross_max, cross_max)
        } else {
            (constraint.cross_min(axis), f32::INFINITY)
        };

        let page_constraint = if page_extent.is_finite() {
            SizeConstraint::from_axis(axis, (page_extent, page_extent), cross)
        } else {
            diagnostics::report(Misuse::UnboundedPage(axis));
            SizeConstraint::from_axis(axis, (0.0, f32::INFINITY), cross)
        };

        let mut offset = 0.0;
        let mut breadth = constraint.cross_min(axis);
        let mut nodes = Vec::with_capacity(self.children.len());
        let mut positions = Vec::with_capacity(self.children.len());
        for child in &self.children {
            let node = child.layout(page_constraint);
            positions.push(axis.point(offset, 0.0));
            offset += if page_extent.is_finite() { page_extent } else { axis.main_size(node.size()) };
            breadth = breadth.max(axis.cross_size(node.size()));
            nodes.push(node);
        }

        let main = offset.max(constraint.main_min(axis));
        let size = axis.size(main, breadth.min(cross_max));
        LayoutNode::ordered(size, nodes, positions, axis)
    }
}

impl Page {
    /// Index of the page showing at main-axis `offset` of a laid-out page
    /// node, or `None` when there are no pages.
    pub fn page_at(node: &LayoutNode, axis: Axis, offset: f32) -> Option<usize> {
        let positions = node.positions();
        if positions.is_empty() {
            return None;
        }
        let i = positions.partition_point(|p: &Point| axis.main(*p) <= offset);
        Some(i.saturating_sub(1))
    }
}
