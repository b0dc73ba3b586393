//! Binary-search visibility over children sorted along one axis.

use crate::axis::Axis;
use crate::layout::node::LayoutNode;
use crate::primitives::Rect;

/// Indexes of children of `node` intersecting `rect` (node coordinates).
///
/// Requires leading edges along `axis` to be non-decreasing. A child can only
/// reach the query's leading edge if it starts after `lead - max_extent`, so
/// everything before that is skipped by binary search; the scan stops at the
/// first child that starts at or past the query's trailing edge.
pub(crate) fn hits(node: &LayoutNode, axis: Axis, max_extent: f32, rect: &Rect) -> Vec<usize> {
    let positions = node.positions();
    let lead = axis.main_min(rect);
    let trail = axis.main_max(rect);

    let start = positions.partition_point(|p| axis.main(*p) + max_extent <= lead);

    let mut out = Vec::new();
    for (i, p) in positions.iter().enumerate().skip(start) {
        if axis.main(*p) >= trail {
            break;
        }
        if node.frame_of(i).intersects(rect) {
            out.push(i);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Point, Size};

    fn boxes(extents: &[f32]) -> LayoutNode {
        let mut x = 0.0;
        let mut positions = Vec::new();
        let mut children = Vec::new();
        for &w in extents {
            positions.push(Point::new(x, 0.0));
            children.push(LayoutNode::empty(Size::new(w, 10.0)));
            x += w;
        }
        LayoutNode::ordered(Size::new(x, 10.0), children, positions, Axis::Horizontal)
    }

    #[test]
    fn wide_child_before_window_is_found() {
        // A 100-wide child at 0 still covers x = 90 even though the three
        // narrow ones after it start later.
        let node = boxes(&[100.0, 5.0, 5.0, 5.0]);
        let hits = hits(&node, Axis::Horizontal, 100.0, &Rect::new(90.0, 0.0, 17.0, 10.0));
        assert_eq!(hits, vec![0, 1, 2]);
    }

    #[test]
    fn stops_at_trailing_edge() {
        let node = boxes(&[10.0; 50]);
        let hits = hits(&node, Axis::Horizontal, 10.0, &Rect::new(100.0, 0.0, 30.0, 10.0));
        assert_eq!(hits, vec![10, 11, 12]);
    }

    #[test]
    fn cross_axis_miss_is_filtered() {
        let node = boxes(&[10.0; 5]);
        assert!(hits(&node, Axis::Horizontal, 10.0, &Rect::new(0.0, 20.0, 50.0, 10.0)).is_empty());
    }
}
