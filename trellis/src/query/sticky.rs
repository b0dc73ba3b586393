//! Sticky header pinning.

use crate::axis::Axis;
use crate::layout::node::LayoutNode;
use crate::primitives::{Point, Rect};

/// The active sticky header and where it is drawn, in node coordinates.
///
/// The active header is the last sticky child whose leading edge is at or
/// before the pin rect's leading edge. It is moved to that edge, but never past
/// the point where it would overlap the next sticky header, and never above
/// its own natural position.
pub(crate) fn pinned_header(
    node: &LayoutNode,
    axis: Axis,
    sticky: &[usize],
    sorted: bool,
    pin: &Rect,
) -> Option<(usize, Point)> {
    let positions = node.positions();
    let edge = axis.main_min(pin);
    let start_of = |i: usize| axis.main(positions[i]);

    let (active, next) = if sorted {
        let k = sticky.partition_point(|&i| start_of(i) <= edge);
        (k.checked_sub(1).map(|k| sticky[k]), sticky.get(k).copied())
    } else {
        let active = sticky.iter().rev().copied().find(|&i| start_of(i) <= edge);
        let next = active.and_then(|a| sticky.iter().copied().find(|&i| i > a));
        (active, next)
    };
    let active = active?;

    let natural = positions[active];
    let extent = axis.main_size(node.children()[active].size());
    let mut main = edge;
    if let Some(next) = next {
        main = main.min(start_of(next) - extent);
    }
    let main = main.max(axis.main(natural));
    Some((active, axis.point(main, axis.cross(natural))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Size;

    /// Headers of height 40 at 0, 500, 1000 with 460-high bodies between.
    fn sections() -> (LayoutNode, Vec<usize>) {
        let mut children = Vec::new();
        let mut positions = Vec::new();
        let mut sticky = Vec::new();
        for s in 0..3 {
            let y = s as f32 * 500.0;
            sticky.push(children.len());
            children.push(LayoutNode::empty(Size::new(300.0, 40.0)));
            positions.push(Point::new(0.0, y));
            children.push(LayoutNode::empty(Size::new(300.0, 460.0)));
            positions.push(Point::new(0.0, y + 40.0));
        }
        let node = LayoutNode::unordered(Size::new(300.0, 1500.0), children, positions);
        (node, sticky)
    }

    #[test]
    fn pins_to_viewport_edge() {
        let (node, sticky) = sections();
        let pin = Rect::new(0.0, 600.0, 300.0, 400.0);
        let (i, at) = pinned_header(&node, Axis::Vertical, &sticky, true, &pin).unwrap();
        assert_eq!(i, 2);
        assert_eq!(at, Point::new(0.0, 600.0));
    }

    #[test]
    fn pushed_up_by_next_header() {
        let (node, sticky) = sections();
        let pin = Rect::new(0.0, 980.0, 300.0, 400.0);
        let (i, at) = pinned_header(&node, Axis::Vertical, &sticky, true, &pin).unwrap();
        assert_eq!(i, 2);
        assert_eq!(at.y, 960.0);
    }

    #[test]
    fn unsorted_lookup_agrees() {
        let (node, sticky) = sections();
        for y in [0.0, 250.0, 600.0, 980.0, 1200.0] {
            let pin = Rect::new(0.0, y, 300.0, 10.0);
            assert_eq!(
                pinned_header(&node, Axis::Vertical, &sticky, true, &pin),
                pinned_header(&node, Axis::Vertical, &sticky, false, &pin),
            );
        }
    }

    #[test]
    fn no_header_above_first() {
        let (node, sticky) = sections();
        let pin = Rect::new(0.0, -50.0, 300.0, 10.0);
        assert!(pinned_header(&node, Axis::Vertical, &sticky, true, &pin).is_none());
    }
}
