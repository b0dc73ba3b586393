//! StickyStack - a stack whose marked children pin to the viewport edge.
//!
//! Layout is exactly [`Stack`]'s. Pinning happens at query time, since it
//! depends on where the viewport is: see `query::sticky`.

use crate::axis::Axis;

use super::component::Component;
use super::constraints::SizeConstraint;
use super::lines::Child;
use super::node::LayoutNode;
use super::stack::Stack;
use crate::query::QueryIndex;

/// A vertical (or horizontal) list with sticky section headers.
#[derive(Debug, Clone)]
pub struct StickyStack {
    stack: Stack,
    sticky: Vec<usize>,
}

impl StickyStack {
    pub fn new(axis: Axis) -> Self {
        Self {
            stack: Stack::new(axis),
            sticky: Vec::new(),
        }
    }

    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// Configure the underlying stack (spacing, alignment, ...).
    ///
    /// Wrapping is ignored: sticky pinning needs a single line.
    pub fn configure(mut self, f: impl FnOnce(Stack) -> Stack) -> Self {
        self.stack = f(self.stack).wrap(false);
        self
    }

    /// Append a normal child.
    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.stack = self.stack.push(child);
        self
    }

    /// Append a child that pins while its section is on screen.
    pub fn sticky(mut self, child: impl Into<Child>) -> Self {
        self.sticky.push(self.stack.len());
        self.stack = self.stack.push(child);
        self
    }
}

impl Component for StickyStack {
    fn layout(&self, constraint: SizeConstraint) -> LayoutNode {
        let axis = self.stack.axis();
        let (size, children, positions) = self.stack.layout(constraint).into_parts();
        let index = QueryIndex::sticky(axis, &children, &positions, self.sticky.clone());
        LayoutNode::with_index(size, children, positions, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::elements::Item;
    use crate::primitives::{Rect, Size};

    fn sections() -> StickyStack {
        let mut list = StickyStack::vertical();
        for s in 0..3 {
            list = list
                .sticky(Item::keyed(format!("header-{s}"), Size::new(300.0, 40.0)))
                .child(Item::keyed(format!("body-{s}"), Size::new(300.0, 460.0)));
        }
        list
    }

    fn frame_of(items: &[crate::query::RenderItem], key: &str) -> Option<Rect> {
        items.iter().find(|i| i.key.name() == Some(key)).map(|i| i.frame)
    }

    #[test]
    fn header_pins_to_viewport() {
        let node = sections().layout(SizeConstraint::loose(Size::new(300.0, f32::INFINITY)));
        let items = node.query(Rect::new(0.0, 600.0, 300.0, 400.0));
        assert_eq!(frame_of(&items, "header-1"), Some(Rect::new(0.0, 600.0, 300.0, 40.0)));
        // The pinned header is emitted last and not duplicated.
        assert_eq!(items.last().and_then(|i| i.key.name()), Some("header-1"));
        assert_eq!(items.iter().filter(|i| i.key.name() == Some("header-1")).count(), 1);
    }

    #[test]
    fn header_is_pushed_by_the_next() {
        let node = sections().layout(SizeConstraint::loose(Size::new(300.0, f32::INFINITY)));
        let items = node.query(Rect::new(0.0, 980.0, 300.0, 400.0));
        assert_eq!(frame_of(&items, "header-1").map(|f| f.y), Some(960.0));
        assert_eq!(frame_of(&items, "header-2").map(|f| f.y), Some(1000.0));
    }

    #[test]
    fn layout_matches_plain_stack() {
        let c = SizeConstraint::loose(Size::new(300.0, f32::INFINITY));
        let node = sections().layout(c);
        assert_eq!(node.size(), Size::new(300.0, 1500.0));
        assert!(matches!(node.index(), Some(QueryIndex::Sticky { sticky, .. }) if sticky == &vec![0, 2, 4]));
    }
}
