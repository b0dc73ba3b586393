//! Flow - CSS flex-wrap style wrapping layout.
//!
//! Children are laid out along the flow axis until they exceed the main
//! bound, then wrap to the next line. Lines stack along the cross axis and
//! can be distributed there like items are within a line.

use crate::axis::Axis;

use super::component::Component;
use super::constraints::SizeConstraint;
use super::length::{CrossAlignment, Distribution};
use super::lines::{Child, LineParams, layout_lines};
use super::node::LayoutNode;

// =========================================================================
// Flow
// =========================================================================

/// A wrapping container.
#[derive(Debug, Clone, Default)]
pub struct Flow {
    axis: Axis,
    children: Vec<Child>,
    /// Spacing between items in a line.
    item_spacing: f32,
    /// Spacing between lines.
    line_spacing: f32,
    /// Distribution of items within a line.
    distribution: Distribution,
    /// Alignment of items within their line.
    alignment: CrossAlignment,
    /// Distribution of lines along the cross axis.
    line_distribution: Distribution,
    /// Distribution of the last line.
    tail_distribution: Option<Distribution>,
}

impl Flow {
    /// Create a flow along `axis` (lines wrap along the other axis).
    pub fn new(axis: Axis) -> Self {
        Self { axis, ..Self::default() }
    }

    /// Items run left to right, lines top to bottom.
    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// Items run top to bottom, lines left to right.
    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    pub fn push(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn extend<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Child>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Set spacing between items in a line.
    pub fn item_spacing(mut self, spacing: f32) -> Self {
        self.item_spacing = spacing.max(0.0);
        self
    }

    /// Set spacing between lines.
    pub fn line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = spacing.max(0.0);
        self
    }

    pub fn distribution(mut self, distribution: Distribution) -> Self {
        self.distribution = distribution;
        self
    }

    pub fn alignment(mut self, alignment: CrossAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn line_distribution(mut self, distribution: Distribution) -> Self {
        self.line_distribution = distribution;
        self
    }

    pub fn tail_distribution(mut self, distribution: Distribution) -> Self {
        self.tail_distribution = Some(distribution);
        self
    }
}

impl Component for Flow {
    fn layout(&self, constraint: SizeConstraint) -> LayoutNode {
        let params = LineParams {
            axis: self.axis,
            item_spacing: self.item_spacing,
            line_spacing: self.line_spacing,
            distribution: self.distribution,
            tail_distribution: self.tail_distribution,
            alignment: self.alignment,
            line_distribution: self.line_distribution,
            wrap: true,
            fill: false,
        };
        layout_lines(&params, &self.children, constraint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::elements::{Item, Spacer};
    use crate::layout::length::Flex;
    use crate::primitives::{Point, Size};

    fn chip(w: f32, h: f32) -> Spacer {
        Spacer::new(Size::new(w, h))
    }

    #[test]
    fn wraps_at_bound() {
        let flow = Flow::horizontal()
            .extend([chip(60.0, 20.0), chip(30.0, 10.0), chip(50.0, 20.0)])
            .item_spacing(5.0)
            .line_spacing(4.0);
        let node = flow.layout(SizeConstraint::loose(Size::new(100.0, 200.0)));
        assert_eq!(
            node.positions(),
            &[Point::new(0.0, 0.0), Point::new(65.0, 0.0), Point::new(0.0, 24.0)]
        );
        assert_eq!(node.size(), Size::new(95.0, 44.0));
    }

    #[test]
    fn items_align_within_their_line() {
        let flow = Flow::horizontal()
            .extend([chip(40.0, 30.0), chip(40.0, 10.0)])
            .alignment(CrossAlignment::Center);
        let node = flow.layout(SizeConstraint::loose(Size::new(100.0, 100.0)));
        assert_eq!(node.positions()[1], Point::new(40.0, 10.0));
    }

    #[test]
    fn line_distribution_spreads_lines() {
        let flow = Flow::horizontal()
            .extend([chip(80.0, 10.0), chip(80.0, 10.0)])
            .line_distribution(Distribution::SpaceBetween);
        let c = SizeConstraint::tight(Size::new(100.0, 100.0));
        let node = flow.layout(c);
        assert_eq!(node.positions()[1].y, 90.0);
    }

    #[test]
    fn single_line_honours_line_distribution() {
        let c = SizeConstraint::tight(Size::new(100.0, 100.0));
        let one = Flow::horizontal()
            .push(Item::keyed("a", Size::new(20.0, 10.0)))
            .line_distribution(Distribution::End)
            .layout(c);
        assert_eq!(one.positions()[0], Point::new(0.0, 90.0));

        let two = Flow::horizontal()
            .extend([chip(80.0, 10.0), chip(80.0, 10.0)])
            .line_distribution(Distribution::End)
            .layout(c);
        let ys: Vec<f32> = two.positions().iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![80.0, 90.0]);

        let centered = Flow::horizontal()
            .push(chip(20.0, 10.0))
            .line_distribution(Distribution::Center)
            .alignment(CrossAlignment::Center)
            .layout(c);
        assert_eq!(centered.positions()[0].y, 45.0);
    }

    #[test]
    fn grow_is_bounded_by_the_line() {
        let flow = Flow::horizontal()
            .push(chip(70.0, 10.0))
            .push(chip(20.0, 10.0))
            .push(Child::new(Item::keyed("g", Size::new(20.0, 10.0))).flex(Flex::FILL));
        let node = flow.layout(SizeConstraint::loose(Size::new(100.0, 100.0)));
        // The grower wraps onto its own line and fills it.
        assert_eq!(node.positions()[2], Point::new(0.0, 10.0));
        assert_eq!(node.children()[2].size().width, 100.0);
    }

    #[test]
    fn tail_line_distribution() {
        let flow = Flow::horizontal()
            .extend([chip(50.0, 10.0), chip(50.0, 10.0), chip(20.0, 10.0)])
            .tail_distribution(Distribution::Center);
        let node = flow.layout(SizeConstraint::loose(Size::new(100.0, 100.0)));
        assert_eq!(node.positions()[2], Point::new(40.0, 10.0));
    }
}
