//! Waterfall - masonry-style balanced columns.
//!
//! Each child goes into the currently shortest column (lowest index on ties).
//! This is a greedy heuristic, not a globally optimal balancing: column
//! heights end up within one child extent (plus spacing) of each other, but a
//! different input order can produce a better packing.

use crate::axis::Axis;
use crate::diagnostics::{self, Misuse};

use super::component::{Component, Element, IntoElement};
use super::constraints::SizeConstraint;
use super::length::CrossAlignment;
use super::node::LayoutNode;

/// Masonry grid of `columns` columns that grow along `axis`.
#[derive(Debug, Clone)]
pub struct Waterfall {
    axis: Axis,
    columns: usize,
    spacing: f32,
    alignment: CrossAlignment,
    children: Vec<Element>,
}

impl Waterfall {
    pub fn new(axis: Axis, columns: usize) -> Self {
        Self {
            axis,
            columns,
            spacing: 0.0,
            alignment: CrossAlignment::Stretch,
            children: Vec::new(),
        }
    }

    /// Columns side by side, growing downwards.
    pub fn vertical(columns: usize) -> Self {
        Self::new(Axis::Vertical, columns)
    }

    /// Rows stacked, growing rightwards.
    pub fn horizontal(columns: usize) -> Self {
        Self::new(Axis::Horizontal, columns)
    }

    /// Spacing between columns and between items in a column.
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing.max(0.0);
        self
    }

    /// Placement of an item within its column's width. Defaults to stretch.
    pub fn alignment(mut self, alignment: CrossAlignment) -> Self {
        self.alignment = alignment;
        self
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

    fn column_count(&self) -> usize {
        if self.columns == 0 {
            diagnostics::report(Misuse::ZeroColumns);
            1
        } else {
            self.columns
        }
    }
}

impl Component for Waterfall {
    fn layout(&self, constraint: SizeConstraint) -> LayoutNode {
        let axis = self.axis;
        let k = self.column_count();
        let cross_max = constraint.cross_max(axis);

        let column_width = if cross_max.is_finite() {
            ((cross_max - (k - 1) as f32 * self.spacing) / k as f32).max(0.0)
        } else {
            diagnostics::report(Misuse::UnboundedColumns);
            let natural = SizeConstraint::UNBOUNDED;
            self.children
                .iter()
                .map(|c| axis.cross_size(c.layout(natural).size()))
                .fold(0.0, f32::max)
        };

        let child_constraint = match self.alignment {
            CrossAlignment::Stretch => {
                SizeConstraint::from_axis(axis, (0.0, f32::INFINITY), (column_width, column_width))
            }
            _ => SizeConstraint::from_axis(axis, (0.0, f32::INFINITY), (0.0, column_width)),
        };

        let mut heights = vec![0.0f32; k];
        let mut filled = vec![false; k];
        let mut nodes = Vec::with_capacity(self.children.len());
        let mut positions = Vec::with_capacity(self.children.len());

        for child in &self.children {
            let node = child.layout(child_constraint);
            let column = shortest(&heights);
            let cross = column as f32 * (column_width + self.spacing)
                + self.alignment.offset(column_width, axis.cross_size(node.size()));
            positions.push(axis.point(heights[column], cross));
            heights[column] += axis.main_size(node.size()) + self.spacing;
            filled[column] = true;
            nodes.push(node);
        }

        let main = heights
            .iter()
            .zip(&filled)
            .map(|(h, &f)| if f { h - self.spacing } else { 0.0 })
            .fold(0.0, f32::max);
        let cross = k as f32 * column_width + (k - 1) as f32 * self.spacing;
        let size = constraint.bound(axis.size(main, cross));

        tracing::trace!(?size, columns = k, column_width, "waterfall layout");
        LayoutNode::ordered(size, nodes, positions, axis)
    }
}

/// Index of the shortest column, lowest index on ties.
fn shortest(heights: &[f32]) -> usize {
    let mut best = 0;
    for (i, &h) in heights.iter().enumerate().skip(1) {
        if h < heights[best] {
            best = i;
        }
    }
    best
}

impl Default for Waterfall {
    fn default() -> Self {
        Self::vertical(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::elements::Spacer;
    use crate::primitives::{Point, Size};

    fn column_of(node: &LayoutNode, column_width: f32, spacing: f32) -> Vec<usize> {
        node.positions()
            .iter()
            .map(|p| (p.x / (column_width + spacing)).floor() as usize)
            .collect()
    }

    fn tile(h: f32) -> Spacer {
        Spacer::new(Size::new(0.0, h))
    }

    #[test]
    fn shortest_column_wins() {
        let wf = Waterfall::vertical(2).extend([60.0, 80.0, 70.0, 90.0].map(tile));
        let node = wf.layout(SizeConstraint::loose(Size::new(200.0, f32::INFINITY)));
        assert_eq!(column_of(&node, 100.0, 0.0), vec![0, 1, 0, 1]);
        assert_eq!(node.positions()[2], Point::new(0.0, 60.0));
        assert_eq!(node.positions()[3], Point::new(100.0, 80.0));
        assert_eq!(node.size(), Size::new(200.0, 170.0));
    }

    #[test]
    fn ties_go_to_lowest_index() {
        assert_eq!(shortest(&[10.0, 5.0, 5.0]), 1);
        assert_eq!(shortest(&[0.0, 0.0]), 0);
    }

    #[test]
    fn spacing_between_columns_and_items() {
        let wf = Waterfall::vertical(3).spacing(10.0).extend([50.0, 50.0, 50.0, 20.0].map(tile));
        let node = wf.layout(SizeConstraint::loose(Size::new(320.0, f32::INFINITY)));
        // Column width (320 - 20) / 3 = 100.
        assert_eq!(node.positions()[1].x, 110.0);
        assert_eq!(node.positions()[3], Point::new(0.0, 60.0));
        assert_eq!(node.children()[0].size().width, 100.0);
        assert_eq!(node.size().height, 80.0);
    }

    #[test]
    fn alignment_within_column() {
        let wf = Waterfall::vertical(2)
            .alignment(CrossAlignment::Center)
            .push(Spacer::new(Size::new(40.0, 10.0)));
        let node = wf.layout(SizeConstraint::loose(Size::new(200.0, 100.0)));
        assert_eq!(node.positions()[0].x, 30.0);
    }

    #[cfg(not(feature = "strict"))]
    #[test]
    fn zero_columns_behaves_as_one() {
        let wf = Waterfall::vertical(0).extend([10.0, 20.0].map(tile));
        let node = wf.layout(SizeConstraint::loose(Size::new(50.0, f32::INFINITY)));
        assert_eq!(node.positions()[1], Point::new(0.0, 10.0));
    }
}
