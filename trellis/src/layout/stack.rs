//! Stack - children placed one after another along an axis.
//!
//! Supports flex sizing (grow, shrink, basis), spacing, main-axis
//! distribution, cross-axis alignment, and optional wrapping into lines.

use crate::axis::Axis;

use super::component::Component;
use super::constraints::SizeConstraint;
use super::length::{CrossAlignment, Distribution, Flex};
use super::lines::{Child, LineParams, layout_lines};
use super::node::LayoutNode;

/// A linear layout container.
#[derive(Debug, Clone, Default)]
pub struct Stack {
    axis: Axis,
    children: Vec<Child>,
    /// Spacing between adjacent children.
    spacing: f32,
    /// Main axis distribution.
    distribution: Distribution,
    /// Cross axis alignment.
    alignment: CrossAlignment,
    /// Break into lines at the main bound.
    wrap: bool,
    /// Distribution of the last line when wrapping.
    tail_distribution: Option<Distribution>,
    /// Always take the whole finite main bound.
    fill: bool,
}

impl Stack {
    pub fn new(axis: Axis) -> Self {
        Self { axis, ..Self::default() }
    }

    /// Children flow left to right.
    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// Children flow top to bottom.
    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    pub fn push(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Push a child with explicit flex.
    pub fn flexible(self, child: impl Into<Child>, flex: Flex) -> Self {
        self.push(child.into().flex(flex))
    }

    pub fn extend<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Child>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing.max(0.0);
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

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn tail_distribution(mut self, distribution: Distribution) -> Self {
        self.tail_distribution = Some(distribution);
        self
    }

    pub fn fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn line_params(&self) -> LineParams {
        LineParams {
            axis: self.axis,
            item_spacing: self.spacing,
            line_spacing: 0.0,
            distribution: self.distribution,
            tail_distribution: self.tail_distribution,
            alignment: self.alignment,
            line_distribution: Distribution::Start,
            wrap: self.wrap,
            fill: self.fill,
        }
    }
}

impl Component for Stack {
    fn layout(&self, constraint: SizeConstraint) -> LayoutNode {
        layout_lines(&self.line_params(), &self.children, constraint)
    }
}

// =========================================================================
// Tests
// =========================================================================
