//! Line engine shared by [`Stack`](super::stack::Stack) and
//! [`Flow`](super::flow::Flow).
//!
//! Children are measured once with an unbounded main axis, broken into lines
//! (one line unless wrapping), flexed within each line, then distributed
//! along the main axis and aligned on the cross axis. Lines stack along the
//! cross axis.

use std::ops::Range;

use crate::axis::Axis;
use crate::diagnostics::{self, Misuse};
use crate::primitives::Point;

use super::component::{Component, Element, IntoElement};
use super::constraints::SizeConstraint;
use super::flex::{FlexInput, distribute_flex, total_weight};
use super::length::{CrossAlignment, Distribution, Flex, FlexHints};
use super::node::LayoutNode;

// =========================================================================
// Child
// =========================================================================

/// A stack or flow child with its flex annotations.
#[derive(Debug, Clone)]
pub struct Child {
    pub element: Element,
    pub flex: Option<Flex>,
    pub align_self: Option<CrossAlignment>,
}

impl Child {
    /// Wrap an element, picking up the flex hints it carries.
    pub fn new(element: impl IntoElement) -> Self {
        let element = element.into_element();
        let FlexHints { flex, align_self } = element.flex_hints();
        Self { element, flex, align_self }
    }

    pub fn flex(mut self, flex: Flex) -> Self {
        self.flex = Some(flex);
        self
    }

    pub fn align_self(mut self, alignment: CrossAlignment) -> Self {
        self.align_self = Some(alignment);
        self
    }
}

impl<C: Component + 'static> From<C> for Child {
    fn from(component: C) -> Self {
        Child::new(component)
    }
}

impl From<Element> for Child {
    fn from(element: Element) -> Self {
        Child::new(element)
    }
}

// =========================================================================
// Line layout
// =========================================================================

/// Parameters of one line layout pass.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LineParams {
    pub axis: Axis,
    pub item_spacing: f32,
    pub line_spacing: f32,
    pub distribution: Distribution,
    /// Distribution of the final line when wrapping.
    pub tail_distribution: Option<Distribution>,
    pub alignment: CrossAlignment,
    /// Distribution of lines along the cross axis.
    pub line_distribution: Distribution,
    pub wrap: bool,
    /// Take the whole finite main bound.
    pub fill: bool,
}

struct Measured {
    node: LayoutNode,
    input: FlexInput,
    align: CrossAlignment,
}

pub(crate) fn layout_lines(params: &LineParams, children: &[Child], constraint: SizeConstraint) -> LayoutNode {
    let axis = params.axis;
    let main_max = constraint.main_max(axis);
    let cross_max = constraint.cross_max(axis);
    let bounded = main_max.is_finite();

    // Pass 1: measure with an unbounded main axis.
    let measure = SizeConstraint::from_axis(axis, (0.0, f32::INFINITY), (0.0, cross_max));
    let mut items: Vec<Measured> = children
        .iter()
        .map(|child| {
            let node = child.element.layout(measure);
            Measured {
                input: FlexInput::new(axis.main_size(node.size()), child.flex),
                node,
                align: child.align_self.unwrap_or(params.alignment),
            }
        })
        .collect();

    let inputs: Vec<FlexInput> = items.iter().map(|m| m.input).collect();
    if !bounded && total_weight(&inputs) > 0.0 {
        diagnostics::report(Misuse::FlexInUnboundedAxis(axis));
    }

    let naturals: Vec<f32> = inputs.iter().map(FlexInput::natural).collect();
    let lines = if params.wrap && bounded {
        break_lines(&naturals, params.item_spacing, main_max)
    } else {
        vec![0..items.len()]
    };

    // Pass 2: flex within each line and re-lay out resized children.
    let mut grew = false;
    for line in &lines {
        let line_inputs = &inputs[line.clone()];
        let spacing = params.item_spacing * line.len().saturating_sub(1) as f32;
        let sizes = if bounded && total_weight(line_inputs) > 0.0 {
            distribute_flex(line_inputs, main_max - spacing)
        } else {
            naturals[line.clone()].to_vec()
        };

        for (i, size) in line.clone().zip(sizes) {
            let item = &mut items[i];
            grew |= size > item.input.natural();
            if item.input.is_flex() && size != axis.main_size(item.node.size()) {
                let tight = SizeConstraint::from_axis(axis, (size, size), (0.0, cross_max));
                item.node = children[i].element.layout(tight);
            }
        }
    }

    let line_main = |line: &Range<usize>| -> f32 {
        let items_main: f32 = items[line.clone()].iter().map(|m| axis.main_size(m.node.size())).sum();
        items_main + params.item_spacing * line.len().saturating_sub(1) as f32
    };
    let line_cross = |line: &Range<usize>| -> f32 {
        items[line.clone()]
            .iter()
            .map(|m| axis.cross_size(m.node.size()))
            .fold(0.0, f32::max)
    };

    // Container size.
    let mains: Vec<f32> = lines.iter().map(line_main).collect();
    let content_main = mains.iter().copied().fold(0.0, f32::max);
    let wants_bound = params.fill
        || grew
        || params.distribution != Distribution::Start
        || (params.wrap && params.tail_distribution.is_some_and(|d| d != Distribution::Start));
    let main = if bounded && wants_bound { main_max } else { content_main };

    let breadths: Vec<f32> = lines.iter().map(line_cross).collect();
    let content_cross =
        breadths.iter().sum::<f32>() + params.line_spacing * lines.len().saturating_sub(1) as f32;

    let size = constraint.bound(axis.size(main, content_cross));
    let final_main = axis.main_size(size);
    let final_cross = axis.cross_size(size);

    // Pass 3: distribute lines, then items within each line.
    // A non-wrapping stack's only line spans the whole cross extent; wrapped
    // lines are placed by the line distribution however many there are.
    let single = lines.len() == 1;
    let spans_cross = single && !params.wrap;
    let (mut cross_cursor, line_gap) = if spans_cross {
        (0.0, 0.0)
    } else {
        params.line_distribution
            .offsets(final_cross - content_cross, params.line_spacing, lines.len())
    };

    let mut positions = vec![Point::ORIGIN; items.len()];
    let last = lines.len() - 1;
    for (l, line) in lines.iter().enumerate() {
        let breadth = if spans_cross { final_cross } else { breadths[l] };
        let distribution = match params.tail_distribution {
            Some(tail) if params.wrap && l == last => tail,
            _ => params.distribution,
        };
        let (mut cursor, gap) =
            distribution.offsets(final_main - mains[l], params.item_spacing, line.len());

        for i in line.clone() {
            let item = &mut items[i];
            let node_main = axis.main_size(item.node.size());
            if item.align == CrossAlignment::Stretch && axis.cross_size(item.node.size()) != breadth {
                let tight = SizeConstraint::from_axis(axis, (node_main, node_main), (breadth, breadth));
                item.node = children[i].element.layout(tight);
            }
            let cross = cross_cursor + item.align.offset(breadth, axis.cross_size(item.node.size()));
            positions[i] = axis.point(cursor, cross);
            cursor += node_main + gap;
        }
        cross_cursor += breadth + line_gap;
    }

    tracing::trace!(?size, lines = lines.len(), "line layout");

    let index_axis = if single { axis } else { axis.cross_axis() };
    let nodes = items.into_iter().map(|m| m.node).collect();
    LayoutNode::ordered(size, nodes, positions, index_axis)
}

/// Greedy line breaking: a child starts a new line when it would push a
/// non-empty line past `main_max`.
fn break_lines(naturals: &[f32], spacing: f32, main_max: f32) -> Vec<Range<usize>> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut extent = 0.0;
    for (i, &natural) in naturals.iter().enumerate() {
        if i == start {
            extent = natural;
        } else if extent + spacing + natural > main_max {
            lines.push(start..i);
            start = i;
            extent = natural;
        } else {
            extent += spacing + natural;
        }
    }
    lines.push(start..naturals.len());
    lines
}
