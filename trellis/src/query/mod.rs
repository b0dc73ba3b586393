//! Spatial queries over a geometry tree.
//!
//! Given a laid-out tree and a rectangle, return exactly the renderable leaves
//! whose frame intersects the rectangle, with frames translated into the
//! root's coordinate space. Only intersecting subtrees are visited.
//!
//! Each container carries the [`QueryIndex`] its layout chose:
//!
//! - `Ordered`: children are sorted along one axis; a binary search finds the
//!   first candidate and the scan stops at the first child past the query
//!   rect. O(log n + k).
//! - `Unordered`: every child is tested. O(n).
//! - `Sticky`: an ordered stack whose sticky children pin to the viewport's
//!   leading edge.
//!
//! Results come out in child order (depth first) whichever index is used, so
//! repeated queries of the same tree are stable and the reconciler's diff is
//! deterministic.

mod ordered;
mod shared;
mod sticky;

pub use shared::SharedLayout;

use crate::axis::Axis;
use crate::identity::{Key, KeyPath};
use crate::layout::node::{LayoutNode, NodeKind, Payload, TransitionKey};
use crate::primitives::{Insets, Point, Rect};

/// Spatial index strategy of a container node.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryIndex {
    /// Children's leading edges along `axis` are non-decreasing.
    /// `max_extent` is the largest child extent along `axis`.
    Ordered { axis: Axis, max_extent: f32 },
    /// No ordering guarantee.
    Unordered,
    /// Stack with pinned headers at the listed child indexes (ascending).
    Sticky {
        axis: Axis,
        max_extent: f32,
        sticky: Vec<usize>,
        sorted: bool,
    },
}

impl QueryIndex {
    /// Pick `Ordered` along `axis` when the data allows it.
    pub fn along(axis: Axis, children: &[LayoutNode], positions: &[Point]) -> Self {
        if is_sorted_along(axis, positions) {
            QueryIndex::Ordered {
                axis,
                max_extent: max_extent(axis, children),
            }
        } else {
            QueryIndex::Unordered
        }
    }

    /// Sticky index for a stack along `axis`.
    pub fn sticky(axis: Axis, children: &[LayoutNode], positions: &[Point], mut sticky: Vec<usize>) -> Self {
        sticky.sort_unstable();
        sticky.dedup();
        sticky.retain(|&i| i < children.len());
        QueryIndex::Sticky {
            axis,
            max_extent: max_extent(axis, children),
            sticky,
            sorted: is_sorted_along(axis, positions),
        }
    }
}

fn is_sorted_along(axis: Axis, positions: &[Point]) -> bool {
    positions.windows(2).all(|w| axis.main(w[0]) <= axis.main(w[1]))
}

fn max_extent(axis: Axis, children: &[LayoutNode]) -> f32 {
    children
        .iter()
        .map(|c| axis.main_size(c.size()))
        .fold(0.0, f32::max)
}

/// A leaf returned by a query.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderItem {
    pub key: Key,
    /// Frame in the root's coordinate space.
    pub frame: Rect,
    pub transition: Option<TransitionKey>,
    pub payload: Payload,
}

/// The area a hosting surface wants materialized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// What is actually on screen. Sticky headers pin to this.
    pub visible: Rect,
    /// Extra area to materialize around `visible`.
    pub overscan: Insets,
}

impl Viewport {
    pub fn new(visible: Rect) -> Self {
        Self { visible, overscan: Insets::ZERO }
    }

    pub fn with_overscan(mut self, overscan: Insets) -> Self {
        self.overscan = overscan;
        self
    }

    /// The rectangle leaves are tested against.
    pub fn query_rect(&self) -> Rect {
        self.visible.outset(self.overscan)
    }
}

/// Per-query state threaded through the recursion.
struct Query {
    /// Test rect, root coordinates.
    rect: Rect,
    /// Pin rect for sticky headers, root coordinates.
    pin: Rect,
    /// Ignore ordered indexes (cross-checking).
    linear: bool,
}

impl LayoutNode {
    /// Leaves intersecting `rect` (root coordinates).
    pub fn query(&self, rect: Rect) -> Vec<RenderItem> {
        self.run(Query { rect, pin: rect, linear: false })
    }

    /// Leaves intersecting the viewport's overscanned rect; sticky headers
    /// pin against the visible rect.
    pub fn query_viewport(&self, viewport: &Viewport) -> Vec<RenderItem> {
        self.run(Query {
            rect: viewport.query_rect(),
            pin: viewport.visible,
            linear: false,
        })
    }

    /// Same as [`query`](Self::query) but scans every child linearly.
    pub fn query_unordered(&self, rect: Rect) -> Vec<RenderItem> {
        self.run(Query { rect, pin: rect, linear: true })
    }

    fn run(&self, query: Query) -> Vec<RenderItem> {
        let mut out = Vec::new();
        let root = Rect::from_origin_size(Point::ORIGIN, self.size());
        if !self.is_leaf() || root.intersects(&query.rect) {
            collect(self, Point::ORIGIN, KeyPath::ROOT, &query, &mut out);
        }
        tracing::trace!(hits = out.len(), rect = ?query.rect, "query");
        out
    }
}

/// Collect leaves under `node`, which sits at `origin` (root coordinates) and
/// is already known to intersect the query.
fn collect(node: &LayoutNode, origin: Point, path: KeyPath, query: &Query, out: &mut Vec<RenderItem>) {
    let index = match node.kind() {
        NodeKind::Leaf(leaf) => {
            out.push(RenderItem {
                key: leaf.identity.resolve(path),
                frame: Rect::from_origin_size(origin, node.size()),
                transition: leaf.transition.clone(),
                payload: leaf.payload.clone(),
            });
            return;
        }
        NodeKind::Container(index) => index,
    };

    let local = query.rect.translate(Point::ORIGIN - origin);
    let descend = |i: usize, at: Point, out: &mut Vec<RenderItem>| {
        collect(&node.children()[i], origin + at, path.child(i), query, out);
    };

    match index {
        QueryIndex::Ordered { axis, max_extent } if !query.linear => {
            for i in ordered::hits(node, *axis, *max_extent, &local) {
                descend(i, node.positions()[i], out);
            }
        }
        QueryIndex::Sticky { axis, max_extent, sticky, sorted } => {
            let pin = query.pin.translate(Point::ORIGIN - origin);
            let header = sticky::pinned_header(node, *axis, sticky, *sorted, &pin);
            let skip = header.map(|(i, _)| i);
            let hits = if *sorted && !query.linear {
                ordered::hits(node, *axis, *max_extent, &local)
            } else {
                linear_hits(node, &local)
            };
            for i in hits.into_iter().filter(|&i| Some(i) != skip) {
                descend(i, node.positions()[i], out);
            }
            // The pinned header draws over the items it overlaps.
            if let Some((i, at)) = header {
                let frame = Rect::from_origin_size(at, node.children()[i].size());
                if frame.intersects(&local) {
                    descend(i, at, out);
                }
            }
        }
        _ => {
            for i in linear_hits(node, &local) {
                descend(i, node.positions()[i], out);
            }
        }
    }
}

/// Indexes of children whose frame intersects `local`, by full scan.
fn linear_hits(node: &LayoutNode, local: &Rect) -> Vec<usize> {
    (0..node.children().len())
        .filter(|&i| node.frame_of(i).intersects(local))
        .collect()
}
