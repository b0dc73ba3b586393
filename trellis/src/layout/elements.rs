//! Leaf and wrapper elements - Item, Spacer, Inset, SizeBox, Flexible.
//!
//! `Item` is the only renderable element; the others shape the space around
//! their child and disappear from query results.

use std::any::Any;
use std::sync::Arc;

use crate::axis::Axis;
use crate::diagnostics::{self, Misuse};
use crate::identity::{Identity, Key};
use crate::primitives::{Insets, Point, Size};

use super::component::{Component, Element, IntoElement, IntrinsicContent};
use super::constraints::SizeConstraint;
use super::length::{CrossAlignment, Flex, FlexHints, SizeStrategy};
use super::node::{LayoutNode, Leaf, Payload, TransitionKey};

// =========================================================================
// Item
// =========================================================================

/// A renderable leaf.
///
/// Its size comes from the intrinsic content provider, bounded by the
/// constraint. The key is what the reconciler tracks it by.
#[derive(Debug, Clone)]
pub struct Item {
    identity: Identity,
    content: Arc<dyn IntrinsicContent>,
    payload: Payload,
    transition: Option<TransitionKey>,
}

impl Item {
    /// A leaf with an explicit key.
    pub fn keyed(key: impl Into<Key>, content: impl IntrinsicContent + 'static) -> Self {
        Self::with_identity(Identity::Explicit(key.into()), content)
    }

    /// A leaf keyed by its position in the tree.
    ///
    /// Only stable while sibling order and count stay the same; prefer
    /// [`Item::keyed`] for anything that moves.
    pub fn positional(content: impl IntrinsicContent + 'static) -> Self {
        Self::with_identity(Identity::Positional, content)
    }

    fn with_identity(identity: Identity, content: impl IntrinsicContent + 'static) -> Self {
        Self {
            identity,
            content: Arc::new(content),
            payload: Payload::none(),
            transition: None,
        }
    }

    /// Attach host data (what to draw).
    pub fn payload<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.payload = Payload::new(value);
        self
    }

    /// Attach an already shared payload.
    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }

    /// Animate this leaf with a transition registered under `key`.
    pub fn transition(mut self, key: impl Into<TransitionKey>) -> Self {
        self.transition = Some(key.into());
        self
    }
}

impl Component for Item {
    fn layout(&self, constraint: SizeConstraint) -> LayoutNode {
        let measured = self.content.measure(constraint);
        let usable = |v: f32| v.is_finite() && v >= 0.0;
        let size = if usable(measured.width) && usable(measured.height) {
            measured
        } else {
            diagnostics::report(Misuse::NonFiniteSize {
                width: measured.width,
                height: measured.height,
            });
            let fix = |v: f32| if usable(v) { v } else { 0.0 };
            Size::new(fix(measured.width), fix(measured.height))
        };

        LayoutNode::leaf(
            constraint.bound(size),
            Leaf {
                identity: self.identity.clone(),
                payload: self.payload.clone(),
                transition: self.transition.clone(),
            },
        )
    }
}

// =========================================================================
// Spacer
// =========================================================================

/// A non-rendering box.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spacer {
    size: Size,
    flex: Option<Flex>,
}

impl Spacer {
    pub fn new(size: Size) -> Self {
        Self { size, flex: None }
    }

    /// A spacer that soaks up free space in a stack or flow.
    pub fn fill() -> Self {
        Self { size: Size::ZERO, flex: Some(Flex::FILL) }
    }
}

impl Component for Spacer {
    fn layout(&self, constraint: SizeConstraint) -> LayoutNode {
        LayoutNode::empty(constraint.bound(self.size))
    }

    fn flex_hints(&self) -> FlexHints {
        FlexHints { flex: self.flex, align_self: None }
    }
}

// =========================================================================
// Inset
// =========================================================================

/// Pads its child.
#[derive(Debug, Clone)]
pub struct Inset {
    insets: Insets,
    child: Element,
}

impl Inset {
    pub fn new(insets: Insets, child: impl IntoElement) -> Self {
        Self { insets, child: child.into_element() }
    }
}

impl Component for Inset {
    fn layout(&self, constraint: SizeConstraint) -> LayoutNode {
        let inner = self.child.layout(constraint.inset(self.insets));
        let padded = Size::new(
            inner.size().width + self.insets.horizontal(),
            inner.size().height + self.insets.vertical(),
        );
        let offset = Point::new(self.insets.left, self.insets.top);
        LayoutNode::wrap(constraint.bound(padded), inner, offset)
    }

    fn flex_hints(&self) -> FlexHints {
        self.child.flex_hints()
    }
}

// =========================================================================
// SizeBox
// =========================================================================

/// Overrides its child's width and height.
#[derive(Debug, Clone)]
pub struct SizeBox {
    width: SizeStrategy,
    height: SizeStrategy,
    child: Element,
}

impl SizeBox {
    pub fn new(child: impl IntoElement) -> Self {
        Self {
            width: SizeStrategy::Fit,
            height: SizeStrategy::Fit,
            child: child.into_element(),
        }
    }

    /// Fixed size on both axes.
    pub fn fixed(size: Size, child: impl IntoElement) -> Self {
        Self::new(child)
            .width(SizeStrategy::Absolute(size.width))
            .height(SizeStrategy::Absolute(size.height))
    }

    pub fn width(mut self, width: SizeStrategy) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: SizeStrategy) -> Self {
        self.height = height;
        self
    }
}

/// Resolve one axis. `None` means the child decides.
fn resolve(strategy: SizeStrategy, axis: Axis, max: f32) -> Option<f32> {
    match strategy {
        SizeStrategy::Fit => None,
        SizeStrategy::Absolute(v) if v >= 0.0 => Some(v),
        SizeStrategy::Absolute(v) => {
            diagnostics::report(Misuse::NegativeSize(v));
            Some(0.0)
        }
        SizeStrategy::Percentage(_) | SizeStrategy::Fill if !max.is_finite() => {
            diagnostics::report(Misuse::UnboundedFill(axis));
            None
        }
        SizeStrategy::Percentage(p) => Some(max * p.clamp(0.0, 1.0)),
        SizeStrategy::Fill => Some(max),
    }
}

impl Component for SizeBox {
    fn layout(&self, constraint: SizeConstraint) -> LayoutNode {
        let width = resolve(self.width, Axis::Horizontal, constraint.max.width);
        let height = resolve(self.height, Axis::Vertical, constraint.max.height);

        let range = |value: Option<f32>, min: f32, max: f32| match value {
            Some(v) => {
                let v = v.clamp(min, max);
                (v, v)
            }
            None => (min, max),
        };
        let (min_w, max_w) = range(width, constraint.min.width, constraint.max.width);
        let (min_h, max_h) = range(height, constraint.min.height, constraint.max.height);
        let inner = SizeConstraint::new(Size::new(min_w, min_h), Size::new(max_w, max_h));

        let node = self.child.layout(inner);
        let size = inner.bound(node.size());
        LayoutNode::wrap(size, node, Point::ORIGIN)
    }

    fn flex_hints(&self) -> FlexHints {
        self.child.flex_hints()
    }
}

// =========================================================================
// Flexible
// =========================================================================

/// Carries flex annotations into the stack or flow holding it.
#[derive(Debug, Clone)]
pub struct Flexible {
    child: Element,
    hints: FlexHints,
}

impl Flexible {
    pub fn new(flex: Flex, child: impl IntoElement) -> Self {
        Self {
            child: child.into_element(),
            hints: FlexHints { flex: Some(flex), align_self: None },
        }
    }

    /// `grow: 1`, no shrinking.
    pub fn fill(child: impl IntoElement) -> Self {
        Self::new(Flex::FILL, child)
    }

    pub fn align_self(mut self, alignment: CrossAlignment) -> Self {
        self.hints.align_self = Some(alignment);
        self
    }
}

impl Component for Flexible {
    fn layout(&self, constraint: SizeConstraint) -> LayoutNode {
        self.child.layout(constraint)
    }

    fn flex_hints(&self) -> FlexHints {
        self.hints
    }
}
