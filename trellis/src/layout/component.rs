//! The component contract.
//!
//! A component is an immutable description of what to lay out. Laying it out
//! under a constraint produces a [`LayoutNode`]; nothing else is observable.
//! Implementations read only their own data and the constraint, so a tree of
//! components can be laid out on any thread, and two calls with equal inputs
//! produce equal trees.

use std::fmt;
use std::sync::Arc;

use super::constraints::SizeConstraint;
use super::length::FlexHints;
use super::node::LayoutNode;
use crate::primitives::Size;

/// Anything that can be laid out.
pub trait Component: Send + Sync + fmt::Debug {
    /// Resolve this component under `constraint`.
    ///
    /// The returned node's size must satisfy `constraint.bound(size) == size`.
    /// [`Page`](super::placement::Page) is the one exception: its main size
    /// spans every page, so it is scroll content rather than a bounded box.
    fn layout(&self, constraint: SizeConstraint) -> LayoutNode;

    /// Flex annotations picked up when this component is pushed into a
    /// stack or flow.
    fn flex_hints(&self) -> FlexHints {
        FlexHints::default()
    }
}

/// A shared, type-erased component. Cheap to clone; subtrees are shared.
pub type Element = Arc<dyn Component>;

/// Conversion into an [`Element`].
pub trait IntoElement {
    fn into_element(self) -> Element;
}

impl<C: Component + 'static> IntoElement for C {
    fn into_element(self) -> Element {
        Arc::new(self)
    }
}

impl IntoElement for Element {
    fn into_element(self) -> Element {
        self
    }
}

/// Intrinsic content measurement, supplied by the host (text shaping, image
/// decoding). Called by leaf components.
pub trait IntrinsicContent: Send + Sync + fmt::Debug {
    fn measure(&self, constraint: SizeConstraint) -> Size;
}

/// Fixed intrinsic size.
impl IntrinsicContent for Size {
    fn measure(&self, _constraint: SizeConstraint) -> Size {
        *self
    }
}

/// Measurement from a closure.
pub struct MeasureFn<F>(pub F);

impl<F> IntrinsicContent for MeasureFn<F>
where
    F: Fn(SizeConstraint) -> Size + Send + Sync,
{
    fn measure(&self, constraint: SizeConstraint) -> Size {
        (self.0)(constraint)
    }
}

impl<F> fmt::Debug for MeasureFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MeasureFn(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_fn_sees_constraint() {
        // Text-like content: wraps to the available width at 10pt per char.
        let text = MeasureFn(|c: SizeConstraint| {
            let chars = 25.0f32;
            let width = (chars * 10.0).min(c.max.width);
            let lines = (chars * 10.0 / width).ceil();
            Size::new(width, lines * 18.0)
        });
        let narrow = text.measure(SizeConstraint::loose(Size::new(100.0, f32::INFINITY)));
        assert_eq!(narrow, Size::new(100.0, 54.0));
        let wide = text.measure(SizeConstraint::UNBOUNDED);
        assert_eq!(wide, Size::new(250.0, 18.0));
    }
}
