//! Size constraints for constraint-based layout.
//!
//! Constraints flow down the component tree, specifying the min/max bounds
//! that a component can occupy. A max of `f32::INFINITY` means the axis is
//! unbounded; it is a sentinel, never treated as a large number.

use thiserror::Error;

use crate::axis::Axis;
use crate::primitives::{Insets, Size};

/// Rejected min/max pair.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConstraintError {
    #[error("constraint min {min:?} exceeds max {max:?}")]
    MinExceedsMax { min: Size, max: Size },

    #[error("constraint has a negative or NaN component (min {min:?}, max {max:?})")]
    Degenerate { min: Size, max: Size },

    #[error("constraint min must be finite, got {0:?}")]
    InfiniteMin(Size),
}

/// Constraints passed down to children during layout, similar to Flutter's
/// `BoxConstraints`.
///
/// Invariant: `0 <= min <= max` componentwise. Values are created per layout
/// call and never shared beyond one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeConstraint {
    pub min: Size,
    pub max: Size,
}

impl SizeConstraint {
    /// Zero min, infinite max.
    pub const UNBOUNDED: Self = Self {
        min: Size::ZERO,
        max: Size::new(f32::INFINITY, f32::INFINITY),
    };

    /// Create a constraint, repairing an invalid pair.
    ///
    /// Invalid input is a programmer error: it asserts in debug builds and
    /// clamps (min into `[0, max]`) in release builds.
    pub fn new(min: Size, max: Size) -> Self {
        match Self::try_new(min, max) {
            Ok(c) => c,
            Err(err) => {
                debug_assert!(false, "{err}");
                let max = max.sanitized();
                let min = min.sanitized();
                Self {
                    min: Size::new(min.width.min(max.width), min.height.min(max.height)),
                    max,
                }
            }
        }
    }

    /// Create a constraint, rejecting an invalid pair.
    pub fn try_new(min: Size, max: Size) -> Result<Self, ConstraintError> {
        if !min.is_sane() || !max.is_sane() {
            return Err(ConstraintError::Degenerate { min, max });
        }
        if !min.width.is_finite() || !min.height.is_finite() {
            return Err(ConstraintError::InfiniteMin(min));
        }
        if min.width > max.width || min.height > max.height {
            return Err(ConstraintError::MinExceedsMax { min, max });
        }
        Ok(Self { min, max })
    }

    /// Exact size required.
    #[inline]
    pub fn tight(size: Size) -> Self {
        let size = size.sanitized();
        Self { min: size, max: size }
    }

    /// Anything from zero up to `max`.
    #[inline]
    pub fn loose(max: Size) -> Self {
        Self { min: Size::ZERO, max: max.sanitized() }
    }

    /// Tighten to `size`, clamped into the current bounds.
    pub fn tighten(&self, size: Size) -> Self {
        let size = self.bound(size);
        Self { min: size, max: size }
    }

    /// Shrink by insets.
    ///
    /// Max shrinks (never below zero, infinity stays infinite); min only
    /// shrinks where it would otherwise exceed the new max.
    pub fn inset(&self, insets: Insets) -> Self {
        let max = Size::new(
            (self.max.width - insets.horizontal()).max(0.0),
            (self.max.height - insets.vertical()).max(0.0),
        );
        let min = Size::new(self.min.width.min(max.width), self.min.height.min(max.height));
        Self { min, max }
    }

    /// Swap width and height of both bounds.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self {
            min: Size::new(self.min.height, self.min.width),
            max: Size::new(self.max.height, self.max.width),
        }
    }

    /// Clamp a size into these bounds componentwise.
    ///
    /// NaN and negative components are treated as zero first.
    #[inline(always)]
    pub fn bound(&self, size: Size) -> Size {
        let size = size.sanitized();
        Size {
            width: size.width.clamp(self.min.width, self.max.width),
            height: size.height.clamp(self.min.height, self.max.height),
        }
    }

    /// Whether `size` already satisfies these bounds.
    pub fn contains(&self, size: Size) -> bool {
        size.width >= self.min.width
            && size.width <= self.max.width
            && size.height >= self.min.height
            && size.height <= self.max.height
    }

    /// Whether these are tight constraints (min == max).
    #[inline]
    pub fn is_tight(&self) -> bool {
        self.min == self.max
    }

    #[inline]
    pub fn is_bounded(&self, axis: Axis) -> bool {
        axis.main_size(self.max).is_finite()
    }

    #[inline]
    pub fn main_max(&self, axis: Axis) -> f32 {
        axis.main_size(self.max)
    }

    #[inline]
    pub fn main_min(&self, axis: Axis) -> f32 {
        axis.main_size(self.min)
    }

    #[inline]
    pub fn cross_max(&self, axis: Axis) -> f32 {
        axis.cross_size(self.max)
    }

    #[inline]
    pub fn cross_min(&self, axis: Axis) -> f32 {
        axis.cross_size(self.min)
    }

    /// Build from main/cross ranges.
    #[inline]
    pub fn from_axis(axis: Axis, main: (f32, f32), cross: (f32, f32)) -> Self {
        Self::new(axis.size(main.0, cross.0), axis.size(main.1, cross.1))
    }

    /// Replace the main-axis range, keeping the cross range.
    pub fn with_main(&self, axis: Axis, min: f32, max: f32) -> Self {
        Self::from_axis(
            axis,
            (min, max),
            (self.cross_min(axis), self.cross_max(axis)),
        )
    }

    /// Replace the cross-axis range, keeping the main range.
    pub fn with_cross(&self, axis: Axis, min: f32, max: f32) -> Self {
        Self::from_axis(
            axis,
            (self.main_min(axis), self.main_max(axis)),
            (min, max),
        )
    }
}

impl Default for SizeConstraint {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}
