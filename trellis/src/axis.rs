//! Main/cross axis mapping.
//!
//! Every layout is written once against an [`Axis`]. `Horizontal` maps the main
//! axis to `x`/`width`, `Vertical` maps it to `y`/`height`; the cross axis is
//! the other one. Rows and columns are the same algorithm with a different
//! `Axis` value.

use serde::{Deserialize, Serialize};

use crate::primitives::{Point, Rect, Size};

/// The direction a layout arranges its children along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Axis {
    /// Main axis is `x`.
    Horizontal,
    /// Main axis is `y`.
    #[default]
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    #[inline]
    pub fn cross_axis(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    #[inline]
    pub fn main(self, point: Point) -> f32 {
        match self {
            Axis::Horizontal => point.x,
            Axis::Vertical => point.y,
        }
    }

    #[inline]
    pub fn cross(self, point: Point) -> f32 {
        match self {
            Axis::Horizontal => point.y,
            Axis::Vertical => point.x,
        }
    }

    #[inline]
    pub fn main_size(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    #[inline]
    pub fn cross_size(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.height,
            Axis::Vertical => size.width,
        }
    }

    /// Build a point from main/cross coordinates.
    #[inline]
    pub fn point(self, main: f32, cross: f32) -> Point {
        match self {
            Axis::Horizontal => Point::new(main, cross),
            Axis::Vertical => Point::new(cross, main),
        }
    }

    /// Build a size from main/cross extents.
    #[inline]
    pub fn size(self, main: f32, cross: f32) -> Size {
        match self {
            Axis::Horizontal => Size::new(main, cross),
            Axis::Vertical => Size::new(cross, main),
        }
    }

    /// Leading edge of `rect` along the main axis.
    #[inline]
    pub fn main_min(self, rect: &Rect) -> f32 {
        self.main(rect.origin())
    }

    /// Trailing edge of `rect` along the main axis.
    #[inline]
    pub fn main_max(self, rect: &Rect) -> f32 {
        self.main(rect.origin()) + self.main_size(rect.size())
    }

    #[inline]
    pub fn cross_min(self, rect: &Rect) -> f32 {
        self.cross(rect.origin())
    }

    #[inline]
    pub fn cross_max(self, rect: &Rect) -> f32 {
        self.cross(rect.origin()) + self.cross_size(rect.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_round_trip_through_accessors() {
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let p = axis.point(3.0, 7.0);
            assert_eq!(axis.main(p), 3.0);
            assert_eq!(axis.cross(p), 7.0);
            let s = axis.size(10.0, 20.0);
            assert_eq!(axis.main_size(s), 10.0);
            assert_eq!(axis.cross_size(s), 20.0);
        }
    }

    #[test]
    fn vertical_main_is_y() {
        let r = Rect::new(1.0, 2.0, 30.0, 40.0);
        assert_eq!(Axis::Vertical.main_min(&r), 2.0);
        assert_eq!(Axis::Vertical.main_max(&r), 42.0);
        assert_eq!(Axis::Vertical.cross_max(&r), 31.0);
        assert_eq!(Axis::Horizontal.main_max(&r), 31.0);
        assert_eq!(Axis::Horizontal.cross_axis(), Axis::Vertical);
    }
}
