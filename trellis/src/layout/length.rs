//! Distribution, alignment and sizing vocabulary shared by the layouts.

use serde::{Deserialize, Serialize};

/// How free space on an axis is distributed between items (or lines).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Distribution {
    /// Pack items at the start.
    #[default]
    Start,
    /// Pack items at the end.
    End,
    /// Center items.
    Center,
    /// First and last item touch the edges; free space goes between items.
    SpaceBetween,
    /// Equal space around each item (half-size gaps at the edges).
    SpaceAround,
    /// Equal space between items and at both edges.
    SpaceEvenly,
}

impl Distribution {
    /// Leading offset and effective gap for `count` items.
    ///
    /// `slack` is the free space left after the items and the base `spacing`.
    pub fn offsets(self, slack: f32, spacing: f32, count: usize) -> (f32, f32) {
        let slack = slack.max(0.0);
        let n = count as f32;
        match self {
            Distribution::Start => (0.0, spacing),
            Distribution::End => (slack, spacing),
            Distribution::Center => (slack / 2.0, spacing),
            Distribution::SpaceBetween => {
                if count > 1 {
                    (0.0, spacing + slack / (n - 1.0))
                } else {
                    (0.0, spacing)
                }
            }
            Distribution::SpaceAround => {
                if count > 0 {
                    (slack / n / 2.0, spacing + slack / n)
                } else {
                    (0.0, spacing)
                }
            }
            Distribution::SpaceEvenly => (slack / (n + 1.0), spacing + slack / (n + 1.0)),
        }
    }
}

/// Alignment on the cross axis (perpendicular to flow).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossAlignment {
    #[default]
    Start,
    End,
    Center,
    /// Fill the cross axis; the child is re-laid out at the cross size.
    Stretch,
}

impl CrossAlignment {
    /// Offset of a child of `child` extent inside `available` cross space.
    #[inline]
    pub fn offset(self, available: f32, child: f32) -> f32 {
        match self {
            CrossAlignment::Start | CrossAlignment::Stretch => 0.0,
            CrossAlignment::End => available - child,
            CrossAlignment::Center => (available - child) / 2.0,
        }
    }
}

/// Sizing strategy for one axis of a [`SizeBox`](super::elements::SizeBox) wrapper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum SizeStrategy {
    /// Use the child's own size.
    #[default]
    Fit,
    /// Fixed size.
    Absolute(f32),
    /// Fraction (0.0..=1.0) of the available max.
    Percentage(f32),
    /// All of the available max.
    Fill,
}

/// Flex annotations for stack and flow children.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Flex {
    /// Share of positive free space.
    pub grow: f32,
    /// Share of a space deficit.
    pub shrink: f32,
    /// Main-axis size used instead of the measured one, before growing.
    pub basis: Option<f32>,
}

impl Flex {
    /// `grow: 1`, no shrinking.
    pub const FILL: Flex = Flex { grow: 1.0, shrink: 0.0, basis: None };

    pub fn grow(grow: f32) -> Self {
        Self { grow, shrink: 0.0, basis: None }
    }

    pub fn shrink(shrink: f32) -> Self {
        Self { grow: 0.0, shrink, basis: None }
    }

    pub fn with_basis(mut self, basis: f32) -> Self {
        self.basis = Some(basis);
        self
    }

    pub fn is_flexible(&self) -> bool {
        self.grow > 0.0 || self.shrink > 0.0
    }
}

impl Default for Flex {
    /// Grows and shrinks with weight 1.
    fn default() -> Self {
        Self { grow: 1.0, shrink: 1.0, basis: None }
    }
}

/// Flex annotations a component carries into the stack or flow holding it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlexHints {
    pub flex: Option<Flex>,
    pub align_self: Option<CrossAlignment>,
}
