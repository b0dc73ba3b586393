//! Flex distribution shared by stacks and flows.
//!
//! Axis-agnostic: callers pass main-axis sizes in and get main-axis sizes
//! back. The key function is [`distribute_flex`], which grows flexible items
//! into free space by grow weight, or takes a deficit back by shrink weight
//! without ever producing a negative size.

use super::length::Flex;

/// Input for flex distribution: a rigid size or a flexible one.
#[derive(Debug, Clone, Copy)]
pub enum FlexInput {
    /// Rigid child (already measured).
    Fixed(f32),
    /// Flexible child with its natural (or basis) size.
    Flex { natural: f32, flex: Flex },
}

impl FlexInput {
    pub fn new(natural: f32, flex: Option<Flex>) -> Self {
        match flex {
            Some(flex) if flex.is_flexible() => FlexInput::Flex {
                natural: flex.basis.unwrap_or(natural).max(0.0),
                flex,
            },
            _ => FlexInput::Fixed(natural),
        }
    }

    pub fn natural(&self) -> f32 {
        match *self {
            FlexInput::Fixed(size) => size,
            FlexInput::Flex { natural, .. } => natural,
        }
    }

    pub fn grow(&self) -> f32 {
        match self {
            FlexInput::Fixed(_) => 0.0,
            FlexInput::Flex { flex, .. } => flex.grow.max(0.0),
        }
    }

    pub fn shrink(&self) -> f32 {
        match self {
            FlexInput::Fixed(_) => 0.0,
            FlexInput::Flex { flex, .. } => flex.shrink.max(0.0),
        }
    }

    pub fn is_flex(&self) -> bool {
        matches!(self, FlexInput::Flex { .. })
    }
}

/// Total grow plus shrink weight; non-zero means flex is in play.
pub fn total_weight(inputs: &[FlexInput]) -> f32 {
    inputs.iter().map(|i| i.grow() + i.shrink()).sum()
}

/// Distribute `available` main-axis space (spacing already subtracted).
///
/// Free space goes to growers by grow weight. A deficit is taken from
/// shrinkers by shrink weight; a shrinker that would go below zero is frozen
/// at zero and the rest of its share is redistributed over the others.
pub fn distribute_flex(inputs: &[FlexInput], available: f32) -> Vec<f32> {
    let mut sizes: Vec<f32> = inputs.iter().map(FlexInput::natural).collect();
    let consumed: f32 = sizes.iter().sum();
    let free = available - consumed;

    if free > 0.0 {
        let total_grow: f32 = inputs.iter().map(FlexInput::grow).sum();
        if total_grow > 0.0 {
            for (size, input) in sizes.iter_mut().zip(inputs) {
                *size += free * input.grow() / total_grow;
            }
        }
    } else if free < 0.0 {
        let mut deficit = -free;
        let mut active: Vec<usize> = (0..inputs.len())
            .filter(|&i| inputs[i].shrink() > 0.0 && sizes[i] > 0.0)
            .collect();

        while deficit > 0.0 && !active.is_empty() {
            let total_shrink: f32 = active.iter().map(|&i| inputs[i].shrink()).sum();
            let frozen: Vec<usize> = active
                .iter()
                .copied()
                .filter(|&i| deficit * inputs[i].shrink() / total_shrink >= sizes[i])
                .collect();

            if frozen.is_empty() {
                for &i in &active {
                    sizes[i] -= deficit * inputs[i].shrink() / total_shrink;
                }
                break;
            }
            for &i in &frozen {
                deficit -= sizes[i];
                sizes[i] = 0.0;
            }
            active.retain(|i| !frozen.contains(i));
        }
    }

    sizes
}

// =========================================================================
// Tests
// =========================================================================
