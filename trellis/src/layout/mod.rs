//! Layout system for Trellis
//!
//! Turns a component tree plus a size constraint into an immutable geometry
//! tree. Constraints flow down, sizes flow up, and each container records the
//! spatial index its children support so the query engine can prune.
//!
//! # Architecture
//!
//! ```text
//! component tree -> layout(constraint) -> LayoutNode tree -> query(viewport)
//! ```
//!
//! Layout is pure: equal inputs give equal trees on any thread.

pub mod component;
pub mod constraints;
pub mod elements;
pub mod flex;
pub mod flow;
pub mod length;
pub mod node;
pub mod placement;
pub mod stack;
pub mod sticky;
pub mod waterfall;

// shared by stack and flow
mod lines;

// Re-export core types
pub use component::{Component, Element, IntoElement, IntrinsicContent, MeasureFn};
pub use constraints::{ConstraintError, SizeConstraint};
pub use length::{CrossAlignment, Distribution, Flex, FlexHints, SizeStrategy};
pub use lines::Child;
pub use node::{LayoutNode, Leaf, NodeKind, Payload, TransitionKey};

// Re-export elements and containers
pub use elements::{Flexible, Inset, Item, SizeBox, Spacer};
pub use flow::Flow;
pub use placement::{Absolute, Page};
pub use stack::Stack;
pub use sticky::StickyStack;
pub use waterfall::Waterfall;
