//! Trellis: constraint layout for virtualized surfaces
//!
//! Trellis turns a tree of immutable components into positioned geometry,
//! answers "what is on screen" for a viewport without touching off-screen
//! subtrees, and keeps a host's visual objects in step with the answer by
//! stable key.
//!
//! # Architecture
//!
//! ```text
//! Component tree --layout(constraint)--> LayoutNode tree
//!                                           |
//!                          query(viewport)  v
//!                                      [RenderItem] --Reconciler--> Host
//! ```
//!
//! - Layout is pure and `Send + Sync`; run it on any thread and publish the
//!   result through [`SharedLayout`].
//! - Queries are read-only and use the ordered index each container picked
//!   (binary search) or a linear scan when positions are not monotonic.
//! - Reconciliation is single-writer per surface. Delete transitions finish
//!   asynchronously through [`DeleteCompletion`] tokens.
//!
//! # Usage
//!
//! ```ignore
//! use trellis::{Item, Reconciler, RenderConfig, Size, SizeConstraint, Stack, Component, Rect};
//!
//! let list = Stack::vertical()
//!     .spacing(8.0)
//!     .extend((0..1000u64).map(|i| Item::keyed(i, Size::new(320.0, 44.0))));
//! let tree = list.layout(SizeConstraint::loose(Size::new(320.0, f32::INFINITY)));
//!
//! let mut reconciler = Reconciler::new(RenderConfig::default());
//! reconciler.render(&mut host, &tree, Rect::new(0.0, 0.0, 320.0, 640.0));
//! ```

// Core primitives
pub mod axis;
pub mod identity;
pub mod primitives;

// Diagnostics and configuration
pub mod config;
pub mod diagnostics;

// Layout system
pub mod layout;

// Viewport queries
pub mod query;

// Keyed reconciliation
pub mod reconcile;

pub use axis::Axis;
pub use config::{ConfigError, RenderConfig};
pub use diagnostics::Misuse;
pub use identity::{Identity, Key, KeyPath};
pub use primitives::{Insets, Point, Rect, Size};

pub use layout::{
    Absolute, Child, Component, ConstraintError, CrossAlignment, Distribution, Element, Flex,
    Flexible, Flow, Inset, IntoElement, IntrinsicContent, Item, LayoutNode, MeasureFn, Page,
    Payload, SizeBox, SizeConstraint, SizeStrategy, Spacer, Stack, StickyStack, TransitionKey,
    Waterfall,
};
pub use query::{QueryIndex, RenderItem, SharedLayout, Viewport};
pub use reconcile::{DeleteCompletion, Host, Immediate, Operation, ReconcileReport, Reconciler, Transition};
