//! The hosting surface and pluggable transitions.

use crossbeam_channel::Sender;

use crate::identity::Key;
use crate::primitives::Rect;
use crate::query::RenderItem;

/// The platform side of a surface: creates, positions and frees visual
/// objects. Never called concurrently for one reconciler.
pub trait Host {
    /// A materialized visual object.
    type Object;

    /// Create (or dequeue) an object for a newly visible item.
    fn acquire(&mut self, item: &RenderItem) -> Self::Object;

    /// Give back an object whose delete has completed.
    fn release(&mut self, key: &Key, object: Self::Object);

    fn set_frame(&mut self, object: &mut Self::Object, frame: Rect);

    /// Apply the item's payload. Called on insert and on update.
    fn configure(&mut self, _object: &mut Self::Object, _item: &RenderItem) {}
}

/// Per-operation animation hooks.
///
/// The defaults apply frames directly and complete deletes on the spot.
pub trait Transition<H: Host> {
    fn on_insert(&self, host: &mut H, object: &mut H::Object, frame: Rect) {
        host.set_frame(object, frame);
    }

    fn on_update(&self, host: &mut H, object: &mut H::Object, _from: Rect, to: Rect) {
        host.set_frame(object, to);
    }

    /// Start removing `object`. It stays owned by the reconciler until
    /// `completion` is completed (or dropped), possibly on another thread.
    fn on_delete(&self, _host: &mut H, _object: &mut H::Object, _frame: Rect, completion: DeleteCompletion) {
        completion.complete();
    }
}

/// Apply everything immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

impl<H: Host> Transition<H> for Immediate {}

/// Signals that a delete transition finished.
///
/// Completing consumes the token; dropping it without completing counts as
/// completion, so an object can never be leaked by a transition that forgets.
/// A completion for a key that reappeared in the meantime is ignored.
#[derive(Debug)]
pub struct DeleteCompletion {
    key: Key,
    token: u64,
    done: Sender<(Key, u64)>,
}

impl DeleteCompletion {
    pub(crate) fn new(key: Key, token: u64, done: Sender<(Key, u64)>) -> Self {
        Self { key, token, done }
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn complete(self) {}
}

impl Drop for DeleteCompletion {
    fn drop(&mut self) {
        // The reconciler may be gone already; nothing left to release then.
        let _ = self.done.send((self.key.clone(), self.token));
    }
}
