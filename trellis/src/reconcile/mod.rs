//! Reconciliation: keep materialized objects in step with the visible set.
//!
//! Each pass takes the leaves a query returned and diffs them by key against
//! what the surface currently shows:
//!
//! - new key: the host acquires an object, the transition inserts it;
//! - known key, new frame: the transition updates it;
//! - key gone: the transition starts a delete and gets a [`DeleteCompletion`];
//!   the object stays tracked until that completion fires;
//! - known key, same frame: nothing.
//!
//! A key that comes back while its delete is still running cancels that
//! delete: the pending token is retired, so a late completion is ignored.

mod host;
mod report;

pub use host::{DeleteCompletion, Host, Immediate, Transition};
pub use report::{Counts, Operation, ReconcileReport};

use std::collections::HashMap;

use crossbeam_channel::{Receiver, Sender, unbounded};
use indexmap::IndexMap;

use crate::config::RenderConfig;
use crate::diagnostics::{self, Misuse};
use crate::identity::Key;
use crate::layout::node::{LayoutNode, TransitionKey};
use crate::primitives::Rect;
use crate::query::{RenderItem, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryState {
    Live,
    /// Delete in flight; completions carrying another token are stale.
    PendingDelete(u64),
}

struct Entry<O> {
    object: O,
    frame: Rect,
    /// Pass that last saw this key.
    generation: u64,
    transition: Option<TransitionKey>,
    state: EntryState,
}

/// Maps visible leaves onto a host's visual objects. One per surface.
pub struct Reconciler<H: Host> {
    config: RenderConfig,
    entries: IndexMap<Key, Entry<H::Object>>,
    transitions: HashMap<TransitionKey, Box<dyn Transition<H>>>,
    default_transition: Box<dyn Transition<H>>,
    generation: u64,
    next_token: u64,
    completed_tx: Sender<(Key, u64)>,
    completed_rx: Receiver<(Key, u64)>,
}

impl<H: Host> Reconciler<H> {
    pub fn new(config: RenderConfig) -> Self {
        let (completed_tx, completed_rx) = unbounded();
        Self {
            config,
            entries: IndexMap::new(),
            transitions: HashMap::new(),
            default_transition: Box::new(Immediate),
            generation: 0,
            next_token: 0,
            completed_tx,
            completed_rx,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Register a transition items can name with [`Item::transition`].
    ///
    /// [`Item::transition`]: crate::layout::Item::transition
    pub fn register_transition(&mut self, key: impl Into<TransitionKey>, transition: impl Transition<H> + 'static) {
        self.transitions.insert(key.into(), Box::new(transition));
    }

    /// Transition for items that do not name one.
    pub fn set_default_transition(&mut self, transition: impl Transition<H> + 'static) {
        self.default_transition = Box::new(transition);
    }

    /// Query `tree` with the configured overscan around `visible` and
    /// reconcile the result.
    pub fn render(&mut self, host: &mut H, tree: &LayoutNode, visible: Rect) -> ReconcileReport {
        let viewport = self.config.viewport(visible);
        self.render_viewport(host, tree, &viewport)
    }

    pub fn render_viewport(&mut self, host: &mut H, tree: &LayoutNode, viewport: &Viewport) -> ReconcileReport {
        let items = tree.query_viewport(viewport);
        self.reconcile(host, &items)
    }

    /// Diff `items` against the current state and drive the host.
    pub fn reconcile(&mut self, host: &mut H, items: &[RenderItem]) -> ReconcileReport {
        let mut report = ReconcileReport {
            released: self.drain_completions(host),
            ..ReconcileReport::default()
        };
        self.generation += 1;
        let generation = self.generation;

        // Last writer wins, first position kept.
        let mut next: IndexMap<&Key, &RenderItem> = IndexMap::with_capacity(items.len());
        for item in items {
            if next.insert(&item.key, item).is_some() {
                diagnostics::report(Misuse::DuplicateKey(item.key.clone()));
            }
        }

        for (key, item) in next {
            let frame = item.frame;

            if let Some(entry) = self.entries.get_mut(key) {
                if entry.state == EntryState::Live {
                    entry.generation = generation;
                    entry.transition = item.transition.clone();
                    if entry.frame != frame {
                        let from = std::mem::replace(&mut entry.frame, frame);
                        host.configure(&mut entry.object, item);
                        let transition = pick(&self.transitions, &*self.default_transition, entry.transition.as_ref());
                        transition.on_update(host, &mut entry.object, from, frame);
                        report.ops.push(Operation::Update { key: key.clone(), from, to: frame });
                    }
                    continue;
                }

                if self.config.reuse_pending_deletes {
                    tracing::trace!(%key, "delete cancelled, reusing object");
                    entry.state = EntryState::Live;
                    entry.generation = generation;
                    entry.frame = frame;
                    entry.transition = item.transition.clone();
                    host.configure(&mut entry.object, item);
                    let transition = pick(&self.transitions, &*self.default_transition, entry.transition.as_ref());
                    transition.on_insert(host, &mut entry.object, frame);
                    report.ops.push(Operation::Insert { key: key.clone(), frame });
                    continue;
                }

                if let Some(stale) = self.entries.shift_remove(key) {
                    host.release(key, stale.object);
                    report.released += 1;
                }
            }

            let mut object = host.acquire(item);
            host.configure(&mut object, item);
            let transition = pick(&self.transitions, &*self.default_transition, item.transition.as_ref());
            transition.on_insert(host, &mut object, frame);
            self.entries.insert(
                key.clone(),
                Entry {
                    object,
                    frame,
                    generation,
                    transition: item.transition.clone(),
                    state: EntryState::Live,
                },
            );
            report.ops.push(Operation::Insert { key: key.clone(), frame });
        }

        let gone: Vec<Key> = self
            .entries
            .iter()
            .filter(|(_, e)| e.state == EntryState::Live && e.generation != generation)
            .map(|(k, _)| k.clone())
            .collect();
        for key in gone {
            let token = self.next_token;
            self.next_token += 1;
            let Some(entry) = self.entries.get_mut(&key) else { continue };
            entry.state = EntryState::PendingDelete(token);
            let completion = DeleteCompletion::new(key.clone(), token, self.completed_tx.clone());
            let transition = pick(&self.transitions, &*self.default_transition, entry.transition.as_ref());
            transition.on_delete(host, &mut entry.object, entry.frame, completion);
            report.ops.push(Operation::Delete { key });
        }

        report.released += self.drain_completions(host);

        let counts = report.counts();
        tracing::debug!(
            generation,
            inserts = counts.inserts,
            updates = counts.updates,
            deletes = counts.deletes,
            released = counts.released,
            live = self.live_len(),
            pending = self.pending_len(),
            "reconcile"
        );
        report
    }

    /// Release objects whose delete completed. Returns how many.
    ///
    /// Called at both ends of every pass; call it directly to free objects
    /// between passes.
    pub fn drain_completions(&mut self, host: &mut H) -> usize {
        let mut released = 0;
        while let Ok((key, token)) = self.completed_rx.try_recv() {
            let current = self
                .entries
                .get(&key)
                .is_some_and(|e| e.state == EntryState::PendingDelete(token));
            if !current {
                tracing::trace!(%key, token, "stale delete completion");
                continue;
            }
            if let Some(entry) = self.entries.shift_remove(&key) {
                host.release(&key, entry.object);
                released += 1;
            }
        }
        released
    }

    /// The object materialized for `key`, live or being deleted.
    pub fn object(&self, key: &Key) -> Option<&H::Object> {
        self.entries.get(key).map(|e| &e.object)
    }

    /// Last frame applied for `key`.
    pub fn frame(&self, key: &Key) -> Option<Rect> {
        self.entries.get(key).map(|e| e.frame)
    }

    pub fn is_pending_delete(&self, key: &Key) -> bool {
        self.entries
            .get(key)
            .is_some_and(|e| matches!(e.state, EntryState::PendingDelete(_)))
    }

    /// Live keys in materialization order.
    pub fn live_keys(&self) -> impl Iterator<Item = &Key> {
        self.entries
            .iter()
            .filter(|(_, e)| e.state == EntryState::Live)
            .map(|(k, _)| k)
    }

    pub fn live_len(&self) -> usize {
        self.live_keys().count()
    }

    pub fn pending_len(&self) -> usize {
        self.entries.len() - self.live_len()
    }
}

impl<H: Host> Default for Reconciler<H> {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

/// The transition registered under `key`, or the default.
fn pick<'a, H: Host>(
    registered: &'a HashMap<TransitionKey, Box<dyn Transition<H>>>,
    default: &'a dyn Transition<H>,
    key: Option<&TransitionKey>,
) -> &'a dyn Transition<H> {
    let Some(key) = key else { return default };
    match registered.get(key) {
        Some(transition) => transition.as_ref(),
        None => {
            diagnostics::report(Misuse::UnknownTransition(key.as_str().to_owned()));
            default
        }
    }
}
