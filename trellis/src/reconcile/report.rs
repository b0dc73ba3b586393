//! What a reconcile pass did.

use serde::Serialize;

use crate::identity::Key;
use crate::primitives::Rect;

/// One mutation issued to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Insert { key: Key, frame: Rect },
    Update { key: Key, from: Rect, to: Rect },
    Delete { key: Key },
}

impl Operation {
    pub fn key(&self) -> &Key {
        match self {
            Operation::Insert { key, .. } | Operation::Update { key, .. } | Operation::Delete { key } => key,
        }
    }
}

/// Operations of one pass, in issue order: inserts and updates in item
/// order, then deletes in previous order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReconcileReport {
    pub ops: Vec<Operation>,
    /// Objects handed back to the host by completed deletes.
    pub released: usize,
}

/// Operation counts, for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub inserts: usize,
    pub updates: usize,
    pub deletes: usize,
    pub released: usize,
}

impl ReconcileReport {
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn counts(&self) -> Counts {
        let mut counts = Counts { released: self.released, ..Counts::default() };
        for op in &self.ops {
            match op {
                Operation::Insert { .. } => counts.inserts += 1,
                Operation::Update { .. } => counts.updates += 1,
                Operation::Delete { .. } => counts.deletes += 1,
            }
        }
        counts
    }

    pub fn inserted(&self) -> impl Iterator<Item = &Key> {
        self.ops.iter().filter_map(|op| match op {
            Operation::Insert { key, .. } => Some(key),
            _ => None,
        })
    }

    pub fn deleted(&self) -> impl Iterator<Item = &Key> {
        self.ops.iter().filter_map(|op| match op {
            Operation::Delete { key } => Some(key),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_by_kind() {
        let report = ReconcileReport {
            ops: vec![
                Operation::Insert { key: Key::id(1), frame: Rect::ZERO },
                Operation::Update { key: Key::id(2), from: Rect::ZERO, to: Rect::new(0.0, 1.0, 1.0, 1.0) },
                Operation::Delete { key: Key::id(3) },
                Operation::Delete { key: Key::id(4) },
            ],
            released: 2,
        };
        let counts = report.counts();
        assert_eq!((counts.inserts, counts.updates, counts.deletes, counts.released), (1, 1, 2, 2));
        assert_eq!(
            serde_json::to_value(counts).unwrap(),
            serde_json::json!({"inserts": 1, "updates": 1, "deletes": 2, "released": 2})
        );
        assert_eq!(report.deleted().count(), 2);
        assert_eq!(report.ops[1].key(), &Key::id(2));
    }
}
