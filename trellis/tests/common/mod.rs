//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use tracing_subscriber::EnvFilter;
use trellis::{Host, Key, Rect, RenderItem};

/// Route `tracing` output through the test harness (`RUST_LOG=trellis=debug`).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A materialized test object.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub id: u32,
    pub key: Key,
    pub frame: Rect,
}

/// Host that keeps its objects' frames and counts calls.
#[derive(Debug, Default)]
pub struct TestHost {
    next_id: u32,
    pub acquired: usize,
    pub released: Vec<Key>,
    pub configured: usize,
    /// Frame last applied per key.
    pub frames: HashMap<Key, Rect>,
}

impl Host for TestHost {
    type Object = View;

    fn acquire(&mut self, item: &RenderItem) -> View {
        self.next_id += 1;
        self.acquired += 1;
        View { id: self.next_id, key: item.key.clone(), frame: Rect::ZERO }
    }

    fn release(&mut self, key: &Key, object: View) {
        assert_eq!(&object.key, key);
        self.frames.remove(key);
        self.released.push(key.clone());
    }

    fn set_frame(&mut self, object: &mut View, frame: Rect) {
        object.frame = frame;
        self.frames.insert(object.key.clone(), frame);
    }

    fn configure(&mut self, _object: &mut View, _item: &RenderItem) {
        self.configured += 1;
    }
}
