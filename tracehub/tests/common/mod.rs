#![allow(dead_code)]

use std::{
    fmt, io,
    sync::{Arc, Mutex},
};
use tracehub::{Record, SourceMode, Subscriber};

// ============================================================================
// Test Subscribers
// ============================================================================

/// Pushes its id into a shared list on every record.
pub struct OrderRecordingSubscriber {
    pub id: usize,
    pub order: Arc<Mutex<Vec<usize>>>,
}

impl<M: SourceMode> Subscriber<M> for OrderRecordingSubscriber {
    fn on_record(&self, _record: &Record<'_, M>) {
        self.order.lock().unwrap().push(self.id);
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// An `io::Write` sink whose contents stay readable after it was moved
/// into a subscriber.
#[derive(Clone, Default)]
pub struct SharedBuf(pub Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Panics when formatted; proves an argument was never rendered.
pub struct Unrendered;

impl fmt::Display for Unrendered {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        panic!("gated message was rendered")
    }
}
