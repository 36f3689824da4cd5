//! Testing utilities for tracehub.
//!
//! Subscribers that remember what they were given, so tests can assert on
//! delivery without a real transport.
//!
//! # Features
//!
//! - [`RecordingSubscriber`]: keeps an owned copy of every record
//! - [`CountingSubscriber`]: counts invocations

use std::{
    fmt,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};
use tracehub_core::{Level, Record, SourceMode, Subscriber};

// ============================================================================
// Owned Record
// ============================================================================

/// An owned copy of a [`Record`].
pub struct OwnedRecord<M: SourceMode> {
    /// Severity of the message.
    pub level: Level,
    /// Mode-specific metadata.
    pub site: M::Site,
    /// The rendered text.
    pub message: String,
}

impl<M: SourceMode> From<&Record<'_, M>> for OwnedRecord<M> {
    fn from(record: &Record<'_, M>) -> Self {
        Self {
            level: record.level(),
            site: *record.site(),
            message: record.message().to_string(),
        }
    }
}

impl<M: SourceMode> Clone for OwnedRecord<M> {
    fn clone(&self) -> Self {
        Self {
            level: self.level,
            site: self.site,
            message: self.message.clone(),
        }
    }
}

impl<M: SourceMode> fmt::Debug for OwnedRecord<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedRecord")
            .field("level", &self.level)
            .field("site", &self.site)
            .field("message", &self.message)
            .finish()
    }
}

impl<M: SourceMode> PartialEq for OwnedRecord<M>
where
    M::Site: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.level == other.level && self.site == other.site && self.message == other.message
    }
}

impl<M: SourceMode> Eq for OwnedRecord<M> where M::Site: Eq {}

// ============================================================================
// Recording Subscriber
// ============================================================================

/// A subscriber that records every record it receives.
///
/// Clones share the same storage, so keep one clone for assertions and
/// register the other.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingSubscriber::<WithoutSource>::new();
/// dispatcher.register(recorder.clone());
///
/// dispatcher.emit(Level::Info, (), format_args!("x={}", 5));
///
/// assert_eq!(recorder.messages(), ["x=5"]);
/// ```
pub struct RecordingSubscriber<M: SourceMode> {
    records: Arc<Mutex<Vec<OwnedRecord<M>>>>,
}

impl<M: SourceMode> RecordingSubscriber<M> {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a copy of the recorded records.
    pub fn records(&self) -> Vec<OwnedRecord<M>> {
        self.records.lock().unwrap().clone()
    }

    /// Get the recorded message texts.
    pub fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|record| record.message.clone())
            .collect()
    }

    /// Get the number of recorded records.
    pub fn count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Clear all recorded records.
    pub fn clear(&self) {
        self.records.lock().unwrap().clear();
    }
}

impl<M: SourceMode> Default for RecordingSubscriber<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: SourceMode> Clone for RecordingSubscriber<M> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
        }
    }
}

impl<M: SourceMode> Subscriber<M> for RecordingSubscriber<M> {
    fn on_record(&self, record: &Record<'_, M>) {
        self.records.lock().unwrap().push(OwnedRecord::from(record));
    }
}

// ============================================================================
// Counting Subscriber
// ============================================================================

/// A subscriber that counts invocations.
#[derive(Debug, Default, Clone)]
pub struct CountingSubscriber {
    count: Arc<AtomicUsize>,
}

impl CountingSubscriber {
    /// Create a new counting subscriber.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<M: SourceMode> Subscriber<M> for CountingSubscriber {
    fn on_record(&self, _record: &Record<'_, M>) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}
