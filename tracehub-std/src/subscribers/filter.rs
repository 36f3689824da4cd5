//! Filter subscriber for conditional delivery.

use tracehub_core::{Record, SourceMode, Subscriber};

/// A subscriber that only forwards records matching a predicate.
///
/// # Example
///
/// ```rust,ignore
/// // Only forward records emitted from the radio driver
/// let radio = FilterSubscriber::new(console, |record: &Record<'_, WithSource>| {
///     record.file().is_some_and(|file| file.contains("radio"))
/// });
/// ```
pub struct FilterSubscriber<S, F> {
    inner: S,
    predicate: F,
}

impl<S, F> FilterSubscriber<S, F> {
    /// Create a new filter subscriber.
    pub fn new(inner: S, predicate: F) -> Self {
        Self { inner, predicate }
    }
}

impl<M, S, F> Subscriber<M> for FilterSubscriber<S, F>
where
    M: SourceMode,
    S: Subscriber<M>,
    F: Fn(&Record<'_, M>) -> bool + Send + Sync + 'static,
{
    fn on_record(&self, record: &Record<'_, M>) {
        if (self.predicate)(record) {
            self.inner.on_record(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingSubscriber;
    use tracehub_core::{Level, WithoutSource};

    #[test]
    fn test_filter_forwards_matching_records() {
        let recorder = RecordingSubscriber::<WithoutSource>::new();
        let filter = FilterSubscriber::new(recorder.clone(), |record: &Record<'_, WithoutSource>| {
            record.message().starts_with("net:")
        });

        filter.on_record(&Record::new(Level::Info, (), "net: link up"));
        filter.on_record(&Record::new(Level::Info, (), "disk: mounted"));

        assert_eq!(recorder.messages(), ["net: link up"]);
    }
}
