//! Forwarding to the `tracing` ecosystem.

use tracehub_core::{Level, Record, SourceMode, Subscriber};

/// A subscriber that re-emits records as `tracing` events.
///
/// `Verbose` maps to `TRACE`; records tagged `Level::None` are dropped.
/// Call-site metadata, when present, is attached as the `src_file`,
/// `src_line` and `function` fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSubscriber;

impl TracingSubscriber {
    /// Create a new forwarding subscriber.
    pub const fn new() -> Self {
        Self
    }
}

impl<M: SourceMode> Subscriber<M> for TracingSubscriber {
    fn on_record(&self, record: &Record<'_, M>) {
        let src_file = record.file();
        let src_line = record.line();
        let function = record.function();
        let message = record.message();

        match record.level() {
            Level::None => {}
            Level::Error => tracing::error!(src_file, src_line, function, "{message}"),
            Level::Warn => tracing::warn!(src_file, src_line, function, "{message}"),
            Level::Info => tracing::info!(src_file, src_line, function, "{message}"),
            Level::Debug => tracing::debug!(src_file, src_line, function, "{message}"),
            Level::Verbose => tracing::trace!(src_file, src_line, function, "{message}"),
        }
    }
}
