//! Line-oriented output to any `io::Write`.

use std::{
    io::{self, Write},
    sync::{Mutex, PoisonError},
};
use tracehub_core::{Record, SourceMode, Subscriber};

/// A subscriber that writes one line per record.
///
/// Lines look like `[WARN] src/radio.rs:88 radio::tx: retrying` when the
/// mode carries call-site metadata, and `[WARN] retrying` otherwise. Write
/// errors are ignored.
///
/// # Example
///
/// ```rust,ignore
/// tracer.register(WriterSubscriber::stderr());
/// ```
pub struct WriterSubscriber<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send + 'static> WriterSubscriber<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl WriterSubscriber<io::Stderr> {
    /// Write to standard error.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<M, W> Subscriber<M> for WriterSubscriber<W>
where
    M: SourceMode,
    W: Write + Send + 'static,
{
    fn on_record(&self, record: &Record<'_, M>) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = match M::call_site(record.site()) {
            Some(site) => writeln!(
                writer,
                "[{}] {}:{} {}: {}",
                record.level(),
                site.file,
                site.line,
                site.function,
                record.message()
            ),
            None => writeln!(writer, "[{}] {}", record.level(), record.message()),
        };
    }
}
