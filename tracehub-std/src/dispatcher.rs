//! The log dispatcher.
//!
//! A [`Dispatcher`] gates each message against the current threshold,
//! renders it once, and hands the same [`Record`] to every registered
//! subscriber in registration order. Everything happens on the caller's
//! stack; `emit` returns after the last subscriber returned.
//!
//! # Failure policy
//!
//! Logging never fails the caller:
//!
//! - a registration into a full registry is dropped ([`Dispatcher::register`])
//!   or reported without side effects ([`Dispatcher::try_register`])
//! - a message too long for the stack buffer whose heap buffer cannot be
//!   reserved is delivered truncated
//! - a message above the threshold is a silent no-op

use crate::{
    config::{
        DEFAULT_CAPACITY, DEFAULT_LEVEL, DEFAULT_RENDER_BUFFER, DispatcherBuilder, DispatcherConfig,
    },
    registry::SubscriberRegistry,
    render::{RenderOutcome, render},
};
use std::{
    fmt,
    sync::atomic::{AtomicU8, Ordering},
};
use tracehub_core::{Level, Record, RegisterError, SourceMode, Subscriber};

/// Summary of one delivered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatched {
    /// Number of subscribers invoked.
    pub delivered: usize,
    /// How the text was rendered.
    pub render: RenderOutcome,
}

/// Level-gated fan-out of formatted messages to a bounded subscriber set.
///
/// - `M` selects whether records carry call-site metadata.
/// - `N` is the number of subscriber slots.
/// - `B` is the stack buffer size used for rendering.
///
/// All operations take `&self`. The threshold is an atomic and registry
/// slots are set once, so a dispatcher can be shared by reference or placed
/// in a `static`.
///
/// # Example
/// ```ignore
/// let tracer = Dispatcher::<WithoutSource>::new();
/// tracer.register(|record: &Record<'_, WithoutSource>| {
///     println!("[{}] {}", record.level(), record.message());
/// });
/// tracer.emit(Level::Info, (), format_args!("x={}", 5));
/// ```
pub struct Dispatcher<
    M: SourceMode,
    const N: usize = DEFAULT_CAPACITY,
    const B: usize = DEFAULT_RENDER_BUFFER,
> {
    registry: SubscriberRegistry<M, N>,
    threshold: AtomicU8,
    heap_limit: usize,
}

impl<M: SourceMode, const N: usize, const B: usize> Dispatcher<M, N, B> {
    /// Create a dispatcher with an `Info` threshold and no subscribers.
    pub const fn new() -> Self {
        Self::with_config(DispatcherConfig::DEFAULT)
    }

    /// Create a dispatcher from explicit settings.
    pub const fn with_config(config: DispatcherConfig) -> Self {
        Self {
            registry: SubscriberRegistry::new(),
            threshold: AtomicU8::new(config.initial_level as u8),
            heap_limit: config.heap_limit,
        }
    }

    /// Start building a dispatcher.
    pub const fn builder() -> DispatcherBuilder<M, N, B> {
        DispatcherBuilder::new()
    }

    /// Register a subscriber in the first free slot.
    ///
    /// When every slot is taken the subscriber is dropped and nothing is
    /// reported. Use [`try_register`](Self::try_register) to observe that.
    /// Registering the same subscriber twice gives it two slots.
    pub fn register<S: Subscriber<M>>(&self, subscriber: S) {
        if let Err(_err) = self.registry.try_register(subscriber) {
            #[cfg(feature = "tracing")]
            {
                tracing::debug!(error = %_err, "subscriber dropped");
            }
        }
    }

    /// Register a subscriber, returning its slot index.
    pub fn try_register<S: Subscriber<M>>(&self, subscriber: S) -> Result<usize, RegisterError> {
        self.registry.try_register(subscriber)
    }

    /// Replace the threshold.
    pub fn set_level(&self, level: Level) {
        self.threshold.store(level as u8, Ordering::Relaxed);
    }

    /// Current threshold.
    pub fn level(&self) -> Level {
        Level::from_u8(self.threshold.load(Ordering::Relaxed)).unwrap_or(DEFAULT_LEVEL)
    }

    /// Returns `true` if a message at `level` would be delivered.
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level.passes(self.level())
    }

    /// Render and deliver a message.
    ///
    /// `site` is passed to subscribers untouched.
    pub fn emit(&self, level: Level, site: M::Site, args: fmt::Arguments<'_>) {
        let _ = self.dispatch(level, site, args);
    }

    /// Like [`emit`](Self::emit), reporting what happened.
    ///
    /// Returns `None` when the message was gated by the threshold, in which
    /// case nothing was rendered.
    pub fn dispatch(
        &self,
        level: Level,
        site: M::Site,
        args: fmt::Arguments<'_>,
    ) -> Option<Dispatched> {
        if !self.enabled(level) {
            return None;
        }

        let (delivered, render) = render::<B, _>(args, self.heap_limit, |message| {
            let record = Record::<M>::new(level, site, message);
            let mut delivered = 0;
            for subscriber in self.registry.iter() {
                subscriber.on_record(&record);
                delivered += 1;
            }
            delivered
        });

        #[cfg(feature = "tracing")]
        {
            if let RenderOutcome::Truncated { required, kept } = render {
                tracing::warn!(%level, required, kept, "log message truncated");
            }
        }

        Some(Dispatched { delivered, render })
    }

    /// The underlying registry.
    pub fn registry(&self) -> &SubscriberRegistry<M, N> {
        &self.registry
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.registry.len()
    }

    /// Number of subscriber slots.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Stack buffer size used for rendering.
    pub const fn render_buffer(&self) -> usize {
        B
    }

    /// Heap limit for long messages.
    pub fn heap_limit(&self) -> usize {
        self.heap_limit
    }
}

impl<M: SourceMode, const N: usize, const B: usize> Default for Dispatcher<M, N, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: SourceMode, const N: usize, const B: usize> fmt::Debug for Dispatcher<M, N, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("level", &self.level())
            .field("registry", &self.registry)
            .field("render_buffer", &B)
            .field("heap_limit", &self.heap_limit)
            .finish()
    }
}
