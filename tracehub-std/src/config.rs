//! Dispatcher configuration.
//!
//! Registry capacity and stack buffer size are const generics on
//! [`Dispatcher`]; everything chosen at construction time lives in
//! [`DispatcherConfig`].

use crate::dispatcher::Dispatcher;
use std::marker::PhantomData;
use tracehub_core::{Level, SourceMode};

/// Default number of subscriber slots.
pub const DEFAULT_CAPACITY: usize = 5;

/// Default stack buffer size for rendering, in bytes.
pub const DEFAULT_RENDER_BUFFER: usize = 128;

/// Threshold a dispatcher starts with unless configured otherwise.
pub const DEFAULT_LEVEL: Level = Level::Info;

/// Construction-time settings of a [`Dispatcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatcherConfig {
    /// Threshold at construction.
    pub initial_level: Level,
    /// Largest heap buffer a single render may reserve, in bytes.
    ///
    /// Messages needing more are delivered truncated to the stack buffer.
    pub heap_limit: usize,
}

impl DispatcherConfig {
    /// `Info` threshold, unlimited heap growth.
    pub const DEFAULT: Self = Self {
        initial_level: DEFAULT_LEVEL,
        heap_limit: usize::MAX,
    };
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Builder for constructing a [`Dispatcher`].
///
/// # Example
/// ```ignore
/// let tracer: Dispatcher<WithSource> = Dispatcher::builder()
///     .initial_level(Level::Debug)
///     .heap_limit(512)
///     .build();
/// ```
pub struct DispatcherBuilder<M: SourceMode, const N: usize, const B: usize> {
    config: DispatcherConfig,
    _mode: PhantomData<fn() -> M>,
}

impl<M: SourceMode, const N: usize, const B: usize> DispatcherBuilder<M, N, B> {
    /// Create a builder with default settings.
    pub const fn new() -> Self {
        Self {
            config: DispatcherConfig::DEFAULT,
            _mode: PhantomData,
        }
    }

    /// Set the threshold the dispatcher starts with.
    pub fn initial_level(mut self, level: Level) -> Self {
        self.config.initial_level = level;
        self
    }

    /// Cap the heap buffer used for long messages.
    pub fn heap_limit(mut self, bytes: usize) -> Self {
        self.config.heap_limit = bytes;
        self
    }

    /// Replace all settings at once.
    pub fn config(mut self, config: DispatcherConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the dispatcher.
    pub fn build(self) -> Dispatcher<M, N, B> {
        Dispatcher::with_config(self.config)
    }
}

impl<M: SourceMode, const N: usize, const B: usize> Default for DispatcherBuilder<M, N, B> {
    fn default() -> Self {
        Self::new()
    }
}
