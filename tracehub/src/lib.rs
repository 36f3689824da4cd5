//! # tracehub - Centralized Log Dispatch for Firmware
//!
//! `tracehub` lets any code emit leveled, formatted messages through one
//! entry point, and lets independently written modules subscribe to them
//! without the emitting code knowing who is listening.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tracehub::{Level, Tracer, WriterSubscriber, trace_info, trace_debug};
//!
//! let tracer = Tracer::new();
//! tracer.register(WriterSubscriber::stderr());
//!
//! trace_info!(tracer, "x={}", 5);   // delivered: Info <= Info
//! trace_debug!(tracer, "x={}", 5);  // gated
//!
//! tracer.set_level(Level::Debug);
//! trace_debug!(tracer, "x={}", 5);  // delivered
//! ```
//!
//! ## Build-time configuration
//!
//! - `source` (default): records carry file, line and function, and
//!   [`Mode`] is [`WithSource`]. Without it, [`Mode`] is [`WithoutSource`].
//! - `macros`: the [`subscriber`] attribute.
//! - `inventory`: subscribers collected across crates.
//! - `tracing`: forwarding subscriber and internal diagnostics.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod macros;

#[cfg(feature = "inventory")]
mod collected;

pub use tracehub_core::{
    // Metadata
    CallSite,
    // Levels
    Level,
    LevelFilter,
    // Error types
    LevelOutOfRange,
    ParseLevelError,
    // Records
    Record,
    RegisterError,
    SourceMode,
    // Subscriber
    Subscriber,
    UNKNOWN_LEVEL_TEXT,
    WithSource,
    WithoutSource,
    level_text,
};

pub use tracehub_std::{
    DEFAULT_CAPACITY, DEFAULT_LEVEL, DEFAULT_RENDER_BUFFER, Dispatched, Dispatcher,
    DispatcherBuilder, DispatcherConfig, RenderOutcome, SubscriberRegistry,
    subscribers::{FilterSubscriber, WriterSubscriber},
};

#[cfg(feature = "tracing")]
pub use tracehub_std::subscribers::TracingSubscriber;

#[cfg(feature = "inventory")]
pub use collected::{CollectedSubscriber, collected, register_collected};

/// Metadata mode selected by the `source` feature.
#[cfg(feature = "source")]
pub type Mode = WithSource;

/// Metadata mode selected by the `source` feature.
#[cfg(not(feature = "source"))]
pub type Mode = WithoutSource;

/// Number of subscriber slots of a [`Tracer`].
pub const MAX_SUBSCRIBERS: usize = DEFAULT_CAPACITY;

/// Stack buffer size of a [`Tracer`], in bytes.
pub const RENDER_BUFFER: usize = DEFAULT_RENDER_BUFFER;

/// The dispatcher the call-site macros are built for.
pub type Tracer = Dispatcher<Mode, MAX_SUBSCRIBERS, RENDER_BUFFER>;

/// Standard subscriber implementations.
pub mod subscribers {
    #![allow(clippy::wildcard_imports)]
    pub use tracehub_std::subscribers::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use tracehub_std::testing::*;
}

/// Prelude module - common imports for tracehub.
///
/// # Usage
///
/// ```rust,ignore
/// use tracehub::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        CallSite, Level, Mode, Record, Subscriber, Tracer, declare_tracer, trace_debug,
        trace_emit, trace_error, trace_info, trace_verbose, trace_warn,
    };
}

#[cfg(feature = "macros")]
pub use tracehub_macros::subscriber;

#[cfg(feature = "inventory")]
pub use inventory;
