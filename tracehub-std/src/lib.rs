//! # tracehub-std
//!
//! Standard implementations for the tracehub log dispatcher.
//!
//! This crate provides:
//! - **Dispatch**: [`Dispatcher`], the level gate and fan-out
//! - **Storage**: [`SubscriberRegistry`], bounded and insertion-ordered
//! - **Rendering**: [`render()`], stack-first formatting with heap growth
//! - **Configuration**: [`DispatcherConfig`], [`DispatcherBuilder`]
//! - **Standard subscribers**: writer, filter, `tracing` forwarding
//! - **Testing**: recording and counting subscribers

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use tracehub_core;

// Modules
pub mod config;
pub mod dispatcher;
pub mod registry;
pub mod render;
pub mod subscribers;
pub mod testing;

pub use config::{
    DEFAULT_CAPACITY, DEFAULT_LEVEL, DEFAULT_RENDER_BUFFER, DispatcherBuilder, DispatcherConfig,
};
pub use dispatcher::{Dispatched, Dispatcher};
pub use registry::SubscriberRegistry;
pub use render::{RenderOutcome, render};
