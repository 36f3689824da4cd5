//! # tracehub-core
//!
//! Core types for the tracehub log dispatcher.
//!
//! This crate has a single dependency and is meant to be imported by
//! subscriber crates that do not need the dispatcher itself: a serial console
//! driver or a network log forwarder only has to implement [`Subscriber`].
//!
//! # Vocabulary
//!
//! - [`Level`]: ordered severity, `None < Error < Warn < Info < Debug < Verbose`
//! - [`SourceMode`]: build-time choice between [`WithSource`] (records carry a
//!   [`CallSite`]) and [`WithoutSource`]
//! - [`Record`]: one rendered message as seen by a subscriber
//! - [`Subscriber`]: the capability invoked for every delivered record
//!
//! # Error Types
//!
//! - [`RegisterError`] - checked registration into a full registry
//! - [`LevelOutOfRange`] - raw severity outside `0..=5`
//! - [`ParseLevelError`] - unknown level name

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod level;
mod record;
mod site;
mod subscriber;

// Re-exports
pub use error::{LevelOutOfRange, ParseLevelError, RegisterError};
pub use level::{Level, UNKNOWN_LEVEL_TEXT, level_text};
pub use record::Record;
pub use site::{CallSite, SourceMode, WithSource, WithoutSource};
pub use subscriber::{LevelFilter, Subscriber};
