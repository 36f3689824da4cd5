//! Error types for tracehub.
//!
//! Nothing here is ever returned from the emit path. These errors only show
//! up where a caller explicitly asks for a checked answer:
//!
//! - [`RegisterError`] - from `try_register` when every slot is taken
//! - [`LevelOutOfRange`] - converting a raw `u8` into a [`Level`]
//! - [`ParseLevelError`] - parsing a level name from configuration
//!
//! [`Level`]: crate::Level

use thiserror::Error;

/// Errors that can occur while registering a subscriber.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterError {
    /// Every slot of the registry is occupied.
    #[error("subscriber registry is full ({capacity} slots)")]
    RegistryFull {
        /// Fixed capacity of the registry.
        capacity: usize,
    },
}

/// A raw severity value outside `0..=5`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("severity value {0} is out of range")]
pub struct LevelOutOfRange(pub u8);

/// A level name that does not match any known severity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown severity level: {0:?}")]
pub struct ParseLevelError(pub String);
