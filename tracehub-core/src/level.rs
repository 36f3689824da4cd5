//! Severity levels.

use crate::error::{LevelOutOfRange, ParseLevelError};
use std::{fmt, str::FromStr};

/// Placeholder label for raw values that are not a [`Level`].
pub const UNKNOWN_LEVEL_TEXT: &str = "????";

/// Message severity, ordered by increasing verbosity.
///
/// A message passes the dispatcher gate when its level is less than or equal
/// to the current threshold. [`Level::None`] as a threshold therefore lets
/// nothing through except messages explicitly tagged `None`, and
/// [`Level::Verbose`] lets everything through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Level {
    /// No output.
    None = 0,
    /// Critical errors, usually aborting the current action.
    Error = 1,
    /// Warnings, usually not aborting.
    Warn = 2,
    /// Informational messages.
    #[default]
    Info = 3,
    /// Debug information.
    Debug = 4,
    /// Extra verbose information.
    Verbose = 5,
}

impl Level {
    /// All levels, least verbose first.
    pub const ALL: [Level; 6] = [
        Level::None,
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Verbose,
    ];

    /// Short upper-case label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::None => "NONE",
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Verbose => "VERBOSE",
        }
    }

    /// Converts a raw value, returning `None` outside `0..=5`.
    pub const fn from_u8(raw: u8) -> Option<Level> {
        match raw {
            0 => Some(Level::None),
            1 => Some(Level::Error),
            2 => Some(Level::Warn),
            3 => Some(Level::Info),
            4 => Some(Level::Debug),
            5 => Some(Level::Verbose),
            _ => None,
        }
    }

    /// Returns `true` if a message at `self` passes a `threshold` gate.
    #[inline]
    pub const fn passes(self, threshold: Level) -> bool {
        self as u8 <= threshold as u8
    }
}

/// Label for a raw severity value.
///
/// Values that do not name a [`Level`] map to [`UNKNOWN_LEVEL_TEXT`].
pub const fn level_text(raw: u8) -> &'static str {
    match Level::from_u8(raw) {
        Some(level) => level.as_str(),
        None => UNKNOWN_LEVEL_TEXT,
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level as u8
    }
}

impl TryFrom<u8> for Level {
    type Error = LevelOutOfRange;

    fn try_from(raw: u8) -> Result<Self, LevelOutOfRange> {
        Level::from_u8(raw).ok_or(LevelOutOfRange(raw))
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let level = match name.to_ascii_lowercase().as_str() {
            "none" | "off" => Level::None,
            "error" => Level::Error,
            "warn" | "warning" => Level::Warn,
            "info" => Level::Info,
            "debug" => Level::Debug,
            "verbose" | "trace" => Level::Verbose,
            _ => return Err(ParseLevelError(name.to_string())),
        };
        Ok(level)
    }
}
