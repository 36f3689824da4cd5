//! The rendered message handed to subscribers.

use crate::{level::Level, site::SourceMode};
use std::fmt;

/// One rendered message, borrowed for the duration of a fan-out.
///
/// The text lives in the dispatcher's render buffer, so subscribers that
/// need to keep it must copy it out.
pub struct Record<'a, M: SourceMode> {
    level: Level,
    site: M::Site,
    message: &'a str,
}

impl<'a, M: SourceMode> Record<'a, M> {
    /// Create a record.
    pub fn new(level: Level, site: M::Site, message: &'a str) -> Self {
        Self {
            level,
            site,
            message,
        }
    }

    /// Severity of the message.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Mode-specific metadata (`CallSite` or `()`).
    pub fn site(&self) -> &M::Site {
        &self.site
    }

    /// Call-site file, when the mode carries metadata.
    pub fn file(&self) -> Option<&'static str> {
        M::call_site(&self.site).map(|site| site.file)
    }

    /// Call-site line, when the mode carries metadata.
    pub fn line(&self) -> Option<u32> {
        M::call_site(&self.site).map(|site| site.line)
    }

    /// Call-site function, when the mode carries metadata.
    pub fn function(&self) -> Option<&'static str> {
        M::call_site(&self.site).map(|site| site.function)
    }

    /// The rendered text.
    pub fn message(&self) -> &'a str {
        self.message
    }
}

impl<M: SourceMode> Clone for Record<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: SourceMode> Copy for Record<'_, M> {}

impl<M: SourceMode> fmt::Debug for Record<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("level", &self.level)
            .field("site", &self.site)
            .field("message", &self.message)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::{CallSite, WithSource, WithoutSource};

    #[test]
    fn test_record_with_source_exposes_site() {
        let site = CallSite::new("src/main.rs", 42, "app::main");
        let record = Record::<WithSource>::new(Level::Warn, site, "low battery");

        assert_eq!(record.level(), Level::Warn);
        assert_eq!(record.file(), Some("src/main.rs"));
        assert_eq!(record.line(), Some(42));
        assert_eq!(record.function(), Some("app::main"));
        assert_eq!(record.message(), "low battery");
    }

    #[test]
    fn test_record_without_source_has_no_site() {
        let record = Record::<WithoutSource>::new(Level::Info, (), "boot");

        assert_eq!(record.file(), None);
        assert_eq!(record.line(), None);
        assert_eq!(record.function(), None);
        assert_eq!(record.message(), "boot");
    }
}
