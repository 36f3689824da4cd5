//! Call-site metadata and the build-time metadata mode.
//!
//! A dispatcher operates in exactly one mode, picked through its
//! [`SourceMode`] type parameter:
//!
//! - [`WithSource`]: every record carries a [`CallSite`]
//! - [`WithoutSource`]: records carry `()` and subscribers only see the
//!   level and the text

use std::fmt::{self, Debug};

/// Where a message was emitted.
///
/// The values are passed through exactly as the caller supplied them; no
/// path normalization or validation happens anywhere in the dispatcher.
///
/// The strings are `&'static str`, which is what `file!()` and the call-site
/// macros produce. A caller holding runtime-owned names (a script engine, a
/// bridged log source) has to intern or leak them before emitting; records
/// are `Copy` and subscribers may keep the site, so it cannot borrow from the
/// emitter's stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    /// Source file name.
    pub file: &'static str,
    /// Source line.
    pub line: u32,
    /// Enclosing function.
    pub function: &'static str,
}

impl CallSite {
    /// Create a call site from its parts.
    pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.file, self.line, self.function)
    }
}

/// Selects whether call-site metadata is part of the subscriber contract.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a source mode",
    label = "expected `WithSource` or `WithoutSource`",
    note = "Dispatchers, records and subscribers are parameterized by `WithSource` or `WithoutSource`."
)]
pub trait SourceMode: Send + Sync + 'static {
    /// Metadata carried by each record in this mode.
    type Site: Copy + Debug + Send + Sync + 'static;

    /// Returns the call site, if this mode carries one.
    fn call_site(site: &Self::Site) -> Option<&CallSite>;
}

/// Records carry file, line and function of the emitter.
#[derive(Debug, Clone, Copy, Default)]
pub struct WithSource;

impl SourceMode for WithSource {
    type Site = CallSite;

    #[inline]
    fn call_site(site: &CallSite) -> Option<&CallSite> {
        Some(site)
    }
}

/// Records carry only level and text.
#[derive(Debug, Clone, Copy, Default)]
pub struct WithoutSource;

impl SourceMode for WithoutSource {
    type Site = ();

    #[inline]
    fn call_site(_site: &()) -> Option<&CallSite> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_names_pass_through_once_leaked() {
        let file: &'static str = Box::leak(String::from("scripts/boot.lua").into_boxed_str());
        let function: &'static str = Box::leak(format!("{}::{}", "boot", "init").into_boxed_str());

        let site = CallSite::new(file, 12, function);

        assert_eq!(WithSource::call_site(&site), Some(&site));
        assert_eq!(site.to_string(), "scripts/boot.lua:12 boot::init");
        assert_eq!(WithoutSource::call_site(&()), None);
    }
}
