//! Call-site macros.
//!
//! Every `trace_*!` macro checks the threshold before evaluating its format
//! arguments, then emits through the given tracer with call-site metadata
//! captured at the invocation when the `source` feature is enabled.

/// Call-site metadata for the enclosing macro invocation.
#[cfg(feature = "source")]
#[doc(hidden)]
#[macro_export]
macro_rules! __call_site {
    () => {
        $crate::CallSite::new(::core::file!(), ::core::line!(), $crate::__function!())
    };
}

/// Call-site metadata for the enclosing macro invocation.
#[cfg(not(feature = "source"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __call_site {
    () => {
        ()
    };
}

/// Path of the enclosing function, e.g. `app::radio::transmit`.
#[doc(hidden)]
#[macro_export]
macro_rules! __function {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let name = __type_name_of(__here);
        let name = name.strip_suffix("::__here").unwrap_or(name);
        name.trim_end_matches("::{{closure}}")
    }};
}

/// Emit a message at an explicit level.
///
/// ```rust,ignore
/// trace_emit!(TRACER, Level::Warn, "retry {} of {}", attempt, max);
/// ```
#[macro_export]
macro_rules! trace_emit {
    ($tracer:expr, $level:expr, $($arg:tt)+) => {{
        let __tracer = &$tracer;
        let __level: $crate::Level = $level;
        if __tracer.enabled(__level) {
            __tracer.emit(__level, $crate::__call_site!(), ::core::format_args!($($arg)+));
        }
    }};
}

/// Emit an error message.
#[macro_export]
macro_rules! trace_error {
    ($tracer:expr, $($arg:tt)+) => {
        $crate::trace_emit!($tracer, $crate::Level::Error, $($arg)+)
    };
}

/// Emit a warning message.
#[macro_export]
macro_rules! trace_warn {
    ($tracer:expr, $($arg:tt)+) => {
        $crate::trace_emit!($tracer, $crate::Level::Warn, $($arg)+)
    };
}

/// Emit an information message.
#[macro_export]
macro_rules! trace_info {
    ($tracer:expr, $($arg:tt)+) => {
        $crate::trace_emit!($tracer, $crate::Level::Info, $($arg)+)
    };
}

/// Emit a debug message.
#[macro_export]
macro_rules! trace_debug {
    ($tracer:expr, $($arg:tt)+) => {
        $crate::trace_emit!($tracer, $crate::Level::Debug, $($arg)+)
    };
}

/// Emit a verbose message.
#[macro_export]
macro_rules! trace_verbose {
    ($tracer:expr, $($arg:tt)+) => {
        $crate::trace_emit!($tracer, $crate::Level::Verbose, $($arg)+)
    };
}

/// Declare a process-wide [`Tracer`](crate::Tracer).
///
/// The tracer is a plain `static`: initialised at compile time, never torn
/// down. Prefer passing a tracer owned by the application's top level where
/// that is practical.
///
/// ```rust,ignore
/// tracehub::declare_tracer!(pub TRACER);
///
/// fn main() {
///     TRACER.register(WriterSubscriber::stderr());
///     tracehub::trace_info!(TRACER, "booted");
/// }
/// ```
#[macro_export]
macro_rules! declare_tracer {
    ($(#[$meta:meta])* $vis:vis $name:ident) => {
        $(#[$meta])*
        $vis static $name: $crate::Tracer = $crate::Tracer::new();
    };
}

/// Submits a `#[subscriber(collect)]` struct, checking its shape against the
/// active metadata mode.
#[cfg(all(feature = "inventory", feature = "source"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __collect_subscriber {
    (source, $name:ident) => {
        $crate::inventory::submit! {
            $crate::CollectedSubscriber::new(::core::stringify!($name), &$name)
        }
    };
    (plain, $name:ident) => {
        ::core::compile_error!(::core::concat!(
            "`#[subscriber(collect)]` on `",
            ::core::stringify!($name),
            "` needs `(level, file, line, function, message)` parameters while the `source` feature is enabled"
        ));
    };
}

/// Submits a `#[subscriber(collect)]` struct, checking its shape against the
/// active metadata mode.
#[cfg(all(feature = "inventory", not(feature = "source")))]
#[doc(hidden)]
#[macro_export]
macro_rules! __collect_subscriber {
    (plain, $name:ident) => {
        $crate::inventory::submit! {
            $crate::CollectedSubscriber::new(::core::stringify!($name), &$name)
        }
    };
    (source, $name:ident) => {
        ::core::compile_error!(::core::concat!(
            "`#[subscriber(collect)]` on `",
            ::core::stringify!($name),
            "` needs `(level, message)` parameters while the `source` feature is disabled"
        ));
    };
}

/// Submits a `#[subscriber(collect)]` struct, checking its shape against the
/// active metadata mode.
#[cfg(not(feature = "inventory"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __collect_subscriber {
    ($shape:ident, $name:ident) => {
        ::core::compile_error!("`#[subscriber(collect)]` requires the `inventory` feature of `tracehub`");
    };
}
