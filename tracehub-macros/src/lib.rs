//! # tracehub-macros
//!
//! Procedural macros for tracehub.
//!
//! Use them through the `tracehub` facade with its `macros` feature; the
//! generated code refers to `::tracehub` paths.

#![warn(missing_docs)]

use proc_macro::TokenStream;

mod subscriber;

/// Turns a plain function into a subscriber type.
///
/// The function keeps its name but becomes a unit struct implementing
/// `tracehub::Subscriber`. Its parameters decide the metadata mode:
///
/// - `(level, file, line, function, message)` → `Subscriber<WithSource>`
/// - `(level, message)` → `Subscriber<WithoutSource>`
///
/// ```rust,ignore
/// #[tracehub::subscriber]
/// fn serial_console(level: Level, file: &str, line: u32, function: &str, message: &str) {
///     println!("{level} {file}:{line} {function}: {message}");
/// }
///
/// tracer.register(serial_console);
/// ```
///
/// # Options
///
/// - `name = "Ident"`: name of the generated struct (defaults to the function name)
/// - `collect`: also submit the subscriber to `tracehub`'s collected
///   subscribers. Requires the `inventory` feature of `tracehub`, and the
///   parameter shape must match `tracehub::Mode`: five parameters while the
///   `source` feature is enabled, two otherwise. A mismatch is a compile
///   error naming the expected parameters.
#[proc_macro_attribute]
pub fn subscriber(attr: TokenStream, item: TokenStream) -> TokenStream {
    subscriber::subscriber_impl(attr, item)
}
