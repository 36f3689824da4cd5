//! Standard subscriber implementations.

pub mod filter;
#[cfg(feature = "tracing")]
pub mod tracing;
pub mod writer;

pub use filter::FilterSubscriber;
#[cfg(feature = "tracing")]
pub use self::tracing::TracingSubscriber;
pub use writer::WriterSubscriber;
