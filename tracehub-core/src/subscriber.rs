//! # Subscribers
//!
//! A subscriber is whatever the emitting code does not know about: a serial
//! console, a syslog forwarder, an MQTT bridge. The dispatcher renders a
//! message once and hands the same [`Record`] to every subscriber in
//! registration order.
//!
//! Any `Fn(&Record<'_, M>)` closure or function is a subscriber. Types that
//! carry state implement the trait directly.
//!
//! # Contract
//!
//! - Invoked synchronously on the emitter's stack; a slow subscriber delays
//!   the emitter and every subscriber registered after it.
//! - Must not assume exclusive access to the dispatcher; emitting from inside
//!   `on_record` is allowed and nests.
//! - Failures inside a subscriber are the subscriber's business. The trait
//!   returns nothing so there is nothing for the dispatcher to propagate.

use crate::{level::Level, record::Record, site::SourceMode};

/// Receives every message that passes the dispatcher's threshold.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Subscriber` for `{M}`",
    label = "missing `Subscriber` implementation",
    note = "Subscribers implement `on_record`, or are closures taking `&Record<'_, {M}>`."
)]
pub trait Subscriber<M: SourceMode>: Send + Sync + 'static {
    /// Called once per delivered message.
    fn on_record(&self, record: &Record<'_, M>);

    /// Only forward records at or below `max`.
    ///
    /// The dispatcher threshold still applies first; this narrows it for one
    /// subscriber.
    fn max_level(self, max: Level) -> LevelFilter<Self>
    where
        Self: Sized,
    {
        LevelFilter {
            subscriber: self,
            max,
        }
    }

    /// Boxes the subscriber.
    fn boxed(self) -> Box<dyn Subscriber<M>>
    where
        Self: Sized,
    {
        Box::new(self)
    }
}

impl<M, F> Subscriber<M> for F
where
    M: SourceMode,
    F: Fn(&Record<'_, M>) + Send + Sync + 'static,
{
    #[inline]
    fn on_record(&self, record: &Record<'_, M>) {
        self(record)
    }
}

impl<M: SourceMode> Subscriber<M> for Box<dyn Subscriber<M>> {
    #[inline]
    fn on_record(&self, record: &Record<'_, M>) {
        (**self).on_record(record)
    }
}

/// Per-subscriber verbosity cap, built by [`Subscriber::max_level`].
#[derive(Debug, Clone)]
pub struct LevelFilter<S> {
    subscriber: S,
    max: Level,
}

impl<S> LevelFilter<S> {
    /// The cap applied to this subscriber.
    pub fn max(&self) -> Level {
        self.max
    }

    /// Unwraps the inner subscriber.
    pub fn into_inner(self) -> S {
        self.subscriber
    }
}

impl<M, S> Subscriber<M> for LevelFilter<S>
where
    M: SourceMode,
    S: Subscriber<M>,
{
    fn on_record(&self, record: &Record<'_, M>) {
        if record.level().passes(self.max) {
            self.subscriber.on_record(record);
        }
    }
}
