//! Subscribers collected across crates with `inventory`.
//!
//! A crate that wants to listen submits a [`CollectedSubscriber`] without
//! knowing where the tracer lives; the application registers everything
//! that was submitted once at startup.
//!
//! ```rust,ignore
//! struct MqttBridge;
//! impl Subscriber<Mode> for MqttBridge { ... }
//!
//! inventory::submit! { CollectedSubscriber::new("mqtt", &MqttBridge) }
//!
//! // in main
//! let accepted = tracehub::register_collected(&TRACER);
//! ```

use crate::Mode;
use tracehub_core::{Record, Subscriber};
use tracehub_std::Dispatcher;

/// A subscriber submitted to the distributed collection.
pub struct CollectedSubscriber {
    name: &'static str,
    subscriber: &'static dyn Subscriber<Mode>,
}

impl CollectedSubscriber {
    /// Create a new collected subscriber entry.
    pub const fn new(name: &'static str, subscriber: &'static dyn Subscriber<Mode>) -> Self {
        Self { name, subscriber }
    }

    /// Name used for ordering and debugging.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

inventory::collect!(CollectedSubscriber);

/// Forwards to a subscriber living in a `static`.
struct StaticSubscriber(&'static dyn Subscriber<Mode>);

impl Subscriber<Mode> for StaticSubscriber {
    fn on_record(&self, record: &Record<'_, Mode>) {
        self.0.on_record(record)
    }
}

/// All submitted subscribers, sorted by name.
///
/// Link order decides the order `inventory` yields entries in, so sorting
/// keeps registration order stable between builds.
pub fn collected() -> Vec<&'static CollectedSubscriber> {
    let mut entries: Vec<&'static CollectedSubscriber> =
        inventory::iter::<CollectedSubscriber>.into_iter().collect();
    entries.sort_by_key(|entry| entry.name);
    entries
}

/// Register every collected subscriber, returning how many found a slot.
pub fn register_collected<const N: usize, const B: usize>(tracer: &Dispatcher<Mode, N, B>) -> usize {
    collected()
        .into_iter()
        .filter(|entry| tracer.try_register(StaticSubscriber(entry.subscriber)).is_ok())
        .count()
}
