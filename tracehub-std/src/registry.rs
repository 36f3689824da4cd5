//! Fixed-capacity subscriber registry.
//!
//! Slots are claimed in order and never released. Registration looks for the
//! first empty slot; iteration walks the occupied slots in slot order, which
//! is registration order.

use std::{fmt, sync::OnceLock};
use tracehub_core::{RegisterError, SourceMode, Subscriber};

/// Ordered, bounded set of subscribers.
///
/// Every slot is a `OnceLock`, so registering takes `&self` and a registry
/// can sit in a `static`. Readers never block, which lets a subscriber emit
/// through the same dispatcher while it is being notified.
pub struct SubscriberRegistry<M: SourceMode, const N: usize> {
    slots: [OnceLock<Box<dyn Subscriber<M>>>; N],
}

impl<M: SourceMode, const N: usize> SubscriberRegistry<M, N> {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            slots: [const { OnceLock::new() }; N],
        }
    }

    /// Insert `subscriber` into the first empty slot.
    ///
    /// Returns the slot index, or `RegistryFull` without touching any slot.
    pub fn try_register<S: Subscriber<M>>(&self, subscriber: S) -> Result<usize, RegisterError> {
        let mut pending: Box<dyn Subscriber<M>> = Box::new(subscriber);
        for (index, slot) in self.slots.iter().enumerate() {
            match slot.set(pending) {
                Ok(()) => return Ok(index),
                // occupied, possibly by a concurrent registration
                Err(rejected) => pending = rejected,
            }
        }
        Err(RegisterError::RegistryFull { capacity: N })
    }

    /// Iterate over registered subscribers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Subscriber<M>> {
        self.slots
            .iter()
            .filter_map(|slot| slot.get())
            .map(|subscriber| &**subscriber)
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.get().is_some()).count()
    }

    /// Check if no subscriber is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fixed number of slots.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Check if every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.len() == N
    }
}

impl<M: SourceMode, const N: usize> Default for SubscriberRegistry<M, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: SourceMode, const N: usize> fmt::Debug for SubscriberRegistry<M, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriberRegistry")
            .field("len", &self.len())
            .field("capacity", &N)
            .finish()
    }
}
