// SPDX-License-Identifier: MIT

//! Cross-context change propagation.
//!
//! A publish/subscribe channel keyed by storage-key name. Two delivery
//! scopes mirror the two browser channels:
//!
//! - [`ChangeScope::Persisted`]: emitted automatically on every storage
//!   write/remove. Listeners act on it only for *foreign* origins, because a
//!   tab never receives a storage event for its own write.
//! - [`ChangeScope::Local`]: the explicit same-context custom signal (the
//!   "WOD list updated" event). It never reaches other origins.
//!
//! Events carry no payload; listeners re-read storage. Delivery is
//! synchronous in the publisher's call stack, so subscribers must not hold
//! store locks while publishing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// Identifies one execution context ("tab") on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OriginId(u64);

impl OriginId {
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        OriginId(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Which channel an event travels on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeScope {
    /// A persisted write happened; observable by other contexts.
    Persisted,
    /// An in-process custom signal; observable within the writing context.
    Local,
}

/// "This key changed" — no payload, listeners re-read storage.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    pub key: String,
    pub origin: OriginId,
    pub scope: ChangeScope,
}

impl ChangeEvent {
    /// Whether a listener in context `origin` should react to this event
    /// under the storage-event / custom-signal delivery rules.
    pub fn delivered_to(&self, origin: OriginId) -> bool {
        match self.scope {
            ChangeScope::Persisted => self.origin != origin,
            ChangeScope::Local => self.origin == origin,
        }
    }
}

type Subscriber = Arc<dyn Fn(&ChangeEvent) + Send + Sync>;

/// Synchronous observer registry shared by all contexts over one backend.
#[derive(Default)]
pub struct ChangeBus {
    subscribers: RwLock<Vec<Subscriber>>,
}

impl ChangeBus {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Register a listener for every event on the bus. Listeners filter by
    /// key and origin themselves.
    pub fn subscribe(&self, listener: impl Fn(&ChangeEvent) + Send + Sync + 'static) {
        self.subscribers
            .write()
            .expect("change bus poisoned")
            .push(Arc::new(listener));
    }

    /// Deliver `event` to every subscriber, synchronously.
    pub fn publish(&self, event: &ChangeEvent) {
        // Snapshot first: a listener may write storage and publish again.
        let subscribers = self
            .subscribers
            .read()
            .expect("change bus poisoned")
            .clone();
        for subscriber in subscribers {
            subscriber(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persisted_events_skip_own_origin() {
        let writer = OriginId::next();
        let other = OriginId::next();
        let event = ChangeEvent {
            key: "wods".to_string(),
            origin: writer,
            scope: ChangeScope::Persisted,
        };

        assert!(!event.delivered_to(writer));
        assert!(event.delivered_to(other));
    }

    #[test]
    fn test_local_events_stay_in_origin() {
        let writer = OriginId::next();
        let other = OriginId::next();
        let event = ChangeEvent {
            key: "wods".to_string(),
            origin: writer,
            scope: ChangeScope::Local,
        };

        assert!(event.delivered_to(writer));
        assert!(!event.delivered_to(other));
    }

    #[test]
    fn test_publish_reaches_all_subscribers() {
        let bus = ChangeBus::new();
        let count = Arc::new(std::sync::atomic::AtomicU64::new(0));
        for _ in 0..3 {
            let count = count.clone();
            bus.subscribe(move |_| {
                count.fetch_add(1, Ordering::Relaxed);
            });
        }

        bus.publish(&ChangeEvent {
            key: "users".to_string(),
            origin: OriginId::next(),
            scope: ChangeScope::Persisted,
        });

        assert_eq!(count.load(Ordering::Relaxed), 3);
    }
}
