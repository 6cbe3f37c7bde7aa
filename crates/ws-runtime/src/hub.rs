//! Fan-out of poll results to subscribers.
//!
//! Any number of callbacks may subscribe to each series domain. The
//! [`Subscription`] guard removes its callback explicitly or on drop, and once
//! removal returns the callback is never invoked again, even if a publish was
//! in flight on another thread.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use ws_core::model::{DataEnvelope, EnergyPoint, EnvironmentalPoint, OccupancyPoint, SeriesDomain};

/// One regenerated series, published under its domain's topic.
#[derive(Debug, Clone, PartialEq)]
pub enum PollUpdate {
    Occupancy(DataEnvelope<Vec<OccupancyPoint>>),
    Environmental(DataEnvelope<Vec<EnvironmentalPoint>>),
    Energy(DataEnvelope<Vec<EnergyPoint>>),
}

impl PollUpdate {
    pub fn domain(&self) -> SeriesDomain {
        match self {
            Self::Occupancy(_) => SeriesDomain::Occupancy,
            Self::Environmental(_) => SeriesDomain::Environmental,
            Self::Energy(_) => SeriesDomain::Energy,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Occupancy(e) => e.data.len(),
            Self::Environmental(e) => e.data.len(),
            Self::Energy(e) => e.data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

type Callback = Arc<dyn Fn(&PollUpdate) + Send + Sync>;

struct Slot {
    id: u64,
    // Held for the duration of each invocation; cleared on unsubscribe.
    active: Mutex<bool>,
    callback: Callback,
}

#[derive(Default)]
struct HubInner {
    slots: Mutex<HashMap<SeriesDomain, Vec<Arc<Slot>>>>,
    next_id: AtomicU64,
}

/// Cloneable handle; clones share one subscriber table.
#[derive(Clone, Default)]
pub struct SubscriptionHub {
    inner: Arc<HubInner>,
}

impl SubscriptionHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` for updates of `domain`.
    ///
    /// Callbacks run on the publishing task and must not drop or unsubscribe
    /// their own [`Subscription`]; doing so deadlocks.
    pub fn subscribe<F>(&self, domain: SeriesDomain, callback: F) -> Subscription
    where
        F: Fn(&PollUpdate) + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let slot = Arc::new(Slot {
            id,
            active: Mutex::new(true),
            callback: Arc::new(callback),
        });
        self.inner
            .slots
            .lock()
            .expect("subscription hub lock poisoned")
            .entry(domain)
            .or_default()
            .push(slot.clone());
        ws_debug!(poll, topic = domain.topic(), id, "subscribed");
        Subscription {
            hub: Arc::downgrade(&self.inner),
            domain,
            slot: Some(slot),
        }
    }

    /// Deliver `update` to every live subscriber of its domain and return how
    /// many were called.
    pub fn publish(&self, update: &PollUpdate) -> usize {
        let domain = update.domain();
        let targets: Vec<Arc<Slot>> = self
            .inner
            .slots
            .lock()
            .expect("subscription hub lock poisoned")
            .get(&domain)
            .cloned()
            .unwrap_or_default();

        let mut delivered = 0;
        for slot in targets {
            let active = slot.active.lock().expect("subscription slot lock poisoned");
            if *active {
                (slot.callback)(update);
                delivered += 1;
            }
        }
        delivered
    }

    pub fn subscriber_count(&self, domain: SeriesDomain) -> usize {
        self.inner
            .slots
            .lock()
            .expect("subscription hub lock poisoned")
            .get(&domain)
            .map_or(0, Vec::len)
    }
}

impl std::fmt::Debug for SubscriptionHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slots = self.inner.slots.lock().expect("subscription hub lock poisoned");
        let counts: HashMap<_, _> = slots.iter().map(|(d, v)| (d.topic(), v.len())).collect();
        f.debug_struct("SubscriptionHub")
            .field("subscribers", &counts)
            .finish()
    }
}

/// Guard for one registered callback.
#[must_use = "dropping a Subscription unsubscribes it immediately"]
pub struct Subscription {
    hub: std::sync::Weak<HubInner>,
    domain: SeriesDomain,
    slot: Option<Arc<Slot>>,
}

impl Subscription {
    pub fn domain(&self) -> SeriesDomain {
        self.domain
    }

    /// Remove the callback. Blocks until an in-flight invocation finishes.
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        let Some(slot) = self.slot.take() else {
            return;
        };
        if let Some(hub) = self.hub.upgrade() {
            let mut slots = hub.slots.lock().expect("subscription hub lock poisoned");
            if let Some(list) = slots.get_mut(&self.domain) {
                list.retain(|s| s.id != slot.id);
            }
        }
        *slot.active.lock().expect("subscription slot lock poisoned") = false;
        ws_debug!(poll, topic = self.domain.topic(), id = slot.id, "unsubscribed");
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("domain", &self.domain)
            .field("id", &self.slot.as_ref().map(|s| s.id))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use chrono::{TimeZone, Utc};

    use super::*;

    fn occupancy_update() -> PollUpdate {
        let ts = Utc.with_ymd_and_hms(2026, 3, 2, 10, 0, 0).unwrap();
        PollUpdate::Occupancy(DataEnvelope::new(Vec::new(), ts))
    }

    fn counter(hub: &SubscriptionHub, domain: SeriesDomain) -> (Arc<AtomicUsize>, Subscription) {
        let hits = Arc::new(AtomicUsize::new(0));
        let h = hits.clone();
        let sub = hub.subscribe(domain, move |_| {
            h.fetch_add(1, Ordering::SeqCst);
        });
        (hits, sub)
    }

    #[test]
    fn every_subscriber_of_a_topic_is_called() {
        let hub = SubscriptionHub::new();
        let (a, _sa) = counter(&hub, SeriesDomain::Occupancy);
        let (b, _sb) = counter(&hub, SeriesDomain::Occupancy);
        let (c, _sc) = counter(&hub, SeriesDomain::Energy);

        assert_eq!(hub.publish(&occupancy_update()), 2);
        assert_eq!(a.load(Ordering::SeqCst), 1);
        assert_eq!(b.load(Ordering::SeqCst), 1);
        assert_eq!(c.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let hub = SubscriptionHub::new();
        let (a, sa) = counter(&hub, SeriesDomain::Occupancy);
        let (b, _sb) = counter(&hub, SeriesDomain::Occupancy);

        sa.unsubscribe();
        assert_eq!(hub.subscriber_count(SeriesDomain::Occupancy), 1);
        hub.publish(&occupancy_update());
        assert_eq!(a.load(Ordering::SeqCst), 0);
        assert_eq!(b.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dropping_the_guard_unsubscribes() {
        let hub = SubscriptionHub::new();
        let (a, sa) = counter(&hub, SeriesDomain::Occupancy);
        drop(sa);
        assert_eq!(hub.publish(&occupancy_update()), 0);
        assert_eq!(a.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn guard_outliving_hub_is_harmless() {
        let hub = SubscriptionHub::new();
        let (_a, sa) = counter(&hub, SeriesDomain::Energy);
        drop(hub);
        sa.unsubscribe();
    }

    #[test]
    fn update_reports_its_domain() {
        let update = occupancy_update();
        assert_eq!(update.domain(), SeriesDomain::Occupancy);
        assert!(update.is_empty());
    }
}
