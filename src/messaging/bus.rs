//! Broadcast of wizard events to observers
//!
//! Every observer gets its own unbounded channel. Observers that drop their
//! receiver are forgotten on the next publish.

use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver, Sender, TrySendError};
use parking_lot::RwLock;
use tracing::debug;

use super::events::WizardEvent;

/// Handle returned by [`EventBus::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(usize);

struct Registry<S> {
    next_id: usize,
    senders: Vec<(SubscriberId, Sender<WizardEvent<S>>)>,
}

/// Fan-out of [`WizardEvent`]s
///
/// Clones share one registry, so a host can hand a clone to the controller
/// and keep subscribing through its own.
pub struct EventBus<S> {
    registry: Arc<RwLock<Registry<S>>>,
}

impl<S: Clone> EventBus<S> {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(RwLock::new(Registry {
                next_id: 0,
                senders: Vec::new(),
            })),
        }
    }

    /// Register an observer
    pub fn subscribe(&self) -> (Receiver<WizardEvent<S>>, SubscriberId) {
        let (tx, rx) = unbounded();

        let mut registry = self.registry.write();
        let id = SubscriberId(registry.next_id);
        registry.next_id += 1;
        registry.senders.push((id, tx));

        (rx, id)
    }

    pub fn unsubscribe(&self, id: SubscriberId) {
        self.registry
            .write()
            .senders
            .retain(|(subscriber, _)| *subscriber != id);
    }

    /// Send `event` to every live observer
    ///
    /// Returns how many observers received it. Observers whose receiver is
    /// gone are removed.
    pub fn publish(&self, event: WizardEvent<S>) -> usize {
        let mut registry = self.registry.write();
        registry.senders.retain(|(id, sender)| {
            match sender.try_send(event.clone()) {
                Err(TrySendError::Disconnected(_)) => {
                    debug!(?id, "Observer went away, unsubscribing");
                    false
                }
                Ok(()) | Err(TrySendError::Full(_)) => true,
            }
        });
        registry.senders.len()
    }

    /// Observers registered right now
    pub fn subscriber_count(&self) -> usize {
        self.registry.read().senders.len()
    }

    pub fn clear(&self) {
        self.registry.write().senders.clear();
    }
}

impl<S: Clone> Default for EventBus<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for EventBus<S> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<S> std::fmt::Debug for EventBus<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.registry.read().senders.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::WizardStepPlacement;

    #[test]
    fn test_unsubscribe_removes_only_that_observer() {
        let bus: EventBus<u32> = EventBus::new();
        let (_first, first_id) = bus.subscribe();
        let (second, second_id) = bus.subscribe();
        assert_ne!(first_id, second_id);

        bus.unsubscribe(first_id);
        assert_eq!(bus.subscriber_count(), 1);

        assert_eq!(bus.publish(WizardEvent::Finished), 1);
        assert_eq!(second.try_recv(), Ok(WizardEvent::Finished));
    }

    #[test]
    fn test_every_observer_receives_transition() {
        let bus = EventBus::new();
        let (a, _) = bus.subscribe();
        let (b, _) = bus.subscribe();

        let event = WizardEvent::WentToNextStep {
            step: 2u32,
            placement: WizardStepPlacement::Last,
        };
        assert_eq!(bus.publish(event.clone()), 2);

        assert_eq!(a.try_recv(), Ok(event.clone()));
        assert_eq!(b.try_recv(), Ok(event));
    }

    #[test]
    fn test_dropped_observer_is_forgotten() {
        let bus: EventBus<u32> = EventBus::new();
        let (kept, _) = bus.subscribe();

        for _ in 0..100 {
            let (gone, _) = bus.subscribe();
            drop(gone);
            bus.publish(WizardEvent::Canceled);
        }

        assert_eq!(bus.subscriber_count(), 1);
        assert_eq!(kept.try_iter().count(), 100);
    }

    #[test]
    fn test_publish_without_observers() {
        let bus: EventBus<u32> = EventBus::default();
        assert_eq!(bus.publish(WizardEvent::Finished), 0);
    }

    #[test]
    fn test_clones_share_observers() {
        let bus: EventBus<u32> = EventBus::new();
        let handed_out = bus.clone();
        let (rx, _) = bus.subscribe();

        handed_out.publish(WizardEvent::Canceled);
        assert_eq!(rx.try_recv(), Ok(WizardEvent::Canceled));

        handed_out.clear();
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_events_cross_threads() {
        let bus: EventBus<String> = EventBus::new();
        let (rx, _id) = bus.subscribe();

        let observer = std::thread::spawn(move || rx.recv().map(|event| event.is_terminal()));

        bus.publish(WizardEvent::Finished);
        assert_eq!(observer.join().unwrap(), Ok(true));
    }
}
