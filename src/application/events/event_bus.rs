//! Event bus for dispatching domain events to subscribers

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::domain::DomainEvent;

const DEFAULT_CAPACITY: usize = 1024;

/// Broadcast bus carrying committed domain events.
///
/// Services publish here only after the triggering state change has been
/// durably saved, so a subscriber never observes an event for a change that
/// was rolled back. Delivery order follows publish order per publisher; no
/// cross-aggregate ordering is guaranteed.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<DomainEvent>,
    subscriber_count: Arc<AtomicUsize>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            subscriber_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn publish(&self, event: DomainEvent) {
        let event_type = event.event_type();

        match self.sender.send(event) {
            Ok(count) => {
                debug!(event_type, subscribers = count, "Domain event published");
            }
            Err(_) => {
                debug!(event_type, "Domain event published (no subscribers)");
            }
        }
    }

    pub fn subscribe(&self) -> EventSubscriber {
        let receiver = self.sender.subscribe();
        self.subscriber_count.fetch_add(1, Ordering::SeqCst);
        let count = self.subscriber_count.load(Ordering::SeqCst);
        debug!(total = count, "New event subscriber");

        EventSubscriber {
            receiver,
            subscriber_count: self.subscriber_count.clone(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscriber_count.load(Ordering::SeqCst)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Subscriber handle receiving events from the bus.
pub struct EventSubscriber {
    receiver: broadcast::Receiver<DomainEvent>,
    subscriber_count: Arc<AtomicUsize>,
}

impl EventSubscriber {
    /// Receives the next event; `None` once the bus is closed. Lagged
    /// subscribers skip missed events and keep going.
    pub async fn recv(&mut self) -> Option<DomainEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(count)) => {
                    warn!(missed = count, "Event subscriber lagged");
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => {
                    return None;
                }
            }
        }
    }

    /// Non-blocking variant used in tests.
    pub fn try_recv(&mut self) -> Option<DomainEvent> {
        self.receiver.try_recv().ok()
    }
}

impl Drop for EventSubscriber {
    fn drop(&mut self) {
        let prev = self.subscriber_count.fetch_sub(1, Ordering::SeqCst);
        info!(remaining = prev.saturating_sub(1), "Event subscriber disconnected");
    }
}

/// Shared event bus type
pub type SharedEventBus = Arc<EventBus>;

/// Create a shared event bus
pub fn create_event_bus() -> SharedEventBus {
    Arc::new(EventBus::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::events::LocationCreatedEvent;

    #[tokio::test]
    async fn subscriber_receives_published_events_in_order() {
        let bus = create_event_bus();
        let mut subscriber = bus.subscribe();

        bus.publish(DomainEvent::LocationCreated(LocationCreatedEvent::new(
            Some(1),
            "First",
            "Addr 1",
        )));
        bus.publish(DomainEvent::LocationCreated(LocationCreatedEvent::new(
            Some(2),
            "Second",
            "Addr 2",
        )));

        match subscriber.recv().await.unwrap() {
            DomainEvent::LocationCreated(e) => assert_eq!(e.name, "First"),
            other => panic!("unexpected event: {:?}", other),
        }
        match subscriber.recv().await.unwrap() {
            DomainEvent::LocationCreated(e) => assert_eq!(e.name, "Second"),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn subscriber_count_tracks_subscriptions() {
        let bus = create_event_bus();
        assert_eq!(bus.subscriber_count(), 0);
        let first = bus.subscribe();
        let second = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 2);
        drop(first);
        drop(second);
        assert_eq!(bus.subscriber_count(), 0);
    }
}
