//! Change notification fan-out.
//!
//! Publishers never block on subscribers and never fail: a subscriber
//! whose receiver is gone is dropped from the list on the next publish.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Mutex;

use tracing::{debug, trace};

use libvitrin_core::ContentFile;

/// A change notification carried between surfaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// A namespaced cache entry changed (the storage signal)
    CacheKeyChanged { key: String },
    /// A full content file snapshot was saved locally
    ContentSaved { file: ContentFile },
    /// Periodic freshness tick
    Tick,
    /// The admin surface finished publishing to the Content Store
    PublishCompleted,
    /// Controllers should stop their event loops
    Shutdown,
}

/// Broadcast hub for [`SyncEvent`]s
#[derive(Default)]
pub struct SyncBridge {
    subscribers: Mutex<Vec<Sender<SyncEvent>>>,
}

impl SyncBridge {
    pub fn new() -> Self {
        SyncBridge::default()
    }

    /// Register a new subscriber and return its receiving end
    pub fn subscribe(&self) -> Receiver<SyncEvent> {
        let (tx, rx) = channel();
        self.subscribers.lock().unwrap_or_else(|e| e.into_inner()).push(tx);
        rx
    }

    /// Deliver an event to every live subscriber, pruning dead ones
    pub fn publish(&self, event: SyncEvent) {
        let mut subscribers = self.subscribers.lock().unwrap_or_else(|e| e.into_inner());
        let before = subscribers.len();
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        if subscribers.len() < before {
            debug!(
                dropped = before - subscribers.len(),
                "pruned disconnected subscribers"
            );
        }
        trace!(?event, delivered = subscribers.len(), "published");
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_reaches_every_subscriber() {
        let bridge = SyncBridge::new();
        let rx1 = bridge.subscribe();
        let rx2 = bridge.subscribe();

        bridge.publish(SyncEvent::Tick);
        assert_eq!(rx1.try_recv().unwrap(), SyncEvent::Tick);
        assert_eq!(rx2.try_recv().unwrap(), SyncEvent::Tick);
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let bridge = SyncBridge::new();
        let rx = bridge.subscribe();
        drop(bridge.subscribe());

        bridge.publish(SyncEvent::PublishCompleted);
        assert_eq!(bridge.subscriber_count(), 1);
        assert_eq!(rx.try_recv().unwrap(), SyncEvent::PublishCompleted);
    }
}
