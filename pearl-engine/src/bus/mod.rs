//! Store change broadcast
//!
//! Every successful repository write publishes a [`StoreEvent`] here.
//! Subscribers (the live staff queue, dashboards) treat an event as an
//! invalidation signal and re-fetch their snapshot; the event itself
//! carries no entity data.

use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::sync::broadcast;

/// Capacity of the broadcast channel
const CHANNEL_CAPACITY: usize = 1024;

/// The four store collections
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    CatalogItems,
    Orders,
    LeaveRequests,
    Reviews,
}

impl Collection {
    /// Table name in the store
    pub fn table(self) -> &'static str {
        match self {
            Collection::CatalogItems => "catalog_item",
            Collection::Orders => "orders",
            Collection::LeaveRequests => "leave_request",
            Collection::Reviews => "review",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.table())
    }
}

/// What happened to the record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChangeAction {
    Created,
    Updated,
    Deleted,
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ChangeAction::Created => "created",
            ChangeAction::Updated => "updated",
            ChangeAction::Deleted => "deleted",
        };
        write!(f, "{label}")
    }
}

/// A single store change notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreEvent {
    pub collection: Collection,
    pub action: ChangeAction,
    /// Full "table:id" of the affected record
    pub id: String,
}

/// Change bus - broadcasts store writes to interested subscribers
#[derive(Debug, Clone)]
pub struct ChangeBus {
    tx: broadcast::Sender<StoreEvent>,
}

impl ChangeBus {
    pub fn new() -> Self {
        Self::with_capacity(CHANNEL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Subscribe to store changes
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.tx.subscribe()
    }

    /// Publish a change; a send with no live subscribers is not an error
    pub fn publish(&self, event: StoreEvent) {
        tracing::trace!(
            collection = %event.collection,
            action = %event.action,
            id = %event.id,
            "store change"
        );
        let _ = self.tx.send(event);
    }

    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for ChangeBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn events_reach_subscribers() {
        let bus = ChangeBus::new();
        let mut rx = bus.subscribe();
        bus.publish(StoreEvent {
            collection: Collection::Orders,
            action: ChangeAction::Updated,
            id: "orders:abc".into(),
        });
        let event = rx.recv().await.unwrap();
        assert_eq!(event.collection, Collection::Orders);
        assert_eq!(event.action, ChangeAction::Updated);
        assert_eq!(event.id, "orders:abc");
    }

    #[tokio::test]
    async fn publish_without_subscribers_is_silent() {
        let bus = ChangeBus::new();
        assert_eq!(bus.receiver_count(), 0);
        bus.publish(StoreEvent {
            collection: Collection::Reviews,
            action: ChangeAction::Created,
            id: "review:r1".into(),
        });
    }
}
