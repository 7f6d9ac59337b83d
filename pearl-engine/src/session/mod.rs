//! Per-session view state
//!
//! Each screen owns a [`ScreenCache`] copy of one collection for its
//! mount duration, refreshed explicitly and mutated optimistically
//! through the [`MutationCoordinator`]. User-facing outcomes flow
//! through the [`Notifier`].

pub mod cache;
pub mod mutation;
pub mod notify;

pub use cache::{CacheState, ScreenCache};
pub use mutation::{MutationCoordinator, MutationOutcome};
pub use notify::{GENERIC_WRITE_ERROR, Notice, NoticeLevel, Notifier};

use crate::db::models::{CatalogItem, LeaveRequest, Order, Review};

/// Entities addressable by their store id
pub trait Keyed {
    /// Full "table:id" of the entity, if persisted
    fn key(&self) -> Option<String>;
}

impl Keyed for Order {
    fn key(&self) -> Option<String> {
        Order::key(self)
    }
}

impl Keyed for CatalogItem {
    fn key(&self) -> Option<String> {
        CatalogItem::key(self)
    }
}

impl Keyed for LeaveRequest {
    fn key(&self) -> Option<String> {
        LeaveRequest::key(self)
    }
}

impl Keyed for Review {
    fn key(&self) -> Option<String> {
        Review::key(self)
    }
}
