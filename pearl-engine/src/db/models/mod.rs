//! Entity models matching the store collections

pub mod serde_helpers;

pub mod catalog_item;
pub mod leave_request;
pub mod order;
pub mod review;

// Re-exports
pub use catalog_item::{
    CatalogItem, CatalogItemCreate, CatalogItemId, CatalogItemUpdate, PLACEHOLDER_IMAGE,
};
pub use leave_request::{LeavePatch, LeaveRequest, LeaveRequestId};
pub use order::{Order, OrderId, OrderPatch};
pub use review::{Review, ReviewId};
