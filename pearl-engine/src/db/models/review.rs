//! Review Model

use super::OrderId;
use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Review ID type
pub type ReviewId = RecordId;

/// Review entity
///
/// Created once per order and immutable afterwards; there is no edit or
/// customer-facing delete path. `dish_name` is denormalized from the
/// order's first item at submission time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<ReviewId>,
    #[serde(with = "serde_helpers::record_id")]
    pub order_id: OrderId,
    pub customer_name: String,
    pub rating: i32,
    pub comment: String,
    /// Creation timestamp (UTC milliseconds)
    pub created_at: i64,
    pub dish_name: String,
}

impl Review {
    /// Full "table:id" string of this review, if persisted
    pub fn key(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_string())
    }
}
