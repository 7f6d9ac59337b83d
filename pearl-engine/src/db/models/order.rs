//! Order Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use shared::models::{OrderStatus, PaymentStatus};
use surrealdb::RecordId;

/// Order ID type
pub type OrderId = RecordId;

/// Order entity
///
/// `items` holds name snapshots captured at order time, not references
/// into the live catalog. `reviewed` flips to true exactly once, when a
/// review is attached (see the review gate).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<OrderId>,
    /// Creation timestamp (UTC milliseconds)
    pub created_at: i64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    pub items: Vec<String>,
    pub total: f64,
    pub customer_name: String,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub reviewed: bool,
}

impl Order {
    /// Full "table:id" string of this order, if persisted
    pub fn key(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_string())
    }
}

/// Partial-field order update, applied as a store merge
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed: Option<bool>,
}

impl OrderPatch {
    pub fn with_status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn with_payment_status(payment_status: PaymentStatus) -> Self {
        Self {
            payment_status: Some(payment_status),
            ..Default::default()
        }
    }

    pub fn with_reviewed(reviewed: bool) -> Self {
        Self {
            reviewed: Some(reviewed),
            ..Default::default()
        }
    }
}
