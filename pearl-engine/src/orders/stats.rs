//! Dashboard aggregates
//!
//! Summation runs in `Decimal` and is converted to `f64` at the edge,
//! rounded to cents.

use crate::db::models::Order;
use rust_decimal::prelude::*;
use shared::models::{OrderStatus, PaymentStatus};

/// Monetary rounding: 2 decimal places, half-up
const DECIMAL_PLACES: u32 = 2;

/// Aggregates shown on the admin dashboard
///
/// Recomputed from scratch over the full order set on every change;
/// O(n) in order count.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DashboardStats {
    /// Sum of totals over paid orders
    pub revenue: f64,
    /// Sum of totals over unpaid orders
    pub amount_due: f64,
    pub total_orders: usize,
    pub pending_orders: usize,
}

impl DashboardStats {
    pub fn compute(orders: &[Order]) -> Self {
        let mut revenue = Decimal::ZERO;
        let mut amount_due = Decimal::ZERO;
        let mut pending_orders = 0;

        for order in orders {
            let total = Decimal::from_f64(order.total).unwrap_or_default();
            match order.payment_status {
                PaymentStatus::Paid => revenue += total,
                PaymentStatus::Unpaid => amount_due += total,
            }
            if order.status == OrderStatus::Pending {
                pending_orders += 1;
            }
        }

        Self {
            revenue: to_cents(revenue),
            amount_due: to_cents(amount_due),
            total_orders: orders.len(),
            pending_orders,
        }
    }
}

fn to_cents(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}
