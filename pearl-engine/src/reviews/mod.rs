//! Review gate
//!
//! A review may be attached to an order only once, and only while the
//! order is Delivered. Submission is two separate store writes (create
//! the review, flip the order's `reviewed` flag); if the flag update
//! fails the created review is removed again so the store never holds a
//! review for an order that still reports itself unreviewed.

use crate::db::models::{Order, OrderPatch, Review};
use crate::db::repository::{OrderRepository, ReviewRepository};
use crate::utils::validation::MAX_NOTE_LEN;
use shared::models::OrderStatus;
use shared::util::now_millis;
use shared::{AppError, AppResult, ErrorCode};

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

#[derive(Clone)]
pub struct ReviewService {
    reviews: ReviewRepository,
    orders: OrderRepository,
}

impl ReviewService {
    pub fn new(reviews: ReviewRepository, orders: OrderRepository) -> Self {
        Self { reviews, orders }
    }

    /// The gate: delivered and not yet reviewed
    ///
    /// Checks the order's current status only, not its transition
    /// history.
    pub fn can_review(order: &Order) -> bool {
        order.status == OrderStatus::Delivered && !order.reviewed
    }

    /// Create a review for `order` and flip its `reviewed` flag
    ///
    /// Validation failures are raised before anything is written. The
    /// two writes are separate store calls; a failed flag update
    /// triggers a compensating delete of the just-created review.
    pub async fn submit_review(
        &self,
        order: &Order,
        rating: i32,
        comment: &str,
    ) -> AppResult<Review> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(AppError::with_message(
                ErrorCode::InvalidRating,
                "Please select a rating between 1 and 5.",
            )
            .with_detail("rating", rating));
        }
        if comment.len() > MAX_NOTE_LEN {
            return Err(AppError::validation(format!(
                "comment is too long ({} chars, max {MAX_NOTE_LEN})",
                comment.len()
            )));
        }
        if order.reviewed {
            return Err(AppError::new(ErrorCode::OrderAlreadyReviewed));
        }
        if order.status != OrderStatus::Delivered {
            return Err(AppError::with_message(
                ErrorCode::ReviewNotAllowed,
                "Only delivered orders can be reviewed",
            )
            .with_detail("status", order.status.as_str()));
        }

        let order_ref = order
            .id
            .clone()
            .ok_or_else(|| AppError::invalid_request("Order has not been persisted"))?;
        let order_key = order_ref.to_string();

        let review = Review {
            id: None,
            order_id: order_ref,
            customer_name: order.customer_name.clone(),
            rating,
            comment: comment.trim().to_string(),
            created_at: now_millis(),
            dish_name: order.items.first().cloned().unwrap_or_default(),
        };
        let created = self.reviews.create(review).await?;

        if let Err(err) = self
            .orders
            .update_fields(&order_key, OrderPatch::with_reviewed(true))
            .await
        {
            // The flag never flipped, so the review must not stay.
            if let Some(review_key) = created.key() {
                if let Err(cleanup_err) = self.reviews.delete(&review_key).await {
                    tracing::error!(
                        review = %review_key,
                        order = %order_key,
                        error = %cleanup_err,
                        "orphan review left behind after failed flag update"
                    );
                }
            }
            return Err(err.into());
        }

        Ok(created)
    }

    /// All reviews, newest first (admin review list)
    pub async fn all(&self) -> AppResult<Vec<Review>> {
        Ok(self.reviews.find_all().await?)
    }

    /// Reviews referencing one order
    pub async fn for_order(&self, order_id: &str) -> AppResult<Vec<Review>> {
        Ok(self.reviews.find_by_order(order_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::PaymentStatus;

    fn order(status: OrderStatus, reviewed: bool) -> Order {
        Order {
            id: None,
            created_at: now_millis(),
            status,
            payment_status: PaymentStatus::Paid,
            items: vec!["Tiramisu".to_string()],
            total: 8.50,
            customer_name: "Jane Doe".to_string(),
            reviewed,
        }
    }

    #[test]
    fn only_delivered_unreviewed_orders_pass_the_gate() {
        assert!(ReviewService::can_review(&order(OrderStatus::Delivered, false)));
        assert!(!ReviewService::can_review(&order(OrderStatus::Delivered, true)));
        assert!(!ReviewService::can_review(&order(OrderStatus::Pending, false)));
        assert!(!ReviewService::can_review(&order(OrderStatus::OutForDelivery, false)));
        assert!(!ReviewService::can_review(&order(OrderStatus::Cancelled, false)));
    }
}
