//! Order lifecycle operations

pub mod queue;
pub mod stats;

pub use queue::OrderQueue;
pub use stats::DashboardStats;

use crate::db::models::{CatalogItem, Order, OrderPatch};
use crate::db::repository::OrderRepository;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use shared::models::{OrderStatus, PaymentStatus, Role};
use shared::util::now_millis;
use shared::{AppError, AppResult, ErrorCode};

/// Order operations shared by the customer, staff, and admin screens
#[derive(Clone)]
pub struct OrderService {
    repo: OrderRepository,
}

impl OrderService {
    pub fn new(repo: OrderRepository) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &OrderRepository {
        &self.repo
    }

    /// Create an order for one confirmed catalog item
    ///
    /// The item name is captured as a string snapshot and the total is
    /// the item price; later catalog edits never touch the order.
    pub async fn place_order(&self, customer_name: &str, item: &CatalogItem) -> AppResult<Order> {
        validate_required_text(customer_name, "customer name", MAX_NAME_LEN)?;
        if !item.price.is_finite() || item.price < 0.0 {
            return Err(AppError::with_message(
                ErrorCode::InvalidPrice,
                format!("price must be non-negative, got {}", item.price),
            ));
        }

        let order = Order {
            id: None,
            created_at: now_millis(),
            status: OrderStatus::Pending,
            payment_status: PaymentStatus::Unpaid,
            items: vec![item.name.clone()],
            total: item.price,
            customer_name: customer_name.trim().to_string(),
            reviewed: false,
        };
        Ok(self.repo.create(order).await?)
    }

    /// Persist a requested status
    ///
    /// Any target is accepted; a request outside the standard
    /// transition table is logged but not refused, matching the
    /// screens' behavior. The persisted status is exactly the requested
    /// one.
    pub async fn set_status(&self, order_id: &str, target: OrderStatus) -> AppResult<Order> {
        let current = self.require(order_id).await?;
        if current.status != target && !current.status.can_transition_to(target) {
            tracing::warn!(
                order = %order_id,
                from = %current.status,
                to = %target,
                "status change outside the standard flow"
            );
        }
        Ok(self
            .repo
            .update_fields(order_id, OrderPatch::with_status(target))
            .await?)
    }

    /// Customer self-service payment ("Pay Now")
    pub async fn pay_now(&self, order_id: &str) -> AppResult<Order> {
        self.set_payment_status(Role::Customer, order_id, PaymentStatus::Paid)
            .await
    }

    /// Toggle payment status
    ///
    /// Customers may only move Unpaid → Paid; admins may set either
    /// direction (manual correction / refund bookkeeping). Payment is
    /// deliberately not coupled to order status.
    pub async fn set_payment_status(
        &self,
        role: Role,
        order_id: &str,
        target: PaymentStatus,
    ) -> AppResult<Order> {
        let current = self.require(order_id).await?;
        match role {
            Role::Admin => {}
            Role::Customer => {
                if target != PaymentStatus::Paid || current.payment_status.is_paid() {
                    return Err(AppError::with_message(
                        ErrorCode::PaymentNotAllowed,
                        "Customers can only pay an unpaid order",
                    ));
                }
            }
            Role::Staff => {
                return Err(AppError::permission_denied(
                    "Staff cannot change payment status",
                ));
            }
        }
        Ok(self
            .repo
            .update_fields(order_id, OrderPatch::with_payment_status(target))
            .await?)
    }

    /// All orders, newest first (admin order list)
    pub async fn all(&self) -> AppResult<Vec<Order>> {
        Ok(self.repo.find_all().await?)
    }

    /// One customer's order history, newest first
    pub async fn history_for(&self, customer_name: &str) -> AppResult<Vec<Order>> {
        Ok(self.repo.find_by_customer(customer_name).await?)
    }

    async fn require(&self, order_id: &str) -> AppResult<Order> {
        self.repo.find_by_id(order_id).await?.ok_or_else(|| {
            AppError::with_message(ErrorCode::OrderNotFound, format!("Order {order_id} not found"))
        })
    }
}
