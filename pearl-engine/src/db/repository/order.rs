//! Order Repository

use super::{BaseRepository, RepoError, RepoResult, parse_id};
use crate::bus::{ChangeAction, ChangeBus, Collection};
use crate::db::models::{Order, OrderPatch};
use shared::models::OrderStatus;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const ORDER_TABLE: &str = "orders";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>, bus: ChangeBus) -> Self {
        Self {
            base: BaseRepository::new(db, bus),
        }
    }

    /// All orders, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM orders ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// One customer's order history, newest first
    pub async fn find_by_customer(&self, customer_name: &str) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM orders WHERE customer_name = $name ORDER BY created_at DESC")
            .bind(("name", customer_name.to_string()))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// The staff preparation queue: Pending and InProgress orders,
    /// oldest first
    pub async fn find_queue(&self) -> RepoResult<Vec<Order>> {
        let statuses = vec![
            OrderStatus::Pending.as_str().to_string(),
            OrderStatus::InProgress.as_str().to_string(),
        ];
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM orders WHERE status IN $statuses ORDER BY created_at ASC")
            .bind(("statuses", statuses))
            .await?
            .take(0)?;
        Ok(orders)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let record_id = parse_id(ORDER_TABLE, id)?;
        let order: Option<Order> = self.base.db().select(record_id).await?;
        Ok(order)
    }

    /// Create a new order; the store assigns the id
    pub async fn create(&self, order: Order) -> RepoResult<Order> {
        let created: Option<Order> = self.base.db().create(ORDER_TABLE).content(order).await?;
        let created =
            created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))?;

        if let Some(key) = created.key() {
            self.base
                .publish(Collection::Orders, ChangeAction::Created, &key);
        }
        Ok(created)
    }

    /// Merge the set fields of `patch` into an existing order
    pub async fn update_fields(&self, id: &str, patch: OrderPatch) -> RepoResult<Order> {
        let record_id = parse_id(ORDER_TABLE, id)?;
        let updated: Option<Order> = self.base.db().update(record_id).merge(patch).await?;
        let updated = updated.ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))?;

        self.base
            .publish(Collection::Orders, ChangeAction::Updated, id);
        Ok(updated)
    }
}
