//! Review Repository
//!
//! Reviews are created once and never edited. The delete operation
//! exists only as the compensating action of the review gate's
//! two-step submission.

use super::{BaseRepository, RepoError, RepoResult, parse_id};
use crate::bus::{ChangeAction, ChangeBus, Collection};
use crate::db::models::Review;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const REVIEW_TABLE: &str = "review";

#[derive(Clone)]
pub struct ReviewRepository {
    base: BaseRepository,
}

impl ReviewRepository {
    pub fn new(db: Surreal<Db>, bus: ChangeBus) -> Self {
        Self {
            base: BaseRepository::new(db, bus),
        }
    }

    /// All reviews, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Review>> {
        let reviews: Vec<Review> = self
            .base
            .db()
            .query("SELECT * FROM review ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(reviews)
    }

    /// Reviews referencing one order (the gate keeps this at most one)
    pub async fn find_by_order(&self, order_id: &str) -> RepoResult<Vec<Review>> {
        // order_id is stored in its "table:id" string form; parse first
        // to validate and normalize the reference
        let record_id = parse_id("orders", order_id)?;
        let reviews: Vec<Review> = self
            .base
            .db()
            .query("SELECT * FROM review WHERE order_id = $order")
            .bind(("order", record_id.to_string()))
            .await?
            .take(0)?;
        Ok(reviews)
    }

    /// Create a new review; the store assigns the id
    pub async fn create(&self, review: Review) -> RepoResult<Review> {
        let created: Option<Review> = self.base.db().create(REVIEW_TABLE).content(review).await?;
        let created =
            created.ok_or_else(|| RepoError::Database("Failed to create review".to_string()))?;

        if let Some(key) = created.key() {
            self.base
                .publish(Collection::Reviews, ChangeAction::Created, &key);
        }
        Ok(created)
    }

    /// Remove a review (compensation path only)
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let record_id = parse_id(REVIEW_TABLE, id)?;
        let deleted: Option<Review> = self.base.db().delete(record_id).await?;
        let removed = deleted.is_some();
        if removed {
            self.base
                .publish(Collection::Reviews, ChangeAction::Deleted, id);
        }
        Ok(removed)
    }
}
