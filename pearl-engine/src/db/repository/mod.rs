//! Repository Module
//!
//! CRUD operations over the store collections. Ids are "table:id"
//! strings end to end; every successful write publishes on the change
//! bus.

pub mod catalog_item;
pub mod leave_request;
pub mod order;
pub mod review;

// Re-exports
pub use catalog_item::CatalogItemRepository;
pub use leave_request::LeaveRequestRepository;
pub use order::OrderRepository;
pub use review::ReviewRepository;

use crate::bus::{ChangeAction, ChangeBus, Collection, StoreEvent};
use shared::AppError;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => {
                AppError::with_message(shared::ErrorCode::NotFound, msg)
            }
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Parse a full "table:id" string for the given table
pub(crate) fn parse_id(table: &str, id: &str) -> RepoResult<RecordId> {
    let record_id: RecordId = id
        .parse()
        .map_err(|_| RepoError::Validation(format!("Invalid id format: {id}")))?;
    if record_id.table() != table {
        return Err(RepoError::Validation(format!(
            "Expected a {table} id, got {id}"
        )));
    }
    Ok(record_id)
}

/// Base repository with database handle and change bus
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
    bus: ChangeBus,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>, bus: ChangeBus) -> Self {
        Self { db, bus }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    pub(crate) fn publish(&self, collection: Collection, action: ChangeAction, id: &str) {
        self.bus.publish(StoreEvent {
            collection,
            action,
            id: id.to_string(),
        });
    }
}
