//! Database layer
//!
//! Embedded SurrealDB document store holding the four collections:
//! `catalog_item`, `orders`, `leave_request`, `review`.

pub mod models;
pub mod repository;

use shared::AppError;
use std::path::Path;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

const NAMESPACE: &str = "pearl";
const DATABASE: &str = "main";

/// Database service - owns the embedded store handle
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the persistent store at `{work_dir}/pearl.db`
    pub async fn open(work_dir: &str) -> Result<Self, AppError> {
        let db_path = Path::new(work_dir).join("pearl.db");
        let db = Surreal::new::<RocksDb>(db_path.to_string_lossy().as_ref())
            .await
            .map_err(|e| AppError::database(format!("Failed to open store: {e}")))?;
        Self::select_namespace(db).await
    }

    /// Open an ephemeral in-memory store (tests and throwaway runs)
    pub async fn open_memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open in-memory store: {e}")))?;
        Self::select_namespace(db).await
    }

    async fn select_namespace(db: Surreal<Db>) -> Result<Self, AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;
        tracing::info!("Entity store ready (ns={NAMESPACE}, db={DATABASE})");
        Ok(Self { db })
    }
}
