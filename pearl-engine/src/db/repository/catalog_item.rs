//! Catalog Item Repository

use super::{BaseRepository, RepoError, RepoResult, parse_id};
use crate::bus::{ChangeAction, ChangeBus, Collection};
use crate::db::models::{CatalogItem, CatalogItemCreate, CatalogItemUpdate, PLACEHOLDER_IMAGE};
use shared::models::Category;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const CATALOG_TABLE: &str = "catalog_item";

#[derive(Clone)]
pub struct CatalogItemRepository {
    base: BaseRepository,
}

impl CatalogItemRepository {
    pub fn new(db: Surreal<Db>, bus: ChangeBus) -> Self {
        Self {
            base: BaseRepository::new(db, bus),
        }
    }

    /// All catalog items, ordered by name
    pub async fn find_all(&self) -> RepoResult<Vec<CatalogItem>> {
        let items: Vec<CatalogItem> = self
            .base
            .db()
            .query("SELECT * FROM catalog_item ORDER BY name ASC")
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Items in one menu category, ordered by name
    pub async fn find_by_category(&self, category: Category) -> RepoResult<Vec<CatalogItem>> {
        let items: Vec<CatalogItem> = self
            .base
            .db()
            .query("SELECT * FROM catalog_item WHERE category = $category ORDER BY name ASC")
            .bind(("category", category))
            .await?
            .take(0)?;
        Ok(items)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<CatalogItem>> {
        let record_id = parse_id(CATALOG_TABLE, id)?;
        let item: Option<CatalogItem> = self.base.db().select(record_id).await?;
        Ok(item)
    }

    /// Create a new catalog item; the store assigns the id
    pub async fn create(&self, data: CatalogItemCreate) -> RepoResult<CatalogItem> {
        let item = CatalogItem {
            id: None,
            name: data.name,
            description: data.description,
            price: data.price,
            image: data.image.unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            category: data.category,
            tags: data.tags.unwrap_or_default(),
        };

        let created: Option<CatalogItem> =
            self.base.db().create(CATALOG_TABLE).content(item).await?;
        let created = created
            .ok_or_else(|| RepoError::Database("Failed to create catalog item".to_string()))?;

        if let Some(key) = created.key() {
            self.base
                .publish(Collection::CatalogItems, ChangeAction::Created, &key);
        }
        Ok(created)
    }

    /// Merge the set fields of `data` into an existing item
    pub async fn update(&self, id: &str, data: CatalogItemUpdate) -> RepoResult<CatalogItem> {
        let record_id = parse_id(CATALOG_TABLE, id)?;
        let updated: Option<CatalogItem> = self.base.db().update(record_id).merge(data).await?;
        let updated =
            updated.ok_or_else(|| RepoError::NotFound(format!("Catalog item {id} not found")))?;

        self.base
            .publish(Collection::CatalogItems, ChangeAction::Updated, id);
        Ok(updated)
    }

    /// Delete an item; returns whether a record was removed
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let record_id = parse_id(CATALOG_TABLE, id)?;
        let deleted: Option<CatalogItem> = self.base.db().delete(record_id).await?;
        let removed = deleted.is_some();
        if removed {
            self.base
                .publish(Collection::CatalogItems, ChangeAction::Deleted, id);
        }
        Ok(removed)
    }
}
