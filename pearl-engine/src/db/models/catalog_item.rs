//! Catalog Item Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use shared::models::Category;
use surrealdb::RecordId;

/// Catalog item ID type
pub type CatalogItemId = RecordId;

/// Image shown when an item has no picture of its own
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400.png";

/// Catalog item entity
///
/// Orders capture the item name as a string snapshot; deleting an item
/// never touches existing orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<CatalogItemId>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CatalogItem {
    /// Full "table:id" string of this item, if persisted
    pub fn key(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_string())
    }
}

/// Create catalog item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItemCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: Option<String>,
    pub category: Category,
    pub tags: Option<Vec<String>>,
}

/// Update catalog item payload (partial-field merge)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}
