//! Catalog administration
//!
//! Admin CRUD over catalog items. Orders hold name snapshots, so
//! deleting an item never cascades.

use crate::db::models::{CatalogItem, CatalogItemCreate, CatalogItemUpdate};
use crate::db::repository::CatalogItemRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_URL_LEN, validate_optional_text, validate_required_text,
};
use shared::models::Category;
use shared::{AppError, AppResult, ErrorCode};

#[derive(Clone)]
pub struct CatalogService {
    repo: CatalogItemRepository,
}

impl CatalogService {
    pub fn new(repo: CatalogItemRepository) -> Self {
        Self { repo }
    }

    /// Full menu, ordered by name
    pub async fn list(&self) -> AppResult<Vec<CatalogItem>> {
        Ok(self.repo.find_all().await?)
    }

    /// One menu category, ordered by name
    pub async fn by_category(&self, category: Category) -> AppResult<Vec<CatalogItem>> {
        Ok(self.repo.find_by_category(category).await?)
    }

    pub async fn get(&self, id: &str) -> AppResult<CatalogItem> {
        self.repo.find_by_id(id).await?.ok_or_else(|| {
            AppError::with_message(
                ErrorCode::CatalogItemNotFound,
                format!("Catalog item {id} not found"),
            )
        })
    }

    pub async fn create(&self, data: CatalogItemCreate) -> AppResult<CatalogItem> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        if data.description.len() > MAX_NOTE_LEN {
            return Err(AppError::validation(format!(
                "description is too long ({} chars, max {MAX_NOTE_LEN})",
                data.description.len()
            )));
        }
        validate_optional_text(&data.image, "image", MAX_URL_LEN)?;
        validate_price(data.price)?;

        Ok(self.repo.create(data).await?)
    }

    pub async fn update(&self, id: &str, data: CatalogItemUpdate) -> AppResult<CatalogItem> {
        if let Some(name) = &data.name {
            validate_required_text(name, "name", MAX_NAME_LEN)?;
        }
        validate_optional_text(&data.description, "description", MAX_NOTE_LEN)?;
        validate_optional_text(&data.image, "image", MAX_URL_LEN)?;
        if let Some(price) = data.price {
            validate_price(price)?;
        }

        Ok(self.repo.update(id, data).await?)
    }

    /// Delete an item; existing orders keep their name snapshots
    pub async fn remove(&self, id: &str) -> AppResult<()> {
        let removed = self.repo.delete(id).await?;
        if !removed {
            return Err(AppError::with_message(
                ErrorCode::CatalogItemNotFound,
                format!("Catalog item {id} not found"),
            ));
        }
        Ok(())
    }
}

fn validate_price(price: f64) -> AppResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::with_message(
            ErrorCode::InvalidPrice,
            format!("price must be a non-negative number, got {price}"),
        ));
    }
    Ok(())
}
