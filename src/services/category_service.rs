// src/services/category_service.rs

use crate::errors::{AppError, Result};
use crate::models::{Category, CategoryPayload};
use crate::store::CatalogStore;
use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

/// Pulls a trimmed, non-empty name out of the payload.
fn required_name(payload: &CategoryPayload) -> Result<String> {
  let name = payload.name.as_deref().unwrap_or("").trim().to_string();
  if name.is_empty() {
    return Err(AppError::Validation("Category name is required".to_string()));
  }
  Ok(name)
}

#[instrument(name = "category_service::list", skip(store))]
pub async fn list_categories(store: &dyn CatalogStore) -> Result<Vec<Category>> {
  store.list_categories().await
}

#[instrument(name = "category_service::create", skip(store, payload))]
pub async fn create_category(store: &dyn CatalogStore, payload: CategoryPayload) -> Result<Category> {
  let name = required_name(&payload)?;
  let description = payload.description.unwrap_or_default();

  let category = Category::new(name, description);
  store.insert_category(&category).await?;

  info!(category_id = %category.id, "Category created.");
  Ok(category)
}

#[instrument(name = "category_service::update", skip(store, payload), fields(category_id = %id))]
pub async fn update_category(store: &dyn CatalogStore, id: Uuid, payload: CategoryPayload) -> Result<()> {
  let name = required_name(&payload)?;
  let description = payload.description.unwrap_or_default();

  let updated = store.update_category(id, &name, &description, Utc::now()).await?;
  if !updated {
    return Err(AppError::NotFound(format!("Category with ID {} not found", id)));
  }

  // Product listings resolve the category name live, so a rename needs no
  // propagation writes.
  info!(category_id = %id, "Category updated.");
  Ok(())
}

/// Cascade delete: dependents first, then the category, atomically.
/// Returns the number of products removed along the way.
#[instrument(name = "category_service::delete", skip(store), fields(category_id = %id))]
pub async fn delete_category(store: &dyn CatalogStore, id: Uuid) -> Result<u64> {
  match store.delete_category_cascade(id).await? {
    Some(removed_products) => {
      info!(category_id = %id, removed_products, "Category deleted with cascade.");
      Ok(removed_products)
    }
    None => Err(AppError::NotFound(format!("Category with ID {} not found", id))),
  }
}
