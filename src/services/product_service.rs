// src/services/product_service.rs

use crate::errors::{AppError, Result};
use crate::models::{Category, Product, ProductPayload, ProductView};
use crate::store::CatalogStore;
use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// Validated, typed form of a `ProductPayload`, minus category resolution.
struct ProductFields {
  name: String,
  description: String,
  price: f64,
  stock: i32,
  image_url: String,
  category_id: String,
}

/// Checks every field the way the admin form expects: trimmed non-empty
/// name, finite non-negative price, non-negative integer stock. `price` and
/// `stock` may arrive as numbers or numeric strings. Nothing touches the
/// store here, so a failed validation persists nothing.
fn validate_payload(payload: ProductPayload) -> Result<ProductFields> {
  let name = payload.name.as_deref().unwrap_or("").trim().to_string();
  if name.is_empty() {
    return Err(AppError::Validation("Product name is required".to_string()));
  }

  let category_id = payload
    .category_id
    .as_deref()
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .ok_or_else(|| AppError::Validation("Category not found".to_string()))?
    .to_string();

  let price = payload
    .price
    .as_ref()
    .and_then(|p| p.as_finite_f64())
    .ok_or_else(|| AppError::Validation("Price must be a valid number".to_string()))?;
  if price < 0.0 {
    return Err(AppError::Validation("Price must not be negative".to_string()));
  }

  let stock = payload
    .stock
    .as_ref()
    .and_then(|s| s.as_i64())
    .ok_or_else(|| AppError::Validation("Stock must be a valid integer".to_string()))?;
  if stock < 0 || stock > i32::MAX as i64 {
    return Err(AppError::Validation("Stock must be a non-negative integer".to_string()));
  }

  Ok(ProductFields {
    name,
    description: payload.description.unwrap_or_default(),
    price,
    stock: stock as i32,
    image_url: payload.image_url.unwrap_or_default(),
    category_id,
  })
}

/// The referenced category must be live at write time. An id that does not
/// parse cannot resolve, so it gets the same answer as one that is absent.
async fn resolve_category(store: &dyn CatalogStore, category_id: &str) -> Result<Category> {
  let id = Uuid::parse_str(category_id)
    .map_err(|_| AppError::Validation("Category not found".to_string()))?;
  match store.find_category(id).await? {
    Some(category) => Ok(category),
    None => {
      warn!(category_id = %id, "Product write referenced a missing category.");
      Err(AppError::Validation("Category not found".to_string()))
    }
  }
}

#[instrument(name = "product_service::list", skip(store))]
pub async fn list_products(store: &dyn CatalogStore) -> Result<Vec<ProductView>> {
  store.list_products().await
}

#[instrument(name = "product_service::create", skip(store, payload))]
pub async fn create_product(store: &dyn CatalogStore, payload: ProductPayload) -> Result<ProductView> {
  let fields = validate_payload(payload)?;
  let category = resolve_category(store, &fields.category_id).await?;

  let now = Utc::now();
  let product = Product {
    id: Uuid::new_v4(),
    name: fields.name,
    description: fields.description,
    price: fields.price,
    stock: fields.stock,
    image_url: fields.image_url,
    category_id: category.id,
    created_at: now,
    updated_at: now,
  };
  store.insert_product(&product).await?;

  info!(product_id = %product.id, "Product created.");
  Ok(ProductView::from_product(product, category.name))
}

#[instrument(name = "product_service::update", skip(store, payload), fields(product_id = %id))]
pub async fn update_product(store: &dyn CatalogStore, id: Uuid, payload: ProductPayload) -> Result<ProductView> {
  let fields = validate_payload(payload)?;

  let existing = store
    .find_product(id)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Product with ID {} not found", id)))?;

  // Re-resolve even when category_id is unchanged; the returned view must
  // carry the category's current name.
  let category = resolve_category(store, &fields.category_id).await?;

  let product = Product {
    id: existing.id,
    name: fields.name,
    description: fields.description,
    price: fields.price,
    stock: fields.stock,
    image_url: fields.image_url,
    category_id: category.id,
    created_at: existing.created_at,
    updated_at: Utc::now(),
  };

  let updated = store.update_product(&product).await?;
  if !updated {
    return Err(AppError::NotFound(format!("Product with ID {} not found", id)));
  }

  info!(product_id = %id, "Product updated.");
  Ok(ProductView::from_product(product, category.name))
}

#[instrument(name = "product_service::delete", skip(store), fields(product_id = %id))]
pub async fn delete_product(store: &dyn CatalogStore, id: Uuid) -> Result<()> {
  let deleted = store.delete_product(id).await?;
  if !deleted {
    return Err(AppError::NotFound(format!("Product with ID {} not found", id)));
  }
  info!(product_id = %id, "Product deleted.");
  Ok(())
}
