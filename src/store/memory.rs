// src/store/memory.rs

use crate::errors::Result;
use crate::models::{Category, Product, ProductView};
use crate::store::CatalogStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory catalog store; handler and service tests inject this instead
/// of Postgres.
#[derive(Default)]
pub struct MemoryCatalogStore {
  inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
  categories: HashMap<Uuid, Category>,
  products: HashMap<Uuid, Product>,
}

impl MemoryCatalogStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
  async fn list_categories(&self) -> Result<Vec<Category>> {
    let guard = self.inner.read();
    let mut categories: Vec<Category> = guard.categories.values().cloned().collect();
    // HashMap iteration order is arbitrary; keep listings stable.
    categories.sort_by_key(|c| c.created_at);
    Ok(categories)
  }

  async fn find_category(&self, id: Uuid) -> Result<Option<Category>> {
    Ok(self.inner.read().categories.get(&id).cloned())
  }

  async fn insert_category(&self, category: &Category) -> Result<()> {
    self.inner.write().categories.insert(category.id, category.clone());
    Ok(())
  }

  async fn update_category(&self, id: Uuid, name: &str, description: &str, updated_at: DateTime<Utc>) -> Result<bool> {
    let mut guard = self.inner.write();
    match guard.categories.get_mut(&id) {
      Some(category) => {
        category.name = name.to_string();
        category.description = description.to_string();
        category.updated_at = updated_at;
        Ok(true)
      }
      None => Ok(false),
    }
  }

  async fn delete_category_cascade(&self, id: Uuid) -> Result<Option<u64>> {
    // One write-lock section; dependents and parent go together or not at all.
    let mut guard = self.inner.write();
    if !guard.categories.contains_key(&id) {
      return Ok(None);
    }
    let before = guard.products.len();
    guard.products.retain(|_, p| p.category_id != id);
    let removed = (before - guard.products.len()) as u64;
    guard.categories.remove(&id);
    Ok(Some(removed))
  }

  async fn list_products(&self) -> Result<Vec<ProductView>> {
    let guard = self.inner.read();
    let mut products: Vec<ProductView> = guard
      .products
      .values()
      .map(|p| {
        let category_name = guard
          .categories
          .get(&p.category_id)
          .map(|c| c.name.clone())
          .unwrap_or_else(|| "Unknown".to_string());
        ProductView::from_product(p.clone(), category_name)
      })
      .collect();
    products.sort_by_key(|p| p.created_at);
    Ok(products)
  }

  async fn find_product(&self, id: Uuid) -> Result<Option<Product>> {
    Ok(self.inner.read().products.get(&id).cloned())
  }

  async fn insert_product(&self, product: &Product) -> Result<()> {
    self.inner.write().products.insert(product.id, product.clone());
    Ok(())
  }

  async fn update_product(&self, product: &Product) -> Result<bool> {
    let mut guard = self.inner.write();
    match guard.products.get_mut(&product.id) {
      Some(existing) => {
        *existing = product.clone();
        Ok(true)
      }
      None => Ok(false),
    }
  }

  async fn delete_product(&self, id: Uuid) -> Result<bool> {
    Ok(self.inner.write().products.remove(&id).is_some())
  }
}
