// src/store/mod.rs

//! Persistence for the catalog.
//!
//! `CatalogStore` is the seam between the service layer and storage. The
//! server wires up `PgCatalogStore`; tests inject `MemoryCatalogStore`. Both
//! are constructed explicitly and handed to `AppState`, so there is no
//! process-global connection handle anywhere.

pub mod memory;
pub mod postgres;

use crate::errors::Result;
use crate::models::{Category, Product, ProductView};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[async_trait]
pub trait CatalogStore: Send + Sync {
  async fn list_categories(&self) -> Result<Vec<Category>>;

  async fn find_category(&self, id: Uuid) -> Result<Option<Category>>;

  async fn insert_category(&self, category: &Category) -> Result<()>;

  /// Overwrites name/description and refreshes `updated_at`. Returns `false`
  /// when no category has the given id.
  async fn update_category(&self, id: Uuid, name: &str, description: &str, updated_at: DateTime<Utc>) -> Result<bool>;

  /// Removes every product referencing the category, then the category
  /// itself, as one atomic unit. Returns the number of products removed, or
  /// `None` when the category does not exist (in which case nothing is
  /// touched).
  async fn delete_category_cascade(&self, id: Uuid) -> Result<Option<u64>>;

  /// All products, each carrying its category's current name ("Unknown"
  /// when the category row is missing).
  async fn list_products(&self) -> Result<Vec<ProductView>>;

  async fn find_product(&self, id: Uuid) -> Result<Option<Product>>;

  async fn insert_product(&self, product: &Product) -> Result<()>;

  /// Full-record overwrite keyed on `product.id`, last writer wins.
  /// Returns `false` when no product has that id.
  async fn update_product(&self, product: &Product) -> Result<bool>;

  async fn delete_product(&self, id: Uuid) -> Result<bool>;
}

pub use memory::MemoryCatalogStore;
pub use postgres::PgCatalogStore;
