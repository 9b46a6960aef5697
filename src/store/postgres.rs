// src/store/postgres.rs

use crate::errors::Result;
use crate::models::{Category, Product, ProductView};
use crate::store::CatalogStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub struct PgCatalogStore {
  pool: PgPool,
}

impl PgCatalogStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
  async fn list_categories(&self) -> Result<Vec<Category>> {
    let categories: Vec<Category> =
      sqlx::query_as("SELECT id, name, description, created_at, updated_at FROM categories")
        .fetch_all(&self.pool)
        .await?;
    Ok(categories)
  }

  async fn find_category(&self, id: Uuid) -> Result<Option<Category>> {
    let category: Option<Category> =
      sqlx::query_as("SELECT id, name, description, created_at, updated_at FROM categories WHERE id = $1")
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
    Ok(category)
  }

  async fn insert_category(&self, category: &Category) -> Result<()> {
    sqlx::query(
      "INSERT INTO categories (id, name, description, created_at, updated_at) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(category.id)
    .bind(&category.name)
    .bind(&category.description)
    .bind(category.created_at)
    .bind(category.updated_at)
    .execute(&self.pool)
    .await?;
    Ok(())
  }

  async fn update_category(&self, id: Uuid, name: &str, description: &str, updated_at: DateTime<Utc>) -> Result<bool> {
    let result = sqlx::query("UPDATE categories SET name = $2, description = $3, updated_at = $4 WHERE id = $1")
      .bind(id)
      .bind(name)
      .bind(description)
      .bind(updated_at)
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected() > 0)
  }

  async fn delete_category_cascade(&self, id: Uuid) -> Result<Option<u64>> {
    let mut tx = self.pool.begin().await?;

    let existing: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM categories WHERE id = $1")
      .bind(id)
      .fetch_optional(&mut *tx)
      .await?;
    if existing.is_none() {
      // Dropping the transaction rolls back; nothing was written anyway.
      return Ok(None);
    }

    let removed = sqlx::query("DELETE FROM products WHERE category_id = $1")
      .bind(id)
      .execute(&mut *tx)
      .await?
      .rows_affected();

    sqlx::query("DELETE FROM categories WHERE id = $1")
      .bind(id)
      .execute(&mut *tx)
      .await?;

    tx.commit().await?;
    Ok(Some(removed))
  }

  async fn list_products(&self) -> Result<Vec<ProductView>> {
    let products: Vec<ProductView> = sqlx::query_as(
      "SELECT p.id, p.name, p.description, p.price, p.stock, p.image_url, p.category_id, \
       COALESCE(c.name, 'Unknown') AS category_name, p.created_at, p.updated_at \
       FROM products p LEFT JOIN categories c ON c.id = p.category_id",
    )
    .fetch_all(&self.pool)
    .await?;
    Ok(products)
  }

  async fn find_product(&self, id: Uuid) -> Result<Option<Product>> {
    let product: Option<Product> = sqlx::query_as(
      "SELECT id, name, description, price, stock, image_url, category_id, created_at, updated_at \
       FROM products WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;
    Ok(product)
  }

  async fn insert_product(&self, product: &Product) -> Result<()> {
    sqlx::query(
      "INSERT INTO products (id, name, description, price, stock, image_url, category_id, created_at, updated_at) \
       VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
    )
    .bind(product.id)
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price)
    .bind(product.stock)
    .bind(&product.image_url)
    .bind(product.category_id)
    .bind(product.created_at)
    .bind(product.updated_at)
    .execute(&self.pool)
    .await?;
    Ok(())
  }

  async fn update_product(&self, product: &Product) -> Result<bool> {
    let result = sqlx::query(
      "UPDATE products SET name = $2, description = $3, price = $4, stock = $5, image_url = $6, \
       category_id = $7, updated_at = $8 WHERE id = $1",
    )
    .bind(product.id)
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price)
    .bind(product.stock)
    .bind(&product.image_url)
    .bind(product.category_id)
    .bind(product.updated_at)
    .execute(&self.pool)
    .await?;
    Ok(result.rows_affected() > 0)
  }

  async fn delete_product(&self, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected() > 0)
  }
}
