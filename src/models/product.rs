// src/models/product.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A product row as persisted. The category name is never stored; listings
/// resolve it live from the categories table (see `ProductView`).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
  pub id: Uuid,
  pub name: String,
  pub description: String,
  pub price: f64,
  pub stock: i32,
  pub image_url: String,
  pub category_id: Uuid,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// A product joined with its category's current name, the shape every
/// product endpoint returns. `category_name` falls back to "Unknown" when
/// the category row is gone.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProductView {
  pub id: Uuid,
  pub name: String,
  pub description: String,
  pub price: f64,
  pub stock: i32,
  pub image_url: String,
  pub category_id: Uuid,
  pub category_name: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl ProductView {
  pub fn from_product(product: Product, category_name: String) -> Self {
    Self {
      id: product.id,
      name: product.name,
      description: product.description,
      price: product.price,
      stock: product.stock,
      image_url: product.image_url,
      category_id: product.category_id,
      category_name,
      created_at: product.created_at,
      updated_at: product.updated_at,
    }
  }
}
