// src/client/api.rs

use crate::models::{Category, CategoryPayload, ProductPayload, ProductView};
use anyhow::{Context, Result};
use async_trait::async_trait;
use uuid::Uuid;

/// The eight REST operations the admin page drives. Behind a trait so
/// controller tests run against an in-process fake instead of a live server.
#[async_trait]
pub trait CatalogApi: Send + Sync {
  async fn fetch_products(&self) -> Result<Vec<ProductView>>;
  async fn fetch_categories(&self) -> Result<Vec<Category>>;

  async fn create_product(&self, payload: &ProductPayload) -> Result<()>;
  async fn update_product(&self, id: Uuid, payload: &ProductPayload) -> Result<()>;
  async fn delete_product(&self, id: Uuid) -> Result<()>;

  async fn create_category(&self, payload: &CategoryPayload) -> Result<()>;
  async fn update_category(&self, id: Uuid, payload: &CategoryPayload) -> Result<()>;
  async fn delete_category(&self, id: Uuid) -> Result<()>;
}

/// `CatalogApi` over HTTP against a running catalog-admin server.
pub struct HttpCatalogApi {
  base_url: String,
  http: reqwest::Client,
}

impl HttpCatalogApi {
  pub fn new(base_url: impl Into<String>) -> Self {
    Self {
      base_url: base_url.into().trim_end_matches('/').to_string(),
      http: reqwest::Client::new(),
    }
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.base_url, path)
  }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
  async fn fetch_products(&self) -> Result<Vec<ProductView>> {
    let response = self
      .http
      .get(self.url("/api/products"))
      .send()
      .await
      .context("Failed to fetch products")?
      .error_for_status()?;
    Ok(response.json().await?)
  }

  async fn fetch_categories(&self) -> Result<Vec<Category>> {
    let response = self
      .http
      .get(self.url("/api/categories"))
      .send()
      .await
      .context("Failed to fetch categories")?
      .error_for_status()?;
    Ok(response.json().await?)
  }

  async fn create_product(&self, payload: &ProductPayload) -> Result<()> {
    self
      .http
      .post(self.url("/api/products"))
      .json(payload)
      .send()
      .await
      .context("Failed to create product")?
      .error_for_status()?;
    Ok(())
  }

  async fn update_product(&self, id: Uuid, payload: &ProductPayload) -> Result<()> {
    self
      .http
      .put(self.url(&format!("/api/products/{}", id)))
      .json(payload)
      .send()
      .await
      .context("Failed to update product")?
      .error_for_status()?;
    Ok(())
  }

  async fn delete_product(&self, id: Uuid) -> Result<()> {
    self
      .http
      .delete(self.url(&format!("/api/products/{}", id)))
      .send()
      .await
      .context("Failed to delete product")?
      .error_for_status()?;
    Ok(())
  }

  async fn create_category(&self, payload: &CategoryPayload) -> Result<()> {
    self
      .http
      .post(self.url("/api/categories"))
      .json(payload)
      .send()
      .await
      .context("Failed to create category")?
      .error_for_status()?;
    Ok(())
  }

  async fn update_category(&self, id: Uuid, payload: &CategoryPayload) -> Result<()> {
    self
      .http
      .put(self.url(&format!("/api/categories/{}", id)))
      .json(payload)
      .send()
      .await
      .context("Failed to update category")?
      .error_for_status()?;
    Ok(())
  }

  async fn delete_category(&self, id: Uuid) -> Result<()> {
    self
      .http
      .delete(self.url(&format!("/api/categories/{}", id)))
      .send()
      .await
      .context("Failed to delete category")?
      .error_for_status()?;
    Ok(())
  }
}
