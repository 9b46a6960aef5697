// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use catalog_admin::config::AppConfig;
use catalog_admin::models::{CategoryPayload, FormNumber, ProductPayload};
use catalog_admin::state::AppState;
use catalog_admin::store::{CatalogStore, MemoryCatalogStore};
use once_cell::sync::Lazy;
use std::path::PathBuf;
use std::sync::Arc;

static TRACING: Lazy<()> = Lazy::new(|| {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_test_writer()
    .try_init();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING);
}

/// A unique scratch directory per call so upload tests never collide.
pub fn scratch_upload_dir() -> PathBuf {
  std::env::temp_dir().join(format!("catalog-admin-test-{}", uuid::Uuid::new_v4()))
}

pub fn test_config(upload_dir: PathBuf) -> AppConfig {
  AppConfig {
    server_host: "127.0.0.1".to_string(),
    server_port: 0,
    database_url: "postgres://unused".to_string(),
    public_base_url: "http://testserver".to_string(),
    upload_dir,
  }
}

/// App state over the in-memory store.
pub fn memory_state() -> AppState {
  let store: Arc<dyn CatalogStore> = Arc::new(MemoryCatalogStore::new());
  AppState::new(store, Arc::new(test_config(scratch_upload_dir())))
}

pub fn category_payload(name: &str, description: Option<&str>) -> CategoryPayload {
  CategoryPayload {
    name: Some(name.to_string()),
    description: description.map(|d| d.to_string()),
  }
}

pub fn product_payload(name: &str, category_id: &str, price: f64, stock: i64) -> ProductPayload {
  ProductPayload {
    name: Some(name.to_string()),
    description: None,
    price: Some(FormNumber::Num(price)),
    category_id: Some(category_id.to_string()),
    stock: Some(FormNumber::Num(stock as f64)),
    image_url: None,
  }
}
