// src/state.rs

use crate::config::AppConfig;
use crate::store::CatalogStore;
use std::sync::Arc;

/// Shared per-process state. The store is behind a trait object so the
/// server runs on Postgres while tests inject the in-memory backend.
#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn CatalogStore>,
  pub config: Arc<AppConfig>,
}

impl AppState {
  pub fn new(store: Arc<dyn CatalogStore>, config: Arc<AppConfig>) -> Self {
    Self { store, config }
  }
}
