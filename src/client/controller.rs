// src/client/controller.rs

use crate::client::api::CatalogApi;
use crate::client::filter::filter_products;
use crate::models::{Category, CategoryPayload, ProductPayload, ProductView};
use anyhow::Result;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Keystroke debounce window for the search box.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Editing {
  Product(Uuid),
  Category(Uuid),
}

/// Page-level state for the admin UI: the full fetched lists, the derived
/// filtered view, the current filter inputs, and which entity (if any) is
/// open in a form. Every successful mutation re-fetches the affected list in
/// full rather than patching it incrementally; category mutations also
/// re-fetch products so cascade deletes and renames become visible.
pub struct AdminController<A: CatalogApi> {
  api: A,
  products: Vec<ProductView>,
  categories: Vec<Category>,
  filtered: Vec<ProductView>,
  query: String,
  category_filter: Option<Uuid>,
  editing: Option<Editing>,
}

impl<A: CatalogApi> AdminController<A> {
  pub fn new(api: A) -> Self {
    Self {
      api,
      products: Vec::new(),
      categories: Vec::new(),
      filtered: Vec::new(),
      query: String::new(),
      category_filter: None,
      editing: None,
    }
  }

  /// Initial mount: fetch both lists once.
  #[instrument(name = "controller::load", skip(self))]
  pub async fn load(&mut self) -> Result<()> {
    self.refresh_products().await?;
    self.refresh_categories().await?;
    Ok(())
  }

  pub async fn refresh_products(&mut self) -> Result<()> {
    self.products = self.api.fetch_products().await?;
    self.rederive_filtered();
    debug!("Refreshed {} products.", self.products.len());
    Ok(())
  }

  pub async fn refresh_categories(&mut self) -> Result<()> {
    self.categories = self.api.fetch_categories().await?;
    debug!("Refreshed {} categories.", self.categories.len());
    Ok(())
  }

  /// Re-derives the filtered list; called on (debounced) filter changes and
  /// after every product refresh.
  pub fn set_filter(&mut self, query: impl Into<String>, category_filter: Option<Uuid>) {
    self.query = query.into();
    self.category_filter = category_filter;
    self.rederive_filtered();
  }

  pub fn clear_filters(&mut self) {
    self.set_filter("", None);
  }

  fn rederive_filtered(&mut self) {
    self.filtered = filter_products(&self.products, &self.query, self.category_filter);
  }

  pub fn products(&self) -> &[ProductView] {
    &self.products
  }

  pub fn categories(&self) -> &[Category] {
    &self.categories
  }

  pub fn filtered_products(&self) -> &[ProductView] {
    &self.filtered
  }

  pub fn editing(&self) -> Option<Editing> {
    self.editing
  }

  pub fn begin_editing(&mut self, editing: Editing) {
    self.editing = Some(editing);
  }

  pub fn cancel_editing(&mut self) {
    self.editing = None;
  }

  // --- Product mutations ---

  #[instrument(name = "controller::create_product", skip(self, payload))]
  pub async fn create_product(&mut self, payload: ProductPayload) -> Result<()> {
    self.api.create_product(&payload).await?;
    self.refresh_products().await
  }

  /// Submits the product form for the entity currently being edited.
  #[instrument(name = "controller::submit_product_edit", skip(self, payload))]
  pub async fn submit_product_edit(&mut self, payload: ProductPayload) -> Result<()> {
    let Some(Editing::Product(id)) = self.editing else {
      return Ok(());
    };
    self.api.update_product(id, &payload).await?;
    self.editing = None;
    self.refresh_products().await
  }

  #[instrument(name = "controller::delete_product", skip(self))]
  pub async fn delete_product(&mut self, id: Uuid) -> Result<()> {
    self.api.delete_product(id).await?;
    self.refresh_products().await
  }

  // --- Category mutations (all re-fetch products too) ---

  #[instrument(name = "controller::create_category", skip(self, payload))]
  pub async fn create_category(&mut self, payload: CategoryPayload) -> Result<()> {
    self.api.create_category(&payload).await?;
    self.refresh_categories().await?;
    self.refresh_products().await
  }

  #[instrument(name = "controller::submit_category_edit", skip(self, payload))]
  pub async fn submit_category_edit(&mut self, payload: CategoryPayload) -> Result<()> {
    let Some(Editing::Category(id)) = self.editing else {
      return Ok(());
    };
    self.api.update_category(id, &payload).await?;
    self.editing = None;
    self.refresh_categories().await?;
    self.refresh_products().await
  }

  #[instrument(name = "controller::delete_category", skip(self))]
  pub async fn delete_category(&mut self, id: Uuid) -> Result<()> {
    self.api.delete_category(id).await?;
    self.refresh_categories().await?;
    self.refresh_products().await
  }
}

/// Cancel-and-restart debounce for search keystrokes: each call cancels a
/// previously scheduled action whose window has not yet elapsed and
/// schedules the new one, so only the last keystroke within the window
/// fires. An action already past its window runs to completion; only the
/// pending window is cancellable.
pub struct SearchDebouncer {
  delay: Duration,
  pending: Option<(JoinHandle<()>, Arc<AtomicBool>)>,
}

impl SearchDebouncer {
  pub fn new(delay: Duration) -> Self {
    Self { delay, pending: None }
  }

  pub fn debounce<F, Fut>(&mut self, action: F)
  where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send,
  {
    if let Some((handle, fired)) = self.pending.take() {
      if !fired.load(Ordering::Acquire) {
        handle.abort();
      }
    }
    let fired = Arc::new(AtomicBool::new(false));
    let fired_in_task = fired.clone();
    let delay = self.delay;
    let handle = tokio::spawn(async move {
      tokio::time::sleep(delay).await;
      fired_in_task.store(true, Ordering::Release);
      action().await;
    });
    self.pending = Some((handle, fired));
  }
}

impl Default for SearchDebouncer {
  fn default() -> Self {
    Self::new(SEARCH_DEBOUNCE)
  }
}

impl Drop for SearchDebouncer {
  fn drop(&mut self) {
    if let Some((handle, _)) = self.pending.take() {
      handle.abort();
    }
  }
}
