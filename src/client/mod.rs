// src/client/mod.rs

//! The admin client: an HTTP API wrapper and a page-level controller that
//! owns the fetched lists, the derived filtered view, and the edit state.

pub mod api;
pub mod controller;
pub mod filter;

pub use api::{CatalogApi, HttpCatalogApi};
pub use controller::{AdminController, Editing, SearchDebouncer, SEARCH_DEBOUNCE};
pub use filter::filter_products;
