// src/lib.rs

//! catalog-admin: a product-catalog admin service.
//!
//! The crate is split the way the server composes it:
//!  - Typed models for categories and products, with live-resolved
//!    category names on every product listing.
//!  - A dependency-injected `CatalogStore` (Postgres for the server, an
//!    in-memory backend for tests).
//!  - Services carrying validation and the transactional category cascade.
//!  - The actix-web route/handler layer and the image upload endpoint.
//!  - The admin client: HTTP API wrapper, page controller, search filter
//!    and debounce.

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod store;
pub mod web;

// --- Re-exports for the Public API ---

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::models::{Category, CategoryPayload, Product, ProductPayload, ProductView};
pub use crate::state::AppState;
pub use crate::store::{CatalogStore, MemoryCatalogStore, PgCatalogStore};
