// src/services/mod.rs

//! Business logic between the HTTP handlers and the store: field
//! validation, category resolution, and the upload pipeline.

pub mod category_service;
pub mod product_service;
pub mod upload_service;
