// src/models/mod.rs

//! Data structures representing catalog entities and request payloads.

pub mod category;
pub mod product;
pub mod requests;

pub use category::Category;
pub use product::{Product, ProductView};
pub use requests::{CategoryPayload, FormNumber, ProductPayload};
