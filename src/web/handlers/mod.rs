// src/web/handlers/mod.rs

pub mod category_handlers;
pub mod product_handlers;
pub mod upload_handlers;

use crate::errors::AppError;
use uuid::Uuid;

/// Ids come off the path as plain strings. One that does not parse cannot
/// name a live record, so it gets the same 404 as an absent id.
pub(crate) fn parse_id(raw: &str, entity: &str) -> Result<Uuid, AppError> {
  Uuid::parse_str(raw).map_err(|_| AppError::NotFound(format!("{} with ID {} not found", entity, raw)))
}
