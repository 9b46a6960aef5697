// src/web/handlers/category_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::CategoryPayload;
use crate::services::category_service;
use crate::state::AppState;
use crate::web::handlers::parse_id;

#[instrument(name = "handler::list_categories", skip(app_state))]
pub async fn list_categories_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let categories = category_service::list_categories(app_state.store.as_ref()).await?;
  info!("Fetched {} categories.", categories.len());
  Ok(HttpResponse::Ok().json(categories))
}

#[instrument(name = "handler::create_category", skip(app_state, payload))]
pub async fn create_category_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<CategoryPayload>,
) -> Result<HttpResponse, AppError> {
  let category = category_service::create_category(app_state.store.as_ref(), payload.into_inner()).await?;
  Ok(HttpResponse::Ok().json(category))
}

#[instrument(name = "handler::update_category", skip(app_state, payload), fields(category_id = %path.as_ref()))]
pub async fn update_category_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  payload: web::Json<CategoryPayload>,
) -> Result<HttpResponse, AppError> {
  let id = parse_id(&path.into_inner(), "Category")?;
  category_service::update_category(app_state.store.as_ref(), id, payload.into_inner()).await?;
  Ok(HttpResponse::Ok().json(json!({ "success": true })))
}

#[instrument(name = "handler::delete_category", skip(app_state), fields(category_id = %path.as_ref()))]
pub async fn delete_category_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let id = parse_id(&path.into_inner(), "Category")?;
  category_service::delete_category(app_state.store.as_ref(), id).await?;
  Ok(HttpResponse::Ok().json(json!({ "success": true })))
}
