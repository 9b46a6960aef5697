// src/web/handlers/upload_handlers.rs

//! Image upload endpoint. Accepts either a multipart form with a "file"
//! field or a raw body paired with a `?filename=` query parameter, and
//! answers `{"success": true, "imageUrl": ..., "filename": ...}`.

use actix_multipart::Multipart;
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use futures_util::TryStreamExt;
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::config::MAX_UPLOAD_BYTES;
use crate::errors::AppError;
use crate::services::upload_service::{self, StoredUpload};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UploadQuery {
  pub filename: Option<String>,
}

#[instrument(name = "handler::upload_image", skip(app_state, req, query, payload))]
pub async fn upload_image_handler(
  app_state: web::Data<AppState>,
  req: HttpRequest,
  query: web::Query<UploadQuery>,
  payload: web::Payload,
) -> Result<HttpResponse, AppError> {
  let content_type = req
    .headers()
    .get(header::CONTENT_TYPE)
    .and_then(|v| v.to_str().ok())
    .unwrap_or("")
    .to_string();

  let stored = if content_type.starts_with("multipart/form-data") {
    receive_multipart(&app_state, Multipart::new(req.headers(), payload)).await?
  } else {
    receive_raw_body(&app_state, &content_type, query.into_inner(), payload).await?
  };

  Ok(HttpResponse::Ok().json(json!({
    "success": true,
    "imageUrl": stored.image_url,
    "filename": stored.filename,
  })))
}

async fn receive_multipart(app_state: &AppState, mut multipart: Multipart) -> Result<StoredUpload, AppError> {
  while let Some(mut field) = multipart
    .try_next()
    .await
    .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {}", e)))?
  {
    if field.name() != Some("file") {
      continue;
    }

    let original_name = field
      .content_disposition()
      .and_then(|cd| cd.get_filename())
      .unwrap_or("upload")
      .to_string();
    let mime = field.content_type().map(|m| m.to_string()).unwrap_or_default();

    let bytes = collect_capped(&mut field).await?;
    return upload_service::store_image(&app_state.config, &original_name, &mime, &bytes).await;
  }

  Err(AppError::Validation("No file uploaded".to_string()))
}

async fn receive_raw_body(
  app_state: &AppState,
  content_type: &str,
  query: UploadQuery,
  mut payload: web::Payload,
) -> Result<StoredUpload, AppError> {
  let filename = query
    .filename
    .filter(|f| !f.trim().is_empty())
    .ok_or_else(|| AppError::Validation("No filename or file body provided".to_string()))?;

  let mut bytes: Vec<u8> = Vec::new();
  while let Some(chunk) = payload
    .try_next()
    .await
    .map_err(|e| AppError::Upload(format!("Failed to read upload body: {}", e)))?
  {
    push_capped(&mut bytes, &chunk)?;
  }
  if bytes.is_empty() {
    return Err(AppError::Validation("No filename or file body provided".to_string()));
  }

  upload_service::store_image(&app_state.config, &filename, content_type, &bytes).await
}

async fn collect_capped(field: &mut actix_multipart::Field) -> Result<Vec<u8>, AppError> {
  let mut bytes: Vec<u8> = Vec::new();
  while let Some(chunk) = field
    .try_next()
    .await
    .map_err(|e| AppError::Upload(format!("Failed to read upload body: {}", e)))?
  {
    push_capped(&mut bytes, &chunk)?;
  }
  Ok(bytes)
}

// Stop buffering as soon as the payload crosses the ceiling instead of
// draining an arbitrarily large body first.
fn push_capped(bytes: &mut Vec<u8>, chunk: &[u8]) -> Result<(), AppError> {
  if bytes.len() + chunk.len() > MAX_UPLOAD_BYTES {
    return Err(AppError::Validation("File size must be less than 5MB".to_string()));
  }
  bytes.extend_from_slice(chunk);
  Ok(())
}
