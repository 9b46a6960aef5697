// src/services/upload_service.rs

//! Stores uploaded product images on disk under collision-resistant names
//! and hands back the public URL they will be served from.

use crate::config::{AppConfig, MAX_UPLOAD_BYTES};
use crate::errors::{AppError, Result};
use chrono::Utc;
use std::io::ErrorKind;
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct StoredUpload {
  pub filename: String,
  pub image_url: String,
}

/// Replaces every character outside `[A-Za-z0-9.-]` with an underscore.
pub fn sanitize_filename(name: &str) -> String {
  name
    .chars()
    .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
    .collect()
}

fn classify_io_error(err: std::io::Error) -> AppError {
  match err.kind() {
    ErrorKind::PermissionDenied => {
      AppError::UploadForbidden("Permission denied writing to the upload store".to_string())
    }
    ErrorKind::NotFound => AppError::UploadStoreMissing("Upload store not found".to_string()),
    _ => AppError::Upload(format!("Failed to upload file: {}", err)),
  }
}

/// Validates type and size, then writes the payload under
/// `<upload_dir>/<millis>_<sanitized-name>`. The upload directory is created
/// on demand the first time a write lands in a fresh deployment.
#[instrument(name = "upload_service::store_image", skip(config, bytes), fields(size = bytes.len()))]
pub async fn store_image(config: &AppConfig, original_name: &str, content_type: &str, bytes: &[u8]) -> Result<StoredUpload> {
  if original_name.trim().is_empty() {
    return Err(AppError::Validation("No file uploaded".to_string()));
  }
  if !content_type.starts_with("image/") {
    return Err(AppError::Validation("Only image files are allowed".to_string()));
  }
  if bytes.len() > MAX_UPLOAD_BYTES {
    return Err(AppError::Validation("File size must be less than 5MB".to_string()));
  }

  let filename = format!("{}_{}", Utc::now().timestamp_millis(), sanitize_filename(original_name));
  let path = config.upload_dir.join(&filename);

  match tokio::fs::write(&path, bytes).await {
    Ok(()) => {}
    Err(err) if err.kind() == ErrorKind::NotFound => {
      tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .map_err(classify_io_error)?;
      tokio::fs::write(&path, bytes).await.map_err(classify_io_error)?;
    }
    Err(err) => return Err(classify_io_error(err)),
  }

  let image_url = format!("{}/uploads/{}", config.public_base_url.trim_end_matches('/'), filename);
  info!(%filename, "Image stored.");
  Ok(StoredUpload { filename, image_url })
}
