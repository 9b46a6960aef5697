// src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
  /// Base URL prefixed onto returned upload links, e.g. "http://localhost:8080".
  pub public_base_url: String,
  /// Directory uploaded images are written to and served from.
  pub upload_dir: PathBuf,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = get_env("DATABASE_URL")?;
    let public_base_url =
      get_env("PUBLIC_BASE_URL").unwrap_or_else(|_| format!("http://{}:{}", server_host, server_port));
    let upload_dir = get_env("UPLOAD_DIR")
      .map(PathBuf::from)
      .unwrap_or_else(|_| PathBuf::from("public/uploads"));

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      public_base_url,
      upload_dir,
    })
  }
}
