// src/main.rs

use catalog_admin::config::AppConfig;
use catalog_admin::state::AppState;
use catalog_admin::store::{CatalogStore, PgCatalogStore};
use catalog_admin::web::configure_app_routes;

use actix_web::{web as actix_data, App, HttpServer};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE)
    .init();

  tracing::info!("Starting catalog-admin server...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  let db_pool = match PgPool::connect(&app_config.database_url).await {
    Ok(pool) => {
      tracing::info!("Successfully connected to the database.");
      pool
    }
    Err(e) => {
      tracing::error!(error = %e, "Failed to connect to the database.");
      panic!("Database connection error: {}", e);
    }
  };

  if let Err(e) = sqlx::migrate!("./migrations").run(&db_pool).await {
    tracing::error!(error = %e, "Failed to run database migrations.");
    panic!("Migration error: {}", e);
  }

  // The store is constructed here and injected; nothing else in the process
  // opens connections.
  let store: Arc<dyn CatalogStore> = Arc::new(PgCatalogStore::new(db_pool));
  let app_state = AppState::new(store, app_config.clone());

  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  let upload_dir = app_config.upload_dir.clone();
  if let Err(e) = tokio::fs::create_dir_all(&upload_dir).await {
    tracing::warn!(error = %e, "Could not pre-create the upload directory.");
  }

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(configure_app_routes)
      .service(actix_files::Files::new("/uploads", upload_dir.clone()))
  })
  .bind(&server_address)?
  .run()
  .await
}
