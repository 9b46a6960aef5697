// src/web/routes.rs

use actix_web::web;

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called in `main.rs` (and the handler tests) to configure the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api")
      .route("/health", web::get().to(health_check_handler))
      .service(
        web::scope("/categories")
          .route(
            "",
            web::get().to(crate::web::handlers::category_handlers::list_categories_handler),
          )
          .route(
            "",
            web::post().to(crate::web::handlers::category_handlers::create_category_handler),
          )
          .route(
            "/{category_id}",
            web::put().to(crate::web::handlers::category_handlers::update_category_handler),
          )
          .route(
            "/{category_id}",
            web::delete().to(crate::web::handlers::category_handlers::delete_category_handler),
          ),
      )
      .service(
        web::scope("/products")
          .route(
            "",
            web::get().to(crate::web::handlers::product_handlers::list_products_handler),
          )
          .route(
            "",
            web::post().to(crate::web::handlers::product_handlers::create_product_handler),
          )
          .route(
            "/{product_id}",
            web::put().to(crate::web::handlers::product_handlers::update_product_handler),
          )
          .route(
            "/{product_id}",
            web::delete().to(crate::web::handlers::product_handlers::delete_product_handler),
          ),
      )
      .route(
        "/upload",
        web::post().to(crate::web::handlers::upload_handlers::upload_image_handler),
      ),
  );
}
