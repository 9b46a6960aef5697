// tests/http_api_tests.rs
//
// Handler-level tests: the real routes over the in-memory store.
mod common;

use common::*;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use catalog_admin::web::configure_app_routes;
use serde_json::{json, Value};
use uuid::Uuid;

macro_rules! test_app {
  ($state:expr) => {
    test::init_service(
      App::new()
        .app_data(web::Data::new($state.clone()))
        .configure(configure_app_routes),
    )
    .await
  };
}

#[actix_web::test]
async fn health_answers_ok() {
  setup_tracing();
  let app = test_app!(memory_state());
  let resp = test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn category_crud_over_http() {
  setup_tracing();
  let app = test_app!(memory_state());

  // Create answers 200 with the record, timestamps serialized as strings.
  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/categories")
      .set_json(json!({"name": "Clothing", "description": "Wearables"}))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  let created: Value = test::read_body_json(resp).await;
  assert_eq!(created["name"], "Clothing");
  assert!(created["created_at"].is_string());
  let id = created["id"].as_str().unwrap().to_string();

  // List includes it.
  let resp = test::call_service(&app, test::TestRequest::get().uri("/api/categories").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let listed: Value = test::read_body_json(resp).await;
  assert_eq!(listed.as_array().unwrap().len(), 1);

  // Update answers the success envelope.
  let resp = test::call_service(
    &app,
    test::TestRequest::put()
      .uri(&format!("/api/categories/{}", id))
      .set_json(json!({"name": "Apparel"}))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({"success": true}));

  // Delete likewise.
  let resp = test::call_service(
    &app,
    test::TestRequest::delete()
      .uri(&format!("/api/categories/{}", id))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({"success": true}));
}

#[actix_web::test]
async fn empty_category_name_is_a_400_with_an_error_envelope() {
  setup_tracing();
  let app = test_app!(memory_state());
  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/categories")
      .set_json(json!({"name": "  "}))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert!(body["error"].is_string());
}

#[actix_web::test]
async fn missing_and_malformed_category_ids_are_404() {
  setup_tracing();
  let app = test_app!(memory_state());

  let resp = test::call_service(
    &app,
    test::TestRequest::put()
      .uri(&format!("/api/categories/{}", Uuid::new_v4()))
      .set_json(json!({"name": "Anything"}))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);

  // An id that does not even parse gets the same 404, not a parser error.
  let resp = test::call_service(
    &app,
    test::TestRequest::delete()
      .uri("/api/categories/not-a-uuid")
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn product_create_answers_201_with_the_joined_view() {
  setup_tracing();
  let app = test_app!(memory_state());

  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/categories")
      .set_json(json!({"name": "Clothing"}))
      .to_request(),
  )
  .await;
  let category: Value = test::read_body_json(resp).await;
  let category_id = category["id"].as_str().unwrap();

  // Stringly-typed price and stock, the way admin forms send them.
  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/products")
      .set_json(json!({
        "name": "Red Shirt",
        "price": "19.99",
        "stock": "5",
        "category_id": category_id,
      }))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::CREATED);
  let product: Value = test::read_body_json(resp).await;
  assert_eq!(product["category_name"], "Clothing");
  assert_eq!(product["price"], 19.99);
  assert_eq!(product["stock"], 5);
}

#[actix_web::test]
async fn product_with_unknown_category_is_a_400() {
  setup_tracing();
  let app = test_app!(memory_state());
  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/products")
      .set_json(json!({
        "name": "Orphan",
        "price": 1.0,
        "stock": 1,
        "category_id": Uuid::new_v4().to_string(),
      }))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["error"], "Category not found");
}

#[actix_web::test]
async fn invalid_product_fields_are_400_and_missing_products_404() {
  setup_tracing();
  let app = test_app!(memory_state());

  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/categories")
      .set_json(json!({"name": "Clothing"}))
      .to_request(),
  )
  .await;
  let category: Value = test::read_body_json(resp).await;
  let category_id = category["id"].as_str().unwrap().to_string();

  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/products")
      .set_json(json!({
        "name": "Bad Stock",
        "price": 1.0,
        "stock": "-1",
        "category_id": category_id,
      }))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

  let resp = test::call_service(
    &app,
    test::TestRequest::put()
      .uri(&format!("/api/products/{}", Uuid::new_v4()))
      .set_json(json!({
        "name": "Ghost",
        "price": 1.0,
        "stock": 1,
        "category_id": category_id,
      }))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);

  let resp = test::call_service(
    &app,
    test::TestRequest::delete()
      .uri(&format!("/api/products/{}", Uuid::new_v4()))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn category_delete_cascades_through_the_api() {
  setup_tracing();
  let app = test_app!(memory_state());

  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/categories")
      .set_json(json!({"name": "Doomed"}))
      .to_request(),
  )
  .await;
  let category: Value = test::read_body_json(resp).await;
  let category_id = category["id"].as_str().unwrap().to_string();

  for name in ["A", "B"] {
    let resp = test::call_service(
      &app,
      test::TestRequest::post()
        .uri("/api/products")
        .set_json(json!({"name": name, "price": 1.0, "stock": 1, "category_id": category_id}))
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
  }

  let resp = test::call_service(
    &app,
    test::TestRequest::delete()
      .uri(&format!("/api/categories/{}", category_id))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);

  let resp = test::call_service(&app, test::TestRequest::get().uri("/api/products").to_request()).await;
  let products: Value = test::read_body_json(resp).await;
  assert!(products.as_array().unwrap().is_empty());
}
