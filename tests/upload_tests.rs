// tests/upload_tests.rs
mod common;

use common::*;

use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use catalog_admin::config::MAX_UPLOAD_BYTES;
use catalog_admin::errors::AppError;
use catalog_admin::services::upload_service;
use catalog_admin::web::configure_app_routes;
use serde_json::Value;

#[tokio::test]
async fn stores_the_file_and_builds_the_public_url() {
  setup_tracing();
  let config = test_config(scratch_upload_dir());

  let stored = upload_service::store_image(&config, "my photo (1).png", "image/png", b"fake png bytes")
    .await
    .unwrap();

  assert!(stored.filename.ends_with("_my_photo__1_.png"));
  assert_eq!(stored.image_url, format!("http://testserver/uploads/{}", stored.filename));

  let on_disk = tokio::fs::read(config.upload_dir.join(&stored.filename)).await.unwrap();
  assert_eq!(on_disk, b"fake png bytes");
}

#[tokio::test]
async fn creates_the_upload_directory_on_demand() {
  setup_tracing();
  // A nested path that does not exist yet.
  let config = test_config(scratch_upload_dir().join("deeper").join("still"));
  let stored = upload_service::store_image(&config, "a.png", "image/png", b"x").await.unwrap();
  assert!(config.upload_dir.join(&stored.filename).exists());
}

#[tokio::test]
async fn rejects_non_image_content_types() {
  setup_tracing();
  let config = test_config(scratch_upload_dir());
  let err = upload_service::store_image(&config, "notes.txt", "text/plain", b"hello")
    .await
    .unwrap_err();
  assert!(matches!(err, AppError::Validation(ref m) if m == "Only image files are allowed"));
  assert!(!config.upload_dir.exists());
}

#[tokio::test]
async fn rejects_payloads_over_the_ceiling() {
  setup_tracing();
  let config = test_config(scratch_upload_dir());
  let oversized = vec![0u8; MAX_UPLOAD_BYTES + 1];
  let err = upload_service::store_image(&config, "big.png", "image/png", &oversized)
    .await
    .unwrap_err();
  assert!(matches!(err, AppError::Validation(_)));
}

#[actix_web::test]
async fn multipart_upload_over_http() {
  setup_tracing();
  let state = memory_state();
  let app = test::init_service(
    App::new()
      .app_data(web::Data::new(state.clone()))
      .configure(configure_app_routes),
  )
  .await;

  let boundary = "------------------------catalogtest";
  let body = format!(
    "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"tiny.png\"\r\nContent-Type: image/png\r\n\r\nfake png bytes\r\n--{b}--\r\n",
    b = boundary
  );

  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/upload")
      .insert_header((
        header::CONTENT_TYPE,
        format!("multipart/form-data; boundary={}", boundary),
      ))
      .set_payload(body)
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  let json: Value = test::read_body_json(resp).await;
  assert_eq!(json["success"], true);
  let filename = json["filename"].as_str().unwrap();
  assert!(filename.ends_with("_tiny.png"));
  assert_eq!(
    json["imageUrl"].as_str().unwrap(),
    format!("http://testserver/uploads/{}", filename)
  );
}

#[actix_web::test]
async fn multipart_with_a_non_image_field_is_a_400() {
  setup_tracing();
  let state = memory_state();
  let app = test::init_service(
    App::new()
      .app_data(web::Data::new(state.clone()))
      .configure(configure_app_routes),
  )
  .await;

  let boundary = "------------------------catalogtest";
  let body = format!(
    "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"notes.txt\"\r\nContent-Type: text/plain\r\n\r\nhello\r\n--{b}--\r\n",
    b = boundary
  );

  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/upload")
      .insert_header((
        header::CONTENT_TYPE,
        format!("multipart/form-data; boundary={}", boundary),
      ))
      .set_payload(body)
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let json: Value = test::read_body_json(resp).await;
  assert_eq!(json["error"], "Only image files are allowed");
}

#[actix_web::test]
async fn raw_body_upload_uses_the_filename_query_parameter() {
  setup_tracing();
  let state = memory_state();
  let app = test::init_service(
    App::new()
      .app_data(web::Data::new(state.clone()))
      .configure(configure_app_routes),
  )
  .await;

  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/upload?filename=snapshot.jpg")
      .insert_header((header::CONTENT_TYPE, "image/jpeg"))
      .set_payload(&b"fake jpeg bytes"[..])
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  let json: Value = test::read_body_json(resp).await;
  assert!(json["filename"].as_str().unwrap().ends_with("_snapshot.jpg"));
}

#[actix_web::test]
async fn raw_body_upload_without_a_filename_is_a_400() {
  setup_tracing();
  let state = memory_state();
  let app = test::init_service(
    App::new()
      .app_data(web::Data::new(state.clone()))
      .configure(configure_app_routes),
  )
  .await;

  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/upload")
      .insert_header((header::CONTENT_TYPE, "image/jpeg"))
      .set_payload(&b"bytes"[..])
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
