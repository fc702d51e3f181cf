//! Integration tests for the Axum web server.
//!
//! These tests drive the full router over a real database file and
//! uploads directory.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{Form, TestApp, body_bytes, json_body};

fn aloe() -> Form {
    Form::new()
        .text("name", "Aloe Vera")
        .text("price", "199")
        .text("categories", "Succulent, Indoor")
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let app = TestApp::new().await;

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"OK");
}

#[tokio::test]
async fn list_starts_empty() {
    let app = TestApp::new().await;

    let response = app.get("/plants").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!([]));
}

#[tokio::test]
async fn create_parses_fields_and_stores_image() {
    let app = TestApp::new().await;

    let plant = app
        .create(&aloe().image("my aloe.png", b"\x89PNG fake"))
        .await;

    assert!(plant["_id"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(plant["name"], "Aloe Vera");
    assert_eq!(plant["price"], 199.0);
    assert_eq!(plant["categories"], json!(["succulent", "indoor"]));
    assert_eq!(plant["availability"], true);
    assert!(plant["createdAt"].is_string());
    assert!(plant["updatedAt"].is_string());

    let image_url = plant["imageUrl"].as_str().unwrap();
    assert!(image_url.starts_with("/uploads/"));
    assert!(image_url.ends_with("_my_aloe.png"));

    let served = app.get(image_url).await;
    assert_eq!(served.status(), StatusCode::OK);
    assert_eq!(body_bytes(served).await, b"\x89PNG fake");
}

#[tokio::test]
async fn create_without_image_has_no_image_url() {
    let app = TestApp::new().await;

    let plant = app
        .create(&aloe().text("availability", "false"))
        .await;

    assert!(plant.get("imageUrl").is_none());
    assert_eq!(plant["availability"], false);
    assert!(app.stored_files().is_empty());
}

#[tokio::test]
async fn create_without_price_is_bad_request() {
    let app = TestApp::new().await;
    let form = Form::new()
        .text("name", "Aloe Vera")
        .text("categories", "succulent")
        .image("aloe.png", b"png");

    let response = app.submit(Method::POST, "/plants", &form).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        json!({"error": "name, price, categories required", "status": 400})
    );
    assert!(app.stored_files().is_empty());
    assert_eq!(json_body(app.get("/plants").await).await, json!([]));
}

#[tokio::test]
async fn create_with_negative_price_is_bad_request() {
    let app = TestApp::new().await;
    let form = aloe().text("price", "-3");

    let response = app.submit(Method::POST, "/plants", &form).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_rejects_non_multipart_body() {
    let app = TestApp::new().await;
    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/plants")
        .header("content-type", "application/json")
        .body(axum::body::Body::from(r#"{"name":"Aloe"}"#))
        .unwrap();

    let response = app.send(request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["status"], 400);
}

#[tokio::test]
async fn oversized_image_is_bad_request() {
    let app = TestApp::with_upload_limit(16).await;

    let response = app
        .submit(Method::POST, "/plants", &aloe().image("big.png", &[7u8; 64]))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.stored_files().is_empty());
}

#[tokio::test]
async fn get_returns_single_plant() {
    let app = TestApp::new().await;
    let created = app.create(&aloe()).await;
    let id = created["_id"].as_str().unwrap();

    let response = app.get(&format!("/plants/{id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, created);
}

#[tokio::test]
async fn list_filters_by_search_and_category() {
    let app = TestApp::new().await;
    app.create(&aloe()).await;
    app.create(
        &Form::new()
            .text("name", "Rose Bush")
            .text("price", "250")
            .text("categories", "Outdoor, Flowering"),
    )
    .await;
    app.create(
        &Form::new()
            .text("name", "Snake Plant")
            .text("price", "300")
            .text("categories", "Indoor, Low Maintenance"),
    )
    .await;

    let names = |value: serde_json::Value| -> Vec<String> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap().to_string())
            .collect()
    };

    let all = names(json_body(app.get("/plants").await).await);
    assert_eq!(all, vec!["Snake Plant", "Rose Bush", "Aloe Vera"]);

    let indoor = names(json_body(app.get("/plants?category=INDOOR").await).await);
    assert_eq!(indoor, vec!["Snake Plant", "Aloe Vera"]);

    let flowering = names(json_body(app.get("/plants?search=flower").await).await);
    assert_eq!(flowering, vec!["Rose Bush"]);

    let both = names(json_body(app.get("/plants?search=aloe&category=indoor").await).await);
    assert_eq!(both, vec!["Aloe Vera"]);

    let empty = names(json_body(app.get("/plants?search=&category=").await).await);
    assert_eq!(empty, all);

    let space = names(json_body(app.get("/plants?search=%20").await).await);
    assert_eq!(space, vec!["Snake Plant", "Rose Bush", "Aloe Vera"]);

    let padded = names(json_body(app.get("/plants?search=aloe%20%20").await).await);
    assert!(padded.is_empty());
}

#[tokio::test]
async fn update_unknown_id_is_not_found_and_writes_nothing() {
    let app = TestApp::new().await;
    let form = Form::new()
        .text("name", "Ghost")
        .image("ghost.png", b"png");

    let response = app.submit(Method::PUT, "/plants/missing", &form).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response).await,
        json!({"error": "Plant not found", "status": 404})
    );
    assert!(app.stored_files().is_empty());
}

#[tokio::test]
async fn update_changes_only_supplied_fields() {
    let app = TestApp::new().await;
    let created = app.create(&aloe()).await;
    let id = created["_id"].as_str().unwrap();

    let response = app
        .submit(
            Method::PUT,
            &format!("/plants/{id}"),
            &Form::new().text("price", "149.5"),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let updated = json_body(response).await;
    assert_eq!(updated["price"], 149.5);
    assert_eq!(updated["name"], "Aloe Vera");
    assert_eq!(updated["categories"], created["categories"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);
}

#[tokio::test]
async fn update_with_new_image_retires_old_file() {
    let app = TestApp::new().await;
    let created = app.create(&aloe().image("old.png", b"old")).await;
    let id = created["_id"].as_str().unwrap();
    let old_url = created["imageUrl"].as_str().unwrap().to_string();

    let response = app
        .submit(
            Method::PUT,
            &format!("/plants/{id}"),
            &Form::new().text("name", "Aloe").image("new.png", b"new"),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let updated = json_body(response).await;
    let new_url = updated["imageUrl"].as_str().unwrap();
    assert_ne!(new_url, old_url);
    assert!(new_url.ends_with("_new.png"));
    assert_eq!(updated["name"], "Aloe");

    let files = app.stored_files();
    assert_eq!(files.len(), 1);
    assert!(new_url.ends_with(&files[0]));
    assert_eq!(app.get(&old_url).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_without_image_keeps_existing_file() {
    let app = TestApp::new().await;
    let created = app.create(&aloe().image("aloe.png", b"png")).await;
    let id = created["_id"].as_str().unwrap();

    let updated = json_body(
        app.submit(
            Method::PUT,
            &format!("/plants/{id}"),
            &Form::new().text("availability", "false"),
        )
        .await,
    )
    .await;

    assert_eq!(updated["imageUrl"], created["imageUrl"]);
    assert_eq!(updated["availability"], false);
    assert_eq!(app.stored_files().len(), 1);
}

#[tokio::test]
async fn delete_removes_record_and_image() {
    let app = TestApp::new().await;
    let created = app.create(&aloe().image("aloe.png", b"png")).await;
    let id = created["_id"].as_str().unwrap();

    let response = app.delete(&format!("/plants/{id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"message": "Plant deleted"}));
    assert_eq!(json_body(app.get("/plants").await).await, json!([]));
    assert!(app.stored_files().is_empty());

    let again = app.delete(&format!("/plants/{id}")).await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}
