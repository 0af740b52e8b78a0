//! HTTP route tests: the axum router driven in-memory through
//! `tower::ServiceExt::oneshot`, backed by a real store actor.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use product_service::lifecycle::ProductSystem;
use product_service::model::{Product, ProductCreate};
use product_service::transport::http;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn seeded_system(names: &[(&str, f64)]) -> ProductSystem {
    let system = ProductSystem::new();
    for (name, price) in names {
        system
            .product_client
            .create_product(ProductCreate {
                name: name.to_string(),
                price: *price,
                description: None,
            })
            .await
            .unwrap();
    }
    system
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn get_by_id_returns_the_product() {
    let system = seeded_system(&[("Keyboard", 49.9)]).await;
    let router = http::router(system.product_client.clone());

    let response = router
        .oneshot(Request::get("/1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let product: Product = serde_json::from_value(json_body(response).await).unwrap();
    assert_eq!(product.name, "Keyboard");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn get_unknown_id_is_404() {
    let system = seeded_system(&[]).await;
    let router = http::router(system.product_client.clone());

    let response = router
        .oneshot(Request::get("/99").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["error"]["kind"], json!("not_found"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn non_numeric_id_is_rejected_before_any_handler() {
    let system = seeded_system(&[]).await;
    let router = http::router(system.product_client.clone());

    let response = router
        .oneshot(Request::get("/abc").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn patch_applies_a_partial_update() {
    let system = seeded_system(&[("Keyboard", 49.9)]).await;
    let router = http::router(system.product_client.clone());

    let request = Request::patch("/1")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"price": 39.9}"#))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["name"], json!("Keyboard"));
    assert_eq!(body["price"], json!(39.9));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn patch_with_invalid_values_is_400() {
    let system = seeded_system(&[("Keyboard", 49.9)]).await;
    let router = http::router(system.product_client.clone());

    let request = Request::patch("/1")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"price": -5.0}"#))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"]["kind"], json!("validation"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn patch_with_unknown_field_is_rejected() {
    let system = seeded_system(&[("Keyboard", 49.9)]).await;
    let router = http::router(system.product_client.clone());

    let request = Request::patch("/1")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"sku": "X-1"}"#))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert!(response.status().is_client_error());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn delete_removes_and_returns_the_product() {
    let system = seeded_system(&[("Keyboard", 49.9)]).await;

    let response = http::router(system.product_client.clone())
        .oneshot(Request::delete("/1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["name"], json!("Keyboard"));

    // The product is gone afterwards.
    let response = http::router(system.product_client.clone())
        .oneshot(Request::get("/1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn delete_unknown_id_is_404() {
    let system = seeded_system(&[]).await;
    let router = http::router(system.product_client.clone());

    let response = router
        .oneshot(Request::delete("/7").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn health_endpoint_responds() {
    let system = seeded_system(&[]).await;
    let router = http::router(system.product_client.clone());

    let response = router
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], json!("ok"));

    system.shutdown().await.unwrap();
}
