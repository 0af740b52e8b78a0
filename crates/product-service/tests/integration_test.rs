//! End-to-end tests driving the full system, with a real store actor
//! running: through its client, and across both transports at once.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use product_service::clients::EntityClient;
use product_service::lifecycle::ProductSystem;
use product_service::model::{Product, ProductCreate, ProductId, ProductUpdate};
use product_service::product_actor::ProductError;
use product_service::transport::{http, tcp::CommandListener};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tower::ServiceExt;

fn widget_params(name: &str, price: f64) -> ProductCreate {
    ProductCreate {
        name: name.to_string(),
        price,
        description: None,
    }
}

#[tokio::test]
async fn full_product_lifecycle() {
    let system = ProductSystem::new();
    let client = &system.product_client;

    // Create two products; ids are assigned sequentially from 1.
    let first = client
        .create_product(widget_params("Keyboard", 49.9))
        .await
        .unwrap();
    let second = client
        .create_product(widget_params("Mouse", 19.9))
        .await
        .unwrap();
    assert_eq!(first.id, ProductId(1));
    assert_eq!(second.id, ProductId(2));

    // List returns both, in insertion order.
    let all = client.list_products().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "Keyboard");
    assert_eq!(all[1].name, "Mouse");

    // Partial update touches only the provided fields.
    let updated = client
        .update_product(
            ProductId(1),
            ProductUpdate {
                price: Some(39.9),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Keyboard");
    assert_eq!(updated.price, 39.9);

    // Delete returns the removed entity; a second fetch misses.
    let removed = client.delete(ProductId(1)).await.unwrap();
    assert_eq!(removed.name, "Keyboard");
    assert_eq!(client.get(ProductId(1)).await.unwrap(), None);

    // The freed id is never reused.
    let third = client
        .create_product(widget_params("Monitor", 199.0))
        .await
        .unwrap();
    assert_eq!(third.id, ProductId(3));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn validation_failures_do_not_touch_the_store() {
    let system = ProductSystem::new();
    let client = &system.product_client;

    let result = client.create_product(widget_params("", 10.0)).await;
    assert!(matches!(result, Err(ProductError::Validation(_))));

    let result = client.create_product(widget_params("Widget", -1.0)).await;
    assert!(matches!(result, Err(ProductError::Validation(_))));

    assert!(client.list_products().await.unwrap().is_empty());

    // Rejected creates must not burn ids.
    let ok = client.create_product(widget_params("Widget", 10.0)).await;
    assert_eq!(ok.unwrap().id, ProductId(1));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn operations_on_missing_products_report_not_found() {
    let system = ProductSystem::new();
    let client = &system.product_client;

    assert_eq!(client.get(ProductId(42)).await.unwrap(), None);

    let result = client
        .update_product(ProductId(42), ProductUpdate::default())
        .await;
    assert!(matches!(result, Err(ProductError::NotFound(_))));

    let result = client.delete(ProductId(42)).await;
    assert!(matches!(result, Err(ProductError::NotFound(_))));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn both_transports_share_one_store() {
    let system = ProductSystem::new();

    let listener = CommandListener::bind(
        "127.0.0.1:0".parse().unwrap(),
        system.product_client.clone(),
    )
    .await
    .unwrap();
    let addr = listener.local_addr().unwrap();
    let listener_task = tokio::spawn(listener.run());

    // Create over the TCP command channel.
    let stream = TcpStream::connect(addr).await.unwrap();
    let mut stream = BufReader::new(stream);
    stream
        .get_mut()
        .write_all(b"{\"cmd\":\"add_product\",\"data\":{\"name\":\"Widget\",\"price\":10.0}}\n")
        .await
        .unwrap();
    let mut line = String::new();
    stream.read_line(&mut line).await.unwrap();
    let reply: serde_json::Value = serde_json::from_str(&line).unwrap();
    assert_eq!(reply["ok"], serde_json::json!(true));
    assert_eq!(reply["data"]["id"], serde_json::json!(1));

    // The same product is visible over the HTTP routes.
    let response = http::router(system.product_client.clone())
        .oneshot(Request::get("/1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let product: Product = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(product.id, ProductId(1));
    assert_eq!(product.name, "Widget");

    // And deleting over HTTP empties the list served over TCP.
    let response = http::router(system.product_client.clone())
        .oneshot(Request::delete("/1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    stream
        .get_mut()
        .write_all(b"{\"cmd\":\"get_products\"}\n")
        .await
        .unwrap();
    let mut line = String::new();
    stream.read_line(&mut line).await.unwrap();
    let reply: serde_json::Value = serde_json::from_str(&line).unwrap();
    assert_eq!(reply["data"], serde_json::json!([]));

    drop(stream);
    listener_task.abort();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn shutdown_waits_for_in_flight_work() {
    let system = ProductSystem::new();
    let client = system.product_client.clone();

    let created = client
        .create_product(widget_params("Widget", 10.0))
        .await
        .unwrap();
    assert_eq!(created.id, ProductId(1));

    // The extra clone must be gone before shutdown can complete.
    drop(client);
    system.shutdown().await.unwrap();
}
