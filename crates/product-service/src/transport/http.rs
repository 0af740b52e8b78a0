//! # HTTP Routes
//!
//! The path-based surface of the service, built on axum:
//!
//! - `GET /{id}` - fetch one product
//! - `PATCH /{id}` - partial update
//! - `DELETE /{id}` - permanent removal (replies with the removed product)
//! - `GET /health` - liveness probe
//!
//! Handlers are pure glue: extract typed parameters, forward to the
//! [`ProductClient`], serialize the result. A non-numeric `{id}` is
//! rejected by path extraction before any handler runs; malformed JSON
//! bodies (including unknown fields) are rejected by the `Json` extractor.

use crate::clients::{EntityClient, ProductClient};
use crate::model::{Product, ProductId, ProductUpdate};
use crate::product_actor::ProductError;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

/// Builds the HTTP router over a shared product client.
pub fn router(client: ProductClient) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/{id}",
            get(get_product).patch(update_product).delete(delete_product),
        )
        .with_state(client)
}

/// Error wrapper translating [`ProductError`] into an HTTP response.
///
/// The body always has the shape
/// `{"error": {"kind": "...", "message": "..."}}`.
pub struct ApiError(ProductError);

impl From<ProductError> for ApiError {
    fn from(error: ProductError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self.0 {
            ProductError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ProductError::Validation(_) => (StatusCode::BAD_REQUEST, "validation"),
            ProductError::StoreCommunication(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        };
        let body = Json(json!({
            "error": { "kind": kind, "message": self.0.to_string() }
        }));
        (status, body).into_response()
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "service": "product-service" }))
}

async fn get_product(
    State(client): State<ProductClient>,
    Path(id): Path<u32>,
) -> Result<Json<Product>, ApiError> {
    match client.get(ProductId(id)).await? {
        Some(product) => Ok(Json(product)),
        None => Err(ApiError(ProductError::NotFound(id.to_string()))),
    }
}

async fn update_product(
    State(client): State<ProductClient>,
    Path(id): Path<u32>,
    Json(update): Json<ProductUpdate>,
) -> Result<Json<Product>, ApiError> {
    let product = client.update_product(ProductId(id), update).await?;
    Ok(Json(product))
}

async fn delete_product(
    State(client): State<ProductClient>,
    Path(id): Path<u32>,
) -> Result<Json<Product>, ApiError> {
    let removed = client.delete(ProductId(id)).await?;
    Ok(Json(removed))
}
