//! # Product Client
//!
//! Provides a high-level API for interacting with the Product store.
//! It wraps a `StoreClient<Product>` and exposes domain-specific methods;
//! `get`, `list`, and `delete` are inherited from [`EntityClient`].

use crate::clients::entity_client::EntityClient;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use store_actor::{StoreClient, StoreError};
use tracing::{debug, instrument};

/// Client for interacting with the Product store actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: StoreClient<Product>,
}

impl ProductClient {
    pub fn new(inner: StoreClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl EntityClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &StoreClient<Product> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        match e {
            StoreError::NotFound(id) => ProductError::NotFound(id),
            StoreError::EntityError(inner) => ProductError::Validation(inner.to_string()),
            other => ProductError::StoreCommunication(other.to_string()),
        }
    }
}

impl ProductClient {
    /// Create a product from a creation payload, returning the stored
    /// entity with its assigned id.
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Fetch all products in insertion order.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        self.list().await
    }

    /// Apply a partial update to a product and return its new state.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}
