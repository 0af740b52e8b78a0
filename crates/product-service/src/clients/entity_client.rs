//! # EntityClient Trait
//!
//! Provides a common interface for resource-specific clients, adding
//! default `get`, `list`, and `delete` methods built on top of a generic
//! [`StoreClient`].
//!
//! A wrapper client only supplies `inner()` (the generic client) and
//! `map_error()` (the translation from [`StoreError`] to its own error
//! type); the standard read and delete paths come for free.

use async_trait::async_trait;
use store_actor::{StoreClient, StoreEntity, StoreError};

/// Trait for resource-specific clients to inherit standard CRUD operations.
///
/// This trait reduces boilerplate by providing default implementations for
/// the operations whose signatures don't involve resource-specific
/// payloads. Creation and update take DTOs, so wrappers expose those as
/// their own named methods.
#[async_trait]
pub trait EntityClient<T: StoreEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every live entity in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID, returning its final state.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
