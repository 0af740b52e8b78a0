//! # Generic Client
//!
//! This module defines the generic client for communicating with a
//! [`StoreActor`](crate::StoreActor).

use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `StoreActor`.
///
/// The client forwards CRUD requests over a Tokio mpsc channel and receives
/// results via oneshot channels.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive and the
///   client can be shared across tasks (and transports).
/// * **Async API** – all methods resolve to `Result<…, StoreError>`.
/// * **Generic** – works with any entity that implements `StoreEntity`.
#[derive(Clone)]
pub struct StoreClient<T: StoreEntity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: StoreEntity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    /// Create a new entity from the given payload.
    /// Responds with the materialized entity, store-assigned ID included.
    pub async fn create(&self, params: T::Create) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Create { params, respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    /// Fetch every live entity in insertion order.
    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::List { respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    /// Fetch an entity by ID; `Ok(None)` when the ID is unknown.
    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Get { id, respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    /// Apply a partial update and return the updated entity.
    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Update {
                id,
                update,
                respond_to,
            })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    /// Remove an entity permanently and return its final state.
    pub async fn delete(&self, id: T::Id) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Delete { id, respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }
}
