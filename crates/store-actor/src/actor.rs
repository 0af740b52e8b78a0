//! # Generic Store Actor
//!
//! This module defines the `StoreActor`, the core component that manages the
//! lifecycle and state of entities. It implements the "Server" side of the
//! Actor Model, processing messages sequentially and ensuring exclusive
//! access to the entity store.

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the store. It owns the state
/// (`store`) and the receiver end of the channel.
///
/// **Concurrency Model**:
/// The actor processes its messages *sequentially* in a loop, so no `Mutex`
/// or `RwLock` is needed for the `store`. Creates, updates, and deletes on
/// the same store can never interleave: the Actor Model gives us safety
/// through exclusive ownership of state within one task.
///
/// # Implementation Details
///
/// The actor maintains a `HashMap` (`store`) mapping IDs to entities, a
/// `Vec` (`order`) recording insertion order for `List`, and a `u32`
/// counter (`next_id`) for ID assignment.
///
/// IDs start at 1 and are never reused: a deleted entity's ID stays dead
/// for the lifetime of the store.
///
/// ## Operations
///
/// * **Create**: assigns the next ID, calls [`StoreEntity::from_create`]
///   (validation failures surface here), stores the entity, and responds
///   with it.
/// * **List**: responds with a clone of every live entity in insertion
///   order.
/// * **Get**: responds with a clone of the entity, or `None` if unknown.
/// * **Update**: calls [`StoreEntity::apply_update`] on the stored entity
///   and responds with the updated state, or `NotFound`.
/// * **Delete**: removes the entity permanently and responds with the
///   removed state, or `NotFound`.
pub struct StoreActor<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: HashMap<T::Id, T>,
    order: Vec<T::Id>,
    next_id: u32,
}

impl<T: StoreEntity> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is
    ///   full, calls to the client will wait until there is space.
    ///
    /// # Returns
    ///
    /// A tuple containing:
    /// 1. The `StoreActor` instance (the server), which must be run via `.run()`.
    /// 2. The `StoreClient` instance, which can be cloned and shared to send requests.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            order: Vec::new(),
            next_id: 1,
        };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel
    /// closes (i.e. every client has been dropped).
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Product" instead of "product_service::model::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);

                    match T::from_create(id.clone(), params) {
                        Ok(item) => {
                            self.next_id += 1;
                            self.store.insert(id.clone(), item.clone());
                            self.order.push(id.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                        }
                    }
                }
                StoreRequest::List { respond_to } => {
                    let items: Vec<T> = self
                        .order
                        .iter()
                        .filter_map(|id| self.store.get(id))
                        .cloned()
                        .collect();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                StoreRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.apply_update(update) {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.remove(&id) {
                        self.order.retain(|known| known != &id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(item));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
