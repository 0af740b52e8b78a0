//! # Generic Messages
//!
//! This module defines the generic message types used for communication
//! between the [`StoreClient`](crate::StoreClient) and the
//! [`StoreActor`](crate::StoreActor).

use crate::entity::StoreEntity;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Respond<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The CRUD Pattern
/// The variants map directly to the standard lifecycle operations of a
/// stored resource, plus `List` for enumerating the live entities:
///
/// - **Create**: Lifecycle start. Uses [`StoreEntity::Create`] to
///   initialize a new resource; responds with the materialized entity,
///   store-assigned ID included.
/// - **List**: Enumeration. Responds with every live entity in insertion
///   order.
/// - **Get**: Retrieval by ID; responds with `None` when the ID is unknown.
/// - **Update**: Partial mutation via [`StoreEntity::Update`]; responds
///   with the updated entity.
/// - **Delete**: Lifecycle end. Removal is permanent; responds with the
///   removed entity as confirmation.
///
/// # Entity Interaction
/// This type is generic over `T: StoreEntity` and uses the trait's
/// associated types, so a payload for one entity type can never be sent to
/// another entity's store.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    Create {
        params: T::Create,
        respond_to: Respond<T>,
    },
    List {
        respond_to: Respond<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Respond<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Respond<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Respond<T>,
    },
}
