//! # StoreEntity Trait
//!
//! The `StoreEntity` trait defines the contract that a resource type must
//! implement to be managed by the generic [`StoreActor`](crate::StoreActor).
//! It specifies associated types for IDs, DTOs, and errors, and the two
//! hooks the actor calls when it materializes or mutates an entity.
//!
//! # Architecture Note
//! By defining a contract (`StoreEntity`) that every resource type must
//! satisfy, the [`StoreActor`](crate::StoreActor) loop is written *once* and
//! reused for any entity. Associated types (`type Id`, `type Create`, …)
//! enforce type safety: a `Product` store can only be sent a
//! `ProductCreate` payload, and the compiler rejects anything else.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by a
/// [`StoreActor`](crate::StoreActor).
///
/// The hooks are synchronous: entities hold plain data and validate or
/// mutate themselves without reaching out to other services. All I/O and
/// sequencing lives in the actor loop.
pub trait StoreEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from `u32` for automatic ID assignment.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance. Fields are
    /// typically optional so callers can patch a subset of the entity.
    type Update: Send + Sync + Debug;

    /// The error type for this entity.
    /// Must implement `std::error::Error` for proper error propagation.
    ///
    /// # Design Note: Error Granularity
    ///
    /// The framework enforces a **Per-Entity Error Type** (one enum for the
    /// whole entity) rather than a specific error per operation. Clients
    /// deal with a single error type, which keeps pattern matching simple;
    /// the trade-off is that the enum is the union of everything creation
    /// and update can reject.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the store-assigned ID and the
    /// creation payload. Validation failures surface here.
    fn from_create(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Apply a partial update to the entity in place. Fields absent from
    /// the payload must be left untouched.
    fn apply_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;
}
