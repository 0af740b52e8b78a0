//! # Product Store
//!
//! This module wires the [`Product`] entity into the generic store actor.
//! The actor owns every product in memory; both transports reach it through
//! cloned [`StoreClient`]s, so all creates, updates, and deletes are
//! serialized in one task.
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreEntity`](store_actor::StoreEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, store_client) = product_actor::new();
//! let client = ProductClient::new(store_client);
//! tokio::spawn(actor.run());
//!
//! let product = client
//!     .create_product(ProductCreate {
//!         name: "Widget".to_string(),
//!         price: 10.0,
//!         description: None,
//!     })
//!     .await?;
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Product;
use store_actor::{StoreActor, StoreClient};

/// Creates a new Product store actor and its client.
pub fn new() -> (StoreActor<Product>, StoreClient<Product>) {
    StoreActor::new(32)
}
