//! # Clients
//!
//! Type-safe wrappers around the generic [`StoreClient`](store_actor::StoreClient).
//! The rest of the application (and both transports) talk to the store
//! exclusively through these, never through raw message passing.

pub mod entity_client;
pub mod product_client;

pub use entity_client::EntityClient;
pub use product_client::ProductClient;
