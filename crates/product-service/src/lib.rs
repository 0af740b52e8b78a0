//! # Product Service
//!
//! A minimal product-management microservice exposing the same CRUD surface
//! over two transports:
//!
//! - a **TCP command channel** for `add_product` and `get_products`
//!   (newline-delimited JSON, command-tagged messages), and
//! - **HTTP routes** `GET /{id}`, `PATCH /{id}`, `DELETE /{id}`.
//!
//! ## Architecture
//!
//! All product state lives in a single [`StoreActor`](store_actor::StoreActor)
//! task; both transports are thin adapters over one cloned
//! [`ProductClient`](clients::ProductClient), so the CRUD logic exists
//! exactly once and mutations are serialized by construction.
//!
//! - **[model]**: Pure data structures ([`Product`](model::Product) and its DTOs).
//! - **[product_actor]**: The `StoreEntity` implementation, validation, and errors.
//! - **[clients]**: Type-safe wrappers hiding the message passing.
//! - **[transport]**: The TCP command channel and the axum router.
//! - **[lifecycle]**: Orchestration - spawning the actor, graceful shutdown.
//! - **[config]**: Transport addresses from the environment.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod transport;
