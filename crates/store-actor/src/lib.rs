//! # Store Actor
//!
//! This crate provides the foundational building blocks for a type-safe,
//! message-driven entity store in Rust. It implements a
//! **Resource-Oriented** CRUD surface on top of the **Actor Model**,
//! providing a clean abstraction for managing stateful entities without
//! locks.
//!
//! ## Why a store actor?
//!
//! - Standard CRUD operations (Create, List, Get, Update, Delete) on a
//!   well-defined resource, behind one uniform API.
//! - Isolated state: the store lives inside a single task; messages are
//!   processed sequentially, so creates, updates, and deletes can never
//!   interleave. No `Mutex`, no race conditions.
//! - Any number of transports (HTTP handlers, TCP command listeners,
//!   background jobs) can share a cheap, cloneable [`StoreClient`] — the
//!   transports stay thin adapters and the CRUD logic lives in one place.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`StoreEntity`]) - Your domain model and validation
//! 2. **Runtime Layer** ([`StoreActor`]) - Message processing and concurrency
//! 3. **Interface Layer** ([`StoreClient`]) - Type-safe communication
//!
//! You write your domain logic once in the entity trait; the framework
//! handles the async message passing, error handling, and state management.
//!
//! ## Quick Start
//!
//! ```rust
//! use store_actor::{StoreActor, StoreEntity};
//!
//! // 1. Define the Entity and its DTOs
//! #[derive(Clone, Debug)]
//! struct Note {
//!     id: u32,
//!     text: String,
//! }
//!
//! #[derive(Debug)]
//! struct NoteCreate {
//!     text: String,
//! }
//!
//! #[derive(Debug)]
//! struct NoteUpdate {
//!     text: Option<String>,
//! }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("{0}")]
//! struct NoteError(String);
//!
//! impl StoreEntity for Note {
//!     type Id = u32;
//!     type Create = NoteCreate;
//!     type Update = NoteUpdate;
//!     type Error = NoteError;
//!
//!     fn from_create(id: u32, params: NoteCreate) -> Result<Self, NoteError> {
//!         Ok(Self { id, text: params.text })
//!     }
//!
//!     fn apply_update(&mut self, update: NoteUpdate) -> Result<(), NoteError> {
//!         if let Some(text) = update.text {
//!             self.text = text;
//!         }
//!         Ok(())
//!     }
//! }
//!
//! // 2. Use the Actor
//! #[tokio::main]
//! async fn main() {
//!     // Create actor and client
//!     let (actor, client) = StoreActor::<Note>::new(10);
//!
//!     // Spawn the actor
//!     tokio::spawn(actor.run());
//!
//!     // Use the client
//!     let note = client.create(NoteCreate { text: "hello".into() }).await.unwrap();
//!     assert_eq!(note.id, 1);
//!
//!     let fetched = client.get(note.id).await.unwrap().unwrap();
//!     assert_eq!(fetched.text, "hello");
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks needed!)
//! - Clients are cheap clones of a channel sender and can be shared freely
//! - IDs are assigned by the store, start at 1, and are never reused
//!
//! ## Testing
//!
//! The [`mock`] module provides a `MockClient` that implements the same
//! `StoreClient<T>` API as the real client but operates entirely in-memory,
//! plus raw channel helpers for playing the actor's side of a conversation
//! by hand. See the module docs for usage patterns.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use entity::StoreEntity;
pub use error::StoreError;
pub use message::{Respond, StoreRequest};
