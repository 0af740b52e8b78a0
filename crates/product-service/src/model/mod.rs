//! # Domain Model
//!
//! Pure data structures for the product domain: the [`Product`] entity, its
//! typed identifier, and the wire DTOs for creation and partial updates.

pub mod product;

pub use product::*;
