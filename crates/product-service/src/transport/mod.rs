//! # Transports
//!
//! Both surfaces of the service are thin adapters over the same
//! [`ProductClient`](crate::clients::ProductClient):
//!
//! - [`tcp`] - the command-message channel (`add_product`, `get_products`)
//! - [`http`] - path-based routes (`GET /{id}`, `PATCH /{id}`, `DELETE /{id}`)
//!
//! The split of operations across transports is part of the service's
//! contract; internally every request funnels into the one store actor, so
//! neither transport replicates any CRUD logic.

pub mod http;
pub mod tcp;
