//! The [`Product`] entity and its DTOs.
//!
//! The DTOs are explicit typed records validated at the boundary: both
//! deserialize with `deny_unknown_fields`, so a payload carrying a field the
//! schema doesn't know is rejected before it reaches the store.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
///
/// Assigned by the store on creation, starting at 1, and immutable
/// thereafter. Serialized as a bare integer (`{"id": 1, ...}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product held by the store.
///
/// # Store Framework
/// This struct implements the [`StoreEntity`](store_actor::StoreEntity)
/// trait (see [`crate::product_actor`]), allowing it to be managed by a
/// [`StoreActor`](store_actor::StoreActor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (set by the store)
    /// * `name` - Product name
    /// * `price` - Product price
    /// * `description` - Optional free-form description
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        description: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            description,
        }
    }
}

/// Creation payload for a Product. `name` and `price` are required;
/// unknown fields are rejected at deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial update payload for a Product. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
}
