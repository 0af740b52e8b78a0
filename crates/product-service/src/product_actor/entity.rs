//! StoreEntity trait implementation for the Product domain type.
//!
//! This module contains the [`StoreEntity`] implementation that enables
//! [`Product`] to be managed by the generic
//! [`StoreActor`](store_actor::StoreActor).
//!
//! Validation here is shape-plus-sanity only: a product must have a
//! non-empty name and a finite, non-negative price. Anything beyond that is
//! out of scope for this service.

use super::error::ProductError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use store_actor::StoreEntity;

impl StoreEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Error = ProductError;

    /// Creates a new Product from a creation payload.
    fn from_create(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        validate_name(&params.name)?;
        validate_price(params.price)?;
        Ok(Self::new(id, params.name, params.price, params.description))
    }

    /// Applies a partial update: only the fields present in the payload
    /// change, everything else is preserved.
    fn apply_update(&mut self, update: ProductUpdate) -> Result<(), ProductError> {
        if let Some(ref name) = update.name {
            validate_name(name)?;
        }
        if let Some(price) = update.price {
            validate_price(price)?;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::Validation("name must not be empty".into()));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), ProductError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ProductError::Validation(format!(
            "price must be a non-negative number, got {price}"
        )));
    }
    Ok(())
}
