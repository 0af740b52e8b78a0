//! Error types for the Product store.

use thiserror::Error;

/// Errors that can occur during product operations.
///
/// The taxonomy mirrors what the transports surface to callers:
/// malformed/invalid input, unknown id, and channel failures.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The payload failed shape or sanity validation.
    #[error("Invalid product payload: {0}")]
    Validation(String),

    /// An error occurred while communicating with the store actor.
    #[error("Store communication error: {0}")]
    StoreCommunication(String),
}
