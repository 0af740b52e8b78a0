//! # System Lifecycle & Orchestration
//!
//! This module manages the runtime lifecycle of the service: starting the
//! store actor, handing out its client, and shutting everything down
//! cleanly.
//!
//! ## The Orchestration Pattern
//!
//! Actors are created without dependencies, spawned into their own tasks,
//! and reached only through clients. Shutdown follows from channel
//! closure:
//!
//! 1. **Drop all clients** - closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Actor cleans up** - processes remaining messages, logs final state
//! 4. **Await completion** - wait for the actor task to finish
//!
//! No messages are lost: everything already queued is handled before the
//! loop exits.

use crate::clients::ProductClient;
use crate::product_actor;
use tracing::{error, info};

/// The runtime orchestrator for the product service.
///
/// Owns the store actor's task handle and exposes the [`ProductClient`]
/// that both transports clone.
///
/// # Example
///
/// ```ignore
/// let system = ProductSystem::new();
/// let product = system.product_client.create_product(params).await?;
/// system.shutdown().await?;
/// ```
pub struct ProductSystem {
    /// Client for interacting with the Product store actor.
    pub product_client: ProductClient,

    /// Task handle for the running actor (used for graceful shutdown).
    handle: tokio::task::JoinHandle<()>,
}

impl ProductSystem {
    /// Creates the system with the store actor running.
    pub fn new() -> Self {
        let (actor, store_client) = product_actor::new();
        let handle = tokio::spawn(actor.run());

        Self {
            product_client: ProductClient::new(store_client),
            handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops the owned client and waits for the actor task to complete.
    /// The actor only exits once every clone of the client (including the
    /// ones held by transports) has been dropped.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down product system...");

        // Dropping the client closes the channel sender; the actor's
        // receiver returns None and the loop exits.
        drop(self.product_client);

        if let Err(e) = self.handle.await {
            error!("Store actor task failed: {:?}", e);
            return Err(format!("Store actor task failed: {e:?}"));
        }

        info!("Product system shutdown complete.");
        Ok(())
    }
}

impl Default for ProductSystem {
    fn default() -> Self {
        Self::new()
    }
}
