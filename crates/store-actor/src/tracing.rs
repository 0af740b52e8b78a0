//! # Observability & Tracing
//!
//! This module provides the tracing setup for services built on the store
//! framework.
//!
//! The framework uses the `tracing` crate with structured fields
//! throughout: actor lifecycle events (startup, shutdown, final store
//! size), every store operation (Create, List, Get, Update, Delete) with
//! entity IDs, and client-side request logging via `#[instrument]` spans.
//!
//! ## Configuration
//!
//! The format hides the crate/module prefix (`with_target(false)`), since
//! log lines carry an `entity_type` field instead, and uses the compact
//! formatter so span hierarchy shows inline.
//!
//! Log levels are controlled through `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads at function entry points
//! ```

/// Initializes structured logging for the whole process.
///
/// Call once at startup, before any actor is spawned:
///
/// ```rust,ignore
/// setup_tracing();
/// ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline (e.g., "request:create_product")
        .init();
}
