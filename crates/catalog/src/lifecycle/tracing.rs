//! # Logging
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden; every store event already carries an
//! `entity_type` field.
//!
//! ```bash
//! # Workflow steps only
//! RUST_LOG=info cargo run
//!
//! # Payloads and per-store events
//! RUST_LOG=debug cargo run
//!
//! # Only the document layer
//! RUST_LOG=store_framework::document=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a checkout reads roughly like:
//!
//! ```text
//! INFO checkout{cart_id=cart_1 payment_method="card"}: Created entity_type="Order" id=order_1 size=1
//! INFO checkout{cart_id=cart_1 payment_method="card"}: Checked out order_id=order_1 total=30.0
//! ```
//!
//! Payloads are logged once, at `debug`, where an operation starts (`debug!(?params, ...)`).

/// Installs the global subscriber. Call once, at the start of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
