//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Log levels come from the `RUST_LOG` environment variable. The compact format hides
//! the crate/module prefix (`with_target(false)`) and shows spans inline.
//!
//! ```bash
//! # State changes only
//! RUST_LOG=info cargo run
//!
//! # Full payloads and every ledger request
//! RUST_LOG=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Ledger Lifecycle**: Startup and shutdown with the final key count
//! - **Ledger Requests**: Get, Put and Delete with the key and value size
//! - **Contract Operations**: One span per operation, carrying the offer id
//! - **Rejections**: Validation and store failures at `warn`
//!
//! With `RUST_LOG=info` an update looks like:
//!
//! ```text
//! INFO update_offer: Merged partial update offer_id="OFR-1"
//! INFO Stored key="OFR-1" replaced=true size=2
//! INFO update_offer: Offer written offer_id="OFR-1"
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
