//! # Offer Ledger
//!
//! A small record-management contract for transport offers, hosted on a key-value ledger.
//!
//! Each [`Offer`](model::Offer) is stored as one JSON document under its `offerID`.
//! Updates are partial: a caller sends only the fields it wants to change, and every
//! field it leaves out keeps its stored value. Sending `null` clears a field.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! The record types and their wire encoding.
//! - **Key items**: [`Offer`](model::Offer), [`Field`](model::Field),
//!   [`ContractState`](model::ContractState).
//!
//! ### 2. The Contract ([`offer_contract`])
//! Validation, the merge rule and the named operations.
//! - **Key items**: [`OfferContract`](offer_contract::OfferContract),
//!   [`merge`](offer_contract::merge()), [`OfferError`](offer_contract::OfferError).
//!
//! ### 3. The Orchestrator ([`lifecycle`])
//! Starts the ledger actor, hands out the contract and shuts everything down.
//! - **Key items**: [`OfferSystem`](lifecycle::OfferSystem).
//!
//! The ledger itself (actor, client, config, mocks, tracing setup) lives in the
//! `ledger-framework` crate of this workspace.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Use a ledger config file
//! OFFER_LEDGER_CONFIG=ledger.toml cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test --workspace
//! ```

pub mod lifecycle;
pub mod model;
pub mod offer_contract;
