//! Startup and shutdown of the ledger and the contract bound to it.

mod offer_system;

pub use offer_system::OfferSystem;
