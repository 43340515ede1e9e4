//! # Ledger Framework
//!
//! This crate provides the key-value ledger that the offer contract reads from and
//! writes to. It has two halves:
//!
//! 1. **The Seam** ([`StateStore`]) - the narrow get/put/delete interface the contract
//!    depends on. Keys are opaque strings, values are opaque bytes.
//! 2. **The Reference Ledger** ([`LedgerActor`] + [`LedgerClient`]) - an in-memory
//!    implementation built on the **Actor Model**. One Tokio task owns the state and
//!    processes requests sequentially, so every write is atomic per key and a caller
//!    always reads its own writes.
//!
//! ## Why an Actor?
//!
//! - Isolated state (no shared memory, no locks)
//! - Message-passing concurrency
//! - Sequential processing, so per-key writes are atomic
//!
//! The contract never sees the channel. It only holds something that implements
//! [`StateStore`], which can be the real [`LedgerClient`] or a [`mock::MockLedger`].
//!
//! ## Example
//!
//! ```rust
//! use ledger_framework::{LedgerActor, LedgerConfig, StateStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     // 1. Create actor and client
//!     let (actor, client) = LedgerActor::new(&LedgerConfig::default());
//!
//!     // 2. Spawn the actor
//!     tokio::spawn(actor.run());
//!
//!     // 3. Use the client
//!     client.put_state("offer-1", b"{}".to_vec()).await.unwrap();
//!     let value = client.get_state("offer-1").await.unwrap();
//!     assert_eq!(value.as_deref(), Some(&b"{}"[..]));
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides a `MockLedger` that answers requests from a queue of
//! expectations instead of real state. Use it to inject store failures.

pub mod actor;
pub mod client;
pub mod config;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;
pub mod tracing;

// Re-export core types for convenience
pub use actor::LedgerActor;
pub use client::LedgerClient;
pub use config::{ConfigError, LedgerConfig};
pub use error::LedgerError;
pub use message::{LedgerRequest, Response};
pub use store::StateStore;
