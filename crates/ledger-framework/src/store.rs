//! # StateStore Trait
//!
//! The contract between the offer handlers and whatever ledger hosts them. It is the
//! only store surface the handlers see.

use crate::error::LedgerError;
use async_trait::async_trait;

/// Key-value access to the ledger.
///
/// # Guarantees Expected From Implementations
/// - Writes are atomic per key: a failed `put_state` leaves the previous value in place.
/// - Reads observe earlier writes made through the same store (read-your-writes).
/// - Ordering and isolation across callers are the implementation's business.
///
/// The trait is `#[async_trait]` so it can be backed by an actor (see
/// [`LedgerClient`](crate::LedgerClient)). Callers await each call to completion and
/// never issue concurrent requests from within one invocation.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Fetch the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), LedgerError>;

    /// Remove `key`. Removing a key that does not exist is not an error.
    async fn del_state(&self, key: &str) -> Result<(), LedgerError>;
}
