//! # Ledger Errors
//!
//! This module defines the error type returned by every [`StateStore`](crate::StateStore)
//! call. Callers wrap it with their own context; the message is surfaced verbatim.

/// Errors that can occur within the ledger itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("Ledger actor closed")]
    ActorClosed,
    #[error("Ledger actor dropped response channel")]
    ActorDropped,
    #[error("key must not be an empty string")]
    EmptyKey,
    #[error("value of {size} bytes exceeds the ledger limit of {limit} bytes")]
    ValueTooLarge { size: usize, limit: usize },
    /// Failure reported by a store backend other than the reference ledger.
    #[error("Backend error: {0}")]
    Backend(String),
}
