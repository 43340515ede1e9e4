//! Error types for the Offer contract.

use ledger_framework::LedgerError;
use thiserror::Error;

/// Errors that can occur during offer operations.
///
/// Validation errors (`ArgumentCount` through `EmptyIdentity`) are always raised before
/// the ledger is touched.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OfferError {
    /// The operation was called with the wrong number of arguments.
    #[error("Incorrect number of arguments: expected {expected}, got {actual}")]
    ArgumentCount { expected: usize, actual: usize },

    /// The JSON argument could not be decoded.
    #[error("Unable to decode input JSON: {0}")]
    Decode(String),

    /// The payload carried no `offerID`.
    #[error("offerID is mandatory in the input JSON data")]
    MissingIdentity,

    /// The payload's `offerID` was empty or whitespace.
    #[error("offerID must not be blank")]
    EmptyIdentity,

    /// No record is stored under the requested `offerID`.
    #[error("Offer not found: {0}")]
    NotFound(String),

    /// The bytes stored under a key are not a valid offer.
    #[error("Stored state for {key} is corrupt: {reason}")]
    CorruptStoredState { key: String, reason: String },

    /// A record could not be serialized.
    #[error("Unable to encode {0}")]
    Encode(String),

    /// The ledger refused a write.
    #[error("PUT ledger state failed for {key}: {source}")]
    StoreWrite {
        key: String,
        #[source]
        source: LedgerError,
    },

    /// The ledger refused a delete.
    #[error("DELSTATE failed for {key}: {source}")]
    StoreDelete {
        key: String,
        #[source]
        source: LedgerError,
    },

    /// The operation name is not known in the requested mode.
    #[error("Received unknown invocation: {0}")]
    UnknownOperation(String),

    /// `init` was called with a version other than the compiled one.
    #[error("Contract version {expected} must match version argument: {actual}")]
    VersionMismatch { expected: String, actual: String },
}
