//! # Ledger Messages
//!
//! This module defines the message types exchanged between the [`LedgerClient`](crate::LedgerClient)
//! and the [`LedgerActor`](crate::LedgerActor).

use crate::error::LedgerError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, LedgerError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map one-to-one onto the [`StateStore`](crate::StateStore) calls:
///
/// - **Get**: Fetch the raw bytes under a key, `None` when the key is unknown.
/// - **Put**: Replace the value under a key.
/// - **Delete**: Remove a key. Unknown keys are not an error.
#[derive(Debug)]
pub enum LedgerRequest {
    Get {
        key: String,
        respond_to: Response<Option<Vec<u8>>>,
    },
    Put {
        key: String,
        value: Vec<u8>,
        respond_to: Response<()>,
    },
    Delete {
        key: String,
        respond_to: Response<()>,
    },
}
