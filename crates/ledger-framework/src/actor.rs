//! # Ledger Actor
//!
//! This module defines the `LedgerActor`, the server side of the reference ledger.
//! It owns the key-value map and processes requests sequentially, ensuring exclusive
//! access to the state without any locking.

use crate::client::LedgerClient;
use crate::config::LedgerConfig;
use crate::error::LedgerError;
use crate::message::LedgerRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that owns the ledger state.
///
/// # Architecture Note
/// This struct is the "Server" half of the ledger. It owns the state (`state`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Any number of [`LedgerClient`] clones may send requests at the same time, but the
/// actor handles them *one at a time* in arrival order. This means we don't need
/// `Mutex` or `RwLock` for the map, and every `Put` is applied whole or not at all.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `LedgerActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn the actor's run loop in a background task.
/// 3.  **Stop**: Drop every client; the loop exits once the channel is closed.
///
/// # Operations
///
/// * **Get**: Returns a copy of the stored bytes, or `None`.
/// * **Put**: Rejects an empty key or an oversized value, otherwise replaces the value.
/// * **Delete**: Rejects an empty key, otherwise removes the key if present.
pub struct LedgerActor {
    receiver: mpsc::Receiver<LedgerRequest>,
    state: HashMap<String, Vec<u8>>,
    max_value_bytes: usize,
}

impl LedgerActor {
    /// Creates a new `LedgerActor` and its associated `LedgerClient`.
    ///
    /// # Arguments
    ///
    /// * `config` - `buffer_size` is the capacity of the MPSC channel (callers wait when
    ///   it is full); `max_value_bytes` caps the size of a single stored value.
    ///
    /// # Returns
    ///
    /// A tuple containing:
    /// 1. The `LedgerActor` instance (the server), which must be run via `.run()`.
    /// 2. The `LedgerClient` instance, which can be cloned and shared to send requests.
    pub fn new(config: &LedgerConfig) -> (Self, LedgerClient) {
        let (sender, receiver) = mpsc::channel(config.buffer_size);
        let actor = Self {
            receiver,
            state: HashMap::new(),
            max_value_bytes: config.max_value_bytes,
        };
        let client = LedgerClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        info!(max_value_bytes = self.max_value_bytes, "Ledger started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                LedgerRequest::Get { key, respond_to } => {
                    let value = self.state.get(&key).cloned();
                    let found = value.is_some();
                    debug!(%key, found, "Get");
                    let _ = respond_to.send(Ok(value));
                }
                LedgerRequest::Put {
                    key,
                    value,
                    respond_to,
                } => {
                    debug!(%key, size = value.len(), "Put");
                    let result = self.put(key, value);
                    let _ = respond_to.send(result);
                }
                LedgerRequest::Delete { key, respond_to } => {
                    debug!(%key, "Delete");
                    let result = self.delete(&key);
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(size = self.state.len(), "Shutdown");
    }

    fn put(&mut self, key: String, value: Vec<u8>) -> Result<(), LedgerError> {
        if key.is_empty() {
            warn!("Put rejected: empty key");
            return Err(LedgerError::EmptyKey);
        }
        if value.len() > self.max_value_bytes {
            warn!(%key, size = value.len(), limit = self.max_value_bytes, "Put rejected: value too large");
            return Err(LedgerError::ValueTooLarge {
                size: value.len(),
                limit: self.max_value_bytes,
            });
        }
        let replaced = self.state.insert(key.clone(), value).is_some();
        info!(%key, replaced, size = self.state.len(), "Stored");
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), LedgerError> {
        if key.is_empty() {
            warn!("Delete rejected: empty key");
            return Err(LedgerError::EmptyKey);
        }
        let existed = self.state.remove(key).is_some();
        info!(%key, existed, size = self.state.len(), "Deleted");
        Ok(())
    }
}
