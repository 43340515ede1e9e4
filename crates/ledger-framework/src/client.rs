//! # Ledger Client
//!
//! This module defines the client half of the reference ledger.

use crate::error::LedgerError;
use crate::message::LedgerRequest;
use crate::store::StateStore;
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

/// A handle for sending requests to a [`LedgerActor`](crate::LedgerActor).
///
/// Holds only a sender, so cloning is inexpensive and clones can be shared across
/// tasks. The actor keeps running for as long as any clone is alive.
#[derive(Clone)]
pub struct LedgerClient {
    sender: mpsc::Sender<LedgerRequest>,
}

impl LedgerClient {
    pub fn new(sender: mpsc::Sender<LedgerRequest>) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl StateStore for LedgerClient {
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(LedgerRequest::Get {
                key: key.to_string(),
                respond_to,
            })
            .await
            .map_err(|_| LedgerError::ActorClosed)?;
        response.await.map_err(|_| LedgerError::ActorDropped)?
    }

    async fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), LedgerError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(LedgerRequest::Put {
                key: key.to_string(),
                value,
                respond_to,
            })
            .await
            .map_err(|_| LedgerError::ActorClosed)?;
        response.await.map_err(|_| LedgerError::ActorDropped)?
    }

    async fn del_state(&self, key: &str) -> Result<(), LedgerError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(LedgerRequest::Delete {
                key: key.to_string(),
                respond_to,
            })
            .await
            .map_err(|_| LedgerError::ActorClosed)?;
        response.await.map_err(|_| LedgerError::ActorDropped)?
    }
}
