//! # Offer Contract
//!
//! The operations callers run against the ledger, and the pieces they are built from.
//!
//! ## Structure
//!
//! - [`validate`] - decodes the single JSON argument and checks `offerID`
//! - [`merge`] - applies a partial update onto the stored record
//! - [`operation`] - the static table of operation names and modes
//! - [`samples`] - static example and schema payloads
//! - [`error`] - [`OfferError`]
//!
//! ## Flow of an update
//!
//! ```text
//! updateOffer(args)
//!   -> validate(args)                     candidate, offerID trimmed
//!   -> store.get_state(offerID)           nothing stored? the candidate is the record
//!   -> decode + merge(stored, candidate)  only supplied fields change
//!   -> store.put_state(offerID, record)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use ledger_framework::{LedgerActor, LedgerConfig};
//! use offer_ledger::offer_contract::OfferContract;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = LedgerActor::new(&LedgerConfig::default());
//!     tokio::spawn(actor.run());
//!     let contract = OfferContract::new(client);
//!
//!     contract.invoke("createOffer", &[r#"{"offerID":"A","owner":"alice"}"#.into()]).await?;
//!     contract.invoke("updateOffer", &[r#"{"offerID":"A","carrier":["X"]}"#.into()]).await?;
//!
//!     let bytes = contract.query("readOffer", &[r#"{"offerID":"A"}"#.into()]).await?;
//!     assert_eq!(bytes, br#"{"offerID":"A","carrier":["X"],"owner":"alice"}"#.to_vec());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod merge;
pub mod operation;
pub mod samples;
pub mod validate;

pub use error::*;
pub use merge::{merge, Merge};
pub use operation::{Mode, Operation};
pub use validate::validate;

use ledger_framework::StateStore;
use tracing::{debug, info, instrument, warn};

use crate::model::{ContractState, Offer};

/// The version `init` accepts.
pub const CONTRACT_VERSION: &str = "1.0";

/// Ledger key the [`ContractState`] is written under.
pub const CONTRACT_STATE_KEY: &str = "ContractStateKey";

/// The offer operations, bound to a ledger.
///
/// Generic over the store so tests can hand it a
/// [`MockLedger`](ledger_framework::mock::MockLedger) client. Every operation validates
/// its arguments completely before the first ledger call.
#[derive(Clone)]
pub struct OfferContract<S: StateStore> {
    store: S,
}

impl<S: StateStore> OfferContract<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // --- Entry points ---

    /// Deploy-time setup: checks the version and records the [`ContractState`].
    ///
    /// Expects exactly one argument, a JSON `{"version": "..."}`. Nothing is written
    /// unless the version equals [`CONTRACT_VERSION`].
    #[instrument(skip(self, args))]
    pub async fn init(&self, args: &[String]) -> Result<(), OfferError> {
        debug!(?args, "init called");
        let payload = validate::single_argument(args)?;
        let state: ContractState = serde_json::from_str(payload)
            .map_err(|e| OfferError::Decode(format!("version argument: {e}")))?;

        if state.version != CONTRACT_VERSION {
            warn!(version = %state.version, expected = CONTRACT_VERSION, "Version rejected");
            return Err(OfferError::VersionMismatch {
                expected: CONTRACT_VERSION.to_string(),
                actual: state.version,
            });
        }

        let bytes = encode("contract state", &state)?;
        self.store
            .put_state(CONTRACT_STATE_KEY, bytes)
            .await
            .map_err(|source| OfferError::StoreWrite {
                key: CONTRACT_STATE_KEY.to_string(),
                source,
            })?;
        info!(version = %state.version, "Contract initialized");
        Ok(())
    }

    /// Runs a ledger-mutating operation by name.
    pub async fn invoke(&self, function: &str, args: &[String]) -> Result<(), OfferError> {
        match Operation::resolve(function, Mode::Invoke)? {
            Operation::CreateOffer => self.create_offer(args).await,
            Operation::UpdateOffer => self.update_offer(args).await,
            Operation::DeleteOffer => self.delete_offer(args).await,
            other => Err(OfferError::UnknownOperation(other.to_string())),
        }
    }

    /// Runs a read-only operation by name and returns its payload.
    pub async fn query(&self, function: &str, args: &[String]) -> Result<Vec<u8>, OfferError> {
        match Operation::resolve(function, Mode::Query)? {
            Operation::ReadOffer => self.read_offer(args).await,
            Operation::ReadOfferObjectModel => self.read_offer_object_model(),
            Operation::ReadOfferSamples => Ok(self.read_offer_samples()),
            Operation::ReadOfferSchemas => Ok(self.read_offer_schemas()),
            other => Err(OfferError::UnknownOperation(other.to_string())),
        }
    }

    // --- Invoke operations ---

    /// Stores a new offer, or merges into an existing one. Same as [`Self::update_offer`].
    #[instrument(skip(self, args))]
    pub async fn create_offer(&self, args: &[String]) -> Result<(), OfferError> {
        self.create_or_update(args).await
    }

    /// Merges a partial offer into the stored one, or stores it if there is none.
    #[instrument(skip(self, args))]
    pub async fn update_offer(&self, args: &[String]) -> Result<(), OfferError> {
        self.create_or_update(args).await
    }

    /// Removes an offer. Deleting an unknown offer succeeds.
    #[instrument(skip(self, args))]
    pub async fn delete_offer(&self, args: &[String]) -> Result<(), OfferError> {
        debug!(?args, "delete_offer called");
        let offer = validate(args)?;
        self.store
            .del_state(&offer.offer_id)
            .await
            .map_err(|source| {
                warn!(offer_id = %offer.offer_id, error = %source, "Delete failed");
                OfferError::StoreDelete {
                    key: offer.offer_id.clone(),
                    source,
                }
            })?;
        info!(offer_id = %offer.offer_id, "Offer deleted");
        Ok(())
    }

    // --- Query operations ---

    /// Returns the bytes stored for an offer, exactly as stored.
    ///
    /// The bytes are decoded first so that a corrupt record is reported rather than
    /// passed on.
    #[instrument(skip(self, args))]
    pub async fn read_offer(&self, args: &[String]) -> Result<Vec<u8>, OfferError> {
        debug!(?args, "read_offer called");
        let offer = validate(args)?;
        let key = offer.offer_id;
        let bytes = self
            .lookup(&key)
            .await
            .ok_or_else(|| OfferError::NotFound(key.clone()))?;
        decode_stored(&key, &bytes)?;
        Ok(bytes)
    }

    /// The encoding of an empty offer, as a hint of the record's shape.
    pub fn read_offer_object_model(&self) -> Result<Vec<u8>, OfferError> {
        encode("offer template", &Offer::default())
    }

    pub fn read_offer_samples(&self) -> Vec<u8> {
        samples::SAMPLES.as_bytes().to_vec()
    }

    pub fn read_offer_schemas(&self) -> Vec<u8> {
        samples::SCHEMAS.as_bytes().to_vec()
    }

    // --- Internals ---

    async fn create_or_update(&self, args: &[String]) -> Result<(), OfferError> {
        debug!(?args, "create_or_update called");
        let candidate = validate(args)?;
        let key = candidate.offer_id.clone();

        let record = match self.lookup(&key).await {
            None => {
                debug!(offer_id = %key, "No stored offer, storing candidate as is");
                candidate
            }
            Some(bytes) => {
                let stored = decode_stored(&key, &bytes)?;
                info!(offer_id = %key, "Merged partial update");
                merge(stored, candidate)
            }
        };

        let bytes = encode("offer", &record)?;
        self.store.put_state(&key, bytes).await.map_err(|source| {
            warn!(offer_id = %key, error = %source, "Write failed");
            OfferError::StoreWrite {
                key: key.clone(),
                source,
            }
        })?;
        info!(offer_id = %key, "Offer written");
        Ok(())
    }

    /// Fetches the stored bytes for `key`. A failed lookup counts as "nothing stored".
    async fn lookup(&self, key: &str) -> Option<Vec<u8>> {
        match self.store.get_state(key).await {
            Ok(Some(bytes)) if !bytes.is_empty() => Some(bytes),
            Ok(_) => None,
            Err(e) => {
                warn!(offer_id = %key, error = %e, "Ledger lookup failed");
                None
            }
        }
    }
}

fn decode_stored(key: &str, bytes: &[u8]) -> Result<Offer, OfferError> {
    let stored: Offer =
        serde_json::from_slice(bytes).map_err(|e| OfferError::CorruptStoredState {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
    if stored.offer_id != key {
        return Err(OfferError::CorruptStoredState {
            key: key.to_string(),
            reason: format!("record carries offerID {:?}", stored.offer_id),
        });
    }
    Ok(stored)
}

fn encode<T: serde::Serialize>(what: &str, value: &T) -> Result<Vec<u8>, OfferError> {
    serde_json::to_vec(value).map_err(|e| OfferError::Encode(format!("{what}: {e}")))
}
