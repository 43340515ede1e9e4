use ledger_framework::{LedgerActor, LedgerClient, LedgerConfig};
use tracing::{error, info};

use crate::offer_contract::OfferContract;

/// Runs a ledger actor and exposes the offer contract bound to it.
///
/// # Example
///
/// ```ignore
/// let system = OfferSystem::new(&LedgerConfig::default());
///
/// system.contract.init(&[r#"{"version":"1.0"}"#.into()]).await?;
/// system.contract.invoke("createOffer", &[r#"{"offerID":"A"}"#.into()]).await?;
///
/// system.shutdown().await?;
/// ```
pub struct OfferSystem {
    /// The contract, backed by the running ledger
    pub contract: OfferContract<LedgerClient>,

    /// Ledger actor task (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl OfferSystem {
    /// Spawns the ledger actor and binds a contract to its client.
    pub fn new(config: &LedgerConfig) -> Self {
        let (actor, client) = LedgerActor::new(config);
        let handle = tokio::spawn(actor.run());
        info!(buffer_size = config.buffer_size, "Offer system started");

        Self {
            contract: OfferContract::new(client),
            handle,
        }
    }

    /// Gracefully shuts down the ledger.
    ///
    /// Dropping the contract drops the last client, which closes the channel; the actor
    /// then leaves its loop. Clones of the contract handed out earlier keep the channel
    /// open, so drop those first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down offer system...");

        drop(self.contract);

        if let Err(e) = self.handle.await {
            error!("Ledger task failed: {:?}", e);
            return Err(format!("Ledger task failed: {:?}", e));
        }

        info!("Offer system shutdown complete.");
        Ok(())
    }
}
