//! # Offer Ledger demo
//!
//! Walks one offer through its life on an in-process ledger:
//! 1.  Initialize the contract.
//! 2.  Create an offer, then assign a carrier with a partial update.
//! 3.  Read it back and delete it.
//!
//! Set `OFFER_LEDGER_CONFIG` to a TOML file to override the ledger settings.

use std::path::PathBuf;

use ledger_framework::tracing::setup_tracing;
use ledger_framework::LedgerConfig;
use offer_ledger::lifecycle::OfferSystem;
use offer_ledger::offer_contract::CONTRACT_VERSION;
use tracing::{error, info, Instrument};

const CONFIG_ENV: &str = "OFFER_LEDGER_CONFIG";

fn load_config() -> Result<LedgerConfig, String> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            let path = PathBuf::from(path);
            info!(path = %path.display(), "Loading ledger config");
            LedgerConfig::from_file(&path).map_err(|e| e.to_string())
        }
        None => Ok(LedgerConfig::default()),
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = load_config()?;
    info!(?config, "Starting offer ledger");

    let system = OfferSystem::new(&config);
    let contract = &system.contract;

    contract
        .init(&[format!(r#"{{"version":"{CONTRACT_VERSION}"}}"#)])
        .await
        .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("offer_lifecycle", offer_id = "OFR-1001");
    let result = async {
        info!("Creating offer");
        contract
            .invoke(
                "createOffer",
                &[r#"{"offerID":"OFR-1001","startlocationstr":"Berlin Hbf","endlocationstr":"Muenchen Hbf","isbid":false,"owner":"shipper-alice"}"#.to_string()],
            )
            .await?;

        info!("Assigning carrier");
        contract
            .invoke(
                "updateOffer",
                &[r#"{"offerID":"OFR-1001","carrier":["carrier-bob"]}"#.to_string()],
            )
            .await?;

        let bytes = contract
            .query("readOffer", &[r#"{"offerID":"OFR-1001"}"#.to_string()])
            .await?;
        info!(record = %String::from_utf8_lossy(&bytes), "Offer read back");

        contract
            .invoke("deleteOffer", &[r#"{"offerID":"OFR-1001"}"#.to_string()])
            .await
    }
    .instrument(span)
    .await;

    match result {
        Ok(()) => info!("Offer lifecycle completed"),
        Err(e) => error!(error = %e, "Offer lifecycle failed"),
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
