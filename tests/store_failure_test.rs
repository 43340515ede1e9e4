use ledger_framework::mock::{create_mock_ledger, expect_get, expect_put, MockLedger};
use ledger_framework::LedgerError;
use offer_ledger::offer_contract::{OfferContract, OfferError, CONTRACT_STATE_KEY};
use tokio::sync::mpsc::error::TryRecvError;

fn arg(payload: &str) -> Vec<String> {
    vec![payload.to_string()]
}

/// Real contract against a mocked ledger: a rejected write is reported, and the
/// merged record that was attempted is the one the ledger saw.
#[tokio::test]
async fn test_write_failure_is_reported() {
    let mut mock = MockLedger::new();
    mock.expect_get("A")
        .return_ok(Some(br#"{"offerID":"A","owner":"alice"}"#.to_vec()));
    mock.expect_put("A").return_err(LedgerError::ValueTooLarge {
        size: 2048,
        limit: 1024,
    });

    let contract = OfferContract::new(mock.client());
    let result = contract
        .invoke("updateOffer", &arg(r#"{"offerID":"A","isbid":true}"#))
        .await;

    assert_eq!(
        result,
        Err(OfferError::StoreWrite {
            key: "A".into(),
            source: LedgerError::ValueTooLarge {
                size: 2048,
                limit: 1024
            },
        })
    );
    assert_eq!(
        mock.puts(),
        vec![(
            "A".to_string(),
            br#"{"offerID":"A","isbid":true,"owner":"alice"}"#.to_vec()
        )]
    );
    mock.verify();
}

#[tokio::test]
async fn test_delete_failure_is_reported() {
    let mut mock = MockLedger::new();
    mock.expect_delete("A")
        .return_err(LedgerError::Backend("disk full".into()));

    let contract = OfferContract::new(mock.client());
    let result = contract
        .invoke("deleteOffer", &arg(r#"{"offerID":"A"}"#))
        .await;

    assert_eq!(
        result,
        Err(OfferError::StoreDelete {
            key: "A".into(),
            source: LedgerError::Backend("disk full".into()),
        })
    );
    mock.verify();
}

#[tokio::test]
async fn test_corrupt_record_is_reported_on_read_and_update() {
    let mut mock = MockLedger::new();
    mock.expect_get("A").return_ok(Some(b"{not json".to_vec()));
    mock.expect_get("A").return_ok(Some(b"{not json".to_vec()));

    let contract = OfferContract::new(mock.client());

    let read = contract.query("readOffer", &arg(r#"{"offerID":"A"}"#)).await;
    assert!(matches!(read, Err(OfferError::CorruptStoredState { ref key, .. }) if key == "A"));

    // No put follows: the corrupt record is left as it is.
    let update = contract
        .invoke("updateOffer", &arg(r#"{"offerID":"A","owner":"bob"}"#))
        .await;
    assert!(matches!(update, Err(OfferError::CorruptStoredState { .. })));

    assert!(mock.puts().is_empty());
    mock.verify();
}

#[tokio::test]
async fn test_empty_stored_value_counts_as_missing() {
    let mut mock = MockLedger::new();
    mock.expect_get("A").return_ok(Some(Vec::new()));

    let contract = OfferContract::new(mock.client());
    assert_eq!(
        contract.query("readOffer", &arg(r#"{"offerID":"A"}"#)).await,
        Err(OfferError::NotFound("A".into()))
    );
    mock.verify();
}

#[tokio::test]
async fn test_init_writes_contract_state() {
    let mut mock = MockLedger::new();
    mock.expect_put(CONTRACT_STATE_KEY).return_ok();

    let contract = OfferContract::new(mock.client());
    contract.init(&arg(r#"{"version":"1.0"}"#)).await.unwrap();

    assert_eq!(
        mock.puts(),
        vec![(
            CONTRACT_STATE_KEY.to_string(),
            br#"{"version":"1.0"}"#.to_vec()
        )]
    );
    mock.verify();
}

#[tokio::test]
async fn test_rejected_calls_never_reach_the_ledger() {
    let (client, mut receiver) = create_mock_ledger(10);
    let contract = OfferContract::new(client);

    let _ = contract.init(&arg(r#"{"version":"0.1"}"#)).await;
    let _ = contract.init(&[]).await;
    let _ = contract.invoke("createOffer", &arg(r#"{"offerID":""}"#)).await;
    let _ = contract.invoke("readOffer", &arg(r#"{"offerID":"A"}"#)).await;
    let _ = contract.query("deleteOffer", &arg(r#"{"offerID":"A"}"#)).await;
    let _ = contract.query("readOffer", &arg("garbage")).await;

    assert_eq!(receiver.try_recv().unwrap_err(), TryRecvError::Empty);
}

/// Drives the raw channel by hand to check the exact sequence of ledger calls a
/// create makes for a new offer: one lookup, then one write.
#[tokio::test]
async fn test_create_sequence_for_new_offer() {
    let (client, mut receiver) = create_mock_ledger(10);
    let contract = OfferContract::new(client);

    let task = tokio::spawn(async move {
        contract
            .invoke("createOffer", &arg(r#"{"offerID":"N","isbid":true}"#))
            .await
    });

    let (key, respond_to) = expect_get(&mut receiver).await.expect("Expected Get request");
    assert_eq!(key, "N");
    respond_to.send(Ok(None)).unwrap();

    let (key, value, respond_to) = expect_put(&mut receiver).await.expect("Expected Put request");
    assert_eq!(key, "N");
    assert_eq!(value, br#"{"offerID":"N","isbid":true}"#.to_vec());
    respond_to.send(Ok(())).unwrap();

    task.await.unwrap().unwrap();
    assert_eq!(receiver.try_recv().unwrap_err(), TryRecvError::Disconnected);
}
