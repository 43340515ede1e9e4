use ledger_framework::{LedgerActor, LedgerConfig, LedgerError, StateStore};

#[tokio::test]
async fn test_ledger_full_lifecycle() {
    // Start Actor
    let (actor, client) = LedgerActor::new(&LedgerConfig::default());
    let handle = tokio::spawn(actor.run());

    // 1. Missing key
    assert_eq!(client.get_state("offer-1").await.unwrap(), None);

    // 2. Put then read back
    client
        .put_state("offer-1", br#"{"offerID":"offer-1"}"#.to_vec())
        .await
        .unwrap();
    let stored = client.get_state("offer-1").await.unwrap();
    assert_eq!(stored.as_deref(), Some(&br#"{"offerID":"offer-1"}"#[..]));

    // 3. Overwrite replaces the whole value
    client.put_state("offer-1", b"{}".to_vec()).await.unwrap();
    assert_eq!(
        client.get_state("offer-1").await.unwrap(),
        Some(b"{}".to_vec())
    );

    // 4. Delete
    client.del_state("offer-1").await.unwrap();
    assert_eq!(client.get_state("offer-1").await.unwrap(), None);

    // 5. Dropping the last client stops the actor
    drop(client);
    handle.await.unwrap();
}

/// Writes from many clones land without interfering with each other.
#[tokio::test]
async fn test_concurrent_writers_on_distinct_keys() {
    let (actor, client) = LedgerActor::new(&LedgerConfig::default());
    tokio::spawn(actor.run());

    let mut handles = vec![];
    for i in 0..10 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client
                .put_state(&format!("offer-{i}"), vec![i as u8])
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    for i in 0..10 {
        let value = client.get_state(&format!("offer-{i}")).await.unwrap();
        assert_eq!(value, Some(vec![i as u8]));
    }
}

#[tokio::test]
async fn test_closed_ledger_reports_actor_closed() {
    let (actor, client) = LedgerActor::new(&LedgerConfig::default());
    drop(actor);

    assert_eq!(
        client.get_state("offer-1").await,
        Err(LedgerError::ActorClosed)
    );
}
