//! # Mock Ledger & Testing Guide
//!
//! `MockLedger` hands out a real [`LedgerClient`] whose requests are answered from a
//! queue of expectations instead of real state. It lets you drive the contract through
//! situations the reference ledger never produces on its own, such as a failing write.
//!
//! ## When to use Mocks vs the Real Ledger
//!
//! | Feature | MockLedger | LedgerActor |
//! |---------|------------|-------------|
//! | **State** | None (expectations) | Real key-value map |
//! | **Order checking** | Every request must match the next expectation | n/a |
//! | **Error Injection** | Easy (`return_err`) | Only empty keys and oversized values |
//! | **Use Case** | Store failure paths, exact request sequences | Behavior across operations |
//!
//! ## Two Styles
//!
//! **Expectation queue** ([`MockLedger`]):
//! ```rust
//! use ledger_framework::mock::MockLedger;
//! use ledger_framework::{LedgerError, StateStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockLedger::new();
//!     mock.expect_get("offer-1").return_ok(None);
//!     mock.expect_put("offer-1").return_err(LedgerError::Backend("disk full".into()));
//!
//!     let client = mock.client();
//!     assert_eq!(client.get_state("offer-1").await, Ok(None));
//!     assert!(client.put_state("offer-1", b"{}".to_vec()).await.is_err());
//!
//!     mock.verify();
//! }
//! ```
//!
//! **Raw channel** ([`create_mock_ledger`]): the test receives each [`LedgerRequest`]
//! itself and answers through the responder, or asserts that nothing was sent at all.

use crate::client::LedgerClient;
use crate::error::LedgerError;
use crate::message::{LedgerRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response to send back for it.
#[derive(Debug)]
enum Expectation {
    Get {
        key: String,
        response: Result<Option<Vec<u8>>, LedgerError>,
    },
    Put {
        key: String,
        response: Result<(), LedgerError>,
    },
    Delete {
        key: String,
        response: Result<(), LedgerError>,
    },
}

type Queue = Arc<Mutex<VecDeque<Expectation>>>;

/// A mock ledger with expectation tracking for fluent testing.
///
/// Requests must arrive in the order the expectations were registered, with the same
/// keys. A request that does not match is recorded, its responder is dropped (the
/// caller sees [`LedgerError::ActorDropped`]), and [`MockLedger::verify`] panics.
pub struct MockLedger {
    client: LedgerClient,
    expectations: Queue,
    puts: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
    mismatches: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl MockLedger {
    /// Creates a new mock ledger with no expectations.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<LedgerRequest>(100);
        let expectations: Queue = Arc::new(Mutex::new(VecDeque::new()));
        let puts = Arc::new(Mutex::new(Vec::new()));
        let mismatches = Arc::new(Mutex::new(Vec::new()));

        let queue = expectations.clone();
        let recorded_puts = puts.clone();
        let recorded_mismatches = mismatches.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        LedgerRequest::Get { key, respond_to },
                        Some(Expectation::Get {
                            key: expected,
                            response,
                        }),
                    ) if key == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        LedgerRequest::Put {
                            key,
                            value,
                            respond_to,
                        },
                        Some(Expectation::Put {
                            key: expected,
                            response,
                        }),
                    ) if key == expected => {
                        recorded_puts.lock().unwrap().push((key, value));
                        let _ = respond_to.send(response);
                    }
                    (
                        LedgerRequest::Delete { key, respond_to },
                        Some(Expectation::Delete {
                            key: expected,
                            response,
                        }),
                    ) if key == expected => {
                        let _ = respond_to.send(response);
                    }
                    (request, expectation) => {
                        recorded_mismatches
                            .lock()
                            .unwrap()
                            .push(format!("got {request:?}, expected {expectation:?}"));
                    }
                }
            }
        });

        Self {
            client: LedgerClient::new(sender),
            expectations,
            puts,
            mismatches,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> LedgerClient {
        self.client.clone()
    }

    /// Expects a `get_state` call for `key`.
    pub fn expect_get(&mut self, key: impl Into<String>) -> GetExpectationBuilder {
        GetExpectationBuilder {
            key: key.into(),
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `put_state` call for `key`.
    pub fn expect_put(&mut self, key: impl Into<String>) -> WriteExpectationBuilder {
        WriteExpectationBuilder {
            key: key.into(),
            kind: WriteKind::Put,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `del_state` call for `key`.
    pub fn expect_delete(&mut self, key: impl Into<String>) -> WriteExpectationBuilder {
        WriteExpectationBuilder {
            key: key.into(),
            kind: WriteKind::Delete,
            expectations: self.expectations.clone(),
        }
    }

    /// Every `(key, value)` passed to a matching `put_state`, in arrival order.
    pub fn puts(&self) -> Vec<(String, Vec<u8>)> {
        self.puts.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met and no request went unmatched.
    pub fn verify(&self) {
        let mismatches = self.mismatches.lock().unwrap();
        if !mismatches.is_empty() {
            panic!("Unexpected ledger requests: {:?}", *mismatches);
        }
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl Default for MockLedger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `get_state` expectations.
pub struct GetExpectationBuilder {
    key: String,
    expectations: Queue,
}

impl GetExpectationBuilder {
    /// Answers with the given stored value (`None` for a missing key).
    pub fn return_ok(self, value: Option<Vec<u8>>) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            key: self.key,
            response: Ok(value),
        });
    }

    /// Answers with an error.
    pub fn return_err(self, error: LedgerError) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            key: self.key,
            response: Err(error),
        });
    }
}

enum WriteKind {
    Put,
    Delete,
}

/// Builder for `put_state` and `del_state` expectations.
pub struct WriteExpectationBuilder {
    key: String,
    kind: WriteKind,
    expectations: Queue,
}

impl WriteExpectationBuilder {
    /// Answers with success.
    pub fn return_ok(self) {
        self.push(Ok(()));
    }

    /// Answers with an error.
    pub fn return_err(self, error: LedgerError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<(), LedgerError>) {
        let expectation = match self.kind {
            WriteKind::Put => Expectation::Put {
                key: self.key,
                response,
            },
            WriteKind::Delete => Expectation::Delete {
                key: self.key,
                response,
            },
        };
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Nothing answers the requests unless the test does, which makes this the tool for
/// asserting that an operation never touched the ledger (`receiver.try_recv()` is empty).
pub fn create_mock_ledger(buffer_size: usize) -> (LedgerClient, mpsc::Receiver<LedgerRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (LedgerClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get(
    receiver: &mut mpsc::Receiver<LedgerRequest>,
) -> Option<(String, Response<Option<Vec<u8>>>)> {
    match receiver.recv().await {
        Some(LedgerRequest::Get { key, respond_to }) => Some((key, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Put request
pub async fn expect_put(
    receiver: &mut mpsc::Receiver<LedgerRequest>,
) -> Option<(String, Vec<u8>, Response<()>)> {
    match receiver.recv().await {
        Some(LedgerRequest::Put {
            key,
            value,
            respond_to,
        }) => Some((key, value, respond_to)),
        _ => None,
    }
}
