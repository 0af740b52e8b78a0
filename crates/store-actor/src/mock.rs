//! # Mock Framework & Testing Guide
//!
//! The [`MockClient`] type drives the same `StoreClient<T>` API as the
//! production client but operates entirely in-memory. It lets you set
//! expectations and return values for unit tests, enabling fast,
//! deterministic testing of client logic without spawning any actors.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Unit testing logic *around* the client | Testing the actor itself or full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Testing Strategies
//!
//! Three patterns are supported:
//!
//! 1. **Client Logic Test (Pure Mock)** — use [`MockClient`] or
//!    [`create_mock_client`] to test wrapper clients (e.g. a `ProductClient`)
//!    without any actor running. The raw helpers ([`expect_create`],
//!    [`expect_get`], [`expect_list`], [`expect_update`], [`expect_delete`])
//!    hand you the in-flight request and its responder so the test can play
//!    the actor's side of the conversation.
//! 2. **Single Actor Test** — spawn a real `StoreActor` and exercise it
//!    through its `StoreClient`. See the crate's integration tests.
//! 3. **Full System Test** — build the whole service and drive it end to
//!    end over its transports.
//!
//! One of the biggest advantages of `MockClient` is the ability to simulate
//! errors that are hard to reproduce with real actors (e.g., a closed
//! channel mid-request):
//!
//! ```rust,ignore
//! let mut mock = MockClient::<Product>::new();
//! mock.expect_get(ProductId(1)).return_err(StoreError::ActorClosed);
//! let result = mock.client().get(ProductId(1)).await;
//! assert!(matches!(result, Err(StoreError::ActorClosed)));
//! ```

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
///
/// This enum is used internally by `MockClient` to track what requests
/// are expected and what responses should be returned.
enum Expectation<T: StoreEntity> {
    Create {
        response: Result<T, StoreError>,
    },
    List {
        response: Result<Vec<T>, StoreError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
    Update {
        id: T::Id,
        response: Result<T, StoreError>,
    },
    Delete {
        id: T::Id,
        response: Result<T, StoreError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Product>::new();
/// mock.expect_get(ProductId(1)).return_ok(Some(product));
/// mock.expect_create().return_ok(created);
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: StoreEntity> {
    client: StoreClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoreEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut exps = expectations_clone.lock().unwrap();
                let expectation = exps.pop_front();
                drop(exps); // Release lock before responding

                match (request, expectation) {
                    (
                        StoreRequest::Create {
                            params: _,
                            respond_to,
                        },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Get { id: _, respond_to },
                        Some(Expectation::Get { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Update {
                            id: _,
                            update: _,
                            respond_to,
                        },
                        Some(Expectation::Update { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Delete { id: _, respond_to },
                        Some(Expectation::Delete { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self, id: T::Id) -> UpdateExpectationBuilder<T> {
        UpdateExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self, id: T::Id) -> DeleteExpectationBuilder<T> {
        DeleteExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: StoreEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> CreateExpectationBuilder<T> {
    /// Sets the expectation to return the created entity.
    pub fn return_ok(self, created: T) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Create {
            response: Ok(created),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Create {
            response: Err(error),
        });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: StoreEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> ListExpectationBuilder<T> {
    /// Sets the expectation to return the given entities.
    pub fn return_ok(self, items: Vec<T>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::List {
            response: Ok(items),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::List {
            response: Err(error),
        });
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: StoreEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> GetExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Option<T>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Get {
            id: self.id,
            response: Ok(value),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Get {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `update` expectations.
pub struct UpdateExpectationBuilder<T: StoreEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> UpdateExpectationBuilder<T> {
    /// Sets the expectation to return the updated entity.
    pub fn return_ok(self, updated: T) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Update {
            id: self.id,
            response: Ok(updated),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Update {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `delete` expectations.
pub struct DeleteExpectationBuilder<T: StoreEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> DeleteExpectationBuilder<T> {
    /// Sets the expectation to return the removed entity.
    pub fn return_ok(self, removed: T) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Delete {
            id: self.id,
            response: Ok(removed),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Delete {
            id: self.id,
            response: Err(error),
        });
    }
}

// =============================================================================
// RAW HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// In unit tests we don't want to spin up a full `StoreActor` if we are just
/// testing *client* logic (e.g. a `ProductClient` wrapper).
///
/// Instead, we create a "Mock Client". This client sends messages to a
/// channel we control (`receiver`). The test inspects the messages arriving
/// on that channel, asserts they are correct, and answers through the
/// bundled responder — simulating the actor's behavior (success, failure,
/// delays) deterministically.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client<T: StoreEntity>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request.
pub async fn expect_create<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Create,
    tokio::sync::oneshot::Sender<Result<T, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request.
pub async fn expect_list<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<tokio::sync::oneshot::Sender<Result<Vec<T>, StoreError>>> {
    match receiver.recv().await {
        Some(StoreRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request.
pub async fn expect_get<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Id,
    tokio::sync::oneshot::Sender<Result<Option<T>, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request.
pub async fn expect_update<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Id,
    T::Update,
    tokio::sync::oneshot::Sender<Result<T, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request.
pub async fn expect_delete<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, tokio::sync::oneshot::Sender<Result<T, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
