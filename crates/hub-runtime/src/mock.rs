//! # Mock Clients
//!
//! Test doubles for code that sits *around* a [`ResourceClient`]: client
//! wrappers, facades, anything that sends requests without caring which actor
//! answers them.
//!
//! Two styles are available:
//!
//! - [`MockClient`]: queue up expectations, hand out the client, then `verify()`.
//!   Responses are served in order.
//! - [`create_mock_client`] plus the `expect_*` helpers: receive each request
//!   yourself, inspect the payload and answer through its responder.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | State | scripted responses | real store |
//! | Error injection | `return_err` | needs real failing state |
//! | Use case | logic around the client | the entity itself, full system |
//!
//! ```rust
//! use hub_runtime::mock::MockClient;
//! use hub_runtime::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Wallet { id: u32, balance: u32 }
//! #[derive(Debug)] struct WalletCreate;
//! #[derive(Debug, thiserror::Error)] #[error("wallet")] struct WalletError;
//!
//! #[async_trait]
//! impl ActorEntity for Wallet {
//!     type Id = u32; type Create = WalletCreate; type Action = ();
//!     type ActionResult = (); type Context = (); type Error = WalletError;
//!     fn id(&self) -> &u32 { &self.id }
//!     fn from_create_params(id: u32, _: WalletCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, balance: 0 })
//!     }
//!     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Wallet>::new();
//!     mock.expect_get(7).return_ok(Some(Wallet { id: 7, balance: 500 }));
//!     mock.expect_get(8).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(7).await.unwrap().unwrap().balance, 500);
//!     assert!(matches!(client.get(8).await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

enum Expectation<T: ActorEntity> {
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client that answers requests from a queue of expectations.
///
/// Requests must arrive in the same order the expectations were queued and,
/// for `get` and `action`, with the same ID. A mismatch panics the responder
/// task, which surfaces in the test as [`FrameworkError::ActorDropped`] or
/// [`FrameworkError::ActorClosed`].
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must run inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().unwrap().pop_front();

                match (request, next) {
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "action sent to unexpected id");
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(Box::new(|response| Expectation::Create { response }))
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(Box::new(move |response| Expectation::Get { id, response }))
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Box::new(|response| Expectation::List { response }))
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(Box::new(move |response| Expectation::Action { id, response }))
    }

    /// Panics if any queued expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }

    fn builder<R>(&self, make: ExpectationFactory<T, R>) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            make,
            expectations: self.expectations.clone(),
        }
    }
}

type ExpectationFactory<T, R> = Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>;

/// Completes an expectation with the response the mock should return.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    make: ExpectationFactory<T, R>,
    expectations: Expectations<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a client whose requests land on a receiver the test controls.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message, if it is a `Create` request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a `Get` request.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message, if it is an `Action` request.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Badge {
        id: u32,
        label: String,
    }

    #[derive(Debug)]
    struct BadgeCreate {
        label: String,
    }

    #[derive(Debug)]
    enum BadgeAction {
        Rename(String),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Badge error")]
    struct BadgeError;

    #[async_trait]
    impl ActorEntity for Badge {
        type Id = u32;
        type Create = BadgeCreate;
        type Action = BadgeAction;
        type ActionResult = ();
        type Context = ();
        type Error = BadgeError;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn from_create_params(id: u32, params: BadgeCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                label: params.label,
            })
        }

        async fn handle_action(
            &mut self,
            action: BadgeAction,
            _ctx: &Self::Context,
        ) -> Result<(), Self::Error> {
            match action {
                BadgeAction::Rename(label) => self.label = label,
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_channel_level_mock() {
        let (client, mut receiver) = create_mock_client::<Badge>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(BadgeCreate {
                    label: "Top Sharer".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.label, "Top Sharer");
        responder.send(Ok(1)).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(1)));
    }

    #[tokio::test]
    async fn test_mock_client_serves_expectations_in_order() {
        let mut mock = MockClient::<Badge>::new();
        mock.expect_create().return_ok(1);
        mock.expect_list().return_ok(vec![Badge {
            id: 1,
            label: "Helper".to_string(),
        }]);
        mock.expect_action(1).return_ok(());

        let client = mock.client();
        let id = client
            .create(BadgeCreate {
                label: "Helper".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let all = client.list().await.unwrap();
        assert_eq!(all.len(), 1);

        client
            .perform_action(1, BadgeAction::Rename("Mentor".to_string()))
            .await
            .unwrap();

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_injects_errors() {
        let mut mock = MockClient::<Badge>::new();
        mock.expect_get(3).return_err(FrameworkError::NotFound("3".to_string()));

        let result = mock.client().get(3).await;
        assert!(matches!(result, Err(FrameworkError::NotFound(_))));
        mock.verify();
    }
}
