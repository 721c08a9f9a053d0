//! # Generic Actor Server
//!
//! `ResourceActor` owns the store for one entity type and processes requests
//! one at a time, so entity state never needs a lock. Two concurrent purchase
//! requests against the same user are simply two messages in the queue: the
//! second one sees the balance left behind by the first.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::{HashMap, VecDeque};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Boxed ID generator used for `Create` requests.
pub type IdGenerator<Id> = Box<dyn FnMut() -> Id + Send>;

/// The generic actor that manages a collection of entities.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor and a cloneable client.
/// 2. **Seed** (optional): `with_seed()` pre-loads externally provisioned entities.
/// 3. **Run**: spawn `actor.run(context)`; the loop exits once every client is dropped.
///
/// ```rust
/// use hub_runtime::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Counter { id: u32, value: u32 }
/// #[derive(Debug)] struct CounterCreate;
/// #[derive(Debug)] enum CounterAction { Bump }
/// #[derive(Debug, thiserror::Error)] #[error("counter error")] struct CounterError;
///
/// #[async_trait]
/// impl ActorEntity for Counter {
///     type Id = u32;
///     type Create = CounterCreate;
///     type Action = CounterAction;
///     type ActionResult = u32;
///     type Context = ();
///     type Error = CounterError;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, _: CounterCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, value: 0 })
///     }
///     async fn handle_action(&mut self, _: CounterAction, _: &()) -> Result<u32, Self::Error> {
///         self.value += 1;
///         Ok(self.value)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let mut next = 0;
///     let (actor, client) = ResourceActor::<Counter>::new(10, move || { next += 1; next });
///     tokio::spawn(actor.run(()));
///
///     let id = client.create(CounterCreate).await.unwrap();
///     assert_eq!(client.perform_action(id, CounterAction::Bump).await.unwrap(), 1);
/// }
/// ```
///
/// # Listing Order
///
/// `List` returns entities newest first: every created entity is placed ahead
/// of everything already stored, while seeded entities keep the order they were
/// seeded in, behind anything created later.
///
/// # Actions
///
/// The action hook runs against a clone of the stored entity. The clone
/// replaces the stored value only when the hook succeeds, so an action either
/// applies completely or not at all.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    listing: VecDeque<T::Id>,
    next_id: IdGenerator<T::Id>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the request channel. Clients wait when it is full.
    /// * `next_id` - Produces the ID for each `Create` request.
    pub fn new(
        buffer_size: usize,
        next_id: impl FnMut() -> T::Id + Send + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            listing: VecDeque::new(),
            next_id: Box::new(next_id),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Pre-loads entities, keyed by their own IDs, in the given order.
    /// A repeated ID replaces the earlier entity but keeps its listing slot.
    pub fn with_seed(mut self, entities: impl IntoIterator<Item = T>) -> Self {
        for entity in entities {
            let id = entity.id().clone();
            if self.store.insert(id.clone(), entity).is_none() {
                self.listing.push_back(id);
            }
        }
        self
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// The `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    match &result {
                        Ok(id) => info!(entity_type, %id, size = self.store.len(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self
                        .listing
                        .iter()
                        .filter_map(|id| self.store.get(id).cloned())
                        .collect();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = self.apply(&id, action, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T::Id, FrameworkError> {
        let id = (self.next_id)();
        if self.store.contains_key(&id) {
            return Err(FrameworkError::DuplicateId(id.to_string()));
        }

        let mut item = T::from_create_params(id.clone(), params)
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        item.on_create(context)
            .await
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;

        self.store.insert(id.clone(), item);
        self.listing.push_front(id.clone());
        Ok(id)
    }

    async fn apply(
        &mut self,
        id: &T::Id,
        action: T::Action,
        context: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        let current = self
            .store
            .get(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;

        let mut next = current.clone();
        let result = next
            .handle_action(action, context)
            .await
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;

        self.store.insert(id.clone(), next);
        Ok(result)
    }
}
