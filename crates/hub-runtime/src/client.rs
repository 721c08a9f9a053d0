//! # Generic Client
//!
//! The sending half of a resource actor.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `ResourceActor`.
///
/// Holds only a channel sender, so it is cheap to clone and share across tasks.
/// Dropping the last clone shuts the actor down.
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

// Manual impl: a derive would require `T: Clone` on the wrapper's bounds.
impl<T: ActorEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Create { params, respond_to })
            .await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Get { id, respond_to }).await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::List { respond_to }).await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Action {
            id,
            action,
            respond_to,
        })
        .await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    async fn send(&self, request: ResourceRequest<T>) -> Result<(), FrameworkError> {
        self.sender
            .send(request)
            .await
            .map_err(|_| FrameworkError::ActorClosed)
    }
}
