//! # User Client
//!
//! Provides a high‑level API for interacting with the `User` actor.
//! It wraps a `ResourceClient<User>` and exposes one method per ledger action.
use crate::ledger::{LedgerAction, LedgerOutcome};
use crate::model::{PostId, User, UserCreate, UserId};
use crate::user_actor::UserError;
use async_trait::async_trait;
use hub_runtime::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.entity_error::<UserError>() {
            Ok(user_error) => user_error,
            Err(FrameworkError::NotFound(id)) => UserError::NotFound(UserId(id)),
            Err(other) => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl UserClient {
    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<UserId, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Debits `price` and unlocks `post` for `id`. Buying an unlocked post
    /// again returns [`LedgerOutcome::AlreadyOwned`] and charges nothing.
    #[instrument(skip(self))]
    pub async fn purchase(
        &self,
        id: UserId,
        post: PostId,
        price: u32,
    ) -> Result<LedgerOutcome, UserError> {
        debug!("Sending purchase");
        self.inner
            .perform_action(id, LedgerAction::Purchase { post, price })
            .await
            .map_err(Self::map_error)
    }

    /// Returns whether `post` is a favorite after the toggle.
    #[instrument(skip(self))]
    pub async fn toggle_favorite(&self, id: UserId, post: PostId) -> Result<bool, UserError> {
        debug!("Sending favorite toggle");
        match self
            .inner
            .perform_action(id, LedgerAction::ToggleFavorite(post))
            .await
            .map_err(Self::map_error)?
        {
            LedgerOutcome::Favorite(now) => Ok(now),
            other => Err(UserError::ActorCommunicationError(format!(
                "unexpected outcome for favorite toggle: {:?}",
                other
            ))),
        }
    }
}
