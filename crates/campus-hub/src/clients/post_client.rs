//! # Post Client
//!
//! Provides a high‑level API for interacting with the `Post` actor.
use crate::model::{Post, PostCreate, PostId};
use crate::post_actor::PostError;
use async_trait::async_trait;
use hub_runtime::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Post actor.
#[derive(Clone)]
pub struct PostClient {
    inner: ResourceClient<Post>,
}

impl PostClient {
    pub fn new(inner: ResourceClient<Post>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Post> for PostClient {
    type Error = PostError;

    fn inner(&self) -> &ResourceClient<Post> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.entity_error::<PostError>() {
            Ok(post_error) => post_error,
            Err(FrameworkError::NotFound(id)) => PostError::NotFound(PostId(id)),
            Err(other) => PostError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl PostClient {
    #[instrument(skip(self, params), fields(title = %params.title))]
    pub async fn publish(&self, params: PostCreate) -> Result<PostId, PostError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Like [`ActorClient::get`], but a missing post is an error.
    pub async fn fetch(&self, id: PostId) -> Result<Post, PostError> {
        self.get(id.clone())
            .await?
            .ok_or(PostError::NotFound(id))
    }
}
