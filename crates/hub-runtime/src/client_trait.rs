//! # ActorClient Trait
//!
//! Shared read operations for resource-specific client wrappers.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read operations.
///
/// A wrapper only supplies access to its inner [`ResourceClient`] and a
/// mapping from runtime errors to its own error type; `get` and `list` come
/// for free.
///
/// # Example
///
/// ```rust
/// use hub_runtime::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u32 }
/// #[derive(Debug)] struct NoteCreate;
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct NoteError(String);
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u32; type Create = NoteCreate; type Action = ();
///     type ActionResult = (); type Context = (); type Error = NoteError;
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, _: NoteCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
///     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct NoteClient { inner: ResourceClient<Note> }
///
/// #[async_trait]
/// impl ActorClient<Note> for NoteClient {
///     type Error = NoteError;
///     fn inner(&self) -> &ResourceClient<Note> { &self.inner }
///     fn map_error(e: FrameworkError) -> NoteError { NoteError(e.to_string()) }
/// }
///
/// async fn usage(client: NoteClient) {
///     let _ = client.get(1).await;
///     let _ = client.list().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map runtime errors to the resource-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity in listing order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}
