//! # ActorEntity Trait
//!
//! The contract every stored resource (users, posts, ...) implements so a
//! generic [`ResourceActor`](crate::ResourceActor) can own it.
//!
//! An entity is created once from a `Create` payload and afterwards changes
//! only through its `Action` enum. There is no generic update or delete path:
//! if a resource needs a new kind of mutation, it gets a new action variant,
//! and that variant is handled in one place (`handle_action`).
//!
//! # Transition Semantics
//! `handle_action` runs against a *copy* of the stored entity. The actor
//! swaps the copy in only when the hook returns `Ok`, so a failed action
//! leaves the stored value exactly as it was, no matter how far the hook got
//! before returning the error.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by a `ResourceActor`.
///
/// # Async & Context
/// The hooks are `#[async_trait]` so they may await other actors. The `Context`
/// associated type is injected into every hook by [`ResourceActor::run`](crate::ResourceActor::run),
/// which lets dependencies be bound after construction.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Unique identifier. IDs come either from the seed set or from the
    /// generator handed to [`ResourceActor::new`](crate::ResourceActor::new).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Tagged union of every mutation this resource supports.
    type Action: Send + Sync + Debug;

    /// The result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into the actor at `run()` time. `()` if none.
    type Context: Send + Sync;

    /// Per-resource error type. Boxed into
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError) on the
    /// way back to the client and recoverable with
    /// [`FrameworkError::entity_error`](crate::FrameworkError::entity_error).
    type Error: std::error::Error + Send + Sync + 'static;

    /// The entity's own identifier. Used to key seeded entities.
    fn id(&self) -> &Self::Id;

    /// Construct the full entity from a freshly generated ID and the payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction and before the entity is stored.
    /// Returning an error aborts the create; nothing is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply one action to the entity.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
