//! # Generic Messages
//!
//! Request types sent from a [`ResourceClient`](crate::ResourceClient) to its
//! [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor.
///
/// Resources here are append-only stores: they can be created, read, listed
/// and transformed by their own actions. `List` returns entities in listing
/// order (see [`ResourceActor`](crate::ResourceActor)).
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
