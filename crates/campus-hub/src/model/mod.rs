//! Pure data structures implementing the [`ActorEntity`](hub_runtime::ActorEntity) trait.

pub mod category;
pub mod post;
pub mod user;

pub use category::*;
pub use post::*;
pub use user::*;
