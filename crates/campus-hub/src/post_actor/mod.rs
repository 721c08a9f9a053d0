//! # Post Actor
//!
//! Owns the catalog. Posts are created by publishing and are never edited
//! or deleted afterwards, so [`PostAction`] has no variants: the only
//! requests that reach a stored post are reads.
//!
//! The listing returned by the actor is the catalog order: seeded posts in
//! seed order, with every newly published post placed in front.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](hub_runtime::ActorEntity) implementation for [`Post`]
//! - [`error`] - [`PostError`]
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::PostClient;
use crate::model::{Post, PostId};
use hub_runtime::ResourceActor;

/// Posts accept no mutations once published.
#[derive(Debug)]
pub enum PostAction {}

/// Creates a new Post actor and its client. Published posts get random ids.
pub fn new(buffer_size: usize) -> (ResourceActor<Post>, PostClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, PostId::random);
    (actor, PostClient::new(generic_client))
}
