//! # Hub Runtime
//!
//! A small actor runtime for in-memory resource stores.
//!
//! Each resource type (users, posts, ...) is owned by one [`ResourceActor`]
//! running in its own Tokio task. Callers talk to it through a cloneable
//! [`ResourceClient`]. Because an actor handles one request at a time, the
//! entity store needs no locks, and two requests against the same entity can
//! never interleave.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): the domain type, its create payload, and
//!    the tagged union of actions it accepts.
//! 2. **Runtime** ([`ResourceActor`]): the message loop, ID generation,
//!    seeding and listing order.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): async request/response
//!    over channels, wrapped by resource-specific clients.
//!
//! ## Actions Are Transitions
//!
//! There is no generic "update". A resource changes only by applying one of
//! its actions, and the runtime applies each action to a copy, keeping the copy
//! only on success. A failed action therefore never leaves a half-applied
//! entity behind.
//!
//! ## Context Injection
//!
//! Dependencies are passed to [`ResourceActor::run`], not to the constructor,
//! so actors can be created first and wired afterwards.
//!
//! ## Testing
//!
//! The [`mock`] module provides [`mock::MockClient`] and channel-level helpers
//! for testing client wrappers without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::{IdGenerator, ResourceActor};
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
