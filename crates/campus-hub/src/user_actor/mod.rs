//! # User Actor
//!
//! Owns every [`User`] and serializes all ledger changes to them.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](hub_runtime::ActorEntity) implementation for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! Users are normally provisioned from seed data with
//! [`ResourceActor::with_seed`](hub_runtime::ResourceActor::with_seed); the
//! `Create` path exists for tooling and tests. After that a user changes only
//! through [`LedgerAction`](crate::ledger::LedgerAction)s, so two purchases
//! racing against one balance are simply processed one after the other.
//!
//! ## Usage
//!
//! ```rust
//! use campus_hub::ledger::LedgerOutcome;
//! use campus_hub::model::{PostId, UserCreate};
//! use campus_hub::user_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create_user(UserCreate {
//!             name: "Lin".to_string(),
//!             avatar: String::new(),
//!             college: "School of Physics".to_string(),
//!             credits: 100,
//!         })
//!         .await?;
//!
//!     let outcome = client.purchase(id, PostId::from("2"), 30).await?;
//!     assert_eq!(outcome, LedgerOutcome::Purchased { balance: 70 });
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::model::{User, UserId};
use hub_runtime::ResourceActor;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new User actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    let user_id_counter = Arc::new(AtomicU64::new(1));
    let next_user_id = move || {
        let id = user_id_counter.fetch_add(1, Ordering::SeqCst);
        UserId(format!("user_{}", id))
    };

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_user_id);
    (actor, UserClient::new(generic_client))
}
