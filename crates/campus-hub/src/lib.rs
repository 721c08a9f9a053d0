//! # CampusHub
//!
//! Core of a marketplace where students share study resources and unlock
//! each other's download links with credits.
//!
//! - [`model`]: posts, users and the closed enumerations they use.
//! - [`ledger`]: the credits ledger; the one place a user's balance and
//!   membership sets change.
//! - [`catalog`]: category and keyword filtering, profile listings.
//! - [`user_actor`] / [`post_actor`]: the resource actors owning all state.
//! - [`clients`]: typed wrappers over the actors' request channels.
//! - [`suggestion`]: optional title/category suggestions for new posts.
//! - [`marketplace`]: the session-aware facade tying it all together.
//! - [`lifecycle`]: starting, seeding and stopping the whole system.

pub mod catalog;
pub mod clients;
pub mod config;
pub mod error;
pub mod ledger;
pub mod lifecycle;
pub mod marketplace;
pub mod model;
pub mod post_actor;
pub mod seed;
pub mod session;
pub mod suggestion;
pub mod user_actor;
