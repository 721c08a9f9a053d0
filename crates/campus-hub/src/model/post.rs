//! Shared resource listings.
//!
//! # Actor Framework
//! [`Post`] implements the [`ActorEntity`](hub_runtime::ActorEntity) trait
//! (see [`crate::post_actor::entity`]). Posts are append-only: once published
//! nothing about them changes, including the unlock price.

use crate::model::{Category, StorageProvider, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Posts.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PostId(pub String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// A fresh random identifier for a newly published post.
    pub fn random() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }
}

impl Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// One download location for a post's files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub provider: StorageProvider,
    pub url: String,
    /// Extraction code for providers that ask for one.
    pub password: Option<String>,
}

impl ResourceLink {
    pub fn new(provider: StorageProvider, url: impl Into<String>) -> Self {
        Self {
            provider,
            url: url.into(),
            password: None,
        }
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
}

/// A resource listing in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    /// Display name of the author at publish time.
    pub author: String,
    pub author_id: UserId,
    pub content: String,
    pub category: Category,
    pub created_at: DateTime<Utc>,
    /// Display-only counters.
    pub views: u32,
    pub replies: u32,
    pub is_pinned: bool,
    /// Credits needed to unlock the links. Zero means free.
    pub price: u32,
    pub links: Vec<ResourceLink>,
    pub thumbnail: Option<String>,
}

impl Post {
    pub fn is_free(&self) -> bool {
        self.price == 0
    }
}

/// Payload for publishing a new post.
#[derive(Debug, Clone)]
pub struct PostCreate {
    pub title: String,
    pub content: String,
    pub category: Category,
    pub price: u32,
    pub author: String,
    pub author_id: UserId,
    pub links: Vec<ResourceLink>,
    pub thumbnail: Option<String>,
}
