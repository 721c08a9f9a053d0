use crate::model::PostId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Display;

/// Type-safe identifier for Users.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    /// Author id recorded on posts published without a signed-in user.
    pub const ANONYMOUS: &'static str = "anon";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn anonymous() -> Self {
        Self(Self::ANONYMOUS.to_string())
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A marketplace member and their credits ledger.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](hub_runtime::ActorEntity) trait.
/// Its only mutations are the ledger actions in [`crate::ledger::LedgerAction`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub avatar: String,
    pub college: String,
    pub credits: u32,
    /// Posts this user published.
    pub shared_ids: BTreeSet<PostId>,
    /// Posts this user unlocked. Never shrinks.
    pub purchased_ids: BTreeSet<PostId>,
    pub favorite_ids: BTreeSet<PostId>,
}

impl User {
    /// Creates a user with an empty ledger history.
    pub fn new(id: UserId, name: impl Into<String>, credits: u32) -> Self {
        Self {
            id,
            name: name.into(),
            avatar: String::new(),
            college: String::new(),
            credits,
            shared_ids: BTreeSet::new(),
            purchased_ids: BTreeSet::new(),
            favorite_ids: BTreeSet::new(),
        }
    }

    pub fn has_purchased(&self, post: &PostId) -> bool {
        self.purchased_ids.contains(post)
    }

    pub fn has_favorited(&self, post: &PostId) -> bool {
        self.favorite_ids.contains(post)
    }
}

/// Payload for provisioning a user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub avatar: String,
    pub college: String,
    pub credits: u32,
}
