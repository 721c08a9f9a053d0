//! # Credits Ledger
//!
//! Every change to a [`User`] goes through [`apply`], a pure transition from
//! the current user to the next one. The user actor runs it inside
//! `handle_action`, which means the runtime only ever commits a fully
//! computed successor: balance and purchase set move together or not at all.
//!
//! Link visibility is decided by [`can_access_links`], which never mutates.

use crate::model::{Post, PostId, User};
use crate::user_actor::UserError;

/// Tagged union of every mutation a user supports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerAction {
    /// Debit `price` credits and grant permanent access to `post`.
    Purchase { post: PostId, price: u32 },
    ToggleFavorite(PostId),
}

/// What an applied [`LedgerAction`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerOutcome {
    Purchased { balance: u32 },
    /// The post was already unlocked; nothing changed.
    AlreadyOwned { balance: u32 },
    /// Favorite membership after the toggle.
    Favorite(bool),
}

/// Computes the user that results from `action`.
///
/// Purchase checks run in a fixed order: the balance must cover the price
/// first, and only then is an existing purchase treated as a no-op. A
/// re-purchase that the balance could not pay for is therefore still
/// rejected, without touching anything.
pub fn apply(user: &User, action: LedgerAction) -> Result<(User, LedgerOutcome), UserError> {
    let mut next = user.clone();
    let outcome = match action {
        LedgerAction::Purchase { post, price } => {
            if user.credits < price {
                return Err(UserError::InsufficientCredits {
                    required: price,
                    available: user.credits,
                });
            }
            if user.has_purchased(&post) {
                LedgerOutcome::AlreadyOwned {
                    balance: user.credits,
                }
            } else {
                next.credits -= price;
                next.purchased_ids.insert(post);
                LedgerOutcome::Purchased {
                    balance: next.credits,
                }
            }
        }
        LedgerAction::ToggleFavorite(post) => {
            if next.favorite_ids.remove(&post) {
                LedgerOutcome::Favorite(false)
            } else {
                next.favorite_ids.insert(post);
                LedgerOutcome::Favorite(true)
            }
        }
    };
    Ok((next, outcome))
}

/// Whether `viewer` may see the download links of `post`.
///
/// Free posts are open to everyone, signed in or not. Otherwise the viewer
/// must be the author or have purchased the post.
pub fn can_access_links(viewer: Option<&User>, post: &Post) -> bool {
    if post.is_free() {
        return true;
    }
    match viewer {
        Some(user) => user.id == post.author_id || user.has_purchased(&post.id),
        None => false,
    }
}
