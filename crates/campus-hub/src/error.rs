//! Errors surfaced by the [`Marketplace`](crate::marketplace::Marketplace) facade.

use crate::model::{PostId, UserId};
use crate::post_actor::PostError;
use crate::suggestion::SuggestionError;
use crate::user_actor::UserError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketError {
    #[error("sign in required")]
    Unauthenticated,

    #[error("insufficient credits: {required} required, {available} available")]
    InsufficientCredits { required: u32, available: u32 },

    /// Non-fatal: the caller keeps its form as it was.
    #[error("metadata suggestion unavailable: {0}")]
    SuggestionUnavailable(#[from] SuggestionError),

    #[error("post not found: {0}")]
    PostNotFound(PostId),

    #[error("user not found: {0}")]
    UserNotFound(UserId),

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<UserError> for MarketError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::InsufficientCredits {
                required,
                available,
            } => MarketError::InsufficientCredits {
                required,
                available,
            },
            UserError::NotFound(id) => MarketError::UserNotFound(id),
            invalid @ UserError::EmptyName => MarketError::Validation(invalid.to_string()),
            UserError::ActorCommunicationError(msg) => MarketError::ActorCommunication(msg),
        }
    }
}

impl From<PostError> for MarketError {
    fn from(e: PostError) -> Self {
        match e {
            PostError::NotFound(id) => MarketError::PostNotFound(id),
            invalid @ (PostError::EmptyTitle | PostError::EmptyContent) => {
                MarketError::Validation(invalid.to_string())
            },
            PostError::ActorCommunicationError(msg) => MarketError::ActorCommunication(msg),
        }
    }
}
