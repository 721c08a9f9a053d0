use crate::model::PostId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("content must not be empty")]
    EmptyContent,

    #[error("post not found: {0}")]
    NotFound(PostId),

    #[error("actor communication error: {0}")]
    ActorCommunicationError(String),
}
