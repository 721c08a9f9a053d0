use crate::model::UserId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("insufficient credits: {required} required, {available} available")]
    InsufficientCredits { required: u32, available: u32 },

    #[error("user not found: {0}")]
    NotFound(UserId),

    #[error("display name must not be empty")]
    EmptyName,

    #[error("actor communication error: {0}")]
    ActorCommunicationError(String),
}
