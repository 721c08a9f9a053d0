//! # Runtime Errors
//!
//! Errors raised by the actor plumbing itself, plus a boxed slot for the
//! entity's own error type.

/// Errors that can occur within the actor runtime.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Duplicate id: {0}")]
    DuplicateId(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers a typed entity error.
    ///
    /// Returns `Ok(e)` when this is an [`FrameworkError::EntityError`] wrapping an `E`,
    /// and gives the original error back otherwise so callers can map it themselves.
    pub fn entity_error<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(e) => Ok(*e),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}
