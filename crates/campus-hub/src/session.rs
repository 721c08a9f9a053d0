//! Who is making a request.

use crate::error::MarketError;
use crate::model::UserId;

/// The signed-in user, if any. There is no authentication behind this: a
/// session simply names a provisioned user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<UserId>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user: UserId) -> Self {
        Self { user: Some(user) }
    }

    pub fn user(&self) -> Option<&UserId> {
        self.user.as_ref()
    }

    /// The signed-in user, or [`MarketError::Unauthenticated`].
    pub fn require(&self) -> Result<&UserId, MarketError> {
        self.user.as_ref().ok_or(MarketError::Unauthenticated)
    }
}
