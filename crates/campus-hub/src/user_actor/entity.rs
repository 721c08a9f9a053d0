use crate::ledger::{self, LedgerAction, LedgerOutcome};
use crate::model::{User, UserCreate, UserId};
use crate::user_actor::UserError;
use async_trait::async_trait;
use hub_runtime::ActorEntity;
use std::collections::BTreeSet;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Action = LedgerAction;
    type ActionResult = LedgerOutcome;
    type Context = ();
    type Error = UserError;

    fn id(&self) -> &UserId {
        &self.id
    }

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(UserError::EmptyName);
        }
        Ok(Self {
            id,
            name: name.to_string(),
            avatar: params.avatar,
            college: params.college,
            credits: params.credits,
            shared_ids: BTreeSet::new(),
            purchased_ids: BTreeSet::new(),
            favorite_ids: BTreeSet::new(),
        })
    }

    async fn handle_action(
        &mut self,
        action: LedgerAction,
        _ctx: &(),
    ) -> Result<LedgerOutcome, Self::Error> {
        let (next, outcome) = ledger::apply(self, action)?;
        *self = next;
        Ok(outcome)
    }
}
