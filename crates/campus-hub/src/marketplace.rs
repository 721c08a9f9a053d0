//! # Marketplace
//!
//! The session-aware entry point a front end talks to. It holds clients for
//! the user and post actors plus an optional suggestion provider, and turns
//! each user intent (browse, open a post, unlock it, favorite it, publish)
//! into actor requests.
//!
//! The facade itself keeps no state. Everything that must be consistent
//! lives in an actor: a purchase is a single request to the user actor, so
//! the balance check and the debit can never interleave with another
//! purchase.

use crate::catalog::{self, CategoryFilter, ProfileTab};
use crate::clients::{PostClient, UserClient};
use crate::error::MarketError;
use crate::ledger::{self, LedgerOutcome};
use crate::model::{Post, PostCreate, PostId, ResourceLink, User, UserId};
use crate::session::Session;
use crate::suggestion::{
    ensure_describable, MetadataSuggester, PostDraft, Suggestion, SuggestionError,
};
use hub_runtime::ActorClient;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Display name recorded on posts published without a signed-in user.
pub const ANONYMOUS_AUTHOR: &str = "匿名同学";

/// Download links of a post as a particular viewer sees them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAccess {
    Unlocked(Vec<ResourceLink>),
    /// The viewer has to spend `price` credits first.
    Locked { price: u32 },
}

/// A post opened in the detail view. `post.links` is always empty here; the
/// links, if the viewer may see them, are in `access`.
#[derive(Debug, Clone)]
pub struct PostView {
    pub post: Post,
    pub access: LinkAccess,
    pub is_favorite: bool,
}

/// A user's profile page for one tab.
#[derive(Debug, Clone)]
pub struct Profile {
    pub user: User,
    pub tab: ProfileTab,
    pub posts: Vec<Post>,
}

#[derive(Clone)]
pub struct Marketplace {
    users: UserClient,
    posts: PostClient,
    suggester: Option<Arc<dyn MetadataSuggester>>,
}

impl Marketplace {
    pub fn new(users: UserClient, posts: PostClient) -> Self {
        Self {
            users,
            posts,
            suggester: None,
        }
    }

    pub fn with_suggester(mut self, suggester: Arc<dyn MetadataSuggester>) -> Self {
        self.suggester = Some(suggester);
        self
    }

    pub fn users(&self) -> &UserClient {
        &self.users
    }

    pub fn posts(&self) -> &PostClient {
        &self.posts
    }

    async fn user(&self, id: &UserId) -> Result<User, MarketError> {
        self.users
            .get(id.clone())
            .await?
            .ok_or_else(|| MarketError::UserNotFound(id.clone()))
    }

    async fn viewer(&self, session: &Session) -> Result<Option<User>, MarketError> {
        match session.user() {
            Some(id) => self.user(id).await.map(Some),
            None => Ok(None),
        }
    }

    /// The catalog, newest first, narrowed by category and keyword.
    #[instrument(skip(self))]
    pub async fn browse(
        &self,
        category: CategoryFilter,
        keyword: &str,
    ) -> Result<Vec<Post>, MarketError> {
        let posts = self.posts.list().await?;
        Ok(catalog::filter(&posts, category, keyword)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Opens a post. Links are only included when the viewer may see them.
    #[instrument(skip(self))]
    pub async fn view_post(&self, session: &Session, id: PostId) -> Result<PostView, MarketError> {
        let mut post = self.posts.fetch(id).await?;
        let viewer = self.viewer(session).await?;

        let links = std::mem::take(&mut post.links);
        let access = if ledger::can_access_links(viewer.as_ref(), &post) {
            LinkAccess::Unlocked(links)
        } else {
            LinkAccess::Locked { price: post.price }
        };
        let is_favorite = viewer.is_some_and(|user| user.has_favorited(&post.id));

        Ok(PostView {
            post,
            access,
            is_favorite,
        })
    }

    /// Spends credits to unlock a post for the signed-in user.
    ///
    /// Fails with [`MarketError::Unauthenticated`] before anything else is
    /// looked at. The price is read from the stored post, never from the
    /// caller.
    #[instrument(skip(self))]
    pub async fn purchase(
        &self,
        session: &Session,
        post_id: PostId,
    ) -> Result<LedgerOutcome, MarketError> {
        let user_id = session.require()?.clone();
        let post = self.posts.fetch(post_id).await?;

        let outcome = self
            .users
            .purchase(user_id.clone(), post.id.clone(), post.price)
            .await
            .inspect_err(|e| warn!(%user_id, post = %post.id, error = %e, "Purchase rejected"))?;
        info!(%user_id, post = %post.id, ?outcome, "Purchase settled");
        Ok(outcome)
    }

    /// Flips favorite membership; returns whether the post is now a favorite.
    #[instrument(skip(self))]
    pub async fn toggle_favorite(
        &self,
        session: &Session,
        post_id: PostId,
    ) -> Result<bool, MarketError> {
        let user_id = session.require()?.clone();
        Ok(self.users.toggle_favorite(user_id, post_id).await?)
    }

    /// The signed-in user's posts under `tab`, in catalog order.
    #[instrument(skip(self))]
    pub async fn profile(&self, session: &Session, tab: ProfileTab) -> Result<Profile, MarketError> {
        let user = self.user(session.require()?).await?;
        let posts = self.posts.list().await?;
        let posts = catalog::profile_posts(&posts, &user, tab)
            .into_iter()
            .cloned()
            .collect();
        Ok(Profile { user, tab, posts })
    }

    /// Publishes `draft`. Anonymous publishing is allowed. Only the post actor
    /// is written to; the publisher's balance and sets stay as they were.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn publish(&self, session: &Session, draft: PostDraft) -> Result<PostId, MarketError> {
        let (author_name, author_id) = match self.viewer(session).await? {
            Some(user) => (user.name, user.id),
            None => (ANONYMOUS_AUTHOR.to_string(), UserId::anonymous()),
        };

        let id = self
            .posts
            .publish(PostCreate {
                title: draft.title,
                content: draft.content,
                category: draft.category,
                price: draft.price,
                author: author_name,
                author_id,
                links: draft.links,
                thumbnail: draft.thumbnail,
            })
            .await?;
        info!(post = %id, "Published");
        Ok(id)
    }

    /// Asks the suggestion provider for a title and category and writes them
    /// into `draft`.
    ///
    /// Any failure leaves `draft` untouched. A description under the minimum
    /// length is a [`MarketError::Validation`]; every other failure is the
    /// non-fatal [`MarketError::SuggestionUnavailable`].
    #[instrument(skip(self, draft))]
    pub async fn suggest(&self, draft: &mut PostDraft) -> Result<Suggestion, MarketError> {
        ensure_describable(&draft.content).map_err(|e| MarketError::Validation(e.to_string()))?;
        let suggester = self
            .suggester
            .as_ref()
            .ok_or(SuggestionError::NotConfigured)?;

        let suggestion = suggester
            .suggest(&draft.content)
            .await
            .inspect_err(|e| warn!(error = %e, "Suggestion unavailable"))?;
        draft.apply_suggestion(&suggestion);
        Ok(suggestion)
    }
}
