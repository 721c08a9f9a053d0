use crate::model::{Post, PostCreate, PostId};
use crate::post_actor::{PostAction, PostError};
use async_trait::async_trait;
use chrono::Utc;
use hub_runtime::ActorEntity;

#[async_trait]
impl ActorEntity for Post {
    type Id = PostId;
    type Create = PostCreate;
    type Action = PostAction;
    type ActionResult = ();
    type Context = ();
    type Error = PostError;

    fn id(&self) -> &PostId {
        &self.id
    }

    /// Builds a freshly published post: zero counters, not pinned, and only
    /// the links that actually carry a URL.
    fn from_create_params(id: PostId, params: PostCreate) -> Result<Self, Self::Error> {
        let links = params
            .links
            .into_iter()
            .filter(|link| !link.url.trim().is_empty())
            .collect();
        let thumbnail = params
            .thumbnail
            .unwrap_or_else(|| format!("https://picsum.photos/seed/{}/600/350", id));

        Ok(Self {
            title: params.title.trim().to_string(),
            content: params.content.trim().to_string(),
            id,
            author: params.author,
            author_id: params.author_id,
            category: params.category,
            created_at: Utc::now(),
            views: 0,
            replies: 0,
            is_pinned: false,
            price: params.price,
            links,
            thumbnail: Some(thumbnail),
        })
    }

    async fn on_create(&mut self, _ctx: &()) -> Result<(), Self::Error> {
        if self.title.is_empty() {
            return Err(PostError::EmptyTitle);
        }
        if self.content.is_empty() {
            return Err(PostError::EmptyContent);
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: PostAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
