use async_trait::async_trait;
use campus_hub::catalog::{CategoryFilter, ProfileTab};
use campus_hub::error::MarketError;
use campus_hub::ledger::LedgerOutcome;
use campus_hub::lifecycle::HubSystem;
use campus_hub::marketplace::{LinkAccess, ANONYMOUS_AUTHOR};
use campus_hub::model::{Category, PostId, ResourceLink, StorageProvider, UserCreate, UserId};
use campus_hub::seed::DEMO_USER_ID;
use campus_hub::session::Session;
use campus_hub::suggestion::{MetadataSuggester, PostDraft, Suggestion, SuggestionError};
use hub_runtime::ActorClient;
use std::sync::Arc;

fn student() -> Session {
    Session::signed_in(UserId::from(DEMO_USER_ID))
}

async fn new_user(system: &HubSystem, credits: u32) -> Session {
    let id = system
        .marketplace
        .users()
        .create_user(UserCreate {
            name: "Newcomer".into(),
            avatar: String::new(),
            college: "School of Chemistry".into(),
            credits,
        })
        .await
        .expect("Failed to create user");
    Session::signed_in(id)
}

async fn credits(system: &HubSystem, session: &Session) -> u32 {
    let id = session.user().unwrap().clone();
    system
        .marketplace
        .users()
        .get(id)
        .await
        .unwrap()
        .expect("User not found")
        .credits
}

fn draft(title: &str, price: u32) -> PostDraft {
    PostDraft {
        title: title.into(),
        content: "Scanned lecture notes with worked examples".into(),
        category: Category::Mathematics,
        price,
        links: vec![
            ResourceLink::new(StorageProvider::Mega, "https://mega.nz/file/abc"),
            ResourceLink::new(StorageProvider::Baidu, ""),
        ],
        thumbnail: None,
    }
}

// --- Ledger through the facade ---

#[tokio::test]
async fn test_purchase_debits_once_and_unlocks() {
    let system = HubSystem::new(16);
    let buyer = new_user(&system, 500).await;
    let market = &system.marketplace;

    let view = market.view_post(&buyer, PostId::from("2")).await.unwrap();
    assert_eq!(view.access, LinkAccess::Locked { price: 50 });
    assert!(view.post.links.is_empty());

    let first = market.purchase(&buyer, PostId::from("2")).await.unwrap();
    assert_eq!(first, LedgerOutcome::Purchased { balance: 450 });

    let second = market.purchase(&buyer, PostId::from("2")).await.unwrap();
    assert_eq!(second, LedgerOutcome::AlreadyOwned { balance: 450 });
    assert_eq!(credits(&system, &buyer).await, 450);

    let view = market.view_post(&buyer, PostId::from("2")).await.unwrap();
    match view.access {
        LinkAccess::Unlocked(links) => {
            assert_eq!(links.len(), 1);
            assert_eq!(links[0].password.as_deref(), Some("win"));
        }
        locked => panic!("expected unlocked links, got {:?}", locked),
    }

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_insufficient_credits_changes_nothing() {
    let system = HubSystem::new(16);
    let buyer = new_user(&system, 30).await;

    let err = system
        .marketplace
        .purchase(&buyer, PostId::from("2"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        MarketError::InsufficientCredits {
            required: 50,
            available: 30
        }
    ));

    let profile = system
        .marketplace
        .profile(&buyer, ProfileTab::Purchased)
        .await
        .unwrap();
    assert_eq!(profile.user.credits, 30);
    assert!(profile.posts.is_empty());
}

#[tokio::test]
async fn test_seed_user_repurchase_is_free() {
    let system = HubSystem::new(16);
    let outcome = system
        .marketplace
        .purchase(&student(), PostId::from("2"))
        .await
        .unwrap();
    assert_eq!(outcome, LedgerOutcome::AlreadyOwned { balance: 500 });
}

#[tokio::test]
async fn test_anonymous_requests_are_refused_before_anything_runs() {
    let system = HubSystem::new(16);
    let market = &system.marketplace;

    let err = market
        .toggle_favorite(&Session::anonymous(), PostId::from("1"))
        .await
        .unwrap_err();
    assert!(matches!(err, MarketError::Unauthenticated));

    let err = market
        .purchase(&Session::anonymous(), PostId::from("does-not-exist"))
        .await
        .unwrap_err();
    assert!(matches!(err, MarketError::Unauthenticated));

    let err = market
        .profile(&Session::anonymous(), ProfileTab::Favorite)
        .await
        .unwrap_err();
    assert!(matches!(err, MarketError::Unauthenticated));

    let profile = market.profile(&student(), ProfileTab::Favorite).await.unwrap();
    let favorites: Vec<String> = profile.posts.iter().map(|p| p.id.to_string()).collect();
    assert_eq!(favorites, vec!["3"]);
}

#[tokio::test]
async fn test_toggle_favorite_twice_restores_the_set() {
    let system = HubSystem::new(16);
    let market = &system.marketplace;

    assert!(market.toggle_favorite(&student(), PostId::from("1")).await.unwrap());
    assert!(market.view_post(&student(), PostId::from("1")).await.unwrap().is_favorite);
    assert!(!market.toggle_favorite(&student(), PostId::from("1")).await.unwrap());

    let profile = market.profile(&student(), ProfileTab::Favorite).await.unwrap();
    assert_eq!(profile.posts.len(), 1);
    assert_eq!(profile.user.credits, 500);
}

#[tokio::test]
async fn test_concurrent_purchases_never_overspend() {
    let system = HubSystem::new(64);
    let market = system.marketplace.clone();

    let mut post_ids = Vec::new();
    for i in 0..10 {
        let id = market
            .publish(&Session::anonymous(), draft(&format!("Problem set {}", i), 20))
            .await
            .unwrap();
        post_ids.push(id);
    }

    let buyer = new_user(&system, 100).await;
    let mut handles = Vec::new();
    for id in post_ids {
        let market = market.clone();
        let buyer = buyer.clone();
        handles.push(tokio::spawn(async move { market.purchase(&buyer, id).await }));
    }

    let mut granted = 0;
    let mut refused = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(LedgerOutcome::Purchased { .. }) => granted += 1,
            Err(MarketError::InsufficientCredits { .. }) => refused += 1,
            other => panic!("unexpected purchase result: {:?}", other),
        }
    }

    assert_eq!((granted, refused), (5, 5));
    assert_eq!(credits(&system, &buyer).await, 0);

    drop(market);
    system.shutdown().await.unwrap();
}

// --- Access rules ---

#[tokio::test]
async fn test_link_visibility_per_viewer() {
    let system = HubSystem::new(16);
    let market = &system.marketplace;
    let anonymous = Session::anonymous();

    let free = market.view_post(&anonymous, PostId::from("1")).await.unwrap();
    assert!(matches!(free.access, LinkAccess::Unlocked(ref links) if links.len() == 1));
    assert!(!free.is_favorite);

    let paid = market.view_post(&anonymous, PostId::from("3")).await.unwrap();
    assert_eq!(paid.access, LinkAccess::Locked { price: 20 });

    // Purchased by the seed user.
    let bought = market.view_post(&student(), PostId::from("2")).await.unwrap();
    assert!(matches!(bought.access, LinkAccess::Unlocked(_)));

    let favorite = market.view_post(&student(), PostId::from("3")).await.unwrap();
    assert!(favorite.is_favorite);
    assert_eq!(favorite.access, LinkAccess::Locked { price: 20 });

    let missing = market.view_post(&anonymous, PostId::from("nope")).await.unwrap_err();
    assert!(matches!(missing, MarketError::PostNotFound(id) if id == PostId::from("nope")));
}

#[tokio::test]
async fn test_authors_always_see_their_own_links() {
    let system = HubSystem::new(16);
    let author = new_user(&system, 0).await;
    let market = &system.marketplace;

    let id = market.publish(&author, draft("Organic chemistry cards", 99)).await.unwrap();
    let view = market.view_post(&author, id.clone()).await.unwrap();
    assert!(matches!(view.access, LinkAccess::Unlocked(_)));

    let stranger = market.view_post(&student(), id).await.unwrap();
    assert_eq!(stranger.access, LinkAccess::Locked { price: 99 });
}

// --- Catalog & publishing ---

#[tokio::test]
async fn test_browse_filters_and_keeps_catalog_order() {
    let system = HubSystem::new(16);
    let market = &system.marketplace;

    let all: Vec<String> = market
        .browse(CategoryFilter::All, "")
        .await
        .unwrap()
        .iter()
        .map(|p| p.id.to_string())
        .collect();
    assert_eq!(all, vec!["1", "2", "3"]);

    let languages = market
        .browse("语言学习".parse().unwrap(), "")
        .await
        .unwrap();
    assert_eq!(languages.len(), 1);
    assert_eq!(languages[0].id, PostId::from("2"));

    let keyword = market.browse(CategoryFilter::All, "redux").await.unwrap();
    assert_eq!(keyword.len(), 1);
    assert_eq!(keyword[0].id, PostId::from("3"));

    assert!(market
        .browse(CategoryFilter::Only(Category::Design), "")
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_publish_lists_first_and_leaves_publisher_untouched() {
    let system = HubSystem::new(16);
    let market = &system.marketplace;
    let publisher = UserId::from(DEMO_USER_ID);
    let before = market.users().get(publisher.clone()).await.unwrap().unwrap();

    let id = market.publish(&student(), draft("Calculus cheat sheet", 5)).await.unwrap();

    let newest = &market.browse(CategoryFilter::All, "").await.unwrap()[0];
    assert_eq!(newest.id, id);
    assert_eq!(newest.author, "王小智");
    assert_eq!(newest.author_id, UserId::from(DEMO_USER_ID));
    assert_eq!(newest.links.len(), 1, "links without a URL are dropped");
    assert_eq!((newest.views, newest.replies, newest.is_pinned), (0, 0, false));

    let after = market.users().get(publisher).await.unwrap().unwrap();
    assert_eq!(after, before, "publishing never writes to the user");

    let shared = market.profile(&student(), ProfileTab::Shared).await.unwrap();
    let shared: Vec<PostId> = shared.posts.into_iter().map(|p| p.id).collect();
    assert_eq!(shared, vec![PostId::from("1")]);
}

#[tokio::test]
async fn test_publish_anonymously() {
    let system = HubSystem::new(16);
    let id = system
        .marketplace
        .publish(&Session::anonymous(), draft("Sketching basics", 0))
        .await
        .unwrap();

    let post = system.marketplace.posts().fetch(id).await.unwrap();
    assert_eq!(post.author, ANONYMOUS_AUTHOR);
    assert_eq!(post.author_id, UserId::anonymous());
}

#[tokio::test]
async fn test_publish_rejects_blank_title() {
    let system = HubSystem::new(16);
    let err = system
        .marketplace
        .publish(&student(), draft("   ", 0))
        .await
        .unwrap_err();
    assert!(matches!(err, MarketError::Validation(_)));

    assert_eq!(
        system.marketplace.browse(CategoryFilter::All, "").await.unwrap().len(),
        3
    );
    let shared = system.marketplace.profile(&student(), ProfileTab::Shared).await.unwrap();
    assert_eq!(shared.posts.len(), 1);
}

// --- Suggestions ---

struct FixedSuggester(Suggestion);

#[async_trait]
impl MetadataSuggester for FixedSuggester {
    async fn suggest(&self, _description: &str) -> Result<Suggestion, SuggestionError> {
        Ok(self.0.clone())
    }
}

struct DownSuggester;

#[async_trait]
impl MetadataSuggester for DownSuggester {
    async fn suggest(&self, _description: &str) -> Result<Suggestion, SuggestionError> {
        Err(SuggestionError::Timeout)
    }
}

fn describable() -> PostDraft {
    PostDraft {
        content: "整理了数据结构与算法课程的全部实验代码和报告模板".into(),
        category: Category::Exams,
        price: 10,
        ..PostDraft::default()
    }
}

#[tokio::test]
async fn test_suggestion_fills_title_and_category() {
    let system = HubSystem::new(16).with_suggester(Arc::new(FixedSuggester(Suggestion {
        title: "数据结构实验全集".into(),
        summary: "实验代码与报告".into(),
        category: "编程开发".into(),
        keywords: vec!["数据结构".into()],
    })));

    let mut form = describable();
    let suggestion = system.marketplace.suggest(&mut form).await.unwrap();
    assert_eq!(suggestion.keywords, vec!["数据结构".to_string()]);
    assert_eq!(form.title, "数据结构实验全集");
    assert_eq!(form.category, Category::Programming);
    assert_eq!(form.price, 10);
}

#[tokio::test]
async fn test_failed_suggestion_leaves_the_form_alone() {
    let system = HubSystem::new(16).with_suggester(Arc::new(DownSuggester));
    let mut form = describable();
    form.title = "my own title".into();
    let before = form.clone();

    let err = system.marketplace.suggest(&mut form).await.unwrap_err();
    assert!(matches!(err, MarketError::SuggestionUnavailable(SuggestionError::Timeout)));
    assert_eq!(form, before);

    // Manual entry still publishes.
    assert!(system.marketplace.publish(&student(), form).await.is_ok());
}

#[tokio::test]
async fn test_suggestion_without_provider_or_enough_text() {
    let system = HubSystem::new(16);

    let mut form = describable();
    let err = system.marketplace.suggest(&mut form).await.unwrap_err();
    assert!(matches!(
        err,
        MarketError::SuggestionUnavailable(SuggestionError::NotConfigured)
    ));

    let mut short = PostDraft {
        content: "太短了".into(),
        ..PostDraft::default()
    };
    let err = system.marketplace.suggest(&mut short).await.unwrap_err();
    assert!(matches!(err, MarketError::Validation(_)));
}
