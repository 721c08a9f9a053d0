//! Demo walk-through of the hub against its seed data.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p campus-hub
//! CAMPUS_HUB_SUGGESTION__API_KEY=... cargo run -p campus-hub   # with suggestions
//! ```

use anyhow::Context;
use campus_hub::catalog::{CategoryFilter, ProfileTab};
use campus_hub::config::HubConfig;
use campus_hub::error::MarketError;
use campus_hub::lifecycle::HubSystem;
use campus_hub::marketplace::LinkAccess;
use campus_hub::model::{Category, PostId, ResourceLink, StorageProvider, UserId};
use campus_hub::seed::DEMO_USER_ID;
use campus_hub::session::Session;
use campus_hub::suggestion::PostDraft;
use hub_runtime::tracing::setup_tracing;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = HubConfig::load().context("loading configuration")?;
    setup_tracing(&config.log_filter)
        .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {}", e))?;

    let system = HubSystem::from_config(&config);
    let market = &system.marketplace;
    let student = Session::signed_in(UserId::from(DEMO_USER_ID));

    let programming = market
        .browse(CategoryFilter::Only(Category::Programming), "")
        .await?;
    info!(count = programming.len(), "Programming posts");

    let span = tracing::info_span!("unlock", post = "3");
    async {
        let before = market.view_post(&student, PostId::from("3")).await?;
        if let LinkAccess::Locked { price } = before.access {
            info!(price, "Links locked");
        }
        let outcome = market.purchase(&student, PostId::from("3")).await?;
        info!(?outcome, "Purchased");
        let after = market.view_post(&student, PostId::from("3")).await?;
        if let LinkAccess::Unlocked(links) = after.access {
            info!(links = links.len(), "Links unlocked");
        }
        Ok::<_, MarketError>(())
    }
    .instrument(span)
    .await?;

    match market
        .toggle_favorite(&Session::anonymous(), PostId::from("1"))
        .await
    {
        Err(MarketError::Unauthenticated) => info!("Anonymous favorite refused"),
        other => warn!(?other, "Unexpected favorite result"),
    }

    let mut draft = PostDraft {
        content: "整理了大学物理上册所有章节的课后习题详细解答，适合期末复习使用".to_string(),
        category: Category::Science,
        price: 10,
        links: vec![ResourceLink::new(StorageProvider::Quark, "https://pan.quark.cn/s/physics")],
        ..PostDraft::default()
    };
    match market.suggest(&mut draft).await {
        Ok(suggestion) => info!(title = %suggestion.title, "Suggestion applied"),
        Err(e) => {
            warn!(error = %e, "Filling the draft by hand");
            draft.title = "大学物理上册习题详解".to_string();
        }
    }
    let post_id = market.publish(&student, draft).await?;

    let profile = market.profile(&student, ProfileTab::Shared).await?;
    info!(
        post = %post_id,
        credits = profile.user.credits,
        shared = profile.posts.len(),
        "Profile"
    );

    system.shutdown().await?;
    Ok(())
}
