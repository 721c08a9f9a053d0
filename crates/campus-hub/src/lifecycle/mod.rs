//! # System Lifecycle
//!
//! [`HubSystem`] creates the user and post actors, seeds them, spawns their
//! loops and hands out the [`Marketplace`] wired to both.
//!
//! ## Shutdown
//!
//! Actors stop when the last client for them is dropped. The system owns the
//! only long-lived clients (inside its marketplace), so `shutdown` drops the
//! marketplace and then waits for both loops. Any `Marketplace` clone still
//! alive elsewhere keeps the actors running until it is dropped too.
//!
//! Neither actor depends on the other (`Context = ()`), so there is no
//! ordering to respect on the way down.

use crate::config::HubConfig;
use crate::marketplace::Marketplace;
use crate::suggestion::{GeminiSuggester, MetadataSuggester, SuggestionError};
use crate::{post_actor, seed, user_actor};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

pub struct HubSystem {
    pub marketplace: Marketplace,
    handles: Vec<JoinHandle<()>>,
}

impl HubSystem {
    /// Starts seeded actors with no suggestion provider.
    pub fn new(actor_buffer: usize) -> Self {
        let (user_actor, user_client) = user_actor::new(actor_buffer);
        let (post_actor, post_client) = post_actor::new(actor_buffer);

        let user_actor = user_actor.with_seed(seed::users());
        let post_actor = post_actor.with_seed(seed::posts());

        let handles = vec![
            tokio::spawn(user_actor.run(())),
            tokio::spawn(post_actor.run(())),
        ];
        info!(actor_buffer, "Hub started");

        Self {
            marketplace: Marketplace::new(user_client, post_client),
            handles,
        }
    }

    /// Starts the hub from configuration, attaching the Gemini provider when
    /// an API key is configured.
    pub fn from_config(config: &HubConfig) -> Self {
        let system = Self::new(config.actor_buffer);
        match GeminiSuggester::from_config(&config.suggestion) {
            Ok(gemini) => {
                info!(model = gemini.model(), "Metadata suggestions enabled");
                system.with_suggester(Arc::new(gemini))
            }
            Err(SuggestionError::NotConfigured) => {
                info!("No suggestion API key; metadata suggestions disabled");
                system
            }
            Err(e) => {
                warn!(error = %e, "Suggestion client unavailable");
                system
            }
        }
    }

    pub fn with_suggester(mut self, suggester: Arc<dyn MetadataSuggester>) -> Self {
        self.marketplace = self.marketplace.with_suggester(suggester);
        self
    }

    /// Drops the marketplace and waits for both actors to finish.
    pub async fn shutdown(self) -> Result<(), tokio::task::JoinError> {
        drop(self.marketplace);
        for handle in self.handles {
            handle.await?;
        }
        info!("Hub stopped");
        Ok(())
    }
}
